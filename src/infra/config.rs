//! For reading application configuration.

use config::{ConfigError, Environment, Source};
use serde::Deserialize;

/// Application configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Greeting configuration.
    #[serde(default)]
    pub greeting: GreetingConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

/// Greeting configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GreetingConfig {
    /// Who to greet when no name is given on the command line.
    pub name: Option<String>,
}

/// Logging configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct LoggingConfig {
    /// The log filter, in `RUST_LOG` syntax.
    pub level: String,
    /// Log as json instead of human readable text.
    pub json: bool,
}

/// Output configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    /// Print the greeting as a json object.
    pub json: bool,
}

/// Variables such as `APP__GREETING__NAME`.
pub fn environment() -> Environment {
    Environment::with_prefix("app").separator("__")
}

/// Retrieve [`Config`] from the default configuration file, if there is one.
#[tracing::instrument]
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(config::File::with_name("config").required(false), environment())
}

/// Retrieve [`Config`] from the defaults, `source` and `environment`, in that order.
pub fn load_config_from<S>(source: S, environment: Environment) -> Result<Config, ConfigError>
where
    S: Source + Send + Sync + 'static,
{
    config::Config::builder()
        .set_default("logging.level", "info")?
        .set_default("logging.json", false)?
        .set_default("output.json", false)?
        .add_source(source)
        .add_source(environment)
        .build()?
        .try_deserialize()
}
