//! Prints a greeting for the name on the command line, or the configured one.
//!
//! ## Usage
//!
//! ```bash
//! # Greet someone
//! greeter Bob
//!
//! # Greet the name from `config.toml` or `APP__GREETING__NAME`
//! APP__GREETING__NAME=Bob greeter
//!
//! # Print json instead
//! APP__OUTPUT__JSON=true greeter Bob
//! ```

use std::io::{self, Write};

use clap::Parser;
use greeter::{
    core::greeting::greeting_service::{self, Greeting},
    infra::{
        config::{self, GreetingConfig},
        error::AppResult,
        logging,
    },
};

/// Greets someone by name
#[derive(Debug, Parser)]
#[command(name = "greeter", version, about, long_about = None)]
struct Cli {
    /// Who to greet, instead of the configured `greeting.name`
    #[arg(value_name = "NAME")]
    name: Option<String>,
}

/// The command line name wins over the configured one.
fn resolve_name(cli: Cli, config: GreetingConfig) -> Option<String> {
    cli.name.or(config.name)
}

/// Greets `name`, as plain text or as a json object.
fn render(name: Option<&str>, json: bool) -> AppResult<String> {
    let greeting = greeting_service::try_print_it(name)?;
    if json {
        Ok(serde_json::to_string(&Greeting::new(greeting))?)
    } else {
        Ok(greeting)
    }
}

/// Writes the greeting as one line.
fn write_greeting<W: Write>(out: &mut W, greeting: &str) -> AppResult<()> {
    writeln!(out, "{greeting}")?;
    out.flush()?;
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    let config = config::load_config()?;
    let _guard = logging::init_logging(&config.logging);

    let name = resolve_name(cli, config.greeting);
    tracing::debug!(?name, "greeting");
    let greeting = render(name.as_deref(), config.output.json)?;
    write_greeting(&mut io::stdout().lock(), &greeting)?;

    Ok(())
}
