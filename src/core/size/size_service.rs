//! A service for putting numbers into size buckets.

use serde::Serialize;
use std::fmt::{self, Display};
use tracing::instrument;

/// How big a number is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Below zero.
    Negative,
    /// Exactly zero.
    Zero,
    /// One through nine.
    Small,
    /// Ten through ninety-nine.
    Big,
    /// A hundred through nine hundred ninety-nine.
    Huge,
    /// Everything else.
    Enormous,
}

impl Size {
    /// The lowercase name of the bucket.
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Negative => "negative",
            Size::Zero => "zero",
            Size::Small => "small",
            Size::Big => "big",
            Size::Huge => "huge",
            Size::Enormous => "enormous",
        }
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies `n` by magnitude.
#[instrument(ret)]
pub fn size(n: i64) -> Size {
    match n {
        i64::MIN..=-1 => Size::Negative,
        0 => Size::Zero,
        1..=9 => Size::Small,
        10..=99 => Size::Big,
        100..=999 => Size::Huge,
        _ => Size::Enormous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_table() {
        let tests = [
            (-1, "negative"),
            (5, "small"),
            (0, "zero"),
            (99, "big"),
            (999, "huge"),
            (1000, "enormous"),
        ];
        for (i, (input, expected)) in tests.into_iter().enumerate() {
            assert_eq!(expected, size(input).to_string(), "#{i}: size({input})");
        }
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(Size::Negative, size(i64::MIN));
        assert_eq!(Size::Small, size(1));
        assert_eq!(Size::Small, size(9));
        assert_eq!(Size::Big, size(10));
        assert_eq!(Size::Huge, size(100));
        assert_eq!(Size::Enormous, size(i64::MAX));
    }

    #[test]
    fn size_serializes_lowercase() {
        assert_eq!(r#""huge""#, serde_json::to_string(&Size::Huge).unwrap());
    }
}
