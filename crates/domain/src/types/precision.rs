//! Time precision for write and query operations.

use std::fmt;
use std::str::FromStr;

use crate::errors::ClientError;

/// Timestamp precision for series points, as a closed enumeration.
///
/// The wire protocol spells these as single-character codes in the
/// `time_precision` query parameter. Note that the service uses `"m"` for
/// *milliseconds* here, not minutes; the mapping below matches the
/// service's actual contract even though it collides with common
/// time-unit notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimePrecision {
    Seconds,
    Milliseconds,
    Microseconds,
}

impl TimePrecision {
    /// The single-character wire code. Total over the enumeration: other
    /// units (nanoseconds, minutes, ...) are simply unrepresentable.
    pub const fn wire_code(self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Milliseconds => "m",
            Self::Microseconds => "u",
        }
    }
}

impl fmt::Display for TimePrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_code())
    }
}

impl FromStr for TimePrecision {
    type Err = ClientError;

    /// Parse a wire code. Anything outside the closed set is a caller
    /// contract violation, reported before any request is attempted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" => Ok(Self::Seconds),
            "m" => Ok(Self::Milliseconds),
            "u" => Ok(Self::Microseconds),
            other => Err(ClientError::InvalidArgument(format!(
                "time precision must be one of \"s\", \"m\", \"u\", got {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_codes_match_service_contract() {
        assert_eq!(TimePrecision::Seconds.wire_code(), "s");
        assert_eq!(TimePrecision::Milliseconds.wire_code(), "m");
        assert_eq!(TimePrecision::Microseconds.wire_code(), "u");
    }

    #[test]
    fn parses_only_the_closed_set() {
        assert_eq!("s".parse::<TimePrecision>().unwrap(), TimePrecision::Seconds);
        assert_eq!("m".parse::<TimePrecision>().unwrap(), TimePrecision::Milliseconds);
        assert_eq!("u".parse::<TimePrecision>().unwrap(), TimePrecision::Microseconds);

        for bad in ["n", "ms", "us", "min", "x", ""] {
            let err = bad.parse::<TimePrecision>().unwrap_err();
            assert!(matches!(err, ClientError::InvalidArgument(_)), "{bad:?} parsed");
        }
    }

    #[test]
    fn display_matches_wire_code() {
        assert_eq!(TimePrecision::Milliseconds.to_string(), "m");
    }
}
