use thiserror::Error;

/// Rejected construction parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Value must be strictly greater than zero
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    /// Value must not be negative
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    /// Value must lie inside an inclusive range
    #[error("{name} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    /// Count or capacity must be non-zero
    #[error("{name} must not be zero")]
    Empty { name: &'static str },
    /// Carriers would be pushed out of the colony before they could unload
    #[error("arrival_radius ({arrival}) must exceed the colony radius ({colony})")]
    ArrivalInsideColony { arrival: f32, colony: f32 },
}

impl ConfigError {
    /// Fail unless `value > 0` (NaN fails too)
    pub fn require_positive(name: &'static str, value: f32) -> std::result::Result<(), Self> {
        if value > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::NonPositive { name, value })
        }
    }

    /// Fail unless `value >= 0` (NaN fails too)
    pub fn require_non_negative(name: &'static str, value: f32) -> std::result::Result<(), Self> {
        if value >= 0.0 {
            Ok(())
        } else {
            Err(ConfigError::Negative { name, value })
        }
    }

    /// Fail unless `min <= value <= max`
    pub fn require_within(name: &'static str, value: f32, min: f32, max: f32) -> std::result::Result<(), Self> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(ConfigError::OutOfRange { name, value, min, max })
        }
    }
}

/// Errors raised while loading a scenario file
#[derive(Debug, Error)]
pub enum ParseError {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Line does not match any known directive
    #[error("line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },
    /// Token could not be read as a number
    #[error("line {line}: invalid number `{value}`")]
    InvalidNumber { line: usize, value: String },
    /// Scenario values were read but describe an invalid world
    #[error("invalid scenario: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert!(ConfigError::require_positive("speed", 1.0).is_ok());
        assert_eq!(
            ConfigError::require_positive("speed", 0.0),
            Err(ConfigError::NonPositive { name: "speed", value: 0.0 })
        );
        assert!(ConfigError::require_positive("speed", f32::NAN).is_err());
    }

    #[test]
    fn test_require_within() {
        assert!(ConfigError::require_within("p", 0.0, 0.0, 1.0).is_ok());
        assert!(ConfigError::require_within("p", 1.0, 0.0, 1.0).is_ok());
        assert!(ConfigError::require_within("p", 1.5, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_messages() {
        let err = ConfigError::Negative { name: "radius", value: -2.0 };
        assert_eq!(err.to_string(), "radius must not be negative, got -2");

        let err = ParseError::InvalidNumber { line: 3, value: "abc".to_string() };
        assert_eq!(err.to_string(), "line 3: invalid number `abc`");
    }
}
