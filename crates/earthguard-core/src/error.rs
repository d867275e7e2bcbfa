use std::fmt;

/// A tuning file that cannot be used.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The JSON did not parse into a `Tuning`.
    Parse { message: String },
    /// A value that must be strictly positive was not.
    NonPositive { field: &'static str, value: f64 },
    /// A counter that must be at least one was zero.
    ZeroCount { field: &'static str },
    /// A delay or duration was negative.
    NegativeDuration { field: &'static str, value: f64 },
    /// An amount that may be zero but not negative was negative.
    NegativeAmount { field: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { message } => write!(f, "invalid tuning json: {message}"),
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be greater than zero, got {value}")
            }
            Self::ZeroCount { field } => write!(f, "{field} must be at least 1"),
            Self::NegativeDuration { field, value } => {
                write!(f, "{field} must not be a negative duration, got {value}s")
            }
            Self::NegativeAmount { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
