use core::fmt;

/// Validation errors raised while constructing a kernel or binding a
/// buffer adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required input or configuration field was empty.
    EmptyInput {
        /// Name of the empty argument.
        arg: &'static str,
    },
    /// A configuration argument held an invalid value.
    InvalidArgument {
        /// Name of the argument.
        arg: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
    /// A contiguous 1D slice view could not be obtained from an adapter.
    NonContiguous {
        /// Name of the non-contiguous argument.
        arg: &'static str,
    },
    /// An input or output buffer did not match the required shape.
    LengthMismatch {
        /// Name of the argument.
        arg: &'static str,
        /// Required length.
        expected: usize,
        /// Received length.
        got: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyInput { arg } => write!(f, "argument `{arg}` must not be empty"),
            ConfigError::InvalidArgument { arg, reason } => {
                write!(f, "argument `{arg}` is invalid: {reason}")
            }
            ConfigError::NonContiguous { arg } => {
                write!(f, "argument `{arg}` is not a contiguous 1D view")
            }
            ConfigError::LengthMismatch { arg, expected, got } => {
                write!(f, "argument `{arg}` has length {got}, expected {expected}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Runtime violations detected at a checked kernel entrypoint.
///
/// All conditions are reported before any output is produced; kernels never
/// return silently truncated or NaN-filled results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecInvariantViolation {
    /// An execution precondition on the input data was violated.
    InvalidState {
        /// Why execution could not proceed.
        reason: &'static str,
    },
    /// An input or output buffer mismatched the expected runtime shape.
    LengthMismatch {
        /// Name of the argument.
        arg: &'static str,
        /// Required length.
        expected: usize,
        /// Received length.
        got: usize,
    },
    /// Input values left the numeric domain the operation is defined over.
    NumericDomain {
        /// Name of the offending argument.
        arg: &'static str,
        /// Why the values are out of domain.
        reason: &'static str,
    },
    /// Adapter binding or configuration failure.
    Config(ConfigError),
}

impl From<ConfigError> for ExecInvariantViolation {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl fmt::Display for ExecInvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecInvariantViolation::InvalidState { reason } => {
                write!(f, "execution precondition violated: {reason}")
            }
            ExecInvariantViolation::LengthMismatch { arg, expected, got } => {
                write!(
                    f,
                    "runtime length mismatch on `{arg}`: got {got}, expected {expected}"
                )
            }
            ExecInvariantViolation::NumericDomain { arg, reason } => {
                write!(f, "numeric domain error on `{arg}`: {reason}")
            }
            ExecInvariantViolation::Config(err) => write!(f, "{err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ExecInvariantViolation {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ExecInvariantViolation};

    #[test]
    fn config_error_display_names_the_argument() {
        let err = ConfigError::InvalidArgument {
            arg: "num_zones",
            reason: "must be > 0",
        };
        let msg = format!("{err}");
        assert!(msg.contains("num_zones"));
        assert!(msg.contains("must be > 0"));
    }

    #[test]
    fn config_error_converts_into_exec_violation() {
        let err = ConfigError::EmptyInput { arg: "taps" };
        let exec: ExecInvariantViolation = err.clone().into();
        assert_eq!(exec, ExecInvariantViolation::Config(err));
    }
}
