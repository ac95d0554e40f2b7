use super::ConfigError;

/// Constructor validation lifecycle shared by kernel structs.
///
/// Kernels carry only validated configuration; all argument checking that
/// does not depend on the input data happens once in [`try_new`].
///
/// [`try_new`]: KernelLifecycle::try_new
pub trait KernelLifecycle: Sized {
    /// Kernel config type.
    type Config;

    /// Construct a validated kernel from config.
    fn try_new(config: Self::Config) -> Result<Self, ConfigError>;
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, KernelLifecycle};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct ZoneConfig {
        width: usize,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct ZoneKernel {
        width: usize,
    }

    impl KernelLifecycle for ZoneKernel {
        type Config = ZoneConfig;

        fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
            if config.width == 0 {
                return Err(ConfigError::InvalidArgument {
                    arg: "width",
                    reason: "zone width must be > 0",
                });
            }
            Ok(Self {
                width: config.width,
            })
        }
    }

    #[test]
    fn valid_config_constructs_kernel() {
        let kernel = ZoneKernel::try_new(ZoneConfig { width: 32 }).expect("valid config");
        assert_eq!(kernel.width, 32);
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let err = ZoneKernel::try_new(ZoneConfig { width: 0 }).expect_err("invalid config");
        assert!(matches!(err, ConfigError::InvalidArgument { arg: "width", .. }));
    }
}
