use thiserror::Error;

/// Errors raised while validating tuning parameters.
///
/// The frame loop itself has no error states; only configuration can be wrong.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FxError {
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, FxError>;

pub(crate) fn ensure(ok: bool, field: &'static str, reason: &'static str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(FxError::InvalidConfig { field, reason })
    }
}
