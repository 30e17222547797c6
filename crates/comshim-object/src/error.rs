use thiserror::Error;

use crate::guid::Guid;

pub type Result<T> = std::result::Result<T, IdentityError>;

/// Failure modes of the identity-query protocol.
///
/// Contract violations (calling a leveled operation below its level) are
/// deliberately *not* represented here: they are programming errors in the
/// calling shim and surface as assertions, mirroring how native object models
/// treat calls through the wrong interface version.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// Neither the proxy nor the wrapped object can produce `{0}`.
    ///
    /// For identities above the current capability level this is an outright
    /// failure: the proxy does not fall back to its old level.
    #[error("identity {0} is not supported by the wrapped object")]
    NotSupported(Guid),
}
