//! Process-wide access-key boundary
//!
//! One native call at startup validates the configured access key. The
//! outcome only gates diagnostics; recording stays constructible either
//! way and an unlicensed engine surfaces its own failures.

use std::ffi::CString;

use crate::sys;

/// Outcome of validating the access key with the native engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    Valid,
    Invalid,
    /// The native hub library could not be found.
    HubMissing,
    /// The native hub library was found but is unusable.
    HubInvalid,
    /// The engine reported a status this bridge does not know.
    Unknown,
}

impl TokenStatus {
    pub(crate) fn from_raw(status: i32) -> Self {
        match status {
            0 => Self::Valid,
            1 => Self::Invalid,
            2 => Self::HubMissing,
            3 => Self::HubInvalid,
            _ => Self::Unknown,
        }
    }
}

/// Validates `access_key` with the native engine.
///
/// Call once at startup, before any recording session is created. Keys
/// with interior NUL bytes are passed as empty, which the engine rejects.
pub fn apply_access_key(access_key: &str) -> TokenStatus {
    let key = CString::new(access_key).unwrap_or_default();
    let status = unsafe { sys::rb_set_access_key(key.as_ptr()) };
    TokenStatus::from_raw(status)
}

/// Diagnostic message for a startup validation outcome, if one is warranted.
pub fn startup_message(status: TokenStatus) -> Option<&'static str> {
    match status {
        TokenStatus::Valid => None,
        TokenStatus::Invalid => {
            Some("failed to validate access key; check your account access key")
        }
        TokenStatus::HubMissing => {
            Some("failed to set access key because the native hub library was not found")
        }
        TokenStatus::HubInvalid => {
            Some("failed to set access key because the native hub library is invalid")
        }
        TokenStatus::Unknown => {
            Some("access key validation returned an unrecognized status")
        }
    }
}
