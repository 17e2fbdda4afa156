//! Owned opaque recorder handle

use std::fmt;
use std::ptr::NonNull;

use crate::sys::RawRecorder;

/// Exclusive owner of one native recording session's identity.
///
/// A handle is move-only: it cannot be cloned, so a session can never back
/// two recorders. The raw value stays reachable through [`as_ptr`] for
/// interop calls. The handle becomes invalid the moment the native engine
/// finalizes or destroys the session; the bridge consumes it at that point
/// and never touches it again.
///
/// [`as_ptr`]: RecorderHandle::as_ptr
pub struct RecorderHandle {
    raw: NonNull<RawRecorder>,
}

impl RecorderHandle {
    /// Wraps a raw handle received from the native engine.
    ///
    /// # Safety
    ///
    /// `raw` must identify a live recording session that is not owned by
    /// any other `RecorderHandle`. Passing a null or stale pointer is a
    /// programmer error; null panics here, stale is undefined behavior at
    /// the first native call.
    pub unsafe fn from_raw(raw: *mut RawRecorder) -> Self {
        Self {
            raw: NonNull::new(raw).expect("recorder handle must be non-null"),
        }
    }

    /// The raw handle value, for passing across the boundary.
    pub fn as_ptr(&self) -> *mut RawRecorder {
        self.raw.as_ptr()
    }
}

impl fmt::Debug for RecorderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecorderHandle({:p})", self.raw.as_ptr())
    }
}

// Safety: the handle is an opaque identity, not a dereferenceable pointer;
// the native engine synchronizes its own session state and does not pin a
// session to the thread that created it.
unsafe impl Send for RecorderHandle {}
unsafe impl Sync for RecorderHandle {}
