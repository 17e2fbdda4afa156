//! Callback-to-future completion bridge
//!
//! Turns the native engine's one-shot completion callback, which may fire
//! on any thread at any later time, into a single awaitable result.
//!
//! Each finish registration allocates a context token and parks a oneshot
//! sender in a process-wide registry under that token. The token travels
//! into native code; when the callback brings it back, the sender is
//! removed and resolved in one atomic step, so a completion is observed
//! exactly once and the token is released exactly once. A duplicate
//! invocation misses the registry and is ignored.

use std::collections::HashMap;
use std::ffi::CStr;
use std::future::Future;
use std::os::raw::{c_char, c_void};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::recorder::RecorderHandle;
use crate::sys;
use crate::utils::error::{RecorderError, RecorderResult};

type PendingSender = oneshot::Sender<RecorderResult<PathBuf>>;

/// Pending completions keyed by context token.
static PENDING: Lazy<Mutex<HashMap<u64, PendingSender>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Token values are never reused, so a stale callback can only miss.
static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Registers the completion callback with the engine and returns the
/// awaitable result.
///
/// Consumes the handle: the session is finalizing and must not be used
/// again. The sender is parked before the native call so the callback can
/// fire before this function returns.
pub(crate) fn finish(handle: RecorderHandle) -> impl Future<Output = RecorderResult<PathBuf>> {
    let (sender, receiver) = oneshot::channel();
    let token = NEXT_TOKEN.fetch_add(1, Ordering::Relaxed);
    PENDING.lock().insert(token, sender);

    unsafe {
        sys::rb_finish_writing(
            handle.as_ptr(),
            on_recording_finished,
            token as usize as *mut c_void,
        )
    };

    async move {
        receiver
            .await
            .map_err(|_| RecorderError::CompletionLost)?
    }
}

/// Number of completions currently awaiting their callback.
pub fn pending() -> usize {
    PENDING.lock().len()
}

/// Entry point handed to the native engine.
///
/// Runs on whatever thread the engine invokes it from. A null `path`
/// denotes failure; a non-null `path` is copied into an owned buffer
/// before this returns, as the memory is not valid afterward.
unsafe extern "C" fn on_recording_finished(context: *mut c_void, path: *const c_char) {
    let token = context as usize as u64;
    let Some(sender) = PENDING.lock().remove(&token) else {
        // One-shot contract violated by the engine; ignore.
        tracing::warn!(token, "completion callback fired for an unknown or resolved token");
        return;
    };

    let result = if path.is_null() {
        Err(RecorderError::FinishFailed)
    } else {
        Ok(PathBuf::from(
            CStr::from_ptr(path).to_string_lossy().into_owned(),
        ))
    };

    if sender.send(result).is_err() {
        tracing::warn!(token, "recording result discarded; nothing awaited the completion");
    }
}
