//! Recording session module
//!
//! This module implements the recorder surface of the bridge:
//! - RecorderHandle owning one native session's identity
//! - NativeRecorder composing commits and completion into the public API

pub mod handle;
pub mod native;

pub use handle::RecorderHandle;
pub use native::NativeRecorder;
