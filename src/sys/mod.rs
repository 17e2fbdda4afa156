//! Raw FFI surface for the native encoding engine
//!
//! Declares the opaque session type, the completion callback signature, and
//! the outbound entry points the bridge calls. Unit tests swap the extern
//! block for an in-process fake engine with identical signatures.

use std::os::raw::{c_char, c_void};

/// Opaque native recording session.
///
/// Never constructed from Rust; values only exist behind pointers handed
/// over by the native engine.
#[repr(C)]
pub struct RawRecorder {
    _private: [u8; 0],
}

/// One-shot completion callback registered with `rb_finish_writing`.
///
/// Invoked by the native engine on an arbitrary thread. `path` is null on
/// failure; a non-null `path` is only valid for the duration of the call
/// and must be copied before returning.
pub type RecordingHandler = unsafe extern "C" fn(context: *mut c_void, path: *const c_char);

#[cfg(not(test))]
mod engine {
    use super::{c_char, c_void, RawRecorder, RecordingHandler};

    #[link(name = "recbridge_engine")]
    extern "C" {
        pub fn rb_frame_size(recorder: *mut RawRecorder, width: *mut i32, height: *mut i32);

        pub fn rb_commit_frame(
            recorder: *mut RawRecorder,
            pixel_buffer: *const c_void,
            timestamp_ns: i64,
        );

        pub fn rb_commit_samples(
            recorder: *mut RawRecorder,
            sample_buffer: *const f32,
            sample_count: i32,
            timestamp_ns: i64,
        );

        pub fn rb_finish_writing(
            recorder: *mut RawRecorder,
            handler: RecordingHandler,
            context: *mut c_void,
        );

        pub fn rb_set_access_key(key: *const c_char) -> i32;
    }
}

#[cfg(not(test))]
pub use engine::{
    rb_commit_frame, rb_commit_samples, rb_finish_writing, rb_frame_size, rb_set_access_key,
};

#[cfg(test)]
pub mod fake;

#[cfg(test)]
pub use fake::{
    rb_commit_frame, rb_commit_samples, rb_finish_writing, rb_frame_size, rb_set_access_key,
};
