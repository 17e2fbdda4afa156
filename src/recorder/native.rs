//! Native recorder facade
//!
//! Composes the handle, the buffer views, and the completion bridge into
//! the public recording surface: query the frame size, commit timestamped
//! pixel and sample buffers, and finish writing to obtain the output path.

use std::future::Future;
use std::os::raw::c_void;
use std::path::PathBuf;

use bytemuck::Pod;

use crate::buffer::{PixelView, SampleView};
use crate::completion;
use crate::recorder::RecorderHandle;
use crate::sys;
use crate::utils::error::RecorderResult;

/// A recording session in progress on the native engine.
///
/// Commits are synchronous and expected to come from a single producer;
/// two commits racing from different threads will not corrupt the call
/// arguments, but their ordering is unspecified. Timestamps must be
/// monotonically non-decreasing in nanoseconds; the engine expects that
/// and this layer does not check it. See [`crate::clock`] for conforming
/// sources.
pub struct NativeRecorder {
    handle: RecorderHandle,
}

impl NativeRecorder {
    /// Wraps an already-initialized native session.
    ///
    /// Takes ownership of the handle; no native calls are made until the
    /// first operation.
    pub fn new(handle: RecorderHandle) -> Self {
        Self { handle }
    }

    /// Video frame size, queried from the engine on every call.
    pub fn frame_size(&self) -> (u32, u32) {
        let mut width = 0i32;
        let mut height = 0i32;
        unsafe { sys::rb_frame_size(self.handle.as_ptr(), &mut width, &mut height) };
        (width as u32, height as u32)
    }

    /// Commit a video pixel buffer for encoding.
    ///
    /// The buffer MUST have an RGBA8888 pixel layout. Owned and borrowed
    /// buffers both land here via deref; the slice borrow keeps the memory
    /// valid and unmoved until the native call returns.
    pub fn commit_frame<T: Pod>(&self, pixel_buffer: &[T], timestamp_ns: i64) {
        let view = PixelView::from_slice(pixel_buffer);
        unsafe { self.commit_frame_ptr(view.as_ptr(), timestamp_ns) }
    }

    /// Commit a video pixel buffer from a raw base address.
    ///
    /// # Safety
    ///
    /// `pixel_buffer` must point to a full RGBA8888 frame that stays valid
    /// until this call returns.
    pub unsafe fn commit_frame_ptr(&self, pixel_buffer: *const c_void, timestamp_ns: i64) {
        sys::rb_commit_frame(self.handle.as_ptr(), pixel_buffer, timestamp_ns);
    }

    /// Commit an audio sample buffer for encoding.
    ///
    /// The buffer MUST be linear PCM interleaved by channel. The sample
    /// count the engine sees is the slice length.
    pub fn commit_samples(&self, sample_buffer: &[f32], timestamp_ns: i64) {
        let view = SampleView::from_slice(sample_buffer);
        unsafe { self.commit_samples_ptr(view.as_ptr(), view.count(), timestamp_ns) }
    }

    /// Commit an audio sample buffer from a raw base address.
    ///
    /// # Safety
    ///
    /// `sample_buffer` must point to at least `sample_count` contiguous
    /// samples that stay valid until this call returns. An overcount reads
    /// out of bounds natively; an undercount silently truncates.
    pub unsafe fn commit_samples_ptr(
        &self,
        sample_buffer: *const f32,
        sample_count: i32,
        timestamp_ns: i64,
    ) {
        sys::rb_commit_samples(
            self.handle.as_ptr(),
            sample_buffer,
            sample_count,
            timestamp_ns,
        );
    }

    /// Finish writing and resolve to the recorded media file path.
    ///
    /// Consumes the recorder: the handle is invalid once finalization
    /// begins, so no further commits can be expressed. The native finish
    /// call happens before this returns; every commit issued earlier is
    /// observed by the engine first. The future resolves exactly once,
    /// whenever the engine delivers its completion callback.
    pub fn finish_writing(self) -> impl Future<Output = RecorderResult<PathBuf>> {
        tracing::info!(handle = ?self.handle, "finishing recording");
        completion::finish(self.handle)
    }

    /// The raw handle value, for interop calls outside the bridge.
    pub fn as_raw(&self) -> *mut sys::RawRecorder {
        self.handle.as_ptr()
    }
}
