//! Zero-copy buffer views for boundary crossings
//!
//! Adapts caller-supplied buffers into the raw pointer (and, for audio, the
//! element count) the native entry points take. Views never allocate or
//! copy; the borrow they hold keeps the underlying memory valid and
//! unmoved for the duration of the native call they feed.

use std::marker::PhantomData;
use std::os::raw::c_void;

use bytemuck::Pod;

/// Bytes per pixel in the RGBA8888 layout the engine requires.
pub const PIXEL_STRIDE: usize = 4;

/// Borrowed view over one video frame's pixel data.
///
/// The element type is opaque here; only the base address crosses the
/// boundary. The RGBA8888 layout itself remains the caller's contract.
pub struct PixelView<'a> {
    base: *const c_void,
    _buffer: PhantomData<&'a [u8]>,
}

impl<'a> PixelView<'a> {
    /// Views a contiguous pixel buffer.
    ///
    /// Panics if the buffer is not a whole number of RGBA8888 pixels, which
    /// is always a caller bug.
    pub fn from_slice<T: Pod>(pixel_buffer: &'a [T]) -> Self {
        let byte_len = std::mem::size_of_val(pixel_buffer);
        assert!(
            byte_len % PIXEL_STRIDE == 0,
            "pixel buffer is {} bytes, not a whole number of RGBA8888 pixels",
            byte_len
        );
        Self {
            base: pixel_buffer.as_ptr().cast(),
            _buffer: PhantomData,
        }
    }

    pub fn as_ptr(&self) -> *const c_void {
        self.base
    }
}

/// Borrowed view over a batch of interleaved PCM samples.
///
/// Carries the explicit element count the native layer cannot infer from a
/// raw pointer.
pub struct SampleView<'a> {
    base: *const f32,
    count: i32,
    _buffer: PhantomData<&'a [f32]>,
}

impl<'a> SampleView<'a> {
    pub fn from_slice(sample_buffer: &'a [f32]) -> Self {
        let count = i32::try_from(sample_buffer.len())
            .expect("sample buffer exceeds the native sample-count range");
        Self {
            base: sample_buffer.as_ptr(),
            count,
            _buffer: PhantomData,
        }
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.base
    }

    pub fn count(&self) -> i32 {
        self.count
    }
}
