//! In-process fake of the native engine, used by unit tests
//!
//! Mirrors the extern signatures in the parent module over a recording
//! state: committed buffers are logged, the registered completion handler
//! is held until a test fires it with a path or a null payload.

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_void};
use std::slice;
use std::sync::atomic::{AtomicI32, Ordering};

use parking_lot::Mutex;

use super::{RawRecorder, RecordingHandler};

/// Serializes tests that observe process-global state (the pending
/// completion registry, the access-key slot).
pub static ENGINE_LOCK: Mutex<()> = Mutex::new(());

static ACCESS_KEY_STATUS: AtomicI32 = AtomicI32::new(0);
static LAST_ACCESS_KEY: Mutex<Option<String>> = Mutex::new(None);

/// One fake recording session.
///
/// Boxed so its address is stable; that address doubles as the opaque
/// recorder handle handed to the bridge.
pub struct FakeEngine {
    state: Mutex<EngineState>,
}

#[derive(Default)]
struct EngineState {
    width: i32,
    height: i32,
    frames: Vec<(usize, i64)>,
    samples: Vec<(Vec<f32>, i64)>,
    finish: Option<(RecordingHandler, usize)>,
    frame_size_queries: usize,
}

impl FakeEngine {
    pub fn new(width: i32, height: i32) -> Box<Self> {
        Box::new(Self {
            state: Mutex::new(EngineState {
                width,
                height,
                ..EngineState::default()
            }),
        })
    }

    /// The opaque handle value for this session.
    pub fn handle(&self) -> *mut RawRecorder {
        self as *const Self as *mut RawRecorder
    }

    unsafe fn from_handle<'a>(recorder: *mut RawRecorder) -> &'a Self {
        &*recorder.cast::<Self>()
    }

    /// Committed frames as (base address, timestamp) pairs.
    pub fn frames(&self) -> Vec<(usize, i64)> {
        self.state.lock().frames.clone()
    }

    /// Committed sample batches, copied out at commit time.
    pub fn samples(&self) -> Vec<(Vec<f32>, i64)> {
        self.state.lock().samples.clone()
    }

    pub fn frame_size_queries(&self) -> usize {
        self.state.lock().frame_size_queries
    }

    pub fn has_pending_finish(&self) -> bool {
        self.state.lock().finish.is_some()
    }

    /// Fires the registered completion handler with a file path.
    pub fn complete_with_path(&self, path: &str) {
        let (handler, context) = self.registered_finish();
        let path = CString::new(path).expect("path contains an interior NUL");
        unsafe { handler(context as *mut c_void, path.as_ptr()) };
    }

    /// Fires the registered completion handler with a null payload.
    pub fn complete_with_null(&self) {
        let (handler, context) = self.registered_finish();
        unsafe { handler(context as *mut c_void, std::ptr::null()) };
    }

    fn registered_finish(&self) -> (RecordingHandler, usize) {
        self.state
            .lock()
            .finish
            .expect("finish_writing was not called on this session")
    }
}

pub fn set_access_key_status(status: i32) {
    ACCESS_KEY_STATUS.store(status, Ordering::Relaxed);
}

pub fn last_access_key() -> Option<String> {
    LAST_ACCESS_KEY.lock().clone()
}

pub unsafe fn rb_frame_size(recorder: *mut RawRecorder, width: *mut i32, height: *mut i32) {
    let engine = FakeEngine::from_handle(recorder);
    let mut state = engine.state.lock();
    state.frame_size_queries += 1;
    *width = state.width;
    *height = state.height;
}

pub unsafe fn rb_commit_frame(
    recorder: *mut RawRecorder,
    pixel_buffer: *const c_void,
    timestamp_ns: i64,
) {
    let engine = FakeEngine::from_handle(recorder);
    engine
        .state
        .lock()
        .frames
        .push((pixel_buffer as usize, timestamp_ns));
}

pub unsafe fn rb_commit_samples(
    recorder: *mut RawRecorder,
    sample_buffer: *const f32,
    sample_count: i32,
    timestamp_ns: i64,
) {
    let engine = FakeEngine::from_handle(recorder);
    let samples = slice::from_raw_parts(sample_buffer, sample_count as usize).to_vec();
    engine.state.lock().samples.push((samples, timestamp_ns));
}

pub unsafe fn rb_finish_writing(
    recorder: *mut RawRecorder,
    handler: RecordingHandler,
    context: *mut c_void,
) {
    let engine = FakeEngine::from_handle(recorder);
    engine.state.lock().finish = Some((handler, context as usize));
}

pub unsafe fn rb_set_access_key(key: *const c_char) -> i32 {
    let key = CStr::from_ptr(key).to_string_lossy().into_owned();
    *LAST_ACCESS_KEY.lock() = Some(key);
    ACCESS_KEY_STATUS.load(Ordering::Relaxed)
}
