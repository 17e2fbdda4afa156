//! recbridge - Bridge a native media-encoding engine into safe, async Rust.
//!
//! This crate wraps an opaque native recording engine: applications commit
//! timestamped RGBA8888 pixel buffers and interleaved PCM sample buffers
//! into a session, then finish writing and await the path of the encoded
//! media file. The engine itself (codecs, muxing, file output) lives on
//! the other side of the boundary.

pub mod buffer;
pub mod clock;
pub mod completion;
pub mod credential;
pub mod recorder;
pub mod settings;
pub mod sys;
pub mod utils;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use buffer::{PixelView, SampleView};
pub use clock::{Clock, FixedIntervalClock, RealtimeClock};
pub use credential::TokenStatus;
pub use recorder::{NativeRecorder, RecorderHandle};
pub use settings::BridgeSettings;
pub use utils::error::{RecorderError, RecorderResult};

/// Initialize the bridge
///
/// Called once by the embedding host at startup, before any recording
/// session is created. Installs a tracing subscriber unless the host
/// already has one, then validates the configured access key with the
/// native engine. A non-valid key is diagnosed but never blocks
/// construction; an unlicensed engine fails on its own terms.
pub fn init(settings: &BridgeSettings) {
    // Best effort: a subscriber installed by the host wins.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recbridge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    tracing::info!("Starting recbridge v{}", env!("CARGO_PKG_VERSION"));

    let status = credential::apply_access_key(&settings.access_key);
    if let Some(message) = credential::startup_message(status) {
        tracing::warn!(status = ?status, "{}", message);
    }
}
