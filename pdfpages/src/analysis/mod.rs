//! Text-based analysis: content fingerprints and document statistics.

pub mod fingerprint;
pub mod stats;

pub use fingerprint::{ContentFingerprint, ContentHasher};
pub use stats::{DocumentStats, StatsReporter, estimate_tokens};
