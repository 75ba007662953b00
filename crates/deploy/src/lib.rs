//! Dashboard-side deploy flow for static site bundles.
//!
//! Scans an extracted bundle, partitions and packs it against the store's
//! payload ceiling, and drives one sequenced store write per batch. The
//! actual store transport lives behind [`AssetStore`]; authentication,
//! archive extraction, and UI rendering are the caller's concern.

mod error;
mod path;
mod scanner;
mod sequencer;
mod store;
mod types;

pub use error::DeployError;
pub use path::{is_archive_junk, normalize_store_path};
pub use scanner::{content_type_for, scan_bundle};
pub use sequencer::UploadSequencer;
pub use store::{AssetStore, StoreOutcome};
pub use types::{BatchOutcome, DeployEvent, SessionResult, SessionStatus};
