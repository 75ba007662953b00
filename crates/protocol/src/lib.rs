//! Wire types for the sitedeploy asset store API.
//!
//! Shared by the dashboard-side transfer engine and any future receiver
//! implementation. Everything here serializes to the camelCase JSON the
//! store endpoint speaks.

pub mod messages;
pub mod records;

pub use messages::{StoreWriteRequest, StoreWriteResponse};
pub use records::{FileRecord, TransferRecord};

/// Hard ceiling on the content carried by one store write call: ~2 MB.
///
/// Reused as both the partitioner's per-chunk bound and the packer's
/// per-batch bound. The packer's batch-size guarantee only holds when both
/// passes run with the same limit, so treat this as one knob, not two.
pub const MAX_STORE_PAYLOAD: usize = 2_000_000;

/// Marker substring for archive metadata artifacts (`__MACOSX/` entries
/// left behind by macOS-produced zips). Records whose path contains it are
/// dropped before transmission, independent of upstream sanitization.
pub const ARCHIVE_JUNK_MARKER: &str = "__MACOSX";
