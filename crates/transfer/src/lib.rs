//! Turns an extracted bundle's file list into an ordered stream of
//! size-bounded transfer batches.
//!
//! Two pure passes: [`partition`] splits any file larger than the store's
//! payload ceiling into contiguous chunks, then [`pack`] greedily groups
//! the resulting records into batches whose summed content stays under the
//! same ceiling. Both passes must run with the same limit for the batch
//! bound to hold.

mod batch;
mod checksum;
mod partition;

pub use batch::{TransferBatch, pack};
pub use checksum::checksum_bytes;
pub use partition::partition;

/// Errors produced by the transfer crate.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("size limit must be greater than zero")]
    ZeroLimit,
}
