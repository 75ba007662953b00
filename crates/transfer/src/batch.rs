use sitedeploy_protocol::TransferRecord;
use tracing::debug;

use crate::TransferError;

/// A size-bounded, order-preserving group of records sent in one store
/// write call.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferBatch {
    /// 0-based transmission ordinal assigned by [`pack`]. Independent of
    /// the records' `chunk_group`.
    pub batch_index: u32,
    pub records: Vec<TransferRecord>,
}

impl TransferBatch {
    /// Summed content length of all records in this batch.
    pub fn content_len(&self) -> usize {
        self.records.iter().map(|r| r.content.len()).sum()
    }
}

/// Greedily groups `records` into batches whose summed content length
/// never exceeds `limit`, preserving input order.
///
/// First-fit-append: a record that does not fit closes the current batch
/// and opens a new one. Two small records separated by a large one can
/// therefore land in different batches even when a smarter packing would
/// merge them — accepted trade-off for a single forward scan.
///
/// The batch bound holds provided each individual record is already
/// bounded by the same `limit` (the partitioner's contract); a record
/// larger than `limit` ends up alone in a batch that exceeds it.
pub fn pack(
    records: Vec<TransferRecord>,
    limit: usize,
) -> Result<Vec<TransferBatch>, TransferError> {
    if limit == 0 {
        return Err(TransferError::ZeroLimit);
    }

    let mut batches: Vec<TransferBatch> = Vec::new();
    let mut current: Vec<TransferRecord> = Vec::new();
    let mut current_sum: usize = 0;

    for record in records {
        let len = record.content.len();
        if current_sum + len <= limit {
            current.push(record);
            current_sum += len;
        } else {
            if !current.is_empty() {
                batches.push(TransferBatch {
                    batch_index: batches.len() as u32,
                    records: std::mem::take(&mut current),
                });
            }
            current_sum = len;
            current.push(record);
        }
    }

    if !current.is_empty() {
        batches.push(TransferBatch {
            batch_index: batches.len() as u32,
            records: current,
        });
    }

    debug!(batches = batches.len(), limit, "packed records");
    Ok(batches)
}
