use sitedeploy_protocol::{FileRecord, TransferRecord};
use tracing::debug;

use crate::TransferError;
use crate::checksum::checksum_bytes;

/// Splits oversized files into chunks of at most `limit` bytes.
///
/// Files at or under the limit pass through as single unchunked records
/// (zero-length files included). For an oversized file, chunk `i` carries
/// bytes `[i * limit, min((i + 1) * limit, len))`, so concatenating chunks
/// in ascending `chunk_id` order reproduces the original bytes exactly.
/// All chunks of one file share its `chunk_group`, the 1-based ordinal of
/// that file among the oversized files in the input.
///
/// Output order equals input order; chunks of one file are never
/// interleaved with other records. Pure transform, no I/O.
pub fn partition(
    files: Vec<FileRecord>,
    limit: usize,
) -> Result<Vec<TransferRecord>, TransferError> {
    if limit == 0 {
        return Err(TransferError::ZeroLimit);
    }

    let mut records = Vec::with_capacity(files.len());
    let mut chunk_group: u32 = 0;

    for file in files {
        let len = file.content.len();
        if len <= limit {
            records.push(passthrough(file));
            continue;
        }

        chunk_group += 1;
        let chunk_count = len.div_ceil(limit);
        for i in 0..chunk_count {
            let start = i * limit;
            let end = usize::min(start + limit, len);
            let content = file.content[start..end].to_vec();
            records.push(TransferRecord {
                path: file.path.clone(),
                content_type: file.content_type.clone(),
                content_encoding: file.content_encoding.clone(),
                checksum: checksum_bytes(&content),
                content,
                is_chunked: true,
                chunk_id: i as u32,
                chunk_group,
                is_last_chunk: i == chunk_count - 1,
            });
        }
        debug!(
            path = %file.path,
            bytes = len,
            chunks = chunk_count,
            group = chunk_group,
            "split oversized file"
        );
    }

    Ok(records)
}

fn passthrough(file: FileRecord) -> TransferRecord {
    TransferRecord {
        checksum: checksum_bytes(&file.content),
        path: file.path,
        content_type: file.content_type,
        content_encoding: file.content_encoding,
        content: file.content,
        is_chunked: false,
        chunk_id: 0,
        chunk_group: 0,
        is_last_chunk: false,
    }
}
