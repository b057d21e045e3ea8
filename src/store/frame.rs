//! On-disk frame format for school records
//!
//! ```text
//! +------------------+
//! | Frame Length     | (u32 LE, includes this field and the checksum)
//! +------------------+
//! | Record JSON      | (serde_json-encoded SchoolRecord)
//! +------------------+
//! | Checksum         | (u32 LE, CRC32 over length + body)
//! +------------------+
//! ```
//!
//! Every read verifies the checksum; a mismatch is corruption, not a value.

use crc32fast::Hasher;

use crate::school::SchoolRecord;

use super::errors::{StoreError, StoreResult};

/// Smallest possible frame: length + empty body + checksum.
pub const MIN_FRAME_SIZE: usize = 4 + 4;

/// CRC32 (IEEE) over the given bytes. Deterministic.
pub fn compute_checksum(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Serializes a record into a length-prefixed, checksummed frame.
pub fn encode_frame(record: &SchoolRecord) -> StoreResult<Vec<u8>> {
    let body = serde_json::to_vec(record).map_err(|e| {
        StoreError::write_failed_no_source(format!("failed to encode record {}: {}", record.id, e))
    })?;

    let frame_length = (4 + body.len() + 4) as u32;

    let mut checksummed = Vec::with_capacity(4 + body.len());
    checksummed.extend_from_slice(&frame_length.to_le_bytes());
    checksummed.extend_from_slice(&body);
    let checksum = compute_checksum(&checksummed);

    let mut frame = Vec::with_capacity(frame_length as usize);
    frame.extend_from_slice(&frame_length.to_le_bytes());
    frame.extend_from_slice(&body);
    frame.extend_from_slice(&checksum.to_le_bytes());

    Ok(frame)
}

/// Decodes one frame from the front of `data`, verifying the checksum.
///
/// Returns the record and the number of bytes consumed. `offset` is the
/// frame's position in the file, used for corruption reporting only.
pub fn decode_frame(data: &[u8], offset: u64) -> StoreResult<(SchoolRecord, usize)> {
    if data.len() < MIN_FRAME_SIZE {
        return Err(StoreError::corruption_at_offset(
            offset,
            format!("truncated frame: {} bytes remaining", data.len()),
        ));
    }

    let frame_length = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;

    if frame_length < MIN_FRAME_SIZE {
        return Err(StoreError::corruption_at_offset(
            offset,
            format!("invalid frame length: {}", frame_length),
        ));
    }
    if data.len() < frame_length {
        return Err(StoreError::corruption_at_offset(
            offset,
            format!(
                "truncated frame: expected {} bytes, got {}",
                frame_length,
                data.len()
            ),
        ));
    }

    let checksum_offset = frame_length - 4;
    let stored_checksum = u32::from_le_bytes([
        data[checksum_offset],
        data[checksum_offset + 1],
        data[checksum_offset + 2],
        data[checksum_offset + 3],
    ]);
    let computed_checksum = compute_checksum(&data[..checksum_offset]);

    if computed_checksum != stored_checksum {
        return Err(StoreError::corruption_at_offset(
            offset,
            format!(
                "checksum mismatch: computed {:08x}, stored {:08x}",
                computed_checksum, stored_checksum
            ),
        ));
    }

    let record: SchoolRecord = serde_json::from_slice(&data[4..checksum_offset]).map_err(|e| {
        StoreError::corruption_at_offset(offset, format!("invalid record JSON: {}", e))
    })?;

    Ok((record, frame_length))
}
