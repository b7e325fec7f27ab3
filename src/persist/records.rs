//! Byte layout of the records the calculator persists
//!
//! | Record       | Layout                                         |
//! |--------------|------------------------------------------------|
//! | `QUEUE`      | every queue slot, 8 bytes little-endian `f64`  |
//! | `QUEUEINDEX` | queue length, 4 bytes little-endian `u32`      |
//! | `RPNTHEME`   | theme index, 4 bytes little-endian `u32`       |
//!
//! The queue is stored as the full slot array plus a count so a record written
//! by one session can be loaded directly into the fixed-size container.

use super::{KeyValueStore, StoreError};
use crate::engine::constants::QUEUE_SIZE;
use crate::memory::queue::MemoryQueue;
use crate::memory::real::Real;

pub const QUEUE_RECORD: &str = "QUEUE";
pub const QUEUE_INDEX_RECORD: &str = "QUEUEINDEX";
pub const THEME_RECORD: &str = "RPNTHEME";

const SLOT_BYTES: usize = 8;

pub fn encode_queue_slots(queue: &MemoryQueue) -> Vec<u8> {
    queue
        .slots()
        .iter()
        .flat_map(|slot| slot.to_le_bytes())
        .collect()
}

pub fn encode_u32(value: usize) -> [u8; 4] {
    (value as u32).to_le_bytes()
}

fn decode_u32(record: &str, bytes: &[u8]) -> Result<usize, StoreError> {
    let raw: [u8; 4] = bytes.try_into().map_err(|_| StoreError::Corrupt {
        record: record.to_string(),
        reason: format!("expected 4 bytes, found {}", bytes.len()),
    })?;
    Ok(u32::from_le_bytes(raw) as usize)
}

/// Decode the two queue records into a queue
pub fn decode_queue(slots: &[u8], index: &[u8]) -> Result<MemoryQueue, StoreError> {
    if slots.len() != QUEUE_SIZE * SLOT_BYTES {
        return Err(StoreError::Corrupt {
            record: QUEUE_RECORD.to_string(),
            reason: format!(
                "expected {} bytes, found {}",
                QUEUE_SIZE * SLOT_BYTES,
                slots.len()
            ),
        });
    }

    let len = decode_u32(QUEUE_INDEX_RECORD, index)?;

    let mut values = [Real::ZERO; QUEUE_SIZE];
    for (value, chunk) in values.iter_mut().zip(slots.chunks_exact(SLOT_BYTES)) {
        let mut raw = [0u8; SLOT_BYTES];
        raw.copy_from_slice(chunk);
        *value = Real::from_le_bytes(raw);
    }

    MemoryQueue::from_parts(values, len).ok_or_else(|| StoreError::Corrupt {
        record: QUEUE_INDEX_RECORD.to_string(),
        reason: format!("length {} exceeds capacity {}", len, QUEUE_SIZE),
    })
}

/// Load the persisted queue. `Ok(None)` when no queue was ever saved.
pub fn load_queue(store: &dyn KeyValueStore) -> Result<Option<MemoryQueue>, StoreError> {
    let slots = store.read(QUEUE_RECORD)?;
    let index = store.read(QUEUE_INDEX_RECORD)?;
    match (slots, index) {
        (Some(slots), Some(index)) => decode_queue(&slots, &index).map(Some),
        (None, None) => Ok(None),
        (Some(_), None) => Err(StoreError::Corrupt {
            record: QUEUE_INDEX_RECORD.to_string(),
            reason: "missing".to_string(),
        }),
        (None, Some(_)) => Err(StoreError::Corrupt {
            record: QUEUE_RECORD.to_string(),
            reason: "missing".to_string(),
        }),
    }
}

pub fn save_queue(store: &mut dyn KeyValueStore, queue: &MemoryQueue) -> Result<(), StoreError> {
    store.write(QUEUE_RECORD, &encode_queue_slots(queue))?;
    store.write(QUEUE_INDEX_RECORD, &encode_u32(queue.len()))
}

/// Load the saved theme index, rejecting indices outside `0..theme_count`
pub fn load_theme(
    store: &dyn KeyValueStore,
    theme_count: usize,
) -> Result<Option<usize>, StoreError> {
    let Some(bytes) = store.read(THEME_RECORD)? else {
        return Ok(None);
    };
    let index = decode_u32(THEME_RECORD, &bytes)?;
    if index >= theme_count {
        return Err(StoreError::Corrupt {
            record: THEME_RECORD.to_string(),
            reason: format!("theme {} out of range 0..{}", index, theme_count),
        });
    }
    Ok(Some(index))
}

pub fn save_theme(store: &mut dyn KeyValueStore, index: usize) -> Result<(), StoreError> {
    store.write(THEME_RECORD, &encode_u32(index))
}
