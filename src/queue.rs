//! Priority-ordered pending writes.

use crate::error::FrameError;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One queued, positioned byte payload awaiting application to the grid.
#[derive(Clone, Debug)]
pub(crate) struct WriteRecord {
    /// Destination origin row.
    pub(crate) row: usize,
    /// Destination origin column.
    pub(crate) col: usize,
    /// Cumulative bytes previously written through the same sub-frame.
    pub(crate) offset: usize,
    /// Frame-local enqueue counter; among equal origins the most recent
    /// record drains first, so a later write wins contested cells.
    pub(crate) seq: u64,
    /// Owned copy of the payload.
    pub(crate) data: Vec<u8>,
}

// Natural order on (row, col, seq): the max-heap then pops the largest
// (row, col) first, which is the back-to-front drain the compositor wants.
impl Ord for WriteRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.row, self.col, self.seq).cmp(&(other.row, other.col, other.seq))
    }
}

impl PartialOrd for WriteRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality follows the ordering key; `seq` is unique per frame, so this stays
// consistent with `Ord` even when payloads differ.
impl PartialEq for WriteRecord {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for WriteRecord {}

/// Max-heap of pending writes, drained highest-priority-first.
#[derive(Debug, Default)]
pub(crate) struct WriteQueue {
    heap: BinaryHeap<WriteRecord>,
}

impl WriteQueue {
    /// Insert a record. On allocation failure the record is dropped and the
    /// queue is unchanged.
    pub(crate) fn push(&mut self, record: WriteRecord) -> Result<(), FrameError> {
        self.heap.try_reserve(1)?;
        self.heap.push(record);
        Ok(())
    }

    /// Remove the highest-priority record, if any.
    pub(crate) fn pop(&mut self) -> Option<WriteRecord> {
        self.heap.pop()
    }

    /// Number of pending records.
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
