//! The compositor: [`Frame`] owns the grid and the write schedule,
//! [`SubFrame`] queues positioned writes into it.
//!
//! Rendering is two-phase: collaborators queue writes through sub-frames, then
//! a single [`Frame::update`] drains the queue back to front into the grid and
//! flattens it. Nothing draws outside `update`.

use crate::error::FrameError;
use crate::grid::{Cell, Grid};
use crate::queue::{WriteQueue, WriteRecord};
use std::io;

/// The byte that maps to the line-break sentinel inside payloads and
/// terminates every flattened row.
pub const LINE_BREAK: u8 = b'\n';

const DEFAULT_FILL: u8 = b' ';

/// Fixed-size positional text compositor.
///
/// Multiple writers draw byte runs at arbitrary (row, col) origins; colliding
/// cells go to whichever write drains first (larger origin first, then newer
/// write first), and [`Frame::update`] flattens the grid into exactly
/// `height` newline-terminated lines of at most `width` bytes each.
///
/// The grid, dirty map, and output buffer are allocated on the first `update`
/// and cleared in place on every later one, so steady-state rendering does not
/// allocate.
///
/// # Example
///
/// ```
/// use textframe::Frame;
///
/// # fn main() -> Result<(), textframe::FrameError> {
/// let mut frame = Frame::new(5, 2)?;
/// frame.sub_frame(0, 0).write(b"hello")?;
/// frame.sub_frame(1, 2).write(b"ok")?;
/// assert_eq!(frame.update()?, b"hello\n  ok \n");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Frame {
    width: usize,
    height: usize,
    fill: u8,
    queue: WriteQueue,
    grid: Option<Grid>,
    out: Vec<u8>,
    next_seq: u64,
}

impl Frame {
    /// Create a frame with space as the whitespace fill byte.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InvalidDimensions`] if either dimension is zero
    /// or `width * height` overflows.
    pub fn new(width: usize, height: usize) -> Result<Self, FrameError> {
        Self::with_fill(width, height, DEFAULT_FILL)
    }

    /// Create a frame with a custom fill byte for unwritten cells.
    ///
    /// The fill byte is fixed for the frame's lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InvalidDimensions`] if either dimension is zero
    /// or `width * height` overflows.
    pub fn with_fill(width: usize, height: usize, fill: u8) -> Result<Self, FrameError> {
        if width == 0 || height == 0 || width.checked_mul(height).is_none() {
            return Err(FrameError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            fill,
            queue: WriteQueue::default(),
            grid: None,
            out: Vec::new(),
            next_seq: 0,
        })
    }

    /// Grid width in cells.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The byte unwritten cells render as.
    #[must_use]
    pub const fn fill(&self) -> u8 {
        self.fill
    }

    /// Number of writes queued for the next [`Frame::update`].
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Obtain a writer bound to the `(row, col)` origin.
    ///
    /// Origins are not bounds-checked; writes that land past the end of the
    /// grid are clipped at render time. Sub-frames are cheap position-only
    /// handles, so collaborators may request fresh ones every cycle.
    pub fn sub_frame(&mut self, row: usize, col: usize) -> SubFrame<'_> {
        SubFrame {
            frame: self,
            row,
            col,
            offset: 0,
        }
    }

    /// Drain all queued writes into the grid and flatten it.
    ///
    /// Writes drain in priority order: larger (row, col) origin first, and
    /// among equal origins the most recently queued write first. Each cell
    /// takes the first value written to it this cycle and ignores the rest;
    /// a losing write skips only the contested cells and keeps going.
    ///
    /// The returned block has exactly `height` lines, each `\n`-terminated
    /// and at most `width` bytes long, and stays valid until the next call.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::Alloc`] if the grid (first call only) or the
    /// output buffer cannot grow; no partial output is returned.
    pub fn update(&mut self) -> Result<&[u8], FrameError> {
        let mut grid = match self.grid.take() {
            Some(mut grid) => {
                grid.clear();
                grid
            }
            None => Grid::new(self.width, self.height, self.fill)?,
        };
        while let Some(record) = self.queue.pop() {
            apply(&mut grid, &record);
        }
        let flattened = grid.flatten_into(&mut self.out);
        self.grid = Some(grid);
        flattened?;
        Ok(&self.out)
    }

    fn enqueue(
        &mut self,
        row: usize,
        col: usize,
        offset: usize,
        bytes: &[u8],
    ) -> Result<(), FrameError> {
        let mut data = Vec::new();
        data.try_reserve_exact(bytes.len())?;
        data.extend_from_slice(bytes);
        self.queue.push(WriteRecord {
            row,
            col,
            offset,
            seq: self.next_seq,
            data,
        })?;
        self.next_seq += 1;
        Ok(())
    }
}

/// Apply one record to the grid: write-once per cell, silent tail drop past
/// the last cell, and `\n` drops to the same column on the next row (no
/// return to the origin column).
fn apply(grid: &mut Grid, record: &WriteRecord) {
    let len = grid.len();
    let mut index = record
        .row
        .saturating_mul(grid.width())
        .saturating_add(record.col)
        .saturating_add(record.offset);
    for &byte in &record.data {
        if index >= len {
            break;
        }
        if byte == LINE_BREAK {
            grid.put(index, Cell::LineBreak);
            index = index.saturating_add(grid.width());
        } else {
            grid.put(index, Cell::Glyph(byte));
            index = index.saturating_add(1);
        }
    }
}

/// A positional writer bound to one origin within a [`Frame`].
///
/// Successive writes through the same sub-frame concatenate: each write
/// starts where the previous one ended, because the running offset grows by
/// every payload's length. Writing queues work; drawing happens only inside
/// the owning frame's [`Frame::update`].
///
/// `SubFrame` also implements [`std::io::Write`], so formatted output works:
///
/// ```
/// use std::io::Write;
/// use textframe::Frame;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut frame = Frame::new(8, 1)?;
/// let mut score = frame.sub_frame(0, 0);
/// write!(score, "score {}", 3)?;
/// assert_eq!(frame.update()?, b"score 3 \n");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SubFrame<'a> {
    frame: &'a mut Frame,
    row: usize,
    col: usize,
    offset: usize,
}

impl SubFrame<'_> {
    /// Origin row.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Origin column.
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Bytes written through this sub-frame so far.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Queue `bytes` at the current position and advance the offset.
    ///
    /// Reports the full payload length on success.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::Alloc`] if the payload copy or the queue slot
    /// cannot be allocated; nothing is enqueued and the offset does not
    /// advance.
    pub fn write(&mut self, bytes: &[u8]) -> Result<usize, FrameError> {
        self.frame.enqueue(self.row, self.col, self.offset, bytes)?;
        self.offset += bytes.len();
        Ok(bytes.len())
    }
}

impl io::Write for SubFrame<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        SubFrame::write(self, buf).map_err(io::Error::other)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
