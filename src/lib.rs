//! Positional text-buffer compositor.
//!
//! Multiple independent writers draw byte runs at arbitrary (row, col)
//! positions into a shared fixed-size grid; overlapping writes resolve by a
//! priority rule; the grid flattens into a printable block on demand.
//!
//! - [`Frame`] owns the grid, the pending-write queue, and the output buffer.
//! - [`SubFrame`] is a cheap writer handle bound to one origin; every write
//!   queues work and advances the handle's running offset, so successive
//!   writes concatenate.
//! - [`Frame::update`] drains the queue back to front — larger (row, col)
//!   origins first, newer writes first among equals — with write-once cells,
//!   then returns exactly `height` newline-terminated lines.
//!
//! Rendering reuses the same buffers every cycle; after the first
//! [`Frame::update`] the steady state performs no allocations.
//!
//! # Example
//!
//! ```
//! use textframe::Frame;
//!
//! # fn main() -> Result<(), textframe::FrameError> {
//! let mut frame = Frame::new(2, 2)?;
//! frame.sub_frame(1, 0).write(b"hf")?;
//! frame.sub_frame(0, 0).write(b"gl")?;
//! assert_eq!(frame.update()?, b"gl\nhf\n");
//! # Ok(())
//! # }
//! ```

mod error;
mod frame;
mod grid;
mod queue;

pub use error::FrameError;
pub use frame::{Frame, SubFrame, LINE_BREAK};
