#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_op_in_unsafe_fn)]

//! VGA text-mode output for the cinderos boot path.
//!
//! Two layers: [`cell`] models the hardware cell encoding, [`console`]
//! renders text and owns the cursor. Integer-to-text conversion lives in
//! `cinderos-lib::numfmt`; results arrive here as NUL-terminated byte
//! strings.

pub mod cell;
pub mod console;

pub use cell::{CELL_COUNT, ColorCode, HEIGHT, ScreenCell, VgaColor, WIDTH};
pub use console::{CellBuffer, MMIO_BASE, MmioBuffer, TextConsole, init, with_console};
