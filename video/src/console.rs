//! Linear-cursor text console over a cell buffer.
//!
//! The console owns a cursor (a linear offset into the buffer, always the
//! next slot to be written) and a [`CellBuffer`] — the injected handle over
//! the display region. Production code hands it an [`MmioBuffer`] over the
//! hardware buffer at [`MMIO_BASE`]; tests hand it a plain
//! `[ScreenCell; CELL_COUNT]` array.
//!
//! # Cursor overflow contract
//!
//! The hardware region is exactly [`CELL_COUNT`] slots and the console never
//! writes outside it: the cursor wraps modulo `CELL_COUNT`, so a write at
//! slot 1999 leaves the cursor back at 0. There is no scrolling.

use core::fmt;

use cinderos_lib::{klog, klog_info};
use spin::Mutex;

use crate::cell::{CELL_COUNT, HEIGHT, ScreenCell, WIDTH};

/// Physical base of the VGA text buffer on PC-compatible hardware.
pub const MMIO_BASE: usize = 0xb8000;

// ---------------------------------------------------------------------------
// Cell buffers
// ---------------------------------------------------------------------------

/// Destination for cell writes, addressed by linear slot index.
///
/// Implementations must treat indices `>= CELL_COUNT` as no-ops (writes) or
/// blank (reads); the console's wrap contract keeps its own indices in
/// range, but the buffer stays safe regardless of caller.
pub trait CellBuffer {
    fn write_cell(&mut self, index: usize, cell: ScreenCell);
    fn read_cell(&self, index: usize) -> ScreenCell;
}

/// In-memory stand-in with the hardware geometry, used by tests.
impl CellBuffer for [ScreenCell; CELL_COUNT] {
    fn write_cell(&mut self, index: usize, cell: ScreenCell) {
        if let Some(slot) = self.get_mut(index) {
            *slot = cell;
        }
    }

    fn read_cell(&self, index: usize) -> ScreenCell {
        self.get(index).copied().unwrap_or(ScreenCell::BLANK)
    }
}

/// Handle over the memory-mapped display region.
///
/// All access is volatile; the hardware reads the region behind the
/// compiler's back.
pub struct MmioBuffer {
    base: *mut ScreenCell,
}

impl MmioBuffer {
    /// # Safety
    ///
    /// `base` must point to a mapped region of at least [`CELL_COUNT`]
    /// cells, valid for volatile reads and writes for the life of the
    /// process, with no other writer.
    pub const unsafe fn new(base: *mut ScreenCell) -> Self {
        Self { base }
    }
}

// SAFETY: the region behind `base` has a single writer — the console that
// owns this buffer, itself behind the process-wide lock below.
unsafe impl Send for MmioBuffer {}

impl CellBuffer for MmioBuffer {
    fn write_cell(&mut self, index: usize, cell: ScreenCell) {
        if index >= CELL_COUNT {
            return;
        }
        // SAFETY: index is in range and `new` guarantees the region is
        // mapped and valid for volatile writes.
        unsafe { self.base.add(index).write_volatile(cell) };
    }

    fn read_cell(&self, index: usize) -> ScreenCell {
        if index >= CELL_COUNT {
            return ScreenCell::BLANK;
        }
        // SAFETY: as above, for volatile reads.
        unsafe { self.base.add(index).read_volatile() }
    }
}

// ---------------------------------------------------------------------------
// Text console
// ---------------------------------------------------------------------------

/// Renders text into a cell buffer and tracks the next-write position.
pub struct TextConsole<B: CellBuffer> {
    cursor: usize,
    buffer: B,
}

impl<B: CellBuffer> TextConsole<B> {
    pub const fn new(buffer: B) -> Self {
        Self { cursor: 0, buffer }
    }

    /// Linear offset of the next slot to be written.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// Write one character in the fixed style at the cursor and advance it,
    /// wrapping modulo [`CELL_COUNT`].
    pub fn write_char(&mut self, c: u8) {
        self.buffer.write_cell(self.cursor, ScreenCell::new(c));
        self.cursor = (self.cursor + 1) % CELL_COUNT;
    }

    /// Write `s` via [`write_char`](Self::write_char), stopping at a NUL
    /// byte or after [`WIDTH`] characters, whichever comes first.
    ///
    /// The cap means a single call never emits more than one row's worth of
    /// characters, so it cannot wrap past the intended row without an
    /// explicit [`newline`](Self::newline).
    pub fn write_string(&mut self, s: &[u8]) {
        for &b in s.iter().take(WIDTH) {
            if b == 0 {
                break;
            }
            self.write_char(b);
        }
    }

    /// [`write_string`](Self::write_string), then snap the cursor to the
    /// start of the next row.
    pub fn write_line(&mut self, s: &[u8]) {
        self.write_string(s);
        self.newline();
    }

    /// Advance the cursor to column 0 of the following row, regardless of
    /// the current column. From a cleared buffer this leaves the rest of
    /// the row as blank cells.
    pub fn newline(&mut self) {
        self.cursor = (self.cursor + WIDTH - self.cursor % WIDTH) % CELL_COUNT;
    }

    /// Overwrite every slot with [`ScreenCell::BLANK`] and reset the cursor
    /// to 0.
    pub fn clear(&mut self) {
        for index in 0..CELL_COUNT {
            self.buffer.write_cell(index, ScreenCell::BLANK);
        }
        self.cursor = 0;
    }
}

impl<B: CellBuffer> fmt::Write for TextConsole<B> {
    /// `\n` snaps to the next row start; other printable ASCII goes through
    /// [`write_char`](Self::write_char); everything else renders as `?`.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for &b in s.as_bytes() {
            match b {
                b'\n' => self.newline(),
                0x20..=0x7e => self.write_char(b),
                _ => self.write_char(b'?'),
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Process-wide console
// ---------------------------------------------------------------------------

static CONSOLE: Mutex<Option<TextConsole<MmioBuffer>>> = Mutex::new(None);

/// Bring the process-wide console online over the hardware buffer at
/// [`MMIO_BASE`], clear the screen, and register it as the klog backend.
///
/// Called once by the external boot path after the region is mapped.
///
/// # Safety
///
/// The VGA text buffer must be accessible at [`MMIO_BASE`] and nothing else
/// in the process may touch it afterwards.
pub unsafe fn init() {
    // SAFETY: mapping and exclusivity are the caller's contract, forwarded
    // from this function's own.
    let buffer = unsafe { MmioBuffer::new(MMIO_BASE as *mut ScreenCell) };
    let mut console = TextConsole::new(buffer);
    console.clear();
    *CONSOLE.lock() = Some(console);

    klog::klog_register_backend(console_backend);
    klog_info!("Text console online: {}x{} at {:#x}", WIDTH, HEIGHT, MMIO_BASE);
}

/// Run `f` against the process-wide console, if initialised.
pub fn with_console<R>(f: impl FnOnce(&mut TextConsole<MmioBuffer>) -> R) -> Option<R> {
    CONSOLE.lock().as_mut().map(f)
}

fn console_backend(args: fmt::Arguments<'_>) {
    let _ = with_console(|console| {
        let _ = fmt::Write::write_fmt(console, args);
        console.newline();
    });
}

#[doc(hidden)]
pub fn print_args(args: fmt::Arguments<'_>) {
    let _ = with_console(|console| {
        let _ = fmt::Write::write_fmt(console, args);
    });
}

#[doc(hidden)]
pub fn print_newline() {
    let _ = with_console(|console| console.newline());
}

/// Format to the process-wide console. No-op before [`init`].
#[macro_export]
macro_rules! kprint {
    ($($arg:tt)*) => {{
        $crate::console::print_args(::core::format_args!($($arg)*));
    }};
}

/// Like [`kprint!`], then advance to the next row.
#[macro_export]
macro_rules! kprintln {
    () => {
        $crate::console::print_newline()
    };
    ($($arg:tt)*) => {{
        $crate::console::print_args(::core::format_args!($($arg)*));
        $crate::console::print_newline();
    }};
}
