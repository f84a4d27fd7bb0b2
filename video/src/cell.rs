//! VGA text-mode cell model.
//!
//! One cell is a 16-bit value with the character code in the low byte and
//! the attribute byte above it; the `#[repr(C)]` layout below reproduces
//! that wire format bit-for-bit on little-endian targets, which is the only
//! convention the hardware buffer speaks.

/// Columns per row of the text buffer.
pub const WIDTH: usize = 80;

/// Rows of the text buffer.
pub const HEIGHT: usize = 25;

/// Total cell slots in the text buffer.
pub const CELL_COUNT: usize = WIDTH * HEIGHT;

// ---------------------------------------------------------------------------
// Color attribute
// ---------------------------------------------------------------------------

/// The 16 standard VGA palette entries.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VgaColor {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

/// Packed attribute byte: foreground in the low nibble, background above it.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorCode(u8);

impl ColorCode {
    /// The fixed style every console write uses: white on black (`0x0f`).
    pub const DEFAULT: Self = Self::new(VgaColor::White, VgaColor::Black);

    #[inline]
    pub const fn new(foreground: VgaColor, background: VgaColor) -> Self {
        Self((background as u8) << 4 | foreground as u8)
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Screen cell
// ---------------------------------------------------------------------------

/// One addressable slot of the text buffer: character code plus attribute.
///
/// Written to the hardware as a single 16-bit unit.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenCell {
    pub glyph: u8,
    pub color: ColorCode,
}

impl ScreenCell {
    /// The cell `clear` paints everywhere: a space in the fixed style.
    pub const BLANK: Self = Self::new(b' ');

    #[inline]
    pub const fn new(glyph: u8) -> Self {
        Self {
            glyph,
            color: ColorCode::DEFAULT,
        }
    }

    /// The packed 16-bit hardware encoding of this cell.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        (self.color.as_u8() as u16) << 8 | self.glyph as u16
    }
}
