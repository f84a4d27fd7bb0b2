//! End-to-end console rendering against the in-memory cell buffer.

use cinderos_lib::numfmt::{to_decimal, to_hex};
use cinderos_video::cell::{CELL_COUNT, ScreenCell, WIDTH};
use cinderos_video::console::{CellBuffer, TextConsole};

type TestConsole = TextConsole<[ScreenCell; CELL_COUNT]>;

fn fresh_console() -> TestConsole {
    let mut console = TextConsole::new([ScreenCell::new(b'#'); CELL_COUNT]);
    console.clear();
    console
}

fn row_text(console: &TestConsole, row: usize) -> String {
    (0..WIDTH)
        .map(|col| console.buffer().read_cell(row * WIDTH + col).glyph as char)
        .collect()
}

#[test]
fn boot_banner_then_hex_value() {
    let mut console = fresh_console();

    console.write_line(b"Kernel booted succesfully.");
    console.write_string(to_hex(1234).as_bytes_with_nul());

    let mut expected_row0 = String::from("Kernel booted succesfully.");
    while expected_row0.len() < WIDTH {
        expected_row0.push(' ');
    }
    assert_eq!(row_text(&console, 0), expected_row0);
    assert!(row_text(&console, 1).starts_with("0x4d2"));
    assert_eq!(console.cursor(), WIDTH + 5);
}

#[test]
fn formatted_numbers_render_verbatim() {
    let mut console = fresh_console();

    console.write_line(to_decimal(-9001).as_bytes_with_nul());
    console.write_line(to_hex(0).as_bytes_with_nul());

    assert!(row_text(&console, 0).starts_with("-9001 "));
    assert!(row_text(&console, 1).starts_with("0x0 "));
    assert_eq!(console.cursor(), 2 * WIDTH);
}

#[test]
fn fixed_style_survives_every_operation() {
    let mut console = fresh_console();

    console.write_line(b"style check");
    console.write_string(b"second row");

    for index in 0..2 * WIDTH {
        assert_eq!(console.buffer().read_cell(index).as_u16() >> 8, 0x0f);
    }
}
