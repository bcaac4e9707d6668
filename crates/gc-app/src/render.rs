use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use gc_core::frame::ArtGrid;

/// Write a grid as ANSI truecolor, one styled glyph per cell.
///
/// Repeated foreground colors are not re-emitted; color resets at
/// each end of line.
///
/// # Errors
/// Propagates I/O errors from the writer.
pub fn write_ansi<W: Write>(grid: &ArtGrid, out: &mut W) -> io::Result<()> {
    for row in grid.rows() {
        let mut current: Option<(u8, u8, u8)> = None;
        for cell in row {
            if current != Some(cell.fg) {
                let (r, g, b) = cell.fg;
                queue!(out, SetForegroundColor(Color::Rgb { r, g, b }))?;
                current = Some(cell.fg);
            }
            queue!(out, Print(cell.ch))?;
        }
        queue!(out, ResetColor, Print('\n'))?;
    }
    out.flush()
}

/// Write a grid as plain text, glyphs only.
///
/// # Errors
/// Propagates I/O errors from the writer.
pub fn write_plain<W: Write>(grid: &ArtGrid, out: &mut W) -> io::Result<()> {
    let mut line = String::with_capacity(grid.width as usize + 1);
    for row in grid.rows() {
        line.clear();
        line.extend(row.iter().map(|cell| cell.ch));
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    out.flush()
}
