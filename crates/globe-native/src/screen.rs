use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{BeginSynchronizedUpdate, EndSynchronizedUpdate},
};
use globe_core::Grid;
use std::io::{self, Write};

use crate::view;

/// Write the part of `grid` that fits a `term_w` x `term_h` terminal,
/// centred, as one synchronized update. `line` is scratch space kept
/// across frames.
pub fn draw(
    out: &mut impl Write,
    grid: &Grid,
    (term_w, term_h): (u16, u16),
    line: &mut String,
) -> io::Result<()> {
    let vp = view::centre(grid.width(), grid.height(), term_w, term_h);
    queue!(out, BeginSynchronizedUpdate)?;
    for (i, row) in grid.rows().skip(vp.src_row).take(vp.rows).enumerate() {
        line.clear();
        line.extend(
            row[vp.src_col..vp.src_col + vp.cols]
                .iter()
                .map(|g| g.as_char()),
        );
        queue!(
            out,
            cursor::MoveTo(vp.dst_col, vp.dst_row + i as u16),
            Print(line.as_str())
        )?;
    }
    queue!(out, EndSynchronizedUpdate)?;
    out.flush()
}
