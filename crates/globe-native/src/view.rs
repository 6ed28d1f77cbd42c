/// Where a grid lands in the terminal: centred on both axes, cropped when
/// the terminal is smaller than the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub src_row: usize,
    pub src_col: usize,
    pub dst_row: u16,
    pub dst_col: u16,
    pub rows: usize,
    pub cols: usize,
}

pub fn centre(grid_w: usize, grid_h: usize, term_w: u16, term_h: u16) -> Viewport {
    let (src_col, dst_col, cols) = axis(grid_w, term_w as usize);
    let (src_row, dst_row, rows) = axis(grid_h, term_h as usize);
    Viewport {
        src_row,
        src_col,
        dst_row: dst_row as u16,
        dst_col: dst_col as u16,
        rows,
        cols,
    }
}

// (source offset, destination offset, length)
fn axis(src: usize, dst: usize) -> (usize, usize, usize) {
    if src <= dst {
        (0, (dst - src) / 2, src)
    } else {
        ((src - dst) / 2, 0, dst)
    }
}
