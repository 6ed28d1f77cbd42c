//! Character frame buffer and its parallel depth buffer.
//!
//! Both are row-major `width * height` arrays. `FrameBuffers` owns one of
//! each and is the only place cells get written, so the depth rule lives in
//! a single function.

use crate::glyph::Glyph;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Glyph>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Glyph::Blank; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Glyph> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    pub fn cells(&self) -> &[Glyph] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Glyph]> + '_ {
        self.cells.chunks(self.width.max(1))
    }

    /// Number of non-blank cells.
    pub fn populated(&self) -> usize {
        self.cells.iter().filter(|g| !g.is_blank()).count()
    }

    /// Cells that differ between two grids of the same size.
    pub fn diff_count(&self, other: &Grid) -> Option<usize> {
        if self.width != other.width || self.height != other.height {
            return None;
        }
        Some(
            self.cells
                .iter()
                .zip(&other.cells)
                .filter(|(a, b)| a != b)
                .count(),
        )
    }

    fn clear(&mut self) {
        self.cells.fill(Glyph::Blank);
    }
}

impl fmt::Display for Grid {
    /// Rows joined with `\n`, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for g in row {
                write!(f, "{}", g.as_char())?;
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct DepthBuffer {
    width: usize,
    height: usize,
    depths: Vec<f64>,
}

impl DepthBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            depths: vec![f64::NEG_INFINITY; width * height],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        (x < self.width && y < self.height).then(|| self.depths[y * self.width + x])
    }

    fn clear(&mut self) {
        self.depths.fill(f64::NEG_INFINITY);
    }
}

/// A frame's glyph grid plus its depth buffer, always the same size.
#[derive(Clone, Debug)]
pub struct FrameBuffers {
    grid: Grid,
    depth: DepthBuffer,
}

impl FrameBuffers {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            depth: DepthBuffer::new(width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height
    }

    /// Blank every cell and push every depth back to negative infinity.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.depth.clear();
    }

    /// Depth-tested write of one projected sample.
    ///
    /// Coordinates are signed so callers can pass raw projections; anything
    /// outside the grid is dropped. The glyph lands only if `depth` is
    /// strictly greater than the stored depth plus `bias`. Returns whether
    /// the cell was written.
    pub fn plot(&mut self, px: i64, py: i64, depth: f64, bias: f64, glyph: Glyph) -> bool {
        if px < 0 || py < 0 {
            return false;
        }
        let (x, y) = (px as usize, py as usize);
        if x >= self.grid.width || y >= self.grid.height {
            return false;
        }
        let idx = y * self.grid.width + x;
        if depth > self.depth.depths[idx] + bias {
            self.depth.depths[idx] = depth;
            self.grid.cells[idx] = glyph;
            true
        } else {
            false
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn depth(&self) -> &DepthBuffer {
        &self.depth
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
