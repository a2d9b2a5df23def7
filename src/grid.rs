// A centered grid of paintable cells over a fixed-size surface.
// Visual outcomes:
// - A neutral-gray background rectangle, centered in the window.
// - White "empty" cells separated by gutters, each addressable by (i, j).
// - fill_cell/clear_cell repaint exactly one cell's rectangle, nothing else.

use crate::draw::fill_rect;
use crate::error::Error;
use crate::types::FrameBuffer;

/// Default color for a filled cell (warm amber).
pub const FILL_COLOR: u32 = 0x00CC_8800;
/// Color of an empty cell.
pub const EMPTY_COLOR: u32 = 0x00FF_FFFF;
/// Color of the gutters behind the cells.
pub const BACKGROUND_COLOR: u32 = 0x00CC_CCCC;

/// Grid layout, fixed at construction. Every paint call borrows the
/// framebuffer for just that call; the framebuffer itself holds what's visible.
pub struct Grid {
    cell_width: usize,
    cell_height: usize,
    gutter: usize,
    n_cols: usize,
    n_rows: usize,
    grid_width: usize,   // n_cols expanded back to pixels, gutters included
    grid_height: usize,
    origin_x: usize,     // centering offset, added to every paint
    origin_y: usize,
}

impl Grid {
    /// Compute the layout for `fb` and paint the initial empty grid.
    /// As many cells as fit are laid out: each column costs cell+gutter, plus
    /// one leading gutter. The leftover surface space is split evenly around
    /// the grid (floored), which centers it for good.
    /// Visual: a gray rectangle full of white cells appears, centered.
    pub fn new(
        fb: &mut FrameBuffer,
        cell_width: usize,
        cell_height: usize,
        gutter: usize,
    ) -> Result<Self, Error> {
        if cell_width == 0 || cell_height == 0 || gutter == 0 {
            return Err(Error::GridGeometry(format!(
                "cell {cell_width}x{cell_height}, gutter {gutter}: all must be positive"
            )));
        }

        // A surface smaller than one gutter yields zero cells, not a failure.
        let n_cols = fb.width.saturating_sub(gutter) / (cell_width + gutter);
        let n_rows = fb.height.saturating_sub(gutter) / (cell_height + gutter);

        let grid_width = n_cols * (cell_width + gutter) + gutter;
        let grid_height = n_rows * (cell_height + gutter) + gutter;

        // Center the grid in the excess horizontal and vertical surface space.
        let origin_x = fb.width.saturating_sub(grid_width) / 2;
        let origin_y = fb.height.saturating_sub(grid_height) / 2;

        let grid = Self {
            cell_width,
            cell_height,
            gutter,
            n_cols,
            n_rows,
            grid_width,
            grid_height,
            origin_x,
            origin_y,
        };

        grid.set_background(fb, BACKGROUND_COLOR);
        grid.clear(fb); // to start, render an empty grid
        Ok(grid)
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Paint cell (i, j) in the given color.
    /// Addresses are not bounds-checked: an out-of-range cell becomes an
    /// off-surface rectangle that the paint primitive clips away.
    /// Visual: one cell's rectangle changes color; gutters and neighbors don't.
    pub fn fill_cell(&self, fb: &mut FrameBuffer, i: i64, j: i64, color: u32) {
        let x = self.origin_x as i64 + i * (self.cell_width + self.gutter) as i64 + self.gutter as i64;
        let y = self.origin_y as i64 + j * (self.cell_height + self.gutter) as i64 + self.gutter as i64;
        fill_rect(fb, x, y, self.cell_width, self.cell_height, color);
    }

    /// Visual: cell (i, j) goes back to the empty color.
    pub fn clear_cell(&self, fb: &mut FrameBuffer, i: i64, j: i64) {
        self.fill_cell(fb, i, j, EMPTY_COLOR);
    }

    /// Clear every cell. A degenerate grid (zero cols or rows) iterates
    /// nothing. Visual: the grid looks freshly initialized again.
    pub fn clear(&self, fb: &mut FrameBuffer) {
        for i in 0..self.n_cols {
            for j in 0..self.n_rows {
                self.clear_cell(fb, i as i64, j as i64);
            }
        }
    }

    /* Private Methods */

    fn set_background(&self, fb: &mut FrameBuffer, color: u32) {
        fill_rect(
            fb,
            self.origin_x as i64,
            self.origin_y as i64,
            self.grid_width,
            self.grid_height,
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(fb: &FrameBuffer, x: usize, y: usize) -> u32 {
        fb.pixels[y * fb.width + x]
    }

    /// Top-left pixel of cell (i, j)'s rectangle.
    fn cell_origin(g: &Grid, i: usize, j: usize) -> (usize, usize) {
        (
            g.origin_x + i * (g.cell_width + g.gutter) + g.gutter,
            g.origin_y + j * (g.cell_height + g.gutter) + g.gutter,
        )
    }

    #[test]
    fn layout_matches_floor_division() {
        // 305 = 10 * (25 + 5) + 5, so the grid consumes the surface exactly.
        let mut fb = FrameBuffer::new(305, 305);
        let g = Grid::new(&mut fb, 25, 25, 5).unwrap();
        assert_eq!(g.n_cols(), 10);
        assert_eq!(g.n_rows(), 10);
        assert_eq!(g.grid_width, 305);
        assert_eq!(g.grid_height, 305);
        assert_eq!((g.origin_x, g.origin_y), (0, 0));
    }

    #[test]
    fn grid_fits_inside_surface() {
        for &(w, h, cw, ch, gut) in &[
            (305usize, 305usize, 25usize, 25usize, 5usize),
            (640, 480, 25, 25, 5),
            (97, 53, 7, 11, 3),
            (1000, 10, 3, 3, 1),
        ] {
            let mut fb = FrameBuffer::new(w, h);
            let g = Grid::new(&mut fb, cw, ch, gut).unwrap();
            assert_eq!(g.n_cols, (w - gut) / (cw + gut));
            assert_eq!(g.n_rows, (h - gut) / (ch + gut));
            assert!(g.grid_width <= w, "{w}x{h} cell {cw}x{ch} gutter {gut}");
            assert!(g.grid_height <= h, "{w}x{h} cell {cw}x{ch} gutter {gut}");
        }
    }

    #[test]
    fn centering_margins_are_balanced() {
        // 320 leaves 15px of slack: 7 on the left, 8 on the right.
        let mut fb = FrameBuffer::new(320, 310);
        let g = Grid::new(&mut fb, 25, 25, 5).unwrap();
        let left = g.origin_x;
        let right = fb.width - g.grid_width - g.origin_x;
        let top = g.origin_y;
        let bottom = fb.height - g.grid_height - g.origin_y;
        assert!(left.abs_diff(right) <= 1);
        assert!(top.abs_diff(bottom) <= 1);
    }

    #[test]
    fn degenerate_surface_has_no_cells() {
        let mut fb = FrameBuffer::new(10, 10);
        let g = Grid::new(&mut fb, 25, 25, 5).unwrap();
        assert_eq!(g.n_cols(), 0);
        assert_eq!(g.n_rows(), 0);
        // clear() iterates nothing; the surface stays as initialized.
        let before = fb.clone();
        g.clear(&mut fb);
        assert!(fb == before);
    }

    #[test]
    fn zero_geometry_is_rejected() {
        let mut fb = FrameBuffer::new(100, 100);
        assert!(Grid::new(&mut fb, 0, 25, 5).is_err());
        assert!(Grid::new(&mut fb, 25, 0, 5).is_err());
        assert!(Grid::new(&mut fb, 25, 25, 0).is_err());
    }

    #[test]
    fn init_paints_background_and_empty_cells() {
        let mut fb = FrameBuffer::new(305, 305);
        let g = Grid::new(&mut fb, 25, 25, 5).unwrap();
        // A gutter pixel and a cell-interior pixel.
        assert_eq!(px(&fb, 2, 2), BACKGROUND_COLOR);
        let (cx, cy) = cell_origin(&g, 0, 0);
        assert_eq!(px(&fb, cx, cy), EMPTY_COLOR);
        assert_eq!(px(&fb, cx + 24, cy + 24), EMPTY_COLOR);
    }

    #[test]
    fn fill_then_clear_restores_the_cell_and_spares_neighbors() {
        let mut fb = FrameBuffer::new(305, 305);
        let g = Grid::new(&mut fb, 25, 25, 5).unwrap();
        let fresh = fb.clone();

        g.fill_cell(&mut fb, 3, 4, FILL_COLOR);
        let (cx, cy) = cell_origin(&g, 3, 4);
        assert_eq!(px(&fb, cx, cy), FILL_COLOR);
        assert_eq!(px(&fb, cx + 12, cy + 12), FILL_COLOR);
        // Gutter next to the cell and the neighboring cell are untouched.
        assert_eq!(px(&fb, cx - 1, cy), BACKGROUND_COLOR);
        let (nx, ny) = cell_origin(&g, 4, 4);
        assert_eq!(px(&fb, nx, ny), EMPTY_COLOR);

        g.clear_cell(&mut fb, 3, 4);
        assert!(fb == fresh);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut fb = FrameBuffer::new(305, 305);
        let g = Grid::new(&mut fb, 25, 25, 5).unwrap();
        g.fill_cell(&mut fb, 1, 1, FILL_COLOR);
        g.clear(&mut fb);
        let once = fb.clone();
        g.clear(&mut fb);
        assert!(fb == once);
    }

    #[test]
    fn out_of_range_address_clips_instead_of_panicking() {
        let mut fb = FrameBuffer::new(305, 305);
        let g = Grid::new(&mut fb, 25, 25, 5).unwrap();
        let before = fb.clone();
        g.fill_cell(&mut fb, 999, 999, FILL_COLOR);
        g.fill_cell(&mut fb, -3, -7, FILL_COLOR);
        assert!(fb == before);
    }
}
