//! Pure conversion of a [`Grid`] into an RGBA8 pixel buffer.
//!
//! Always available (no feature gate) so that callers without the `png`
//! feature can still hand pixels to their own image sink.

use life_core::grid::Grid;

/// Color of a living cell.
pub const ALIVE_RGBA: [u8; 4] = [0x3c, 0xd0, 0x70, 0xff];
/// Color of a dead cell.
pub const DEAD_RGBA: [u8; 4] = [0x1e, 0x1e, 0x1e, 0xff];

/// Renders each cell as a `cell_px`×`cell_px` square.
///
/// The buffer is `side * cell_px` pixels wide and tall, row-major, four
/// bytes per pixel. A `cell_px` of 0 yields an empty buffer.
pub fn grid_to_rgba(grid: &Grid, cell_px: usize) -> Vec<u8> {
    let side = grid.side();
    let width = side * cell_px;
    let mut buf = Vec::with_capacity(width * width * 4);
    for row in 0..side {
        let line: Vec<u8> = (0..side)
            .flat_map(|col| {
                let color = if grid.get(row as isize, col as isize) {
                    ALIVE_RGBA
                } else {
                    DEAD_RGBA
                };
                std::iter::repeat(color).take(cell_px).flatten()
            })
            .collect();
        for _ in 0..cell_px {
            buf.extend_from_slice(&line);
        }
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(buf: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
        let i = (y * width + x) * 4;
        [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
    }

    #[test]
    fn grid_to_rgba_correct_length() {
        let grid = Grid::new(8).unwrap();
        assert_eq!(grid_to_rgba(&grid, 1).len(), 8 * 8 * 4);
        assert_eq!(grid_to_rgba(&grid, 3).len(), 24 * 24 * 4);
    }

    #[test]
    fn grid_to_rgba_zero_scale_is_empty() {
        let grid = Grid::new(8).unwrap();
        assert!(grid_to_rgba(&grid, 0).is_empty());
    }

    #[test]
    fn grid_to_rgba_alpha_always_opaque() {
        let grid = Grid::with_alive(4, &[(1, 1), (2, 3)]).unwrap();
        let buf = grid_to_rgba(&grid, 2);
        for (i, &byte) in buf.iter().enumerate() {
            if i % 4 == 3 {
                assert_eq!(byte, 255, "alpha at pixel {} should be 255", i / 4);
            }
        }
    }

    #[test]
    fn grid_to_rgba_scales_cells_into_blocks() {
        let grid = Grid::with_alive(3, &[(0, 1)]).unwrap();
        let buf = grid_to_rgba(&grid, 2);
        let width = 6;
        for y in 0..2 {
            for x in 2..4 {
                assert_eq!(pixel(&buf, width, x, y), ALIVE_RGBA, "({x}, {y})");
            }
        }
        assert_eq!(pixel(&buf, width, 0, 0), DEAD_RGBA);
        assert_eq!(pixel(&buf, width, 4, 1), DEAD_RGBA);
        assert_eq!(pixel(&buf, width, 2, 2), DEAD_RGBA);
    }
}
