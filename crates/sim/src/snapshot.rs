//! PNG snapshot of a [`Grid`].
//!
//! Feature-gated behind `png` (default on) so embedders that draw cells
//! themselves do not pull in the `image` crate. The pixel conversion lives in
//! [`crate::pixel`].

use life_core::error::LifeError;
use life_core::grid::Grid;
use std::path::Path;

use crate::pixel::grid_to_rgba;

/// Writes `grid` as a PNG with one `cell_px`×`cell_px` square per cell.
///
/// Returns `LifeError::InvalidDimensions` if `cell_px` is zero or the image
/// side overflows `u32`, or `LifeError::Io` on write failure.
pub fn write_png(grid: &Grid, path: &Path, cell_px: usize) -> Result<(), LifeError> {
    if cell_px == 0 {
        return Err(LifeError::InvalidDimensions);
    }
    let side = grid
        .side()
        .checked_mul(cell_px)
        .and_then(|s| u32::try_from(s).ok())
        .ok_or(LifeError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(side, side, grid_to_rgba(grid, cell_px))
        .ok_or_else(|| LifeError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| LifeError::Io(e.to_string()))?;
    log::info!("wrote {side}x{side} snapshot to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_png_round_trip() {
        let grid = Grid::with_alive(16, &[(0, 0), (15, 15)]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.png");

        write_png(&grid, &path, 4).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 64);
        assert_eq!(img.height(), 64);
        assert_eq!(img.get_pixel(0, 0).0, crate::pixel::ALIVE_RGBA);
        assert_eq!(img.get_pixel(10, 0).0, crate::pixel::DEAD_RGBA);
    }

    #[test]
    fn write_png_rejects_zero_cell_size() {
        let grid = Grid::new(4).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let result = write_png(&grid, &dir.path().join("x.png"), 0);
        assert!(matches!(result, Err(LifeError::InvalidDimensions)));
    }

    #[test]
    fn write_png_into_missing_directory_is_io_error() {
        let grid = Grid::new(4).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("x.png");
        assert!(matches!(write_png(&grid, &path, 1), Err(LifeError::Io(_))));
    }
}
