use image::{GrayImage, Luma};

use crate::grid::TileMap;
use crate::types::{EMPTY, TileId, WALL};

/// Convert a tile map to a grayscale image preview.
///
/// - **EMPTY** becomes white-ish.
/// - **WALL** becomes black.
/// - Any other identifier becomes mid-gray.
///
/// Rows are written top to bottom; the map already uses a screen-style
/// y-down orientation, so no flip is needed.
pub fn tile_map_to_image(map: &TileMap) -> GrayImage {
    let mut img = GrayImage::new(map.cols(), map.rows());

    for row in 0..map.rows() {
        for col in 0..map.cols() {
            let id = map.tile(col, row).unwrap_or(EMPTY);
            img.put_pixel(col, row, Luma([tile_to_gray(id)]));
        }
    }

    img
}

fn tile_to_gray(id: TileId) -> u8 {
    match id {
        EMPTY => 254,
        WALL => 0,
        _ => 205,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MapInfo;

    #[test]
    fn tile_map_to_image_keeps_orientation() {
        let map = TileMap::bordered(MapInfo::square(3, 8.0)).unwrap();
        let img = tile_map_to_image(&map);
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 3);

        // Border is black, the single interior tile is bright.
        assert_eq!(img.get_pixel(0, 0).0[0], tile_to_gray(WALL));
        assert_eq!(img.get_pixel(1, 1).0[0], tile_to_gray(EMPTY));
        assert!(tile_to_gray(EMPTY) > tile_to_gray(WALL));
    }
}
