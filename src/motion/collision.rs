use glam::Vec2;

use crate::grid::TileMap;

/// Push a moving box out of walls, one axis at a time.
///
/// The x axis is resolved first: the box is displaced along x only and its
/// four corners are sampled against the map; any solid corner cancels the x
/// displacement. The y axis is then tested with whatever x displacement
/// survived, so the returned position is always one of the sampled boxes. A
/// diagonal move slides along a flat wall face, and cannot land inside a
/// free-standing pillar corner that neither single-axis box overlaps.
///
/// Returns the final position and the displacement that survived.
pub fn resolve(
    map: &TileMap,
    position: Vec2,
    half_extent: Vec2,
    delta: Vec2,
) -> (Vec2, Vec2) {
    let mut survived = delta;

    if !corners_clear(
        map,
        Vec2::new(position.x + delta.x, position.y),
        half_extent,
    ) {
        survived.x = 0.0;
    }
    if !corners_clear(
        map,
        Vec2::new(position.x + survived.x, position.y + delta.y),
        half_extent,
    ) {
        survived.y = 0.0;
    }

    (position + survived, survived)
}

/// True when none of the four corners of the box centred at `center` sits in
/// a solid tile.
fn corners_clear(map: &TileMap, center: Vec2, half_extent: Vec2) -> bool {
    let min = center - half_extent;
    let max = center + half_extent;
    !map.is_solid_at(min)
        && !map.is_solid_at(Vec2::new(max.x, min.y))
        && !map.is_solid_at(Vec2::new(min.x, max.y))
        && !map.is_solid_at(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EMPTY, MapInfo, WALL};

    /// 6x6 map, tile edge 6.0, with the whole of column 3 solid.
    fn wall_column_map() -> TileMap {
        let info = MapInfo::square(6, 6.0);
        let mut map = TileMap::new(info, vec![EMPTY; 36]).unwrap();
        for row in 0..6 {
            map.set_tile(3, row, WALL).unwrap();
        }
        map
    }

    #[test]
    fn head_on_push_cancels_the_axis() {
        let map = wall_column_map();
        let (position, survived) = resolve(
            &map,
            Vec2::new(10.0, 10.0),
            Vec2::new(8.0, 8.0),
            Vec2::new(2.0, 0.0),
        );
        assert_eq!(position, Vec2::new(10.0, 10.0));
        assert_eq!(survived, Vec2::ZERO);
    }

    #[test]
    fn diagonal_move_slides_along_the_wall() {
        let map = wall_column_map();
        let (position, survived) = resolve(
            &map,
            Vec2::new(10.0, 10.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(7.0, 3.0),
        );
        assert_eq!(survived, Vec2::new(0.0, 3.0));
        assert_eq!(position, Vec2::new(10.0, 13.0));
    }

    #[test]
    fn open_ground_keeps_the_full_displacement() {
        let map = TileMap::new(MapInfo::square(6, 6.0), vec![EMPTY; 36]).unwrap();
        let (position, survived) = resolve(
            &map,
            Vec2::new(10.0, 10.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(7.0, 3.0),
        );
        assert_eq!(survived, Vec2::new(7.0, 3.0));
        assert_eq!(position, Vec2::new(17.0, 13.0));
    }

    #[test]
    fn westward_push_is_symmetric() {
        let map = TileMap::bordered(MapInfo::square(4, 8.0)).unwrap();
        let (position, survived) = resolve(
            &map,
            Vec2::new(12.0, 12.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(-3.0, 0.0),
        );
        assert_eq!(position, Vec2::new(12.0, 12.0));
        assert_eq!(survived, Vec2::ZERO);
    }

    #[test]
    fn diagonal_step_cannot_clip_a_pillar_corner() {
        let mut map = TileMap::new(MapInfo::square(5, 8.0), vec![EMPTY; 25]).unwrap();
        map.set_tile(2, 2, WALL).unwrap();

        // Approach the pillar's north-west corner from outside; neither
        // single-axis box touches the pillar, the combined one would.
        let (position, survived) = resolve(
            &map,
            Vec2::new(13.5, 13.5),
            Vec2::splat(2.0),
            Vec2::new(1.0, 1.0),
        );
        assert_eq!(survived, Vec2::new(1.0, 0.0));
        assert_eq!(position, Vec2::new(14.5, 13.5));
        assert!(!map.is_solid_at(position + Vec2::splat(2.0)));
    }

    #[test]
    fn inner_corner_blocks_both_axes() {
        let map = TileMap::bordered(MapInfo::square(4, 8.0)).unwrap();
        let (position, survived) = resolve(
            &map,
            Vec2::new(20.0, 20.0),
            Vec2::new(3.0, 3.0),
            Vec2::new(3.0, 3.0),
        );
        assert_eq!(position, Vec2::new(20.0, 20.0));
        assert_eq!(survived, Vec2::ZERO);
    }
}
