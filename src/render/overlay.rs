use glam::Vec2;

use crate::grid::TileMap;
use crate::iterators::PixelLine;
use crate::raycast::cast_ray;
use crate::render::PixelSink;
use crate::types::{Pose2, SPRITE_FACING_OFFSET_DEG, ViewConfig, WALL};

const BACKGROUND: [u8; 4] = [24, 24, 30, 255];
const WALL_FILL: [u8; 4] = [200, 200, 204, 255];
const RAY: [u8; 4] = [240, 200, 80, 255];
const MARKER: [u8; 4] = [224, 64, 48, 255];

/// Top-down debug view: the tile grid to scale, the segment of every cast
/// ray, and a chevron marking the viewer.
///
/// The map is fitted to the sink with a uniform scale, so aspect ratio is
/// preserved and nothing is drawn past the map's extent.
pub fn draw_overhead<S: PixelSink>(
    sink: &mut S,
    map: &TileMap,
    pose: &Pose2,
    config: &ViewConfig,
) {
    let bounds = sink.size();
    let info = map.info();
    let scale = (bounds.x as f32 / info.world_width()).min(bounds.y as f32 / info.world_height());

    for y in 0..bounds.y {
        for x in 0..bounds.x {
            sink.set_pixel(x, y, BACKGROUND);
        }
    }

    let edge = map.tile_edge();
    for row in 0..map.rows() {
        for col in 0..map.cols() {
            if map.tile(col, row) == Some(WALL) {
                let x0 = (col as f32 * edge * scale) as u32;
                let x1 = ((col + 1) as f32 * edge * scale) as u32;
                let y0 = (row as f32 * edge * scale) as u32;
                let y1 = ((row + 1) as f32 * edge * scale) as u32;
                for y in y0..y1 {
                    for x in x0..x1 {
                        sink.set_pixel(x, y, WALL_FILL);
                    }
                }
            }
        }
    }

    let step = config.ray_step();
    let first = pose.heading - config.fov / 2.0;
    for index in 0..config.rays {
        let hit = cast_ray(
            map,
            pose.position,
            first + index as f32 * step,
            config.max_cast_distance,
        );
        for pixel in PixelLine::new(pose.position * scale, hit.point * scale, bounds) {
            sink.set_pixel(pixel.x, pixel.y, RAY);
        }
    }

    draw_marker(sink, pose, edge * scale, scale);
}

/// Chevron pointing along the viewer heading.
///
/// The chevron art points up, so it is rotated by the heading plus the
/// documented sprite-facing offset to line up with the direction of travel.
fn draw_marker<S: PixelSink>(sink: &mut S, pose: &Pose2, tile_px: f32, scale: f32) {
    let len = (tile_px * 0.6).max(3.0);
    let rotation = Vec2::from_angle((pose.heading + SPRITE_FACING_OFFSET_DEG).to_radians());
    let center = pose.position * scale;

    let tip = center + rotation.rotate(Vec2::new(0.0, -len));
    let tail_left = center + rotation.rotate(Vec2::new(-len * 0.5, len * 0.5));
    let tail_right = center + rotation.rotate(Vec2::new(len * 0.5, len * 0.5));

    for pixel in PixelLine::new(tip, tail_left, sink.size()) {
        sink.set_pixel(pixel.x, pixel.y, MARKER);
    }
    for pixel in PixelLine::new(tip, tail_right, sink.size()) {
        sink.set_pixel(pixel.x, pixel.y, MARKER);
    }
}
