use glam::{IVec2, Vec2};

use crate::grid::TileMap;
use crate::raycast::{RayHit, Side};
use crate::types::heading_vector;

/// Direction components smaller than this are treated as exactly axis-aligned
/// and use the infinite delta-distance sentinel instead of dividing.
const DIR_EPSILON: f32 = 1e-7;

/// Cast a ray from a world point along a heading in degrees.
pub fn cast_ray(map: &TileMap, origin: Vec2, heading_deg: f32, max_distance: f32) -> RayHit {
    cast_ray_dir(map, origin, heading_vector(heading_deg), max_distance)
}

/// Grid traversal (Amanatides & Woo DDA) returning the first solid tile hit.
///
/// `dir` does not need to be normalized. Distances are in world units; the
/// stepped-axis coordinate of a hit point lies exactly on the crossed grid
/// line. When the two axis crossings are equidistant the x axis is stepped,
/// so identical inputs always reproduce identical hits.
pub fn cast_ray_dir(map: &TileMap, origin: Vec2, dir: Vec2, max_distance: f32) -> RayHit {
    if dir.length_squared() == 0.0 || !dir.is_finite() {
        // Degenerate direction: deterministic zero-length miss.
        return RayHit {
            hit: false,
            point: origin,
            distance: 0.0,
            side: Side::X,
            tex_u: 0,
        };
    }

    let dir = snap_axes(dir.normalize());
    let edge = map.tile_edge();

    // We use ivecs for the cell index as the steps can be negative.
    let mut cell = map.world_to_tile(origin);
    if map.solid_tile(cell.x, cell.y) {
        // Starting inside a wall is an immediate hit at distance zero.
        return RayHit {
            hit: true,
            point: origin,
            distance: 0.0,
            side: Side::X,
            tex_u: sub_tile_offset(origin.y, edge),
        };
    }

    let step = IVec2::new(dir.x.signum() as i32, dir.y.signum() as i32);
    let (delta_x, mut side_x) = axis_params(origin.x / edge, dir.x);
    let (delta_y, mut side_y) = axis_params(origin.y / edge, dir.y);
    let max_t_grid = max_distance / edge;

    loop {
        // Advance whichever crossing is nearer; x wins exact ties.
        let (t, side) = if side_x <= side_y {
            let t = side_x;
            side_x += delta_x;
            cell.x += step.x;
            (t, Side::X)
        } else {
            let t = side_y;
            side_y += delta_y;
            cell.y += step.y;
            (t, Side::Y)
        };

        if t > max_t_grid {
            return RayHit {
                hit: false,
                point: origin + dir * max_distance,
                distance: max_distance,
                side: Side::X,
                tex_u: 0,
            };
        }

        if map.solid_tile(cell.x, cell.y) {
            let distance = t * edge;
            let point = hit_point(origin, dir, distance, cell, step, side, edge);
            let tex_u = match side {
                Side::X => sub_tile_offset(point.y, edge),
                Side::Y => sub_tile_offset(point.x, edge),
            };
            return RayHit {
                hit: true,
                point,
                distance,
                side,
                tex_u,
            };
        }
    }
}

/// Zero out near-axis direction components so axis-aligned rays stay exactly
/// on their grid line.
#[inline]
fn snap_axes(dir: Vec2) -> Vec2 {
    Vec2::new(
        if dir.x.abs() < DIR_EPSILON { 0.0 } else { dir.x },
        if dir.y.abs() < DIR_EPSILON { 0.0 } else { dir.y },
    )
}

/// Per-axis traversal parameters in grid units: distance along the ray to
/// cross one full tile, and distance to the first grid line.
fn axis_params(start: f32, dir: f32) -> (f32, f32) {
    if dir == 0.0 {
        return (f32::INFINITY, f32::INFINITY);
    }

    let offset = start.rem_euclid(1.0);
    let dist_to_boundary = if dir > 0.0 { 1.0 - offset } else { offset };

    let t_delta = (1.0 / dir).abs();
    let t_max = dist_to_boundary * t_delta;
    (t_delta, t_max)
}

/// Hit coordinate with the stepped axis snapped onto the crossed grid line.
fn hit_point(
    origin: Vec2,
    dir: Vec2,
    distance: f32,
    cell: IVec2,
    step: IVec2,
    side: Side,
    edge: f32,
) -> Vec2 {
    match side {
        Side::X => {
            let line = if step.x > 0 { cell.x } else { cell.x + 1 } as f32 * edge;
            Vec2::new(line, origin.y + dir.y * distance)
        }
        Side::Y => {
            let line = if step.y > 0 { cell.y } else { cell.y + 1 } as f32 * edge;
            Vec2::new(origin.x + dir.x * distance, line)
        }
    }
}

/// Offset along the struck face truncated to `[0, tile_edge)`.
fn sub_tile_offset(coord: f32, edge: f32) -> u32 {
    let offset = coord.rem_euclid(edge);
    // rem_euclid can round up to `edge` itself for tiny negative inputs.
    (offset as u32).min((edge as u32).saturating_sub(1))
}
