use crate::grid::TileMap;
use crate::raycast::{Side, cast_ray};
use crate::render::{PixelSink, TextureSource, WallShade};
use crate::types::{Pose2, ViewConfig};

const SKY: [u8; 4] = [56, 72, 99, 255];
const FLOOR: [u8; 4] = [75, 63, 49, 255];

/// Render the first-person view: one ray per column, fanned across the
/// configured field of view and centred on the viewer heading.
///
/// The whole backdrop (sky above the midline, floor below) is painted first,
/// so columns whose ray runs out of range simply stay backdrop.
/// `config` is expected to have passed [`ViewConfig::validate`].
pub fn render_view<S, T>(
    sink: &mut S,
    map: &TileMap,
    pose: &Pose2,
    config: &ViewConfig,
    textures: &T,
) where
    S: PixelSink,
    T: TextureSource,
{
    draw_backdrop(sink, config);

    let step = config.ray_step();
    let first = pose.heading - config.fov / 2.0;
    for index in 0..config.rays {
        let ray_heading = first + index as f32 * step;
        let hit = cast_ray(map, pose.position, ray_heading, config.max_cast_distance);
        if !hit.hit {
            continue;
        }

        let corrected =
            corrected_distance(hit.distance, ray_heading, pose.heading, config.distance_scale);
        let height = column_height(config.screen_height, corrected, config.height_scale);
        let shade = match hit.side {
            Side::X => WallShade::Lit,
            Side::Y => WallShade::Shaded,
        };
        draw_column(sink, config, index, height, hit.tex_u, shade, textures);
    }
}

/// Perpendicular distance from the viewer plane to a hit.
///
/// Multiplying the straight-line distance by the cosine of the ray's angular
/// offset removes the fisheye bulge of off-center rays. The result is floored
/// at 1.0 so the projection never divides by a vanishing or negative depth.
pub fn corrected_distance(
    straight: f32,
    ray_heading: f32,
    viewer_heading: f32,
    distance_scale: f32,
) -> f32 {
    let offset = (ray_heading - viewer_heading).to_radians();
    (straight * offset.cos() * distance_scale).max(1.0)
}

/// On-screen pixel height of a wall column at the given corrected distance.
pub fn column_height(screen_height: u32, corrected_distance: f32, height_scale: f32) -> f32 {
    screen_height as f32 / corrected_distance * height_scale
}

fn draw_backdrop<S: PixelSink>(sink: &mut S, config: &ViewConfig) {
    let mid = config.screen_height / 2;
    for y in 0..config.screen_height {
        let color = if y < mid { SKY } else { FLOOR };
        for x in 0..config.screen_width {
            sink.set_pixel(x, y, color);
        }
    }
}

/// Draw one textured strip, vertically centred on the screen midline.
///
/// Rows are sampled for the lower half only and mirrored above the midline,
/// so a half-resolution read fills the full strip.
fn draw_column<S, T>(
    sink: &mut S,
    config: &ViewConfig,
    index: u32,
    column_height: f32,
    tex_u: u32,
    shade: WallShade,
    textures: &T,
) where
    S: PixelSink,
    T: TextureSource,
{
    let x_start = index * config.screen_width / config.rays;
    let x_end = ((index + 1) * config.screen_width / config.rays).max(x_start + 1);

    let mid = config.screen_height / 2;
    let tex_size = textures.size();
    let u = tex_u.min(tex_size.x - 1);

    let half_rows = ((column_height / 2.0) as u32).min(mid);
    for row in 0..half_rows {
        let v = ((tex_size.y as f32 * (2 * row) as f32 / column_height) as u32)
            .min(tex_size.y - 1);
        let color = textures.texel(shade, u, v);
        for x in x_start..x_end {
            sink.set_pixel(x, mid + row, color);
            sink.set_pixel(x, mid - 1 - row, color);
        }
    }
}
