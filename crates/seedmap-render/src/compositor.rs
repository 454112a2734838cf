//! Writes RGBA pixels from a padded grid, a palette and a shade mode.

use crate::hillshade::{NeighborHeights, ShadeMode, smooth_hillshade};
use crate::palette::BiomePalette;
use crate::sampler::PaddedGrid;

/// Composites the interior of `grid` into `out` as row-major RGBA.
///
/// `out` must hold exactly `(grid.width() - 2) * (grid.height() - 2) * 4`
/// bytes. Every pixel is written once with alpha 255. Shading is skipped
/// when the grid carries no heights, or no height field in smooth mode.
pub fn composite(
    grid: &PaddedGrid,
    palette: &BiomePalette,
    shade: ShadeMode,
    scale: i32,
    out: &mut [u8],
) {
    let width = grid.width() - 2;
    debug_assert_eq!(out.len(), width * (grid.height() - 2) * 4);

    for (index, pixel) in out.chunks_exact_mut(4).enumerate() {
        let i = index % width + 1;
        let j = index / width + 1;
        let [r, g, b] = palette.color(grid.biome(i, j));

        let light = match (grid.surface(i, j), shade) {
            (_, ShadeMode::Smooth) => grid.field().map(|field| {
                let (x, z) = grid.area().column(i - 1, j - 1);
                smooth_hillshade(field, x, z, scale)
            }),
            (Some(center), ShadeMode::Simple | ShadeMode::Stepped) => {
                let neighbors = NeighborHeights {
                    north: grid.surface(i, j - 1).unwrap_or(center),
                    south: grid.surface(i, j + 1).unwrap_or(center),
                    east: grid.surface(i + 1, j).unwrap_or(center),
                    west: grid.surface(i - 1, j).unwrap_or(center),
                };
                shade.light(neighbors, center, scale)
            }
            _ => None,
        };

        match light {
            Some(light) => {
                pixel[0] = apply_light(r, light);
                pixel[1] = apply_light(g, light);
                pixel[2] = apply_light(b, light);
            }
            None => {
                pixel[0] = r;
                pixel[1] = g;
                pixel[2] = b;
            }
        }
        pixel[3] = 255;
    }
}

/// Scales a channel, truncating toward zero and saturating at 255.
#[inline]
fn apply_light(channel: u8, light: f32) -> u8 {
    (f32::from(channel) * light) as u8
}
