//! The `seedmap` command: renders a configured world region to a PNG, or
//! looks up the biome at a single position.

mod error;
mod export;
mod request;
mod summary;

pub use error::CliError;
pub use export::write_png;
pub use request::{render_request, shade_mode, world_dimension};
pub use summary::BiomeHistogram;

use std::path::Path;
use std::time::Instant;

use seedmap_render::{RenderContext, RenderRequest, SampleArea, lookup_biome, sample_region};
use seedmap_world::{Dimension, NoiseWorld, WorldModel, biome_name, split_seed};
use tracing::info;

/// Biomes listed in the post-render summary.
const SUMMARY_ENTRIES: usize = 5;

/// Renders `request` and writes it to `path`. Returns the histogram of the
/// rendered area.
pub fn render_to_png(request: &RenderRequest, path: &Path) -> Result<BiomeHistogram, CliError> {
    let started = Instant::now();
    let mut ctx = RenderContext::new();
    let bytes = ctx.render(request)?;
    let image = ctx.image().ok_or(CliError::EmptyImage)?;
    info!(
        bytes,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "rendered {}x{} at scale {}",
        request.width,
        request.height,
        request.scale
    );

    write_png(path, request.width, request.height, image)?;
    info!("wrote {}", path.display());

    let area = SampleArea {
        x: request.x,
        z: request.z,
        width: request.width,
        height: request.height,
        scale: request.scale,
        y_level: request.y_level,
    };
    let histogram = BiomeHistogram::from_ids(&sample_region(ctx.world(), &area)?);
    for (id, count) in histogram.top(SUMMARY_ENTRIES) {
        info!(
            biome = biome_name(id).unwrap_or("unknown"),
            id = id.0,
            percent = histogram.share(count) * 100.0,
            "biome coverage"
        );
    }
    Ok(histogram)
}

/// Biome id at one position for the world described by `request`.
pub fn lookup(request: &RenderRequest, x: i32, y: i32, z: i32) -> i32 {
    if request.dimension == Dimension::Overworld && !request.flags.large_biomes {
        let (lo, hi) = split_seed(request.seed);
        return lookup_biome(lo, hi, x, y, z, 1, request.variant.code());
    }
    NoiseWorld::seeded(request.variant, request.flags, request.seed, request.dimension)
        .biome_at(1, x, y, z)
        .0
}

#[cfg(test)]
mod tests {
    use seedmap_render::ShadeMode;
    use seedmap_world::{GenFlags, Variant};

    use super::*;

    fn small_request() -> RenderRequest {
        RenderRequest {
            seed: 2024,
            x: -128,
            z: -128,
            width: 32,
            height: 24,
            scale: 8,
            shade: ShadeMode::Stepped,
            ..Default::default()
        }
    }

    #[test]
    fn test_render_to_png_writes_file_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.png");
        let histogram = render_to_png(&small_request(), &path).unwrap();

        assert!(path.exists());
        assert_eq!(histogram.total(), 32 * 24);
        assert!(histogram.distinct() >= 1);
    }

    #[test]
    fn test_invalid_request_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let request = RenderRequest {
            scale: 0,
            ..small_request()
        };
        let result = render_to_png(&request, &dir.path().join("map.png"));
        assert!(matches!(result, Err(CliError::Render(_))));
    }

    #[test]
    fn test_lookup_agrees_with_world() {
        let request = small_request();
        let world = NoiseWorld::seeded(
            request.variant,
            request.flags,
            request.seed,
            request.dimension,
        );
        assert_eq!(lookup(&request, 40, 64, -90), world.biome_at(1, 40, 64, -90).0);
    }

    #[test]
    fn test_lookup_other_dimensions() {
        let request = RenderRequest {
            dimension: Dimension::Nether,
            variant: Variant::V1_20,
            flags: GenFlags { large_biomes: false },
            ..small_request()
        };
        let id = lookup(&request, 0, 40, 0);
        assert!(biome_name(seedmap_world::BiomeId(id)).is_some());
    }
}
