//! Mapping from persisted settings to a render request.

use seedmap_config::{Config, DimensionSetting, ShadeSetting};
use seedmap_render::{RenderRequest, ShadeMode};
use seedmap_world::{Dimension, GenFlags, Variant};

use crate::CliError;

/// Builds the render request described by `config`.
///
/// The seed's two's-complement bits become the unsigned world seed.
pub fn render_request(config: &Config) -> Result<RenderRequest, CliError> {
    let variant: Variant = config.world.version.parse()?;
    let view = &config.view;
    Ok(RenderRequest {
        seed: config.world.seed as u64,
        x: view.x,
        z: view.z,
        width: view.width,
        height: view.height,
        scale: view.scale,
        variant,
        shade: shade_mode(view.shade),
        y_level: view.y_level,
        dimension: world_dimension(config.world.dimension),
        flags: GenFlags {
            large_biomes: config.world.large_biomes,
        },
    })
}

/// The render shade mode for a configured shade setting.
pub fn shade_mode(setting: ShadeSetting) -> ShadeMode {
    match setting {
        ShadeSetting::None => ShadeMode::None,
        ShadeSetting::Simple => ShadeMode::Simple,
        ShadeSetting::Stepped => ShadeMode::Stepped,
        ShadeSetting::Smooth => ShadeMode::Smooth,
    }
}

/// The world dimension for a configured dimension setting.
pub fn world_dimension(setting: DimensionSetting) -> Dimension {
    match setting {
        DimensionSetting::Overworld => Dimension::Overworld,
        DimensionSetting::Nether => Dimension::Nether,
        DimensionSetting::End => Dimension::End,
    }
}
