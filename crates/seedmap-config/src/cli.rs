//! Command-line argument parsing for seedmap.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, DimensionSetting, ShadeSetting};

/// seedmap command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "seedmap", about = "Render a hillshaded biome map of a world seed")]
pub struct CliArgs {
    /// World seed.
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Game version, e.g. 1.20.4.
    #[arg(long = "mc-version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Large-biomes world type.
    #[arg(long)]
    pub large_biomes: Option<bool>,

    /// Dimension to render.
    #[arg(long, value_enum)]
    pub dimension: Option<DimensionSetting>,

    /// World x of the left edge.
    #[arg(long, allow_negative_numbers = true)]
    pub x: Option<i32>,

    /// World z of the top edge.
    #[arg(long, allow_negative_numbers = true)]
    pub z: Option<i32>,

    /// Image width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Blocks per pixel.
    #[arg(long)]
    pub scale: Option<i32>,

    /// Lighting mode.
    #[arg(long, value_enum)]
    pub shade: Option<ShadeSetting>,

    /// Y level of biome queries.
    #[arg(long, allow_negative_numbers = true)]
    pub y_level: Option<i32>,

    /// Output PNG path.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print the biome at one position instead of rendering.
    #[arg(
        long,
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        allow_negative_numbers = true
    )]
    pub lookup: Option<Vec<i32>>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// The `--lookup` position as `(x, y, z)`.
    pub fn lookup_position(&self) -> Option<(i32, i32, i32)> {
        match self.lookup.as_deref() {
            Some(&[x, y, z]) => Some((x, y, z)),
            _ => None,
        }
    }
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.world.seed = seed;
        }
        if let Some(ref version) = args.version {
            self.world.version = version.clone();
        }
        if let Some(large) = args.large_biomes {
            self.world.large_biomes = large;
        }
        if let Some(dimension) = args.dimension {
            self.world.dimension = dimension;
        }
        if let Some(x) = args.x {
            self.view.x = x;
        }
        if let Some(z) = args.z {
            self.view.z = z;
        }
        if let Some(w) = args.width {
            self.view.width = w;
        }
        if let Some(h) = args.height {
            self.view.height = h;
        }
        if let Some(scale) = args.scale {
            self.view.scale = scale;
        }
        if let Some(shade) = args.shade {
            self.view.shade = shade;
        }
        if let Some(y) = args.y_level {
            self.view.y_level = y;
        }
        if let Some(ref path) = args.output {
            self.output.path = path.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
