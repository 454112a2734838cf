//! World model contract for map rendering: generation variants, biome identifiers,
//! the biome table, and a deterministic noise-driven reference world.

mod heightmap;
mod model;
mod noise_world;
mod seed;
mod variant;

pub mod biome;

pub use biome::{
    BiomeDef, BiomeId, BiomeRegistry, BiomeRegistryError, WhittakerDiagram, WhittakerRegion,
    biome_name,
};
pub use heightmap::{HeightmapParams, HeightmapSampler};
pub use model::{
    BUILD_CEILING, BUILD_FLOOR, Dimension, GenFlags, REFERENCE_SURFACE_HEIGHT, SEA_LEVEL,
    WorldModel,
};
pub use noise_world::NoiseWorld;
pub use seed::{derive_layer_seed, seed_from_parts, split_seed};
pub use variant::{Variant, VersionParseError};
