//! Biome system: identifiers, the built-in biome table, registry, Whittaker
//! diagram lookup, and noise-based climate sampling.

mod def;
mod diagram;
mod registry;
mod sampler;
mod table;

pub use def::BiomeDef;
pub use diagram::{WhittakerDiagram, WhittakerRegion};
pub use registry::{BiomeId, BiomeRegistry, BiomeRegistryError};
pub use sampler::ClimateSampler;
pub use table::{VANILLA_BIOMES, biome_name};
