//! Reference world model built on simplex noise.
//!
//! [`NoiseWorld`] is deterministic for a given `(variant, flags, seed, dimension)`
//! and resolves biomes for all three dimensions. It is coarse by intent: one
//! fBm heightfield, two climate fields and a handful of selector fields.

use noise::{NoiseFn, Simplex};
use tracing::{debug, trace};

use crate::biome::{BiomeId, ClimateSampler, WhittakerDiagram};
use crate::heightmap::{HeightmapParams, HeightmapSampler};
use crate::model::{BUILD_CEILING, BUILD_FLOOR, Dimension, GenFlags, SEA_LEVEL, WorldModel};
use crate::seed::derive_layer_seed;
use crate::variant::Variant;

// Layer indices fed to `derive_layer_seed`.
const LAYER_TERRAIN: u32 = 0;
const LAYER_TEMPERATURE: u32 = 1;
const LAYER_MOISTURE: u32 = 2;
const LAYER_RIVER: u32 = 3;
const LAYER_CAVE: u32 = 4;
const LAYER_FEATURE: u32 = 5;
const LAYER_NETHER_A: u32 = 6;
const LAYER_NETHER_B: u32 = 7;
const LAYER_END: u32 = 8;

const DEEP_OCEAN_DEPTH: i32 = 20;
const SHORE_HEIGHT: i32 = 2;
const SLOPES_HEIGHT: i32 = 118;
const PEAKS_HEIGHT: i32 = 146;
const RIVER_WIDTH: f64 = 0.018;
const RIVER_FREQUENCY: f64 = 1.0 / 700.0;
const CAVE_FREQUENCY: f64 = 1.0 / 96.0;
const FEATURE_FREQUENCY: f64 = 1.0 / 900.0;
/// Cave biomes start this many blocks below the column surface.
const CAVE_DEPTH: i32 = 40;
const END_MAIN_ISLAND_RADIUS: f64 = 1000.0;

struct OverworldLayers {
    terrain: HeightmapSampler,
    climate: ClimateSampler,
    diagram: WhittakerDiagram,
    river: Simplex,
    cave: Simplex,
    feature: Simplex,
}

struct NetherLayers {
    a: Simplex,
    b: Simplex,
}

struct EndLayers {
    islands: Simplex,
}

enum Layers {
    Overworld(OverworldLayers),
    Nether(NetherLayers),
    End(EndLayers),
}

/// Deterministic noise-driven [`WorldModel`].
pub struct NoiseWorld {
    variant: Option<Variant>,
    flags: GenFlags,
    seed: u64,
    layers: Option<Layers>,
}

impl NoiseWorld {
    /// Create an uninitialized world. Every query returns the undefined sentinel
    /// until [`WorldModel::initialize`] and [`WorldModel::set_seed`] are called.
    pub fn new() -> Self {
        Self {
            variant: None,
            flags: GenFlags::default(),
            seed: 0,
            layers: None,
        }
    }

    /// Convenience: an initialized, seeded world.
    pub fn seeded(variant: Variant, flags: GenFlags, seed: u64, dimension: Dimension) -> Self {
        let mut world = Self::new();
        world.initialize(variant, flags);
        world.set_seed(seed, dimension);
        world
    }

    /// The bound seed, if [`WorldModel::set_seed`] took effect.
    pub fn seed(&self) -> Option<u64> {
        self.layers.as_ref().map(|_| self.seed)
    }

    fn build_layers(&self, seed: u64, dimension: Dimension) -> Layers {
        let layer = |index| derive_layer_seed(seed, dimension, index);
        match dimension {
            Dimension::Overworld => {
                let stretch = if self.flags.large_biomes { 4.0 } else { 1.0 };
                Layers::Overworld(OverworldLayers {
                    terrain: HeightmapSampler::new(HeightmapParams {
                        seed: layer(LAYER_TERRAIN),
                        ..Default::default()
                    }),
                    climate: ClimateSampler::new(
                        layer(LAYER_TEMPERATURE),
                        layer(LAYER_MOISTURE),
                        stretch,
                    ),
                    diagram: WhittakerDiagram::overworld(),
                    river: Simplex::new(layer(LAYER_RIVER)),
                    cave: Simplex::new(layer(LAYER_CAVE)),
                    feature: Simplex::new(layer(LAYER_FEATURE)),
                })
            }
            Dimension::Nether => Layers::Nether(NetherLayers {
                a: Simplex::new(layer(LAYER_NETHER_A)),
                b: Simplex::new(layer(LAYER_NETHER_B)),
            }),
            Dimension::End => Layers::End(EndLayers {
                islands: Simplex::new(layer(LAYER_END)),
            }),
        }
    }
}

impl Default for NoiseWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldModel for NoiseWorld {
    fn initialize(&mut self, variant: Variant, flags: GenFlags) {
        debug!(%variant, large_biomes = flags.large_biomes, "initializing noise world");
        self.variant = Some(variant);
        self.flags = flags;
        self.layers = None;
    }

    fn set_seed(&mut self, seed: u64, dimension: Dimension) {
        if self.variant.is_none() {
            trace!("set_seed before initialize ignored");
            return;
        }
        self.seed = seed;
        self.layers = Some(self.build_layers(seed, dimension));
    }

    fn variant(&self) -> Option<Variant> {
        self.variant
    }

    fn biome_at(&self, scale: i32, x: i32, y: i32, z: i32) -> BiomeId {
        let (Some(variant), Some(layers)) = (self.variant, self.layers.as_ref()) else {
            return BiomeId::UNDEFINED;
        };
        let vertical = variant.supports_3d_biomes();
        if vertical && !(BUILD_FLOOR..=BUILD_CEILING).contains(&y) {
            return BiomeId::UNDEFINED;
        }

        // Sample at the center of the scale cell. Heights from
        // `surface_height_at` are read at the cell corner `(x, z)` instead, so
        // at scale > 1 the two come from columns up to `scale / 2` apart.
        let half = scale.max(1) / 2;
        let (cx, cz) = (x.saturating_add(half), z.saturating_add(half));

        match layers {
            Layers::Overworld(ow) => {
                let surface = ow.terrain.height_at(cx, cz);
                if vertical
                    && y < surface - CAVE_DEPTH
                    && let Some(cave) = ow.cave_biome(variant, cx, y, cz)
                {
                    return cave;
                }
                ow.surface_biome(variant, cx, cz, surface)
            }
            Layers::Nether(nether) => nether.biome(cx, cz),
            Layers::End(end) => end.biome(cx, cz),
        }
    }

    /// Terrain height of the exact column `(x, z)`, raised to sea level.
    ///
    /// Unlike [`biome_at`](Self::biome_at) this is not moved to a cell center:
    /// the accessor has no scale to center on.
    fn surface_height_at(&self, x: i32, z: i32) -> Option<i32> {
        let variant = self.variant?;
        match self.layers.as_ref()? {
            Layers::Overworld(ow) if variant.supports_3d_biomes() => {
                Some(ow.terrain.height_at(x, z).max(SEA_LEVEL))
            }
            _ => None,
        }
    }
}

impl OverworldLayers {
    fn surface_biome(&self, variant: Variant, x: i32, z: i32, surface: i32) -> BiomeId {
        let (fx, fz) = (x as f64, z as f64);
        let (temperature, moisture) = self.climate.sample(fx, fz);

        if surface < SEA_LEVEL {
            return ocean_biome(temperature, surface < SEA_LEVEL - DEEP_OCEAN_DEPTH);
        }

        let feature = self
            .feature
            .get([fx * FEATURE_FREQUENCY, fz * FEATURE_FREQUENCY]);

        if surface <= SEA_LEVEL + SHORE_HEIGHT {
            return if temperature < 0.2 {
                BiomeId::SNOWY_BEACH
            } else if variant >= Variant::V1_19 && temperature > 0.6 && moisture > 0.75 {
                BiomeId::MANGROVE_SWAMP
            } else if feature > 0.6 {
                BiomeId::STONY_SHORE
            } else {
                BiomeId::BEACH
            };
        }

        let river = self.river.get([fx * RIVER_FREQUENCY, fz * RIVER_FREQUENCY]);
        if river.abs() < RIVER_WIDTH && surface < SLOPES_HEIGHT {
            return if temperature < 0.2 {
                BiomeId::FROZEN_RIVER
            } else {
                BiomeId::RIVER
            };
        }

        if surface >= PEAKS_HEIGHT {
            return if !variant.supports_3d_biomes() {
                BiomeId::WINDSWEPT_GRAVELLY_HILLS
            } else if temperature < 0.3 {
                BiomeId::FROZEN_PEAKS
            } else if temperature < 0.6 {
                BiomeId::JAGGED_PEAKS
            } else {
                BiomeId::STONY_PEAKS
            };
        }

        if surface >= SLOPES_HEIGHT {
            return if !variant.supports_3d_biomes() {
                if moisture > 0.5 {
                    BiomeId::WINDSWEPT_FOREST
                } else {
                    BiomeId::WINDSWEPT_HILLS
                }
            } else if temperature < 0.3 {
                BiomeId::SNOWY_SLOPES
            } else if moisture > 0.6 {
                BiomeId::GROVE
            } else if variant >= Variant::V1_20 && feature > 0.35 {
                BiomeId::CHERRY_GROVE
            } else {
                BiomeId::MEADOW
            };
        }

        match self.diagram.lookup(temperature, moisture) {
            BiomeId::DARK_FOREST if variant == Variant::V1_21_WD && feature < -0.45 => {
                BiomeId::PALE_GARDEN
            }
            BiomeId::SWAMP if variant >= Variant::V1_19 && temperature > 0.55 => {
                BiomeId::MANGROVE_SWAMP
            }
            BiomeId::BADLANDS if feature > 0.5 => BiomeId::ERODED_BADLANDS,
            BiomeId::BADLANDS if feature < -0.5 => BiomeId::WOODED_BADLANDS,
            biome => biome,
        }
    }

    fn cave_biome(&self, variant: Variant, x: i32, y: i32, z: i32) -> Option<BiomeId> {
        let n = self.cave.get([
            x as f64 * CAVE_FREQUENCY,
            y as f64 * CAVE_FREQUENCY,
            z as f64 * CAVE_FREQUENCY,
        ]);
        if variant >= Variant::V1_19 && y < 0 && n > 0.45 {
            Some(BiomeId::DEEP_DARK)
        } else if n > 0.3 {
            Some(BiomeId::LUSH_CAVES)
        } else if n < -0.4 {
            Some(BiomeId::DRIPSTONE_CAVES)
        } else {
            None
        }
    }
}

impl NetherLayers {
    const FREQUENCY: f64 = 1.0 / 320.0;

    fn biome(&self, x: i32, z: i32) -> BiomeId {
        let p = [x as f64 * Self::FREQUENCY, z as f64 * Self::FREQUENCY];
        let a = self.a.get(p);
        let b = self.b.get(p);
        if a > 0.35 {
            BiomeId::CRIMSON_FOREST
        } else if a < -0.35 {
            BiomeId::WARPED_FOREST
        } else if b > 0.4 {
            BiomeId::SOUL_SAND_VALLEY
        } else if b < -0.4 {
            BiomeId::BASALT_DELTAS
        } else {
            BiomeId::NETHER_WASTES
        }
    }
}

impl EndLayers {
    const FREQUENCY: f64 = 1.0 / 240.0;

    fn biome(&self, x: i32, z: i32) -> BiomeId {
        let (fx, fz) = (x as f64, z as f64);
        if fx * fx + fz * fz < END_MAIN_ISLAND_RADIUS * END_MAIN_ISLAND_RADIUS {
            return BiomeId::THE_END;
        }
        let n = self
            .islands
            .get([fx * Self::FREQUENCY, fz * Self::FREQUENCY]);
        if n > 0.45 {
            BiomeId::END_HIGHLANDS
        } else if n > 0.2 {
            BiomeId::END_MIDLANDS
        } else if n > -0.1 {
            BiomeId::END_BARRENS
        } else {
            BiomeId::SMALL_END_ISLANDS
        }
    }
}

fn ocean_biome(temperature: f64, deep: bool) -> BiomeId {
    match (temperature, deep) {
        (t, false) if t < 0.2 => BiomeId::FROZEN_OCEAN,
        (t, true) if t < 0.2 => BiomeId::DEEP_FROZEN_OCEAN,
        (t, false) if t < 0.4 => BiomeId::COLD_OCEAN,
        (t, true) if t < 0.4 => BiomeId::DEEP_COLD_OCEAN,
        (t, false) if t < 0.6 => BiomeId::OCEAN,
        (t, true) if t < 0.6 => BiomeId::DEEP_OCEAN,
        (t, false) if t < 0.8 => BiomeId::LUKEWARM_OCEAN,
        (t, true) if t < 0.8 => BiomeId::DEEP_LUKEWARM_OCEAN,
        (_, false) => BiomeId::WARM_OCEAN,
        (_, true) => BiomeId::DEEP_WARM_OCEAN,
    }
}
