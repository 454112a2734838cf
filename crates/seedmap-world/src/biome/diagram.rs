//! Whittaker diagram: maps (temperature, moisture) pairs to biome ids.

use super::BiomeId;

/// A rectangular region in temperature–moisture space mapped to a biome.
#[derive(Clone, Debug)]
pub struct WhittakerRegion {
    /// Minimum temperature (inclusive), in `[0.0, 1.0]`.
    pub temp_min: f64,
    /// Maximum temperature (exclusive), in `[0.0, 1.0]`.
    pub temp_max: f64,
    /// Minimum moisture (inclusive), in `[0.0, 1.0]`.
    pub moisture_min: f64,
    /// Maximum moisture (exclusive), in `[0.0, 1.0]`.
    pub moisture_max: f64,
    /// Biome assigned to points within this region.
    pub biome_id: BiomeId,
}

impl WhittakerRegion {
    const fn new(temp: (f64, f64), moisture: (f64, f64), biome_id: BiomeId) -> Self {
        Self {
            temp_min: temp.0,
            temp_max: temp.1,
            moisture_min: moisture.0,
            moisture_max: moisture.1,
            biome_id,
        }
    }

    fn contains(&self, temperature: f64, moisture: f64) -> bool {
        temperature >= self.temp_min
            && temperature < self.temp_max
            && moisture >= self.moisture_min
            && moisture < self.moisture_max
    }
}

/// A Whittaker-style 2D lookup diagram that assigns land biomes based on
/// temperature and moisture values.
#[derive(Clone, Debug)]
pub struct WhittakerDiagram {
    /// Ordered list of regions; first match wins.
    pub regions: Vec<WhittakerRegion>,
    /// Fallback biome if no region matches.
    pub fallback: BiomeId,
}

impl WhittakerDiagram {
    /// The land diagram used by the reference overworld.
    ///
    /// Five temperature bands by three to four moisture bands.
    pub fn overworld() -> Self {
        const FROZEN: (f64, f64) = (0.0, 0.2);
        const COLD: (f64, f64) = (0.2, 0.4);
        const TEMPERATE: (f64, f64) = (0.4, 0.6);
        const WARM: (f64, f64) = (0.6, 0.8);
        const HOT: (f64, f64) = (0.8, 1.01);

        let regions = vec![
            WhittakerRegion::new(FROZEN, (0.0, 0.4), BiomeId::SNOWY_PLAINS),
            WhittakerRegion::new(FROZEN, (0.4, 0.6), BiomeId::ICE_SPIKES),
            WhittakerRegion::new(FROZEN, (0.6, 1.01), BiomeId::SNOWY_TAIGA),
            WhittakerRegion::new(COLD, (0.0, 0.3), BiomeId::PLAINS),
            WhittakerRegion::new(COLD, (0.3, 0.6), BiomeId::TAIGA),
            WhittakerRegion::new(COLD, (0.6, 0.8), BiomeId::OLD_GROWTH_SPRUCE_TAIGA),
            WhittakerRegion::new(COLD, (0.8, 1.01), BiomeId::OLD_GROWTH_PINE_TAIGA),
            WhittakerRegion::new(TEMPERATE, (0.0, 0.2), BiomeId::PLAINS),
            WhittakerRegion::new(TEMPERATE, (0.2, 0.35), BiomeId::SUNFLOWER_PLAINS),
            WhittakerRegion::new(TEMPERATE, (0.35, 0.55), BiomeId::FOREST),
            WhittakerRegion::new(TEMPERATE, (0.55, 0.7), BiomeId::BIRCH_FOREST),
            WhittakerRegion::new(TEMPERATE, (0.7, 0.85), BiomeId::DARK_FOREST),
            WhittakerRegion::new(TEMPERATE, (0.85, 1.01), BiomeId::SWAMP),
            WhittakerRegion::new(WARM, (0.0, 0.25), BiomeId::SAVANNA),
            WhittakerRegion::new(WARM, (0.25, 0.5), BiomeId::PLAINS),
            WhittakerRegion::new(WARM, (0.5, 0.7), BiomeId::FLOWER_FOREST),
            WhittakerRegion::new(WARM, (0.7, 0.85), BiomeId::SPARSE_JUNGLE),
            WhittakerRegion::new(WARM, (0.85, 1.01), BiomeId::JUNGLE),
            WhittakerRegion::new(HOT, (0.0, 0.35), BiomeId::DESERT),
            WhittakerRegion::new(HOT, (0.35, 0.55), BiomeId::BADLANDS),
            WhittakerRegion::new(HOT, (0.55, 0.75), BiomeId::SAVANNA_PLATEAU),
            WhittakerRegion::new(HOT, (0.75, 1.01), BiomeId::BAMBOO_JUNGLE),
        ];

        Self {
            regions,
            fallback: BiomeId::PLAINS,
        }
    }

    /// Looks up the biome for a given temperature and moisture, both in `[0.0, 1.0]`.
    pub fn lookup(&self, temperature: f64, moisture: f64) -> BiomeId {
        self.regions
            .iter()
            .find(|region| region.contains(temperature, moisture))
            .map_or(self.fallback, |region| region.biome_id)
    }
}
