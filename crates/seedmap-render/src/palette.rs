//! Biome color palette: 256 RGB entries indexed by the low byte of a biome id.

use seedmap_world::biome::VANILLA_BIOMES;
use seedmap_world::{BiomeId, BiomeRegistry};

/// Color used for palette slots no biome claims.
pub const DEFAULT_COLOR: [u8; 3] = [128, 128, 128];

/// A fixed 256-entry RGB lookup table.
///
/// Any biome id maps to exactly one entry via [`BiomeId::palette_index`], so
/// the undefined sentinel `-1` reads slot 255.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BiomePalette {
    colors: [[u8; 3]; 256],
}

impl BiomePalette {
    /// A palette with every slot set to `color`.
    pub fn filled(color: [u8; 3]) -> Self {
        Self {
            colors: [color; 256],
        }
    }

    /// The built-in biome colors over a gray background.
    pub fn vanilla() -> Self {
        let mut palette = Self::filled(DEFAULT_COLOR);
        for def in VANILLA_BIOMES {
            palette.set(def.id, def.color);
        }
        palette
    }

    /// Builds a palette from the colors of every biome in `registry`.
    pub fn from_registry(registry: &BiomeRegistry) -> Self {
        let mut palette = Self::filled(DEFAULT_COLOR);
        for def in registry.iter() {
            palette.set(def.id, def.color);
        }
        palette
    }

    /// Overrides the slot addressed by `id`.
    pub fn set(&mut self, id: BiomeId, color: [u8; 3]) {
        self.colors[id.palette_index()] = color;
    }

    /// The color for `id`. Never fails: ids outside `0..256` wrap to their low byte.
    #[inline]
    pub fn color(&self, id: BiomeId) -> [u8; 3] {
        self.colors[id.palette_index()]
    }
}

impl Default for BiomePalette {
    fn default() -> Self {
        Self::vanilla()
    }
}
