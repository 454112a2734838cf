//! Biome definition: describes the properties of a single biome type.

use super::BiomeId;

/// Full descriptor for a biome type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BiomeDef {
    /// Numeric id returned by world models.
    pub id: BiomeId,
    /// Canonical biome name without namespace (e.g., "dark_forest").
    pub name: &'static str,
    /// Map color as `[r, g, b]`.
    pub color: [u8; 3],
}

impl BiomeDef {
    /// Build a definition from a `0xRRGGBB` color.
    pub const fn new(id: BiomeId, name: &'static str, rgb: u32) -> Self {
        Self {
            id,
            name,
            color: [(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8],
        }
    }
}
