//! The contract every world generator exposes to the map renderer.

use crate::Variant;
use crate::biome::BiomeId;

/// Highest y-level a surface probe starts from.
pub const BUILD_CEILING: i32 = 319;

/// Lowest y-level a surface probe may reach.
pub const BUILD_FLOOR: i32 = -64;

/// Water surface height used by generators with oceans.
pub const SEA_LEVEL: i32 = 63;

/// Height reported for variants that cannot resolve biomes vertically.
pub const REFERENCE_SURFACE_HEIGHT: i32 = 64;

/// World dimension a seed is applied to. Discriminants are the wire ids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// The surface world.
    #[default]
    Overworld,
    /// The underworld. Has no meaningful surface for relief shading.
    Nether,
    /// Floating islands around a central island.
    End,
}

impl Dimension {
    /// Resolve a wire id (`0`, `-1`, `1`).
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            0 => Some(Self::Overworld),
            -1 => Some(Self::Nether),
            1 => Some(Self::End),
            _ => None,
        }
    }

    /// The wire id of this dimension.
    pub fn id(self) -> i32 {
        match self {
            Self::Overworld => 0,
            Self::Nether => -1,
            Self::End => 1,
        }
    }

    /// Returns `true` if relief shading is meaningful in this dimension.
    pub fn has_surface(self) -> bool {
        !matches!(self, Self::Nether)
    }
}

/// Region-wide generation flags passed to [`WorldModel::initialize`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenFlags {
    /// Stretch climate features four times wider.
    pub large_biomes: bool,
}

/// Deterministic biome generator keyed by seed and generation variant.
///
/// Call order is `initialize`, then `set_seed`, then any number of queries.
/// Queries made before both setup calls return [`BiomeId::UNDEFINED`].
/// Re-initializing or re-seeding invalidates every previously returned value.
pub trait WorldModel {
    /// Select the generation rules and region flags.
    fn initialize(&mut self, variant: Variant, flags: GenFlags);

    /// Bind the 64-bit world seed and dimension.
    fn set_seed(&mut self, seed: u64, dimension: Dimension);

    /// The active variant, or `None` before [`WorldModel::initialize`].
    fn variant(&self) -> Option<Variant>;

    /// Biome at a world position sampled at `scale` blocks per cell.
    ///
    /// Returns [`BiomeId::UNDEFINED`] where the model cannot resolve the position.
    fn biome_at(&self, scale: i32, x: i32, y: i32, z: i32) -> BiomeId;

    /// Direct surface height accessor for the active variant, if the model has one.
    fn surface_height_at(&self, _x: i32, _z: i32) -> Option<i32> {
        None
    }
}

impl<W: WorldModel + ?Sized> WorldModel for &mut W {
    fn initialize(&mut self, variant: Variant, flags: GenFlags) {
        (**self).initialize(variant, flags);
    }

    fn set_seed(&mut self, seed: u64, dimension: Dimension) {
        (**self).set_seed(seed, dimension);
    }

    fn variant(&self) -> Option<Variant> {
        (**self).variant()
    }

    fn biome_at(&self, scale: i32, x: i32, y: i32, z: i32) -> BiomeId {
        (**self).biome_at(scale, x, y, z)
    }

    fn surface_height_at(&self, x: i32, z: i32) -> Option<i32> {
        (**self).surface_height_at(x, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_ids_roundtrip() {
        for dim in [Dimension::Overworld, Dimension::Nether, Dimension::End] {
            assert_eq!(Dimension::from_id(dim.id()), Some(dim));
        }
        assert_eq!(Dimension::from_id(2), None);
    }

    #[test]
    fn test_only_nether_lacks_surface() {
        assert!(Dimension::Overworld.has_surface());
        assert!(Dimension::End.has_surface());
        assert!(!Dimension::Nether.has_surface());
    }

    #[test]
    fn test_probe_range_spans_build_limits() {
        assert!(BUILD_CEILING > SEA_LEVEL);
        assert!(BUILD_FLOOR < 0);
        assert!(REFERENCE_SURFACE_HEIGHT > SEA_LEVEL);
    }
}
