//! Biome registry: maps [`BiomeId`] to [`BiomeDef`] with name-based lookup.

use hashbrown::HashMap;

use super::{BiomeDef, VANILLA_BIOMES};

/// Numeric biome identifier as produced by a world model.
///
/// Negative values are reserved; [`BiomeId::UNDEFINED`] marks positions the
/// model could not resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BiomeId(pub i32);

#[allow(missing_docs)]
impl BiomeId {
    /// Sentinel for "no biome here" (void, outside build limits, not initialized).
    pub const UNDEFINED: BiomeId = BiomeId(-1);

    pub const OCEAN: BiomeId = BiomeId(0);
    pub const PLAINS: BiomeId = BiomeId(1);
    pub const DESERT: BiomeId = BiomeId(2);
    pub const WINDSWEPT_HILLS: BiomeId = BiomeId(3);
    pub const FOREST: BiomeId = BiomeId(4);
    pub const TAIGA: BiomeId = BiomeId(5);
    pub const SWAMP: BiomeId = BiomeId(6);
    pub const RIVER: BiomeId = BiomeId(7);
    pub const NETHER_WASTES: BiomeId = BiomeId(8);
    pub const THE_END: BiomeId = BiomeId(9);
    pub const FROZEN_OCEAN: BiomeId = BiomeId(10);
    pub const FROZEN_RIVER: BiomeId = BiomeId(11);
    pub const SNOWY_PLAINS: BiomeId = BiomeId(12);
    pub const MUSHROOM_FIELDS: BiomeId = BiomeId(14);
    pub const BEACH: BiomeId = BiomeId(16);
    pub const JUNGLE: BiomeId = BiomeId(21);
    pub const SPARSE_JUNGLE: BiomeId = BiomeId(23);
    pub const DEEP_OCEAN: BiomeId = BiomeId(24);
    pub const STONY_SHORE: BiomeId = BiomeId(25);
    pub const SNOWY_BEACH: BiomeId = BiomeId(26);
    pub const BIRCH_FOREST: BiomeId = BiomeId(27);
    pub const DARK_FOREST: BiomeId = BiomeId(29);
    pub const SNOWY_TAIGA: BiomeId = BiomeId(30);
    pub const OLD_GROWTH_PINE_TAIGA: BiomeId = BiomeId(32);
    pub const WINDSWEPT_FOREST: BiomeId = BiomeId(34);
    pub const SAVANNA: BiomeId = BiomeId(35);
    pub const SAVANNA_PLATEAU: BiomeId = BiomeId(36);
    pub const BADLANDS: BiomeId = BiomeId(37);
    pub const WOODED_BADLANDS: BiomeId = BiomeId(38);
    pub const SMALL_END_ISLANDS: BiomeId = BiomeId(40);
    pub const END_MIDLANDS: BiomeId = BiomeId(41);
    pub const END_HIGHLANDS: BiomeId = BiomeId(42);
    pub const END_BARRENS: BiomeId = BiomeId(43);
    pub const WARM_OCEAN: BiomeId = BiomeId(44);
    pub const LUKEWARM_OCEAN: BiomeId = BiomeId(45);
    pub const COLD_OCEAN: BiomeId = BiomeId(46);
    pub const DEEP_WARM_OCEAN: BiomeId = BiomeId(47);
    pub const DEEP_LUKEWARM_OCEAN: BiomeId = BiomeId(48);
    pub const DEEP_COLD_OCEAN: BiomeId = BiomeId(49);
    pub const DEEP_FROZEN_OCEAN: BiomeId = BiomeId(50);
    pub const THE_VOID: BiomeId = BiomeId(127);
    pub const SUNFLOWER_PLAINS: BiomeId = BiomeId(129);
    pub const WINDSWEPT_GRAVELLY_HILLS: BiomeId = BiomeId(131);
    pub const FLOWER_FOREST: BiomeId = BiomeId(132);
    pub const ICE_SPIKES: BiomeId = BiomeId(140);
    pub const OLD_GROWTH_BIRCH_FOREST: BiomeId = BiomeId(155);
    pub const OLD_GROWTH_SPRUCE_TAIGA: BiomeId = BiomeId(160);
    pub const WINDSWEPT_SAVANNA: BiomeId = BiomeId(163);
    pub const ERODED_BADLANDS: BiomeId = BiomeId(165);
    pub const BAMBOO_JUNGLE: BiomeId = BiomeId(168);
    pub const SOUL_SAND_VALLEY: BiomeId = BiomeId(170);
    pub const CRIMSON_FOREST: BiomeId = BiomeId(171);
    pub const WARPED_FOREST: BiomeId = BiomeId(172);
    pub const BASALT_DELTAS: BiomeId = BiomeId(173);
    pub const DRIPSTONE_CAVES: BiomeId = BiomeId(174);
    pub const LUSH_CAVES: BiomeId = BiomeId(175);
    pub const MEADOW: BiomeId = BiomeId(177);
    pub const GROVE: BiomeId = BiomeId(178);
    pub const SNOWY_SLOPES: BiomeId = BiomeId(179);
    pub const JAGGED_PEAKS: BiomeId = BiomeId(180);
    pub const FROZEN_PEAKS: BiomeId = BiomeId(181);
    pub const STONY_PEAKS: BiomeId = BiomeId(182);
    pub const DEEP_DARK: BiomeId = BiomeId(183);
    pub const MANGROVE_SWAMP: BiomeId = BiomeId(184);
    pub const CHERRY_GROVE: BiomeId = BiomeId(185);
    pub const PALE_GARDEN: BiomeId = BiomeId(186);
}

impl BiomeId {
    /// Returns `true` unless this is a reserved (negative) id.
    #[inline]
    pub fn is_defined(self) -> bool {
        self.0 >= 0
    }

    /// Index into a 256-entry color table: the low 8 bits of the id.
    ///
    /// Ids outside `0..=255` wrap (the undefined sentinel lands on 255). The
    /// wraparound is part of the palette contract, not an overflow.
    #[inline]
    pub fn palette_index(self) -> usize {
        (self.0 & 0xFF) as usize
    }
}

/// Errors that can occur when registering biomes.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BiomeRegistryError {
    /// A biome with this name is already registered.
    #[error("duplicate biome name: {0}")]
    DuplicateName(String),
    /// A biome with this id is already registered.
    #[error("duplicate biome id: {0}")]
    DuplicateId(i32),
}

/// Stores registered biome definitions with lookup by id and by name.
pub struct BiomeRegistry {
    biomes: Vec<BiomeDef>,
    id_to_index: HashMap<BiomeId, usize>,
    name_to_id: HashMap<&'static str, BiomeId>,
}

impl BiomeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            biomes: Vec::new(),
            id_to_index: HashMap::new(),
            name_to_id: HashMap::new(),
        }
    }

    /// Creates a registry holding every entry of [`VANILLA_BIOMES`].
    pub fn vanilla() -> Self {
        let mut reg = Self::new();
        for def in VANILLA_BIOMES {
            // The table is checked for duplicates by its own tests.
            let _ = reg.register(*def);
        }
        reg
    }

    /// Registers a biome definition.
    ///
    /// # Errors
    ///
    /// Returns [`BiomeRegistryError::DuplicateName`] or
    /// [`BiomeRegistryError::DuplicateId`] if either key is already taken.
    pub fn register(&mut self, def: BiomeDef) -> Result<BiomeId, BiomeRegistryError> {
        if self.name_to_id.contains_key(def.name) {
            return Err(BiomeRegistryError::DuplicateName(def.name.to_string()));
        }
        if self.id_to_index.contains_key(&def.id) {
            return Err(BiomeRegistryError::DuplicateId(def.id.0));
        }
        self.id_to_index.insert(def.id, self.biomes.len());
        self.name_to_id.insert(def.name, def.id);
        self.biomes.push(def);
        Ok(def.id)
    }

    /// Returns the definition for the given biome id, if registered.
    pub fn get(&self, id: BiomeId) -> Option<&BiomeDef> {
        self.id_to_index.get(&id).map(|&i| &self.biomes[i])
    }

    /// Looks up a biome id by name. Accepts an optional `minecraft:` namespace.
    pub fn lookup_by_name(&self, name: &str) -> Option<BiomeId> {
        let bare = name.strip_prefix("minecraft:").unwrap_or(name);
        self.name_to_id.get(bare).copied()
    }

    /// Iterates over registered definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &BiomeDef> {
        self.biomes.iter()
    }

    /// Returns the number of registered biomes.
    pub fn len(&self) -> usize {
        self.biomes.len()
    }

    /// Returns `true` if no biomes are registered.
    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }
}

impl Default for BiomeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
