//! Built-in biome table: numeric ids, canonical names, and map colors.

use super::{BiomeDef, BiomeId};

/// Every biome the reference world can produce, plus the legacy and other
/// dimension biomes a map may encounter.
pub static VANILLA_BIOMES: &[BiomeDef] = &[
    // Oceans
    BiomeDef::new(BiomeId::OCEAN, "ocean", 0x000070),
    BiomeDef::new(BiomeId::DEEP_OCEAN, "deep_ocean", 0x000030),
    BiomeDef::new(BiomeId::FROZEN_OCEAN, "frozen_ocean", 0x7070D6),
    BiomeDef::new(BiomeId::DEEP_FROZEN_OCEAN, "deep_frozen_ocean", 0x404090),
    BiomeDef::new(BiomeId::COLD_OCEAN, "cold_ocean", 0x202070),
    BiomeDef::new(BiomeId::DEEP_COLD_OCEAN, "deep_cold_ocean", 0x202038),
    BiomeDef::new(BiomeId::LUKEWARM_OCEAN, "lukewarm_ocean", 0x000090),
    BiomeDef::new(BiomeId::DEEP_LUKEWARM_OCEAN, "deep_lukewarm_ocean", 0x000040),
    BiomeDef::new(BiomeId::WARM_OCEAN, "warm_ocean", 0x0000AC),
    BiomeDef::new(BiomeId::DEEP_WARM_OCEAN, "deep_warm_ocean", 0x000050),
    // Rivers and wetlands
    BiomeDef::new(BiomeId::RIVER, "river", 0x0000FF),
    BiomeDef::new(BiomeId::FROZEN_RIVER, "frozen_river", 0xA0A0FF),
    BiomeDef::new(BiomeId::SWAMP, "swamp", 0x07F9B2),
    BiomeDef::new(BiomeId::MANGROVE_SWAMP, "mangrove_swamp", 0x2CCC8E),
    // Snow
    BiomeDef::new(BiomeId::SNOWY_PLAINS, "snowy_plains", 0xFFFFFF),
    BiomeDef::new(BiomeId::ICE_SPIKES, "ice_spikes", 0xB4DCDC),
    BiomeDef::new(BiomeId::SNOWY_TAIGA, "snowy_taiga", 0x31554A),
    BiomeDef::new(BiomeId::SNOWY_SLOPES, "snowy_slopes", 0xC4C4C4),
    BiomeDef::new(BiomeId::SNOWY_BEACH, "snowy_beach", 0xFAF0C0),
    BiomeDef::new(BiomeId::FROZEN_PEAKS, "frozen_peaks", 0xB0B3CE),
    // Temperate
    BiomeDef::new(BiomeId::PLAINS, "plains", 0x8DB360),
    BiomeDef::new(BiomeId::SUNFLOWER_PLAINS, "sunflower_plains", 0xB5DB88),
    BiomeDef::new(BiomeId::MEADOW, "meadow", 0x60A445),
    BiomeDef::new(BiomeId::FOREST, "forest", 0x056621),
    BiomeDef::new(BiomeId::FLOWER_FOREST, "flower_forest", 0x2D8E49),
    BiomeDef::new(BiomeId::BIRCH_FOREST, "birch_forest", 0x307444),
    BiomeDef::new(BiomeId::OLD_GROWTH_BIRCH_FOREST, "old_growth_birch_forest", 0x589C6C),
    BiomeDef::new(BiomeId::DARK_FOREST, "dark_forest", 0x40511A),
    BiomeDef::new(BiomeId::WINDSWEPT_FOREST, "windswept_forest", 0x5B7352),
    BiomeDef::new(BiomeId::CHERRY_GROVE, "cherry_grove", 0xFF9420),
    BiomeDef::new(BiomeId::PALE_GARDEN, "pale_garden", 0x696D95),
    // Boreal
    BiomeDef::new(BiomeId::TAIGA, "taiga", 0x0B6A5F),
    BiomeDef::new(BiomeId::OLD_GROWTH_SPRUCE_TAIGA, "old_growth_spruce_taiga", 0x818E79),
    BiomeDef::new(BiomeId::OLD_GROWTH_PINE_TAIGA, "old_growth_pine_taiga", 0x596651),
    BiomeDef::new(BiomeId::GROVE, "grove", 0x47726C),
    // Warm
    BiomeDef::new(BiomeId::SAVANNA, "savanna", 0xBDB25F),
    BiomeDef::new(BiomeId::SAVANNA_PLATEAU, "savanna_plateau", 0xA79D64),
    BiomeDef::new(BiomeId::WINDSWEPT_SAVANNA, "windswept_savanna", 0xE5DA87),
    BiomeDef::new(BiomeId::JUNGLE, "jungle", 0x507B0A),
    BiomeDef::new(BiomeId::SPARSE_JUNGLE, "sparse_jungle", 0x60930F),
    BiomeDef::new(BiomeId::BAMBOO_JUNGLE, "bamboo_jungle", 0x849500),
    BiomeDef::new(BiomeId::DESERT, "desert", 0xFA9418),
    BiomeDef::new(BiomeId::BADLANDS, "badlands", 0xD94515),
    BiomeDef::new(BiomeId::ERODED_BADLANDS, "eroded_badlands", 0xFF6D3D),
    BiomeDef::new(BiomeId::WOODED_BADLANDS, "wooded_badlands", 0xCA8C65),
    // Shores and mountains
    BiomeDef::new(BiomeId::BEACH, "beach", 0xFADE55),
    BiomeDef::new(BiomeId::STONY_SHORE, "stony_shore", 0xA2A284),
    BiomeDef::new(BiomeId::WINDSWEPT_HILLS, "windswept_hills", 0x606060),
    BiomeDef::new(BiomeId::WINDSWEPT_GRAVELLY_HILLS, "windswept_gravelly_hills", 0x888888),
    BiomeDef::new(BiomeId::JAGGED_PEAKS, "jagged_peaks", 0xDCDCC8),
    BiomeDef::new(BiomeId::STONY_PEAKS, "stony_peaks", 0x7B8F74),
    // Special and underground
    BiomeDef::new(BiomeId::MUSHROOM_FIELDS, "mushroom_fields", 0xFF00FF),
    BiomeDef::new(BiomeId::DEEP_DARK, "deep_dark", 0x031F29),
    BiomeDef::new(BiomeId::LUSH_CAVES, "lush_caves", 0x283C00),
    BiomeDef::new(BiomeId::DRIPSTONE_CAVES, "dripstone_caves", 0x4E3012),
    // Nether
    BiomeDef::new(BiomeId::NETHER_WASTES, "nether_wastes", 0x572526),
    BiomeDef::new(BiomeId::SOUL_SAND_VALLEY, "soul_sand_valley", 0x4D3A2E),
    BiomeDef::new(BiomeId::CRIMSON_FOREST, "crimson_forest", 0x981A11),
    BiomeDef::new(BiomeId::WARPED_FOREST, "warped_forest", 0x49907B),
    BiomeDef::new(BiomeId::BASALT_DELTAS, "basalt_deltas", 0x645F63),
    // End
    BiomeDef::new(BiomeId::THE_END, "the_end", 0x8080FF),
    BiomeDef::new(BiomeId::SMALL_END_ISLANDS, "small_end_islands", 0x4B4BAB),
    BiomeDef::new(BiomeId::END_MIDLANDS, "end_midlands", 0xC9C959),
    BiomeDef::new(BiomeId::END_HIGHLANDS, "end_highlands", 0xB5B536),
    BiomeDef::new(BiomeId::END_BARRENS, "end_barrens", 0x7070CC),
    BiomeDef::new(BiomeId::THE_VOID, "the_void", 0x000000),
];

/// Canonical name of a biome id, or `None` for ids absent from the table.
pub fn biome_name(id: BiomeId) -> Option<&'static str> {
    VANILLA_BIOMES.iter().find(|def| def.id == id).map(|def| def.name)
}
