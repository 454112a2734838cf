//! Grid sampling: biome ids and surface heights over a padded map area.
//!
//! The padded grid holds one extra column and row on every side so that each
//! visible pixel has all four neighbors available for hillshading.

use seedmap_world::{BUILD_CEILING, BUILD_FLOOR, BiomeId, REFERENCE_SURFACE_HEIGHT, WorldModel};
use tracing::trace;

use crate::RenderError;
use crate::hillshade::{HEIGHT_CELL, HeightField};

/// Vertical step of the surface probe, in blocks.
pub const PROBE_STEP: usize = 4;

/// The rectangle of world columns a render covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleArea {
    /// World x of the first visible column.
    pub x: i32,
    /// World z of the first visible row.
    pub z: i32,
    /// Visible columns.
    pub width: u32,
    /// Visible rows.
    pub height: u32,
    /// Blocks per pixel. Must be positive.
    pub scale: i32,
    /// Y level passed to every biome query.
    pub y_level: i32,
}

impl SampleArea {
    /// World x of padded column `i` (column 0 is one step west of `x`).
    #[inline]
    fn padded_x(&self, i: usize) -> i32 {
        padded_coord(self.x, self.scale, i)
    }

    /// World z of padded row `j`.
    #[inline]
    fn padded_z(&self, j: usize) -> i32 {
        padded_coord(self.z, self.scale, j)
    }

    /// World `(x, z)` of visible pixel `(px, py)`, without wrapping.
    pub fn column(&self, px: usize, py: usize) -> (f64, f64) {
        let step = f64::from(self.scale);
        (
            f64::from(self.x) + px as f64 * step,
            f64::from(self.z) + py as f64 * step,
        )
    }

    fn too_large(&self) -> RenderError {
        RenderError::TooLarge {
            width: self.width,
            height: self.height,
        }
    }
}

/// An empty vector with room for exactly `cells` values.
fn reserve_cells<T>(cells: usize) -> Result<Vec<T>, RenderError> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(cells)
        .map_err(|source| RenderError::Allocation {
            bytes: cells.saturating_mul(std::mem::size_of::<T>()),
            source,
        })?;
    Ok(values)
}

#[inline]
fn padded_coord(origin: i32, scale: i32, index: usize) -> i32 {
    origin
        .wrapping_sub(scale)
        .wrapping_add((index as i32).wrapping_mul(scale))
}

/// Biome ids, and optionally surface heights, over a `(width + 2) x (height + 2)`
/// grid stored row-major.
#[derive(Clone, Debug)]
pub struct PaddedGrid {
    area: SampleArea,
    width: usize,
    height: usize,
    biomes: Vec<BiomeId>,
    heights: Option<Vec<i32>>,
    field: Option<HeightField>,
}

impl PaddedGrid {
    /// Padded width (visible width + 2).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Padded height (visible height + 2).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Biome at padded cell `(i, j)`.
    #[inline]
    pub fn biome(&self, i: usize, j: usize) -> BiomeId {
        self.biomes[j * self.width + i]
    }

    /// Surface height at padded cell `(i, j)`, if heights were sampled.
    #[inline]
    pub fn surface(&self, i: usize, j: usize) -> Option<i32> {
        self.heights.as_ref().map(|h| h[j * self.width + i])
    }

    /// Whether heights were sampled.
    pub fn has_heights(&self) -> bool {
        self.heights.is_some()
    }

    /// The area this grid covers.
    pub fn area(&self) -> &SampleArea {
        &self.area
    }

    /// Attaches the height field used by smooth shading.
    pub fn attach_field(&mut self, field: HeightField) {
        self.field = Some(field);
    }

    pub fn field(&self) -> Option<&HeightField> {
        self.field.as_ref()
    }
}

/// Samples a [`WorldModel`] over a [`SampleArea`].
pub struct SurfaceSampler<'w, W: WorldModel + ?Sized> {
    world: &'w W,
}

impl<'w, W: WorldModel + ?Sized> SurfaceSampler<'w, W> {
    /// Wraps a configured world model.
    pub fn new(world: &'w W) -> Self {
        Self { world }
    }

    /// Fills a padded grid. Biomes are queried at the area's scale and y level;
    /// heights are only computed when `with_heights` is set.
    ///
    /// # Errors
    ///
    /// [`RenderError::TooLarge`] if the padded cell count overflows, or
    /// [`RenderError::Allocation`] if the grid cannot be allocated.
    pub fn sample(&self, area: &SampleArea, with_heights: bool) -> Result<PaddedGrid, RenderError> {
        let width = (area.width as usize)
            .checked_add(2)
            .ok_or_else(|| area.too_large())?;
        let height = (area.height as usize)
            .checked_add(2)
            .ok_or_else(|| area.too_large())?;
        let cells = width.checked_mul(height).ok_or_else(|| area.too_large())?;

        let mut biomes = reserve_cells(cells)?;
        let mut heights = if with_heights {
            Some(reserve_cells(cells)?)
        } else {
            None
        };

        for j in 0..height {
            let wz = area.padded_z(j);
            for i in 0..width {
                let wx = area.padded_x(i);
                biomes.push(self.world.biome_at(area.scale, wx, area.y_level, wz));
                if let Some(heights) = heights.as_mut() {
                    heights.push(surface_height(self.world, wx, wz));
                }
            }
        }

        trace!(width, height, with_heights, "sampled padded grid");

        Ok(PaddedGrid {
            area: *area,
            width,
            height,
            biomes,
            heights,
            field: None,
        })
    }

    /// Surface heights on a lattice covering the area plus half a pixel on
    /// every side, for smooth shading.
    ///
    /// Nodes are `max(scale, HEIGHT_CELL)` blocks apart and aligned to
    /// multiples of that spacing.
    ///
    /// # Errors
    ///
    /// As for [`sample`](Self::sample).
    pub fn height_field(&self, area: &SampleArea) -> Result<HeightField, RenderError> {
        let cell = area.scale.max(HEIGHT_CELL);
        let step = i64::from(cell);
        let scale = i64::from(area.scale);

        let origin_x = (i64::from(area.x) - scale).div_euclid(step) * step;
        let origin_z = (i64::from(area.z) - scale).div_euclid(step) * step;
        let end_x = i64::from(area.x) + i64::from(area.width) * scale;
        let end_z = i64::from(area.z) + i64::from(area.height) * scale;

        let nodes = |origin: i64, end: i64| {
            usize::try_from((end - origin).div_euclid(step) + 2).map_err(|_| area.too_large())
        };
        let width = nodes(origin_x, end_x)?;
        let height = nodes(origin_z, end_z)?;
        let cells = width.checked_mul(height).ok_or_else(|| area.too_large())?;

        let mut values = reserve_cells(cells)?;
        for j in 0..height {
            let wz = (origin_z + j as i64 * step) as i32;
            for i in 0..width {
                let wx = (origin_x + i as i64 * step) as i32;
                values.push(surface_height(self.world, wx, wz) as f32);
            }
        }

        trace!(width, height, cell, "sampled height field");
        HeightField::new(origin_x, origin_z, cell, width, height, values)
    }
}

/// Surface height of the column at `(x, z)`.
///
/// Uses the model's own height when it has one. Otherwise 3D-biome variants
/// are probed from the build ceiling down, and older variants report
/// [`REFERENCE_SURFACE_HEIGHT`].
pub fn surface_height<W: WorldModel + ?Sized>(world: &W, x: i32, z: i32) -> i32 {
    if let Some(height) = world.surface_height_at(x, z) {
        return height;
    }
    match world.variant() {
        Some(variant) if variant.supports_3d_biomes() => probe_surface_height(world, x, z),
        _ => REFERENCE_SURFACE_HEIGHT,
    }
}

/// Steps from [`BUILD_CEILING`] down by [`PROBE_STEP`] while at or above
/// [`BUILD_FLOOR`] and returns the first y with a defined biome at scale 1.
///
/// Returns [`BUILD_CEILING`] when every probe is undefined.
pub fn probe_surface_height<W: WorldModel + ?Sized>(world: &W, x: i32, z: i32) -> i32 {
    (BUILD_FLOOR..=BUILD_CEILING)
        .rev()
        .step_by(PROBE_STEP)
        .find(|&y| world.biome_at(1, x, y, z).is_defined())
        .unwrap_or(BUILD_CEILING)
}

/// Biome ids over the visible area only, row-major, without padding.
///
/// # Errors
///
/// [`RenderError::TooLarge`] or [`RenderError::Allocation`] when the area
/// cannot be held in memory.
pub fn sample_region<W: WorldModel + ?Sized>(
    world: &W,
    area: &SampleArea,
) -> Result<Vec<BiomeId>, RenderError> {
    let cells = (area.width as usize)
        .checked_mul(area.height as usize)
        .ok_or_else(|| area.too_large())?;
    let mut ids = reserve_cells(cells)?;
    for j in 0..area.height as usize {
        let wz = area.padded_z(j + 1);
        for i in 0..area.width as usize {
            ids.push(world.biome_at(area.scale, area.padded_x(i + 1), area.y_level, wz));
        }
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use seedmap_world::{Dimension, GenFlags, Variant};

    use super::*;

    /// Records every query; biome id encodes the queried x.
    struct Recorder {
        variant: Variant,
        queries: RefCell<Vec<(i32, i32, i32, i32)>>,
    }

    impl Recorder {
        fn new(variant: Variant) -> Self {
            Self {
                variant,
                queries: RefCell::new(Vec::new()),
            }
        }
    }

    impl WorldModel for Recorder {
        fn initialize(&mut self, variant: Variant, _flags: GenFlags) {
            self.variant = variant;
        }

        fn set_seed(&mut self, _seed: u64, _dimension: Dimension) {}

        fn variant(&self) -> Option<Variant> {
            Some(self.variant)
        }

        fn biome_at(&self, scale: i32, x: i32, y: i32, z: i32) -> BiomeId {
            self.queries.borrow_mut().push((scale, x, y, z));
            BiomeId(x)
        }
    }

    /// Defined only at or below a fixed y.
    struct Ceiling(i32);

    impl WorldModel for Ceiling {
        fn initialize(&mut self, _variant: Variant, _flags: GenFlags) {}
        fn set_seed(&mut self, _seed: u64, _dimension: Dimension) {}
        fn variant(&self) -> Option<Variant> {
            Some(Variant::V1_20)
        }
        fn biome_at(&self, _scale: i32, _x: i32, y: i32, _z: i32) -> BiomeId {
            if y <= self.0 {
                BiomeId::PLAINS
            } else {
                BiomeId::UNDEFINED
            }
        }
    }

    fn area(x: i32, z: i32, width: u32, height: u32, scale: i32) -> SampleArea {
        SampleArea {
            x,
            z,
            width,
            height,
            scale,
            y_level: 64,
        }
    }

    #[test]
    fn test_padded_grid_coordinates() {
        let world = Recorder::new(Variant::V1_16);
        let grid = SurfaceSampler::new(&world).sample(&area(100, -20, 3, 2, 4), false).unwrap();

        assert_eq!((grid.width(), grid.height()), (5, 4));
        assert!(!grid.has_heights());
        // Column 0 sits one step west of the origin.
        assert_eq!(grid.biome(0, 0), BiomeId(96));
        assert_eq!(grid.biome(1, 0), BiomeId(100));
        assert_eq!(grid.biome(4, 3), BiomeId(112));

        let queries = world.queries.borrow();
        assert_eq!(queries.len(), 20);
        assert_eq!(queries[0], (4, 96, 64, -24));
        assert_eq!(queries[19], (4, 112, 64, -12));
    }

    #[test]
    fn test_probe_finds_highest_defined_step() {
        // 319 - 4k <= 100 first holds at k = 55, y = 99.
        assert_eq!(probe_surface_height(&Ceiling(100), 0, 0), 99);
        assert_eq!(probe_surface_height(&Ceiling(319), 0, 0), 319);
        assert_eq!(probe_surface_height(&Ceiling(-61), 0, 0), -61);
    }

    #[test]
    fn test_probe_defaults_to_ceiling() {
        assert_eq!(probe_surface_height(&Ceiling(-62), 0, 0), BUILD_CEILING);
        assert_eq!(probe_surface_height(&Ceiling(i32::MIN), 0, 0), BUILD_CEILING);
    }

    #[test]
    fn test_legacy_variants_use_reference_height() {
        let world = Recorder::new(Variant::V1_17);
        assert_eq!(surface_height(&world, 5, 5), REFERENCE_SURFACE_HEIGHT);
        assert!(world.queries.borrow().is_empty());
    }

    #[test]
    fn test_heights_sampled_on_request() {
        let world = Ceiling(100);
        let grid = SurfaceSampler::new(&world).sample(&area(0, 0, 2, 2, 1), true).unwrap();
        assert!(grid.has_heights());
        for j in 0..grid.height() {
            for i in 0..grid.width() {
                assert_eq!(grid.surface(i, j), Some(99));
            }
        }
    }

    #[test]
    fn test_sample_region_skips_padding() {
        let world = Recorder::new(Variant::V1_18);
        let ids = sample_region(&world, &area(10, 0, 3, 2, 2)).unwrap();
        assert_eq!(
            ids,
            vec![
                BiomeId(10),
                BiomeId(12),
                BiomeId(14),
                BiomeId(10),
                BiomeId(12),
                BiomeId(14)
            ]
        );
    }

    #[test]
    fn test_oversized_grid_is_an_error() {
        let world = Ceiling(100);
        let huge = area(0, 0, u32::MAX, u32::MAX, 1);
        assert!(matches!(
            SurfaceSampler::new(&world).sample(&huge, false),
            Err(RenderError::TooLarge { .. } | RenderError::Allocation { .. })
        ));
        let wide = area(0, 0, i32::MAX as u32, i32::MAX as u32, 1);
        assert!(matches!(
            SurfaceSampler::new(&world).sample(&wide, true),
            Err(RenderError::Allocation { .. })
        ));
        assert!(sample_region(&world, &wide).is_err());
    }

    #[test]
    fn test_height_field_covers_area() {
        let world = Ceiling(100);
        let sampler = SurfaceSampler::new(&world);

        let field = sampler.height_field(&area(-6, 10, 5, 3, 2)).unwrap();
        assert_eq!(field.cell(), HEIGHT_CELL);
        // x nodes -8..=4 plus one past the end; z nodes 8..=16 plus one.
        assert_eq!(field.dimensions(), (5, 4));
        assert_eq!(field.node(0, 0), 99.0);
        assert_eq!(field.height_at(-6.0, 10.0), 99.0);

        let coarse = sampler.height_field(&area(0, 0, 4, 4, 16)).unwrap();
        assert_eq!(coarse.cell(), 16);
        assert_eq!(coarse.dimensions(), (7, 7));
    }
}
