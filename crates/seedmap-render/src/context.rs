//! Render context: owns a world model, a palette and the output buffer.

use seedmap_world::{BiomeId, Dimension, GenFlags, NoiseWorld, Variant, WorldModel, seed_from_parts};
use tracing::{trace, warn};

use crate::RenderError;
use crate::buffer::PixelBuffer;
use crate::compositor::composite;
use crate::hillshade::{HeightField, ShadeMode};
use crate::palette::BiomePalette;
use crate::sampler::{SampleArea, SurfaceSampler};

/// Everything one render needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderRequest {
    /// 64-bit world seed.
    pub seed: u64,
    /// World x of the top-left pixel.
    pub x: i32,
    /// World z of the top-left pixel.
    pub z: i32,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Blocks per pixel.
    pub scale: i32,
    /// Generation variant.
    pub variant: Variant,
    /// Lighting mode.
    pub shade: ShadeMode,
    /// Y level of the biome queries.
    pub y_level: i32,
    /// Dimension to render.
    pub dimension: Dimension,
    /// Generator flags.
    pub flags: GenFlags,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            seed: 0,
            x: 0,
            z: 0,
            width: 256,
            height: 256,
            scale: 4,
            variant: Variant::LATEST,
            shade: ShadeMode::Simple,
            y_level: 64,
            dimension: Dimension::Overworld,
            flags: GenFlags::default(),
        }
    }
}

impl RenderRequest {
    /// Size of the resulting image in bytes.
    pub fn byte_len(&self) -> Option<usize> {
        PixelBuffer::byte_len(self.width, self.height)
    }

    /// Builds a request from the integer arguments of the raw entry point:
    /// `[x, z, width, height, scale, variant, shade_mode, y_level]`.
    ///
    /// # Errors
    ///
    /// Unknown variant or shade codes, and negative dimensions.
    pub fn from_raw(seed: u64, args: [i32; 8]) -> Result<Self, RenderError> {
        let [x, z, width, height, scale, variant, shade_mode, y_level] = args;
        Ok(Self {
            seed,
            x,
            z,
            width: u32::try_from(width)
                .map_err(|_| RenderError::InvalidRequest("width must be positive"))?,
            height: u32::try_from(height)
                .map_err(|_| RenderError::InvalidRequest("height must be positive"))?,
            scale,
            variant: Variant::from_code(variant).ok_or(RenderError::UnknownVariant(variant))?,
            shade: ShadeMode::from_code(shade_mode)?,
            y_level,
            ..Self::default()
        })
    }

    fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 {
            return Err(RenderError::InvalidRequest("width must be positive"));
        }
        if self.height == 0 {
            return Err(RenderError::InvalidRequest("height must be positive"));
        }
        if self.scale <= 0 {
            return Err(RenderError::InvalidRequest("scale must be positive"));
        }
        Ok(())
    }

    fn area(&self) -> SampleArea {
        SampleArea {
            x: self.x,
            z: self.z,
            width: self.width,
            height: self.height,
            scale: self.scale,
            y_level: self.y_level,
        }
    }
}

/// A world model binding plus a reusable output buffer.
///
/// Not shareable across threads mid-render; give each worker its own context.
pub struct RenderContext<W: WorldModel = NoiseWorld> {
    world: W,
    palette: BiomePalette,
    buffer: PixelBuffer,
    heights: Option<HeightField>,
}

impl RenderContext<NoiseWorld> {
    /// A context over the built-in noise world with the vanilla palette.
    pub fn new() -> Self {
        Self::with_world(NoiseWorld::new())
    }
}

impl Default for RenderContext<NoiseWorld> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: WorldModel> RenderContext<W> {
    /// A context over any world model with the vanilla palette.
    pub fn with_world(world: W) -> Self {
        Self {
            world,
            palette: BiomePalette::vanilla(),
            buffer: PixelBuffer::new(),
            heights: None,
        }
    }

    /// Replaces the palette.
    pub fn with_palette(mut self, palette: BiomePalette) -> Self {
        self.palette = palette;
        self
    }

    /// The bound world model.
    pub fn world(&self) -> &W {
        &self.world
    }

    /// The active palette.
    pub fn palette(&self) -> &BiomePalette {
        &self.palette
    }

    /// The output buffer.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Supplies the heights smooth shading reads instead of sampling the
    /// world model. `None` goes back to sampling.
    pub fn set_height_field(&mut self, heights: Option<HeightField>) {
        self.heights = heights;
    }

    /// Renders `request` into the context's buffer and returns the image size
    /// in bytes (`width * height * 4`).
    ///
    /// The world model is re-initialized and re-seeded on every call. Nether
    /// renders ignore the shade mode.
    ///
    /// # Errors
    ///
    /// [`RenderError::InvalidRequest`] for non-positive dimensions or scale,
    /// [`RenderError::TooLarge`] or [`RenderError::Allocation`] when the
    /// image or its scratch grids cannot be held in memory. An allocation
    /// failure also releases the output buffer.
    pub fn render(&mut self, request: &RenderRequest) -> Result<usize, RenderError> {
        let result = self.render_into_buffer(request);
        if let Err(RenderError::Allocation { bytes, .. }) = &result {
            warn!(bytes, "allocation failed, releasing pixel buffer");
            self.buffer.release();
        }
        result
    }

    fn render_into_buffer(&mut self, request: &RenderRequest) -> Result<usize, RenderError> {
        request.validate()?;
        let bytes = request
            .byte_len()
            .ok_or(RenderError::TooLarge {
                width: request.width,
                height: request.height,
            })?;

        self.world.initialize(request.variant, request.flags);
        self.world.set_seed(request.seed, request.dimension);

        let shade = if request.dimension.has_surface() {
            request.shade
        } else {
            ShadeMode::None
        };

        let area = request.area();
        let sampler = SurfaceSampler::new(&self.world);
        let mut grid = sampler.sample(&area, shade.needs_heights())?;
        if shade.needs_height_field() {
            let field = match &self.heights {
                Some(heights) => heights.clone(),
                None => sampler.height_field(&area)?,
            };
            grid.attach_field(field);
        }

        let out = self.buffer.prepare(request.width, request.height)?;
        composite(&grid, &self.palette, shade, request.scale, out);

        trace!(
            seed = request.seed,
            x = request.x,
            z = request.z,
            width = request.width,
            height = request.height,
            scale = request.scale,
            variant = %request.variant,
            %shade,
            "rendered biome map"
        );
        Ok(bytes)
    }

    /// Integer-only entry point for foreign callers.
    ///
    /// Returns the image size in bytes, or 0 on any failure: non-positive
    /// dimensions or scale, unknown variant or shade code, or allocation
    /// failure. Read the pixels through [`buffer_ptr`](Self::buffer_ptr).
    #[allow(clippy::too_many_arguments)]
    pub fn render_raw(
        &mut self,
        seed_lo: u32,
        seed_hi: u32,
        x: i32,
        z: i32,
        width: i32,
        height: i32,
        scale: i32,
        variant: i32,
        shade_mode: i32,
        y_level: i32,
    ) -> usize {
        let request = RenderRequest::from_raw(
            seed_from_parts(seed_lo, seed_hi),
            [x, z, width, height, scale, variant, shade_mode, y_level],
        );

        match request.and_then(|request| self.render(&request)) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(error = %err, "render failed");
                0
            }
        }
    }

    /// Start of the output buffer, or null if no buffer has been allocated.
    ///
    /// The address stays valid until a later render needs a larger buffer.
    pub fn buffer_ptr(&self) -> *const u8 {
        self.buffer.as_ptr()
    }

    /// Pixels of the most recent render, or `None` before any buffer exists.
    pub fn image(&self) -> Option<&[u8]> {
        if self.buffer.capacity() == 0 {
            None
        } else {
            Some(self.buffer.as_bytes())
        }
    }
}

/// Biome id at one position, using a throwaway noise world.
///
/// Returns `-1` for an unknown variant code.
pub fn lookup_biome(
    seed_lo: u32,
    seed_hi: u32,
    x: i32,
    y: i32,
    z: i32,
    scale: i32,
    variant: i32,
) -> i32 {
    let Some(variant) = Variant::from_code(variant) else {
        return BiomeId::UNDEFINED.0;
    };
    let world = NoiseWorld::seeded(
        variant,
        GenFlags::default(),
        seed_from_parts(seed_lo, seed_hi),
        Dimension::Overworld,
    );
    world.biome_at(scale, x, y, z).0
}
