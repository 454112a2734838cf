//! Biome map rendering: padded surface sampling, hillshade lighting, palette
//! compositing, and a grow-only RGBA output buffer.
//!
//! The entry point is [`RenderContext`], which owns one world model binding and
//! one output buffer. Give each concurrent caller its own context.

mod buffer;
mod compositor;
mod context;
mod error;
mod hillshade;
mod palette;
mod sampler;

pub use buffer::PixelBuffer;
pub use compositor::composite;
pub use context::{RenderContext, RenderRequest, lookup_biome};
pub use error::RenderError;
pub use hillshade::{
    BAND_DARKEN, BAND_HEIGHT, HEIGHT_CELL, HeightField, LIGHT_MAX, LIGHT_MIN, NeighborHeights,
    ShadeMode, band_factor, hillshade, smooth_hillshade,
};
pub use palette::BiomePalette;
pub use sampler::{
    PROBE_STEP, PaddedGrid, SampleArea, SurfaceSampler, probe_surface_height, sample_region,
    surface_height,
};
