//! Hillshade lighting from neighbor surface heights.
//!
//! Light falls from the north-west: a pixel whose south-east neighbors sit
//! higher than its north-west neighbors faces the light and brightens.
//!
//! Smooth shading reads slopes from a coarse [`HeightField`] instead of the
//! per-pixel neighbor heights, so large-scale maps do not show blocky steps.

use std::fmt;
use std::str::FromStr;

use crate::RenderError;

/// Lower clamp of the light factor.
pub const LIGHT_MIN: f32 = 0.5;
/// Upper clamp of the light factor.
pub const LIGHT_MAX: f32 = 1.5;
/// Vertical size of one contour band in stepped mode, in blocks.
pub const BAND_HEIGHT: i32 = 16;
/// Multiplier applied to even-numbered contour bands.
pub const BAND_DARKEN: f32 = 0.95;
/// Smallest node spacing of a sampled [`HeightField`], in blocks.
pub const HEIGHT_CELL: i32 = 4;

/// How a render lights the biome colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShadeMode {
    /// Flat palette colors.
    None,
    /// Continuous hillshade.
    #[default]
    Simple,
    /// Hillshade plus 16-block contour bands.
    Stepped,
    /// Hillshade from a bilinearly interpolated [`HeightField`].
    ///
    /// Has no integer code; the raw entry point cannot select it.
    Smooth,
}

impl ShadeMode {
    /// Every mode; the ones with integer codes come first, in code order.
    pub const ALL: [ShadeMode; 4] = [
        ShadeMode::None,
        ShadeMode::Simple,
        ShadeMode::Stepped,
        ShadeMode::Smooth,
    ];

    /// Maps the integer code used at the raw boundary (`0`, `1`, `2`).
    pub fn from_code(code: i32) -> Result<Self, RenderError> {
        match code {
            0 => Ok(Self::None),
            1 => Ok(Self::Simple),
            2 => Ok(Self::Stepped),
            other => Err(RenderError::UnknownShadeMode(other)),
        }
    }

    /// The integer code of this mode, if the raw entry point can select it.
    pub fn code(self) -> Option<i32> {
        match self {
            Self::None => Some(0),
            Self::Simple => Some(1),
            Self::Stepped => Some(2),
            Self::Smooth => None,
        }
    }

    /// Whether rendering in this mode needs per-cell surface heights on the
    /// padded grid.
    pub fn needs_heights(self) -> bool {
        matches!(self, Self::Simple | Self::Stepped)
    }

    /// Whether rendering in this mode needs a [`HeightField`].
    pub fn needs_height_field(self) -> bool {
        self == Self::Smooth
    }

    /// Light factor for one pixel from its neighbor heights, or `None` when
    /// the mode does not shade from neighbors.
    pub fn light(self, neighbors: NeighborHeights, center: i32, scale: i32) -> Option<f32> {
        match self {
            Self::None | Self::Smooth => None,
            Self::Simple => Some(neighbors.hillshade(scale)),
            Self::Stepped => Some(neighbors.hillshade(scale) * band_factor(center)),
        }
    }
}

impl fmt::Display for ShadeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Simple => "simple",
            Self::Stepped => "stepped",
            Self::Smooth => "smooth",
        })
    }
}

impl FromStr for ShadeMode {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "flat" | "0" => Ok(Self::None),
            "simple" | "1" => Ok(Self::Simple),
            "stepped" | "contour" | "2" => Ok(Self::Stepped),
            "smooth" | "bilinear" => Ok(Self::Smooth),
            _ => Err(RenderError::UnknownShadeName(s.to_string())),
        }
    }
}

/// Surface heights of the four axis neighbors of a pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeighborHeights {
    /// Height one step toward negative z.
    pub north: i32,
    /// Height one step toward positive z.
    pub south: i32,
    /// Height one step toward positive x.
    pub east: i32,
    /// Height one step toward negative x.
    pub west: i32,
}

impl NeighborHeights {
    /// Shorthand for [`hillshade`] on these neighbors.
    #[inline]
    pub fn hillshade(self, scale: i32) -> f32 {
        hillshade(self.north, self.south, self.east, self.west, scale)
    }
}

/// Light factor from four neighbor heights at the given horizontal scale.
///
/// `1 + ((east + south) - (north + west)) * 0.25 / scale`, clamped to
/// `[LIGHT_MIN, LIGHT_MAX]`.
#[inline]
pub fn hillshade(north: i32, south: i32, east: i32, west: i32, scale: i32) -> f32 {
    let toward = i64::from(north) + i64::from(west);
    let away = i64::from(east) + i64::from(south);
    light_from_rise((away - toward) as f32, scale as f32)
}

#[inline]
fn light_from_rise(rise: f32, span: f32) -> f32 {
    (1.0 + rise * 0.25 / span).clamp(LIGHT_MIN, LIGHT_MAX)
}

/// Surface heights on a regular lattice of world columns, read back with
/// bilinear interpolation.
///
/// Node `(i, j)` sits at world `(origin_x + i * cell, origin_z + j * cell)`.
/// Origins are `i64` so a lattice around the edge of the `i32` range stays
/// monotonic.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    origin_x: i64,
    origin_z: i64,
    cell: i32,
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl HeightField {
    /// Wraps row-major `values` for a `width x height` lattice.
    ///
    /// # Errors
    ///
    /// [`RenderError::InvalidRequest`] for a non-positive spacing, an empty
    /// lattice, or fewer than `width * height` values.
    pub fn new(
        origin_x: i64,
        origin_z: i64,
        cell: i32,
        width: usize,
        height: usize,
        values: Vec<f32>,
    ) -> Result<Self, RenderError> {
        if cell <= 0 {
            return Err(RenderError::InvalidRequest("height field spacing must be positive"));
        }
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidRequest("height field must not be empty"));
        }
        match width.checked_mul(height) {
            Some(cells) if values.len() >= cells => {}
            _ => return Err(RenderError::InvalidRequest("height field has too few values")),
        }
        Ok(Self {
            origin_x,
            origin_z,
            cell,
            width,
            height,
            values,
        })
    }

    /// Node spacing in blocks.
    pub fn cell(&self) -> i32 {
        self.cell
    }

    /// `(width, height)` in nodes.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Height stored at node `(i, j)`.
    #[inline]
    pub fn node(&self, i: usize, j: usize) -> f32 {
        self.values[j * self.width + i]
    }

    /// Interpolated height at world `(x, z)`. Positions past the lattice
    /// read the nearest edge.
    pub fn height_at(&self, x: f64, z: f64) -> f32 {
        let cell = f64::from(self.cell);
        let (i0, i1, fx) = lattice_cell((x - self.origin_x as f64) / cell, self.width);
        let (j0, j1, fz) = lattice_cell((z - self.origin_z as f64) / cell, self.height);

        let v00 = f64::from(self.node(i0, j0));
        let v10 = f64::from(self.node(i1, j0));
        let v01 = f64::from(self.node(i0, j1));
        let v11 = f64::from(self.node(i1, j1));

        let top = v00 * (1.0 - fx) + v10 * fx;
        let bottom = v01 * (1.0 - fx) + v11 * fx;
        (top * (1.0 - fz) + bottom * fz) as f32
    }
}

/// Lower node, upper node and fraction for lattice coordinate `g` on an axis
/// of `nodes` nodes.
fn lattice_cell(g: f64, nodes: usize) -> (usize, usize, f64) {
    let last = nodes - 1;
    let g = g.clamp(0.0, last as f64);
    let lower = (g.floor() as usize).min(last.saturating_sub(1));
    let upper = (lower + 1).min(last);
    (lower, upper, g - lower as f64)
}

/// Light factor at world `(x, z)` for a map drawn at `scale` blocks per
/// pixel, from slopes read half a pixel to either side on `field`.
///
/// Uses the same clamped response as [`hillshade`], with the slope span
/// `scale * scale / cell`.
pub fn smooth_hillshade(field: &HeightField, x: f64, z: f64, scale: i32) -> f32 {
    let half = 0.5 * f64::from(scale);
    let east = field.height_at(x + half, z);
    let west = field.height_at(x - half, z);
    let south = field.height_at(x, z + half);
    let north = field.height_at(x, z - half);

    let span = (f64::from(scale) * f64::from(scale) / f64::from(field.cell)) as f32;
    light_from_rise((east - west) + (south - north), span)
}

/// Contour band multiplier for a pixel at surface height `height`.
///
/// Heights whose 16-block band index is even darken by [`BAND_DARKEN`].
/// Band indices floor toward negative infinity, so `-1` lies in band `-1`.
#[inline]
pub fn band_factor(height: i32) -> f32 {
    if height.div_euclid(BAND_HEIGHT).rem_euclid(2) == 0 {
        BAND_DARKEN
    } else {
        1.0
    }
}
