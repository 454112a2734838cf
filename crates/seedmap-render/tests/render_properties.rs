//! End-to-end rendering properties over stub and noise-driven world models.

use seedmap_render::{
    BAND_DARKEN, BiomePalette, HeightField, LIGHT_MAX, LIGHT_MIN, RenderContext, RenderRequest,
    ShadeMode, band_factor, surface_height,
};
use seedmap_world::{BiomeId, Dimension, GenFlags, NoiseWorld, Variant, WorldModel};

/// A world defined by plain functions of the query position.
struct StubWorld {
    variant: Option<Variant>,
    biome: fn(i32, i32, i32) -> BiomeId,
    surface: Option<fn(i32, i32) -> i32>,
}

impl StubWorld {
    fn new(biome: fn(i32, i32, i32) -> BiomeId) -> Self {
        Self {
            variant: None,
            biome,
            surface: None,
        }
    }

    fn with_surface(mut self, surface: fn(i32, i32) -> i32) -> Self {
        self.surface = Some(surface);
        self
    }
}

impl WorldModel for StubWorld {
    fn initialize(&mut self, variant: Variant, _flags: GenFlags) {
        self.variant = Some(variant);
    }

    fn set_seed(&mut self, _seed: u64, _dimension: Dimension) {}

    fn variant(&self) -> Option<Variant> {
        self.variant
    }

    fn biome_at(&self, _scale: i32, x: i32, y: i32, z: i32) -> BiomeId {
        (self.biome)(x, y, z)
    }

    fn surface_height_at(&self, x: i32, z: i32) -> Option<i32> {
        self.surface.map(|f| f(x, z))
    }
}

fn request(width: u32, height: u32, variant: Variant, shade: ShadeMode) -> RenderRequest {
    RenderRequest {
        seed: 1,
        x: 0,
        z: 0,
        width,
        height,
        scale: 1,
        variant,
        shade,
        y_level: 64,
        ..Default::default()
    }
}

fn pixels(image: &[u8]) -> impl Iterator<Item = [u8; 4]> + '_ {
    image.chunks_exact(4).map(|px| [px[0], px[1], px[2], px[3]])
}

fn scaled(color: [u8; 3], light: f32) -> [u8; 4] {
    [
        (color[0] as f32 * light) as u8,
        (color[1] as f32 * light) as u8,
        (color[2] as f32 * light) as u8,
        255,
    ]
}

fn opaque(color: [u8; 3]) -> [u8; 4] {
    [color[0], color[1], color[2], 255]
}

#[test]
fn test_unshaded_pixels_match_palette() {
    let palette = BiomePalette::vanilla();
    let mut ctx = RenderContext::with_world(StubWorld::new(|_, _, _| BiomeId::PLAINS));
    let bytes = ctx
        .render(&request(2, 2, Variant::V1_21_WD, ShadeMode::None))
        .unwrap();

    assert_eq!(bytes, 16);
    let image = ctx.image().unwrap();
    assert_eq!(image.len(), 16);
    for px in pixels(image) {
        assert_eq!(px, opaque(palette.color(BiomeId::PLAINS)));
    }
}

#[test]
fn test_uniform_stub_through_raw_entry_point() {
    let palette = BiomePalette::vanilla();
    let mut ctx = RenderContext::with_world(StubWorld::new(|_, _, _| BiomeId(1)));
    let bytes = ctx.render_raw(0, 0, 0, 0, 2, 2, 1, Variant::LATEST.code(), 0, 64);

    assert_eq!(bytes, 16);
    let image = ctx.image().unwrap();
    assert_eq!(image.len(), 16);
    for px in pixels(image) {
        assert_eq!(px, opaque(palette.color(BiomeId(1))));
    }
}

#[test]
fn test_padding_is_not_visible() {
    // Only the padding column at x = -1 is ocean.
    let palette = BiomePalette::vanilla();
    let mut ctx = RenderContext::with_world(StubWorld::new(|x, _, _| {
        if x < 0 {
            BiomeId::OCEAN
        } else {
            BiomeId::DESERT
        }
    }));
    ctx.render(&request(2, 2, Variant::V1_17, ShadeMode::None))
        .unwrap();
    for px in pixels(ctx.image().unwrap()) {
        assert_eq!(px, opaque(palette.color(BiomeId::DESERT)));
    }
}

#[test]
fn test_pixels_are_row_major() {
    let palette = BiomePalette::vanilla();
    let mut ctx = RenderContext::with_world(StubWorld::new(|x, _, z| BiomeId(x * 10 + z)));
    let req = RenderRequest {
        x: 3,
        z: 1,
        width: 4,
        height: 3,
        scale: 2,
        shade: ShadeMode::None,
        ..Default::default()
    };
    ctx.render(&req).unwrap();

    let buffer = ctx.buffer();
    for py in 0..3 {
        for px in 0..4 {
            let x = 3 + px as i32 * 2;
            let z = 1 + py as i32 * 2;
            assert_eq!(
                buffer.pixel(px, py),
                Some(opaque(palette.color(BiomeId(x * 10 + z)))),
                "pixel ({px}, {py})"
            );
        }
    }
}

#[test]
fn test_every_alpha_is_opaque() {
    let mut ctx = RenderContext::new();
    for (variant, shade) in [
        (Variant::V1_16, ShadeMode::None),
        (Variant::V1_18, ShadeMode::Simple),
        (Variant::V1_21_WD, ShadeMode::Stepped),
    ] {
        let req = RenderRequest {
            seed: 0xDEAD_BEEF,
            x: -300,
            z: 120,
            width: 24,
            height: 17,
            scale: 16,
            variant,
            shade,
            ..Default::default()
        };
        let bytes = ctx.render(&req).unwrap();
        assert_eq!(bytes, 24 * 17 * 4);
        assert!(pixels(ctx.image().unwrap()).all(|px| px[3] == 255));
    }
}

#[test]
fn test_flat_ground_simple_shade_is_identity() {
    let palette = BiomePalette::vanilla();
    let mut ctx = RenderContext::with_world(StubWorld::new(|_, _, _| BiomeId::FOREST));
    // Legacy variants use a constant surface height.
    ctx.render(&request(3, 3, Variant::V1_16, ShadeMode::Simple))
        .unwrap();
    for px in pixels(ctx.image().unwrap()) {
        assert_eq!(px, opaque(palette.color(BiomeId::FOREST)));
    }
}

#[test]
fn test_stepped_darkens_even_bands() {
    let palette = BiomePalette::vanilla();
    let color = palette.color(BiomeId::PLAINS);
    let mut ctx = RenderContext::with_world(StubWorld::new(|_, _, _| BiomeId::PLAINS));

    // Height 64 lies in band 4.
    ctx.render(&request(2, 2, Variant::V1_16, ShadeMode::Stepped))
        .unwrap();
    assert_eq!(band_factor(64), BAND_DARKEN);
    for px in pixels(ctx.image().unwrap()) {
        assert_eq!(px, scaled(color, BAND_DARKEN));
    }
}

#[test]
fn test_stepped_matches_simple_on_odd_bands() {
    let world = || StubWorld::new(|_, _, _| BiomeId::TAIGA).with_surface(|_, _| 80);
    let mut simple = RenderContext::with_world(world());
    let mut stepped = RenderContext::with_world(world());
    simple
        .render(&request(4, 4, Variant::V1_20, ShadeMode::Simple))
        .unwrap();
    stepped
        .render(&request(4, 4, Variant::V1_20, ShadeMode::Stepped))
        .unwrap();
    assert_eq!(simple.image(), stepped.image());
}

#[test]
fn test_east_rising_slope_brightens() {
    let palette = BiomePalette::vanilla();
    let color = palette.color(BiomeId::PLAINS);
    let world = StubWorld::new(|_, _, _| BiomeId::PLAINS).with_surface(|x, _| x);
    let mut ctx = RenderContext::with_world(world);
    let req = RenderRequest {
        scale: 4,
        ..request(3, 2, Variant::V1_20, ShadeMode::Simple)
    };
    ctx.render(&req).unwrap();

    // d = (x + s + x) - (x + x - s) = 2s, light = 1 + 2s * 0.25 / s = 1.5
    for px in pixels(ctx.image().unwrap()) {
        assert_eq!(px, scaled(color, 1.5));
    }
}

#[test]
fn test_west_rising_slope_darkens() {
    let palette = BiomePalette::vanilla();
    let color = palette.color(BiomeId::SNOWY_PLAINS);
    let world = StubWorld::new(|_, _, _| BiomeId::SNOWY_PLAINS).with_surface(|x, _| -x);
    let mut ctx = RenderContext::with_world(world);
    ctx.render(&request(3, 3, Variant::V1_20, ShadeMode::Simple))
        .unwrap();
    for px in pixels(ctx.image().unwrap()) {
        assert_eq!(px, scaled(color, 0.5));
    }
}

#[test]
fn test_probed_height_drives_bands() {
    let palette = BiomePalette::vanilla();
    let color = palette.color(BiomeId::MEADOW);

    // Probe lands on y = 99 (band 6, even).
    let mut high = RenderContext::with_world(StubWorld::new(|_, y, _| {
        if y <= 100 {
            BiomeId::MEADOW
        } else {
            BiomeId::UNDEFINED
        }
    }));
    high.render(&request(2, 2, Variant::V1_18, ShadeMode::Stepped))
        .unwrap();
    for px in pixels(high.image().unwrap()) {
        assert_eq!(px, scaled(color, BAND_DARKEN));
    }

    // Probe lands on y = 87 (band 5, odd).
    let mut low = RenderContext::with_world(StubWorld::new(|_, y, _| {
        if y <= 90 {
            BiomeId::MEADOW
        } else {
            BiomeId::UNDEFINED
        }
    }));
    let req = RenderRequest {
        y_level: 64,
        ..request(2, 2, Variant::V1_18, ShadeMode::Stepped)
    };
    low.render(&req).unwrap();
    for px in pixels(low.image().unwrap()) {
        assert_eq!(px, opaque(color));
    }
}

#[test]
fn test_undefined_biome_uses_last_palette_slot() {
    let mut palette = BiomePalette::vanilla();
    palette.set(BiomeId(255), [1, 2, 3]);
    let mut ctx = RenderContext::with_world(StubWorld::new(|_, _, _| BiomeId::UNDEFINED))
        .with_palette(palette);
    ctx.render(&request(2, 3, Variant::V1_21_WD, ShadeMode::Simple))
        .unwrap();
    // Every probe fails, so all heights sit at the ceiling and the ground is flat.
    for px in pixels(ctx.image().unwrap()) {
        assert_eq!(px, [1, 2, 3, 255]);
    }
}

#[test]
fn test_render_is_idempotent() {
    let mut ctx = RenderContext::new();
    let req = RenderRequest {
        seed: 987_654_321,
        x: 1000,
        z: -2000,
        width: 20,
        height: 20,
        scale: 8,
        variant: Variant::V1_19_2,
        shade: ShadeMode::Stepped,
        ..Default::default()
    };
    ctx.render(&req).unwrap();
    let first = ctx.image().unwrap().to_vec();
    ctx.render(&req).unwrap();
    assert_eq!(ctx.image().unwrap(), first.as_slice());

    let mut other = RenderContext::new();
    other.render(&req).unwrap();
    assert_eq!(other.image().unwrap(), first.as_slice());
}

#[test]
fn test_buffer_grows_monotonically() {
    let mut ctx = RenderContext::with_world(StubWorld::new(|_, _, _| BiomeId::PLAINS));
    let mut capacities = Vec::new();
    for (w, h) in [(4, 4), (2, 2), (8, 2), (1, 1), (10, 10)] {
        ctx.render(&request(w, h, Variant::V1_16, ShadeMode::None))
            .unwrap();
        capacities.push(ctx.buffer().capacity());
        assert_eq!(ctx.image().unwrap().len(), (w * h * 4) as usize);
    }
    assert_eq!(capacities, vec![64, 64, 64, 64, 400]);
}

#[test]
fn test_smaller_render_keeps_address() {
    let mut ctx = RenderContext::with_world(StubWorld::new(|_, _, _| BiomeId::PLAINS));
    ctx.render(&request(6, 6, Variant::V1_16, ShadeMode::None))
        .unwrap();
    let ptr = ctx.buffer_ptr();
    assert!(!ptr.is_null());
    ctx.render(&request(3, 3, Variant::V1_16, ShadeMode::None))
        .unwrap();
    assert_eq!(ctx.buffer_ptr(), ptr);
}

#[test]
fn test_raw_entry_point_renders() {
    let mut ctx = RenderContext::new();
    let bytes = ctx.render_raw(7, 0, -64, 64, 5, 4, 4, Variant::V1_21_3.code(), 1, 64);
    assert_eq!(bytes, 5 * 4 * 4);
    let ptr = ctx.buffer_ptr();
    assert!(!ptr.is_null());
    // SAFETY: the buffer holds at least `bytes` initialized bytes until the next render.
    let raw = unsafe { std::slice::from_raw_parts(ptr, bytes) };
    assert_eq!(Some(raw), ctx.image());
}

#[test]
fn test_nether_ignores_shading() {
    let base = RenderRequest {
        seed: 31337,
        width: 12,
        height: 12,
        scale: 8,
        dimension: Dimension::Nether,
        ..Default::default()
    };
    let mut flat = RenderContext::new();
    let mut shaded = RenderContext::new();
    flat.render(&RenderRequest {
        shade: ShadeMode::None,
        ..base
    })
    .unwrap();
    shaded
        .render(&RenderRequest {
            shade: ShadeMode::Stepped,
            ..base
        })
        .unwrap();
    assert_eq!(flat.image(), shaded.image());
}

#[test]
fn test_noise_world_render_uses_palette_colors() {
    let palette = BiomePalette::vanilla();
    let mut ctx = RenderContext::new();
    let req = RenderRequest {
        seed: 4242,
        width: 16,
        height: 16,
        scale: 32,
        shade: ShadeMode::None,
        ..Default::default()
    };
    ctx.render(&req).unwrap();

    let world = NoiseWorld::seeded(req.variant, req.flags, req.seed, req.dimension);
    for py in 0..16u32 {
        for px in 0..16u32 {
            let id = world.biome_at(32, px as i32 * 32, 64, py as i32 * 32);
            assert_eq!(ctx.buffer().pixel(px, py), Some(opaque(palette.color(id))));
        }
    }
}

#[test]
fn test_stepped_darkens_only_even_bands() {
    let base = RenderRequest {
        seed: 77,
        x: -800,
        z: 400,
        width: 24,
        height: 24,
        scale: 16,
        variant: Variant::V1_20,
        ..Default::default()
    };
    let mut simple = RenderContext::new();
    let mut stepped = RenderContext::new();
    simple
        .render(&RenderRequest {
            shade: ShadeMode::Simple,
            ..base
        })
        .unwrap();
    stepped
        .render(&RenderRequest {
            shade: ShadeMode::Stepped,
            ..base
        })
        .unwrap();

    let world = NoiseWorld::seeded(base.variant, base.flags, base.seed, base.dimension);
    for py in 0..base.height {
        for px in 0..base.width {
            let wx = base.x + px as i32 * base.scale;
            let wz = base.z + py as i32 * base.scale;
            let a = simple.buffer().pixel(px, py).unwrap();
            let b = stepped.buffer().pixel(px, py).unwrap();
            if band_factor(surface_height(&world, wx, wz)) < 1.0 {
                assert!((0..3).all(|c| b[c] <= a[c]), "({px}, {py}) brighter");
            } else {
                assert_eq!(a, b, "({px}, {py}) changed on an odd band");
            }
        }
    }
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_unaddressable_raw_request_returns_zero() {
    let mut ctx = RenderContext::with_world(StubWorld::new(|_, _, _| BiomeId::PLAINS));
    assert_eq!(ctx.render_raw(0, 0, 0, 0, 2, 2, 1, Variant::LATEST.code(), 0, 64), 16);
    assert!(!ctx.buffer_ptr().is_null());

    let bytes = ctx.render_raw(0, 0, 0, 0, i32::MAX, i32::MAX, 1, Variant::LATEST.code(), 0, 64);
    assert_eq!(bytes, 0);
    assert!(ctx.buffer_ptr().is_null());
    assert!(ctx.image().is_none());

    assert_eq!(ctx.render_raw(0, 0, 0, 0, 2, 2, 1, Variant::LATEST.code(), 1, 64), 16);
}

#[test]
fn test_smooth_flat_ground_is_identity() {
    let palette = BiomePalette::vanilla();
    let mut ctx = RenderContext::with_world(
        StubWorld::new(|_, _, _| BiomeId::FOREST).with_surface(|_, _| 70),
    );
    ctx.render(&request(3, 3, Variant::V1_21_WD, ShadeMode::Smooth))
        .unwrap();
    for px in pixels(ctx.image().unwrap()) {
        assert_eq!(px, opaque(palette.color(BiomeId::FOREST)));
    }
}

#[test]
fn test_smooth_east_rising_slope_brightens() {
    let palette = BiomePalette::vanilla();
    let mut ctx = RenderContext::with_world(
        StubWorld::new(|_, _, _| BiomeId::PLAINS).with_surface(|x, _| x),
    );
    ctx.render(&request(4, 2, Variant::V1_21_WD, ShadeMode::Smooth))
        .unwrap();
    let expected = scaled(palette.color(BiomeId::PLAINS), LIGHT_MAX);
    for px in pixels(ctx.image().unwrap()) {
        assert_eq!(px, expected);
    }
}

#[test]
fn test_supplied_height_field_replaces_world_heights() {
    let palette = BiomePalette::vanilla();
    let mut ctx = RenderContext::with_world(
        StubWorld::new(|_, _, _| BiomeId::DESERT).with_surface(|_, _| 64),
    );
    // Falls by one block per block toward +x.
    let values = (0..64).map(|n| -((n % 8) as f32 * 4.0)).collect();
    ctx.set_height_field(Some(HeightField::new(-8, -8, 4, 8, 8, values).unwrap()));

    ctx.render(&request(2, 2, Variant::V1_21_WD, ShadeMode::Smooth))
        .unwrap();
    let expected = scaled(palette.color(BiomeId::DESERT), LIGHT_MIN);
    for px in pixels(ctx.image().unwrap()) {
        assert_eq!(px, expected);
    }

    ctx.set_height_field(None);
    ctx.render(&request(2, 2, Variant::V1_21_WD, ShadeMode::Smooth))
        .unwrap();
    for px in pixels(ctx.image().unwrap()) {
        assert_eq!(px, opaque(palette.color(BiomeId::DESERT)));
    }
}
