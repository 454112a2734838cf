//! Climate sampler: simplex noise fields for temperature and moisture over
//! block columns.

use noise::{NoiseFn, Simplex};

/// Samples normalized temperature and moisture at block columns.
pub struct ClimateSampler {
    temp_noise: Simplex,
    moisture_noise: Simplex,
    /// Frequency for temperature noise. Lower values produce broader temperature zones.
    pub temp_frequency: f64,
    /// Frequency for moisture noise.
    pub moisture_frequency: f64,
}

impl ClimateSampler {
    /// Default temperature frequency, in cycles per block.
    pub const TEMP_FREQUENCY: f64 = 1.0 / 1536.0;
    /// Default moisture frequency, in cycles per block.
    pub const MOISTURE_FREQUENCY: f64 = 1.0 / 1024.0;

    /// Creates a sampler from two independent layer seeds.
    ///
    /// `stretch` divides both frequencies; large-biome worlds use 4.
    pub fn new(temp_seed: u32, moisture_seed: u32, stretch: f64) -> Self {
        Self {
            temp_noise: Simplex::new(temp_seed),
            moisture_noise: Simplex::new(moisture_seed),
            temp_frequency: Self::TEMP_FREQUENCY / stretch,
            moisture_frequency: Self::MOISTURE_FREQUENCY / stretch,
        }
    }

    /// Returns `(temperature, moisture)`, each normalized to `[0.0, 1.0]`.
    pub fn sample(&self, x: f64, z: f64) -> (f64, f64) {
        let temp_raw = self
            .temp_noise
            .get([x * self.temp_frequency, z * self.temp_frequency]);
        let moisture_raw = self
            .moisture_noise
            .get([x * self.moisture_frequency, z * self.moisture_frequency]);

        // Normalize from [-1, 1] to [0, 1].
        let temperature = ((temp_raw + 1.0) * 0.5).clamp(0.0, 1.0);
        let moisture = ((moisture_raw + 1.0) * 0.5).clamp(0.0, 1.0);
        (temperature, moisture)
    }
}
