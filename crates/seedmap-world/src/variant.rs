//! Generation variants and the version resolver.
//!
//! A [`Variant`] selects one set of generation rules. Release versions map onto
//! variants through [`Variant::from_version`]: unknown major or minor versions
//! resolve to [`Variant::LATEST`], and within a minor version patch thresholds
//! are tested from the highest down.

use std::fmt;
use std::str::FromStr;

/// Errors produced when parsing a version string.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VersionParseError {
    /// The string was empty.
    #[error("empty version string")]
    Empty,
    /// A component was not a non-negative integer.
    #[error("invalid version component {component:?} in {input:?}")]
    InvalidComponent {
        /// The full input.
        input: String,
        /// The offending component.
        component: String,
    },
    /// More than three components were given.
    #[error("too many version components in {0:?}")]
    TooManyComponents(String),
}

/// Discrete generation-rule variant understood by a [`crate::WorldModel`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    /// 1.16 rules: biomes are resolved in 2D only.
    V1_16,
    /// 1.17 rules: biomes are resolved in 2D only.
    V1_17,
    /// 1.18 rules: first variant with vertical biome resolution.
    V1_18,
    /// 1.19.0 – 1.19.1.
    V1_19,
    /// 1.19.2 – 1.19.3.
    V1_19_2,
    /// 1.19.4.
    V1_19_4,
    /// 1.20.0 – 1.20.5.
    V1_20,
    /// 1.20.6.
    V1_20_6,
    /// 1.21.0.
    V1_21_1,
    /// 1.21.1 – 1.21.2.
    V1_21_3,
    /// 1.21.3 and later ("winter drop").
    #[default]
    V1_21_WD,
}

impl Variant {
    /// The newest variant known to this crate.
    pub const LATEST: Variant = Variant::V1_21_WD;

    /// Every variant, oldest first.
    pub const ALL: [Variant; 11] = [
        Variant::V1_16,
        Variant::V1_17,
        Variant::V1_18,
        Variant::V1_19,
        Variant::V1_19_2,
        Variant::V1_19_4,
        Variant::V1_20,
        Variant::V1_20_6,
        Variant::V1_21_1,
        Variant::V1_21_3,
        Variant::V1_21_WD,
    ];

    /// Resolve a release version to the variant that generates it.
    pub fn from_version(major: u32, minor: u32, patch: u32) -> Self {
        if major != 1 {
            return Self::LATEST;
        }
        match minor {
            16 => Self::V1_16,
            17 => Self::V1_17,
            18 => Self::V1_18,
            19 if patch >= 4 => Self::V1_19_4,
            19 if patch >= 2 => Self::V1_19_2,
            19 => Self::V1_19,
            20 if patch >= 6 => Self::V1_20_6,
            20 => Self::V1_20,
            21 if patch >= 3 => Self::V1_21_WD,
            21 if patch >= 1 => Self::V1_21_3,
            21 => Self::V1_21_1,
            _ => Self::LATEST,
        }
    }

    /// Numeric tag used at the raw render boundary.
    pub fn code(self) -> i32 {
        match self {
            Self::V1_16 => 1,
            Self::V1_17 => 2,
            Self::V1_18 => 3,
            Self::V1_19 => 4,
            Self::V1_19_2 => 5,
            Self::V1_19_4 => 6,
            Self::V1_20 => 7,
            Self::V1_20_6 => 8,
            Self::V1_21_1 => 9,
            Self::V1_21_3 => 10,
            Self::V1_21_WD => 11,
        }
    }

    /// Inverse of [`Variant::code`].
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.code() == code)
    }

    /// Returns `true` if biomes vary with y-level under these rules.
    pub fn supports_3d_biomes(self) -> bool {
        self >= Self::V1_18
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::V1_16 => "1.16",
            Self::V1_17 => "1.17",
            Self::V1_18 => "1.18",
            Self::V1_19 => "1.19",
            Self::V1_19_2 => "1.19.2",
            Self::V1_19_4 => "1.19.4",
            Self::V1_20 => "1.20",
            Self::V1_20_6 => "1.20.6",
            Self::V1_21_1 => "1.21.1",
            Self::V1_21_3 => "1.21.3",
            Self::V1_21_WD => "1.21 WD",
        };
        f.write_str(s)
    }
}

/// Parses `"1.21.4"`, `"1_21_4"` or `"1.20"` (missing patch is 0).
impl FromStr for Variant {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let mut parts = [0u32; 3];
        let mut count = 0;
        for component in trimmed.split(['.', '_']) {
            if count == parts.len() {
                return Err(VersionParseError::TooManyComponents(s.to_string()));
            }
            parts[count] =
                component
                    .parse()
                    .map_err(|_| VersionParseError::InvalidComponent {
                        input: s.to_string(),
                        component: component.to_string(),
                    })?;
            count += 1;
        }

        Ok(Self::from_version(parts[0], parts[1], parts[2]))
    }
}
