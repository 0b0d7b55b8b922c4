//! House system selection and normalized cusp sets.

use crate::error::AstroError;
use crate::util::normalize_360;

/// Supported house division systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HouseSystem {
    /// Time-based semi-arc trisection.
    #[default]
    Placidus,
    /// Space-based trisection of the four quadrants.
    ///
    /// Used in place of Placidus inside the polar circles, where
    /// Placidus cusps are undefined.
    Porphyry,
}

impl HouseSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Placidus => "Placidus",
            Self::Porphyry => "Porphyry",
        }
    }

    /// Whether this system's cusps can fail to exist at high latitudes.
    pub const fn latitude_dependent(self) -> bool {
        matches!(self, Self::Placidus)
    }
}

/// Twelve house cusp longitudes in degrees, each in [0, 360).
///
/// Index 0 is the cusp of house 1. Cusps ascend around the zodiac and
/// wrap past 360° once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusps([f64; 12]);

impl HouseCusps {
    /// Wrap an already-ordered 12-cusp array, normalizing each longitude.
    pub fn new(cusps: [f64; 12]) -> Self {
        Self(cusps.map(normalize_360))
    }

    /// Accept a cusp array from any backend.
    ///
    /// A 13-element array follows the 1-based convention: index 0 is unused
    /// and dropped. A 12-element array passes through. Any other length is
    /// an error.
    pub fn from_raw(raw: &[f64]) -> Result<Self, AstroError> {
        let cusps = match raw.len() {
            13 => &raw[1..],
            12 => raw,
            n => return Err(AstroError::UnexpectedCuspCount(n)),
        };
        let mut out = [0.0; 12];
        out.copy_from_slice(cusps);
        Ok(Self::new(out))
    }

    /// Cusp longitudes, index 0 = house 1.
    pub fn as_array(&self) -> &[f64; 12] {
        &self.0
    }

    /// Cusp of house `house` (1-12).
    pub fn cusp(&self, house: u8) -> Option<f64> {
        (1..=12)
            .contains(&house)
            .then(|| self.0[usize::from(house) - 1])
    }

    /// House (1-12) containing ecliptic longitude `lon_deg`.
    ///
    /// Each house is half-open, `[cusp_i, cusp_{i+1})`. A house whose span
    /// crosses 0° matches `lon >= start || lon < end`. Malformed cusp sets
    /// that match nothing fall back to house 1.
    pub fn house_of(&self, lon_deg: f64) -> u8 {
        let lon = normalize_360(lon_deg);
        for i in 0..12 {
            let start = self.0[i];
            let end = self.0[(i + 1) % 12];
            let inside = if start <= end {
                start <= lon && lon < end
            } else {
                lon >= start || lon < end
            };
            if inside {
                return (i as u8) + 1;
            }
        }
        1
    }
}

/// The house diametrically across the wheel: `((house + 5) mod 12) + 1`.
///
/// 1↔7, 2↔8, … 6↔12. Exact for quadrant systems whose opposite cusps
/// differ by 180°, which holds for every system in [`HouseSystem`].
pub const fn opposite_house(house: u8) -> u8 {
    ((house + 5) % 12) + 1
}
