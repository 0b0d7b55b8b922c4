//! Tropical zodiac signs and degrees-minutes-seconds formatting.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees, starting
//! from Aries at 0 degrees (the March equinox).

use crate::util::normalize_360;

/// The 12 tropical zodiac signs, in ecliptic order from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in ecliptic order (index 0 = Aries).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// English name, as used for theme table keys.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Unicode glyph.
    pub const fn symbol(self) -> char {
        match self {
            Self::Aries => '♈',
            Self::Taurus => '♉',
            Self::Gemini => '♊',
            Self::Cancer => '♋',
            Self::Leo => '♌',
            Self::Virgo => '♍',
            Self::Libra => '♎',
            Self::Scorpio => '♏',
            Self::Sagittarius => '♐',
            Self::Capricorn => '♑',
            Self::Aquarius => '♒',
            Self::Pisces => '♓',
        }
    }

    /// 0-based index (Aries = 0 .. Pisces = 11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The sign six places away.
    pub const fn opposite(self) -> ZodiacSign {
        ALL_SIGNS[((self as usize) + 6) % 12]
    }

    /// Case-sensitive lookup by English name.
    pub fn from_name(name: &str) -> Option<ZodiacSign> {
        ALL_SIGNS.iter().copied().find(|s| s.name() == name)
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}′{:04.1}″", self.degrees, self.minutes, self.seconds)
    }
}

/// Convert decimal degrees to DMS (absolute value).
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let remainder = (d - f64::from(degrees)) * 60.0;
    let minutes = remainder.floor() as u8;
    Dms {
        degrees,
        minutes,
        seconds: (remainder - f64::from(minutes)) * 60.0,
    }
}

/// Where a longitude falls in the zodiac.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignPosition {
    pub sign: ZodiacSign,
    /// Decimal degrees within the sign, [0, 30).
    pub degrees_in_sign: f64,
    pub dms: Dms,
}

/// Determine the sign of an ecliptic longitude.
///
/// `index = floor((lon mod 360) / 30)`, so every sign is half-open:
/// Aries = [0, 30), Taurus = [30, 60), …, Pisces = [330, 360).
pub fn sign_from_longitude(lon_deg: f64) -> SignPosition {
    let lon = normalize_360(lon_deg);
    let idx = ((lon / 30.0).floor() as usize).min(11);
    let degrees_in_sign = lon - (idx as f64) * 30.0;
    SignPosition {
        sign: ALL_SIGNS[idx],
        degrees_in_sign,
        dms: deg_to_dms(degrees_in_sign),
    }
}
