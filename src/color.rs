/// Color utilities: hex parsing, random generation and label contrast.
use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Luma threshold in thousandths: 0.299 R + 0.587 G + 0.114 B < 128.
const DARK_LUMA_THRESHOLD: u32 = 128_000;

/// An opaque 24-bit color, displayed as `#RRGGBB` with uppercase digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const WHITE: HexColor = HexColor::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: HexColor = HexColor::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from six hex digit values (each `0..16`), most significant first.
    fn from_digits(digits: [u8; 6]) -> Self {
        Self::new(
            digits[0] << 4 | digits[1],
            digits[2] << 4 | digits[3],
            digits[4] << 4 | digits[5],
        )
    }

    /// Perceptual luma scaled by 1000, kept integral so the threshold compare is exact.
    pub fn luma_milli(&self) -> u32 {
        299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b)
    }

    pub fn is_dark(&self) -> bool {
        self.luma_milli() < DARK_LUMA_THRESHOLD
    }

    /// The text color that stays readable on top of this color.
    pub fn label_contrast(&self) -> HexColor {
        if self.is_dark() {
            HexColor::WHITE
        } else {
            HexColor::BLACK
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(value.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| Error::InvalidHex(value.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for HexColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Decide whether white text reads better than black on `hex`.
pub fn is_color_dark(hex: &str) -> Result<bool> {
    Ok(hex.parse::<HexColor>()?.is_dark())
}

/// Anything that can hand out palette colors.
pub trait ColorSource {
    fn next_color(&mut self) -> HexColor;
}

/// Uniform random colors: six independent picks from `0-9A-F`.
#[derive(Debug)]
pub enum RandomSource {
    Thread,
    Seeded(StdRng),
}

impl RandomSource {
    pub fn thread() -> Self {
        RandomSource::Thread
    }

    pub fn seeded(seed: u64) -> Self {
        RandomSource::Seeded(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::thread()
    }
}

impl ColorSource for RandomSource {
    fn next_color(&mut self) -> HexColor {
        match self {
            RandomSource::Thread => {
                let mut rng = rand::rng();
                color_from_picks(|| rng.random_range(0..HEX_DIGITS.len()))
            }
            RandomSource::Seeded(rng) => color_from_picks(|| rng.random_range(0..HEX_DIGITS.len())),
        }
    }
}

fn color_from_picks(mut pick: impl FnMut() -> usize) -> HexColor {
    let mut digits = [0u8; 6];
    for digit in digits.iter_mut() {
        // The digit's value is its position in the alphabet.
        *digit = pick() as u8;
    }
    HexColor::from_digits(digits)
}
