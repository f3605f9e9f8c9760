//! Spectral class to one-byte colour code, and colour code to display colour.
//!
//! The code is the decile of the class letter plus its subclass digit:
//!
//! | Letter | O | B | A | F | G | K | M |
//! |--------|---|---|---|---|---|---|---|
//! | Base   | 0 | 10 | 20 | 30 | 40 | 50 | 60 |
//!
//! so `B8` is 18 and `K5` is 55. An unknown letter gives 30, a mid-range
//! white. The renderer turns the code back into a colour along a
//! blue → white → yellow → red ramp.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Letter to base-code table used when compiling star colours.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpectralScale {
    classes: Vec<(char, u8)>,
    default_code: u8,
}

impl SpectralScale {
    pub fn new(classes: Vec<(char, u8)>, default_code: u8) -> Self {
        Self {
            classes,
            default_code,
        }
    }

    /// Colour code of a spectral class such as `"G2"`.
    ///
    /// A missing class gets the default code. The second character is added
    /// when it is a digit.
    pub fn color_code(&self, class: Option<&str>) -> u8 {
        let mut chars = class.unwrap_or("").chars();
        let base = chars
            .next()
            .and_then(|letter| self.base_code(letter))
            .unwrap_or(self.default_code);
        match chars.next().and_then(|c| c.to_digit(10)) {
            Some(digit) => base.saturating_add(digit as u8),
            None => base,
        }
    }

    pub fn base_code(&self, letter: char) -> Option<u8> {
        self.classes
            .iter()
            .find(|(l, _)| *l == letter)
            .map(|&(_, code)| code)
    }

    pub fn default_code(&self) -> u8 {
        self.default_code
    }
}

impl Default for SpectralScale {
    fn default() -> Self {
        Self::new(
            vec![
                ('O', 0),
                ('B', 10),
                ('A', 20),
                ('F', 30),
                ('G', 40),
                ('K', 50),
                ('M', 60),
            ],
            30,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Display colour for a colour code.
    ///
    /// ```text
    /// code <  30   blue  -> white    (O, B, A)
    /// code <  50   white -> yellow   (F, G)
    /// otherwise    yellow -> red     (K, M)
    /// ```
    pub fn from_code(code: u8) -> Self {
        let c = code as u32;
        if c < 30 {
            let rg = (255 * c / 30) as u8;
            Self { r: rg, g: rg, b: 255 }
        } else if c < 50 {
            Self {
                r: 255,
                g: 255,
                b: (255 - 255 * (c - 30) / 20) as u8,
            }
        } else {
            Self {
                r: 255,
                g: 255u32.saturating_sub(255 * (c - 50) / 20) as u8,
                b: 0,
            }
        }
    }

    /// 5-6-5 packed colour for 16-bit displays.
    pub fn to_rgb565(&self) -> u16 {
        ((self.r as u16 >> 3) << 11) | ((self.g as u16 >> 2) << 5) | (self.b as u16 >> 3)
    }
}
