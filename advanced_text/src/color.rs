// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;

use peniko::color::{parse_color, AlphaColor, ParseError, Srgb};

/// An 8-bit sRGB color with straight alpha.
///
/// Highlight colors are stored in this form so that composition results compare and hash
/// exactly.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha, `255` is opaque.
    pub a: u8,
}

impl Rgba {
    /// Opaque yellow, the default highlight fallback.
    pub const YELLOW: Self = Self::new(255, 255, 0, 255);

    /// Opaque red, the default indicator color.
    pub const RED: Self = Self::new(255, 0, 0, 255);

    /// Creates a color from its components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packs the color as `0xAARRGGBB`, the layout Android color ints use.
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Converts to a [`peniko::Color`] for renderers built on peniko.
    pub fn to_color(self) -> peniko::Color {
        AlphaColor::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

impl From<AlphaColor<Srgb>> for Rgba {
    fn from(color: AlphaColor<Srgb>) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

/// A highlight color string that could not be parsed.
#[derive(Debug)]
pub struct InvalidColor {
    input: Box<str>,
    reason: ParseError,
}

impl InvalidColor {
    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl core::fmt::Display for InvalidColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid color {:?}: {}", self.input, self.reason)
    }
}

impl core::error::Error for InvalidColor {}

/// Parses a host color string.
///
/// Accepts CSS Color 4 syntax: hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), named colors and
/// color functions such as `rgb()`. Hex alpha comes last, as in CSS.
///
/// This differs from Android's `Color.parseColor`, which reads 8-digit hex as `#AARRGGBB`.
/// Hosts porting Android color strings must move the alpha byte to the end: Android's
/// `#b56baeff` is `#6baeffb5` here.
///
/// ```
/// use advanced_text::{parse_highlight_color, Rgba};
///
/// assert_eq!(
///     parse_highlight_color("#6baeffb5").unwrap(),
///     Rgba::new(0x6b, 0xae, 0xff, 0xb5)
/// );
/// assert!(parse_highlight_color("not a color").is_err());
/// ```
pub fn parse_highlight_color(input: &str) -> Result<Rgba, InvalidColor> {
    match parse_color(input) {
        Ok(color) => Ok(color.to_alpha_color::<Srgb>().into()),
        Err(reason) => Err(InvalidColor {
            input: input.into(),
            reason,
        }),
    }
}

/// How the indicator word is emphasized.
///
/// The indicator color is independent of the host's base text color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorStyle {
    /// Foreground color of the indicator word.
    pub color: Rgba,
    /// Render the indicator word bold.
    pub bold: bool,
    /// Underline the indicator word.
    pub underline: bool,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            color: Rgba::RED,
            bold: true,
            underline: false,
        }
    }
}
