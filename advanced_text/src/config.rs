// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use word_spans::OffsetUnit;

use crate::{IndicatorStyle, Rgba};

/// Engine-wide settings that do not change from render to render.
///
/// ```
/// use advanced_text::{EngineConfig, OffsetUnit, Rgba};
///
/// let config = EngineConfig::new()
///     .with_offset_unit(OffsetUnit::Utf16)
///     .with_fallback_color(Rgba::new(255, 200, 0, 255));
/// assert_eq!(config.offset_unit, OffsetUnit::Utf16);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// The unit the host uses for text offsets.
    pub offset_unit: OffsetUnit,
    /// Background color used when a highlight color fails to parse.
    pub fallback_color: Rgba,
    /// Emphasis applied to the indicator word.
    pub indicator_style: IndicatorStyle,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            offset_unit: OffsetUnit::Utf8,
            fallback_color: Rgba::YELLOW,
            indicator_style: IndicatorStyle::default(),
        }
    }
}

impl EngineConfig {
    /// The default configuration: UTF-8 offsets, yellow fallback, bold red indicator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unit the host uses for text offsets.
    #[must_use]
    pub fn with_offset_unit(mut self, unit: OffsetUnit) -> Self {
        self.offset_unit = unit;
        self
    }

    /// Sets the background color used when a highlight color fails to parse.
    #[must_use]
    pub fn with_fallback_color(mut self, color: Rgba) -> Self {
        self.fallback_color = color;
        self
    }

    /// Sets the indicator emphasis.
    #[must_use]
    pub fn with_indicator_style(mut self, style: IndicatorStyle) -> Self {
        self.indicator_style = style;
        self
    }
}
