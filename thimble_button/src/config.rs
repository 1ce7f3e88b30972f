// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Button configuration: the immutable per-render inputs.

use alloc::string::String;

use peniko::Color;
use thimble_style::{CornerStyle, Palette, StyleVariant};

/// Small, copyable text-style token.
///
/// Thimble does not shape or rasterize text; a token names a host-defined
/// text style and is passed through to the host's measurer and renderer.
/// The constants cover the common roles; hosts may define their own values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontToken(pub u16);

impl FontToken {
    /// Prominent label style.
    pub const HEADLINE: Self = Self(0);
    /// Default body style.
    pub const BODY: Self = Self(1);
    /// Smaller secondary style.
    pub const SUBHEADLINE: Self = Self(2);
}

impl Default for FontToken {
    fn default() -> Self {
        Self::HEADLINE
    }
}

/// Optional icon rendered before the label.
#[derive(Clone, Debug, PartialEq)]
pub struct Icon {
    /// Host-defined icon name (for example a symbol or asset identifier).
    pub name: String,
    /// Icon square side length in logical pixels.
    pub size: f64,
    /// Horizontal gap between icon and label.
    pub spacing: f64,
}

impl Icon {
    /// Icon with the conventional defaults: 18px glyph, 8px spacing.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 18.0,
            spacing: 8.0,
        }
    }
}

/// Immutable per-render button configuration.
///
/// Supplied fresh on every render pass; every field has a benign default, so
/// construction accepts no invalid states. `full_width` and `adaptive_width`
/// are mutually exclusive intents and `full_width` takes precedence when both
/// are set.
#[derive(Clone, Debug)]
pub struct ButtonConfig {
    /// Display text.
    pub title: String,
    /// Stretch the tap target to the full available width.
    pub full_width: bool,
    /// Shrink the tap target to its content. Ignored while `full_width` is set.
    pub adaptive_width: bool,
    /// Fixed content height (pre-padding), overriding the measured run height.
    pub height: Option<f64>,
    /// Background and foreground colors.
    pub palette: Palette,
    /// Corner treatment of the tap target.
    pub corner_style: CornerStyle,
    /// Text style token for the label.
    pub font: FontToken,
    /// Optional icon before the label.
    pub icon: Option<Icon>,
    /// Visual treatment.
    pub style: StyleVariant,
    /// Caller-controlled disabled state; persists across renders.
    pub disabled: bool,
}

impl ButtonConfig {
    /// Configuration with the given title and defaults everywhere else.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            full_width: true,
            adaptive_width: false,
            height: None,
            palette: Palette::new(Color::from_rgb8(0, 122, 255), Color::from_rgb8(0, 0, 0)),
            corner_style: CornerStyle::default(),
            font: FontToken::default(),
            icon: None,
            style: StyleVariant::default(),
            disabled: false,
        }
    }

    /// Set the width policy.
    pub fn with_width(mut self, full_width: bool, adaptive_width: bool) -> Self {
        self.full_width = full_width;
        self.adaptive_width = adaptive_width;
        self
    }

    /// Set a fixed content height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the color palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the corner treatment.
    pub fn with_corner_style(mut self, corner_style: CornerStyle) -> Self {
        self.corner_style = corner_style;
        self
    }

    /// Set the label text style token.
    pub fn with_font(mut self, font: FontToken) -> Self {
        self.font = font;
        self
    }

    /// Set the icon.
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the visual treatment.
    pub fn with_style(mut self, style: StyleVariant) -> Self {
        self.style = style;
        self
    }

    /// Set the disabled state.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::new("")
    }
}
