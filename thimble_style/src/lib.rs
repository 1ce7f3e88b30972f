// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thimble_style --heading-base-level=0

//! Thimble Style: pure style resolution for a configurable press target.
//!
//! This crate maps a visual treatment ([`StyleVariant`]) plus the caller's color
//! [`Palette`] and a disabled flag to concrete paint parameters: a [`Fill`], an
//! optional [`Border`], an optional [`Shadow`], and the effective foreground
//! color. It performs no drawing and holds no state; a host renderer takes the
//! returned [`ResolvedStyle`] and paints it with whatever backend it uses.
//!
//! ## Resolution rules
//!
//! The disabled override is evaluated first: a disabled button always gets a
//! flat gray fill, a neutral gray foreground, and no shadow, regardless of the
//! configured variant. A configured border overlay is still applied while
//! disabled.
//!
//! For enabled buttons, each variant resolves as follows:
//!
//! | variant | fill | border | shadow |
//! |---|---|---|---|
//! | solid | background | none | background @30%, r=5, offset (0,4) |
//! | gradient | the gradient | none | background @30%, r=5, offset (0,4) |
//! | glass | frosted white tint, 10px blur | stroke @1px | none |
//! | neumorphic | background | none | dark shadow, r=6, offset (6,6) |
//! | outline | background @5% | border color @width | none |
//!
//! ## Minimal example
//!
//! ```rust
//! use peniko::Color;
//! use thimble_style::{Border, Fill, Palette, StyleVariant};
//!
//! let style = StyleVariant::Outline {
//!     border_color: Color::from_rgb8(255, 0, 0),
//!     border_width: 2.0,
//! };
//! let palette = Palette::new(Color::from_rgb8(0, 122, 255), Color::WHITE);
//!
//! let resolved = style.resolve(&palette, false);
//! assert!(matches!(resolved.fill, Fill::Solid(_)));
//! assert_eq!(
//!     resolved.border,
//!     Some(Border { color: Color::from_rgb8(255, 0, 0), width: 2.0 })
//! );
//! assert!(resolved.shadow.is_none());
//! ```
//!
//! ## Corner shapes
//!
//! [`CornerStyle`] lives here as well: it converts a frame rectangle into the
//! [`kurbo::RoundedRect`] a host should clip and stroke against, either with a
//! caller radius or as a full capsule.
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Rect, RoundedRect, Vec2};
use peniko::{Color, Gradient};

/// Neutral gray used for the disabled foreground.
pub const NEUTRAL_GRAY: Color = Color::from_rgb8(142, 142, 147);

/// Default border color for [`StyleVariant::outline`].
pub const DEFAULT_BORDER_COLOR: Color = Color::from_rgb8(0, 122, 255);

/// Stroke width of the glass variant's border overlay.
pub const GLASS_STROKE_WIDTH: f64 = 1.0;

/// Blur radius behind the glass variant's tint.
pub const GLASS_BLUR_RADIUS: f64 = 10.0;

/// Caller-supplied base colors for a button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Base fill color; also tints the solid/gradient shadow.
    pub background: Color,
    /// Label, icon, and spinner color.
    pub foreground: Color,
}

impl Palette {
    /// Create a palette from background and foreground colors.
    pub const fn new(background: Color, foreground: Color) -> Self {
        Self {
            background,
            foreground,
        }
    }
}

/// Visual treatment of a button.
///
/// Variants carry their own parameters so that exactly one treatment is
/// configured at a time. Use the constructor helpers for the variants with
/// conventional defaults.
#[derive(Clone, Debug)]
pub enum StyleVariant {
    /// Flat fill with the palette background color.
    Solid,
    /// Gradient fill; the shadow still derives from the palette background.
    Gradient(Gradient),
    /// Frosted translucent fill with a hairline stroke.
    Glass {
        /// Opacity of the white tint layered over the blur.
        background_opacity: f32,
        /// Color of the 1px stroke overlay.
        stroke_color: Color,
    },
    /// Soft-shadowed fill on the palette background color.
    Neumorphic {
        /// Highlight shadow color. Carried for hosts that paint a dual-shadow
        /// treatment; the resolved single shadow uses `dark_shadow`.
        light_shadow: Color,
        /// Drop shadow color.
        dark_shadow: Color,
    },
    /// Near-transparent fill with a colored border.
    Outline {
        /// Border color.
        border_color: Color,
        /// Border stroke width.
        border_width: f64,
    },
}

impl StyleVariant {
    /// Neumorphic variant with the conventional default shadows:
    /// light = white @80%, dark = black @20%.
    pub fn neumorphic() -> Self {
        Self::Neumorphic {
            light_shadow: Color::WHITE.with_alpha(0.8),
            dark_shadow: Color::BLACK.with_alpha(0.2),
        }
    }

    /// Outline variant with the conventional defaults: blue border, 1px.
    pub fn outline() -> Self {
        Self::Outline {
            border_color: DEFAULT_BORDER_COLOR,
            border_width: 1.0,
        }
    }

    /// Resolve this variant to paint parameters.
    ///
    /// The disabled override is applied first: flat gray fill, neutral gray
    /// foreground, no shadow. The border overlay survives the override.
    pub fn resolve(&self, palette: &Palette, disabled: bool) -> ResolvedStyle {
        let border = self.border();
        if disabled {
            return ResolvedStyle {
                fill: Fill::Solid(NEUTRAL_GRAY.with_alpha(0.5)),
                border,
                shadow: None,
                foreground: NEUTRAL_GRAY,
            };
        }
        ResolvedStyle {
            fill: self.fill(palette),
            border,
            shadow: self.shadow(palette),
            foreground: palette.foreground,
        }
    }

    fn fill(&self, palette: &Palette) -> Fill {
        match self {
            Self::Solid | Self::Neumorphic { .. } => Fill::Solid(palette.background),
            Self::Gradient(gradient) => Fill::Gradient(gradient.clone()),
            Self::Glass {
                background_opacity, ..
            } => Fill::Frosted {
                tint: Color::WHITE.with_alpha(*background_opacity),
                blur_radius: GLASS_BLUR_RADIUS,
            },
            Self::Outline { .. } => Fill::Solid(palette.background.multiply_alpha(0.05)),
        }
    }

    fn border(&self) -> Option<Border> {
        match self {
            Self::Glass { stroke_color, .. } => Some(Border {
                color: *stroke_color,
                width: GLASS_STROKE_WIDTH,
            }),
            Self::Outline {
                border_color,
                border_width,
            } => Some(Border {
                color: *border_color,
                width: *border_width,
            }),
            Self::Solid | Self::Gradient(_) | Self::Neumorphic { .. } => None,
        }
    }

    fn shadow(&self, palette: &Palette) -> Option<Shadow> {
        match self {
            Self::Solid | Self::Gradient(_) => Some(Shadow {
                color: palette.background.multiply_alpha(0.3),
                radius: 5.0,
                offset: Vec2::new(0.0, 4.0),
            }),
            Self::Neumorphic { dark_shadow, .. } => Some(Shadow {
                color: *dark_shadow,
                radius: 6.0,
                offset: Vec2::new(6.0, 6.0),
            }),
            Self::Glass { .. } | Self::Outline { .. } => None,
        }
    }
}

impl Default for StyleVariant {
    fn default() -> Self {
        Self::Solid
    }
}

/// Resolved background fill.
#[derive(Clone, Debug)]
pub enum Fill {
    /// Single flat color.
    Solid(Color),
    /// Gradient paint.
    Gradient(Gradient),
    /// Translucent tint over a backdrop blur.
    Frosted {
        /// Tint color layered over the blur (white at the configured opacity).
        tint: Color,
        /// Backdrop blur radius in logical pixels.
        blur_radius: f64,
    },
}

/// Resolved border overlay, stroked along the corner shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in logical pixels.
    pub width: f64,
}

/// Resolved drop shadow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Shadow color.
    pub color: Color,
    /// Blur radius in logical pixels.
    pub radius: f64,
    /// Offset from the shape, x right and y down.
    pub offset: Vec2,
}

/// Complete paint parameters for one button render.
#[derive(Clone, Debug)]
pub struct ResolvedStyle {
    /// Background fill.
    pub fill: Fill,
    /// Border overlay, if the variant has one.
    pub border: Option<Border>,
    /// Drop shadow, if the variant has one and the button is enabled.
    pub shadow: Option<Shadow>,
    /// Effective foreground color (neutral gray while disabled).
    pub foreground: Color,
}

/// Corner treatment of the tap target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CornerStyle {
    /// Rounded rectangle with the given corner radius.
    Rounded(f64),
    /// Full capsule: radius is half the shorter side of the frame.
    Capsule,
}

impl CornerStyle {
    /// The shape a host should clip and stroke against for the given frame.
    pub fn clip_shape(&self, frame: Rect) -> RoundedRect {
        match self {
            Self::Rounded(radius) => frame.to_rounded_rect(*radius),
            Self::Capsule => {
                let radius = frame.width().min(frame.height()) / 2.0;
                frame.to_rounded_rect(radius)
            }
        }
    }
}

impl Default for CornerStyle {
    fn default() -> Self {
        Self::Rounded(12.0)
    }
}
