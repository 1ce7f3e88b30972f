// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout assembly: the label+icon content run and tap-target sizing.
//!
//! The content run is always measured from the configured label and icon,
//! never from the busy-state spinner. That reservation is what keeps the tap
//! target size stable when the dispatcher toggles between idle and busy: the
//! spinner is drawn inside the space the run would occupy.

use alloc::string::String;

use kurbo::Size;
use smallvec::SmallVec;

use crate::config::{ButtonConfig, FontToken};

/// Uniform padding around the content run, each side, in logical pixels.
pub const PADDING: f64 = 16.0;

/// Host hook for text measurement.
///
/// Thimble does not shape text; the host maps a [`FontToken`] to an actual
/// font and reports the size of a laid-out string.
pub trait TextMeasure {
    /// Size of `text` laid out in the style named by `font`.
    fn measure(&self, text: &str, font: FontToken) -> Size;
}

/// Fixed-advance [`TextMeasure`] for tests and headless demos.
///
/// Every character advances by the same amount regardless of font token. Not
/// intended for production text layout.
#[derive(Clone, Copy, Debug)]
pub struct MonospaceMeasure {
    /// Horizontal advance per character.
    pub advance: f64,
    /// Line height reported for any non-empty string.
    pub line_height: f64,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self {
            advance: 8.0,
            line_height: 18.0,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str, _font: FontToken) -> Size {
        let count = text.chars().count();
        if count == 0 {
            return Size::ZERO;
        }
        Size::new(count as f64 * self.advance, self.line_height)
    }
}

/// One element of the horizontal content run.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentItem {
    /// Icon glyph, drawn in a square of the configured side length.
    Icon {
        /// Host-defined icon name.
        name: String,
        /// Square side length.
        size: f64,
    },
    /// Label text in the configured style.
    Label {
        /// Display text.
        text: String,
        /// Text style token.
        font: FontToken,
    },
}

/// The horizontal run a button draws while idle: optional icon, then label.
pub type ContentRun = SmallVec<[ContentItem; 2]>;

/// Build the content run for a configuration.
pub fn content_run(config: &ButtonConfig) -> ContentRun {
    let mut run = ContentRun::new();
    if let Some(icon) = &config.icon {
        run.push(ContentItem::Icon {
            name: icon.name.clone(),
            size: icon.size,
        });
    }
    run.push(ContentItem::Label {
        text: config.title.clone(),
        font: config.font,
    });
    run
}

/// Measure the padded tap-target size for a configuration.
///
/// Independent of busy state: the idle run is reserved even while a spinner
/// is shown. A configured `height` replaces the measured run height before
/// padding is applied.
pub fn measure(config: &ButtonConfig, text: &dyn TextMeasure) -> Size {
    let label = text.measure(&config.title, config.font);
    let (mut run_width, mut run_height) = (label.width, label.height);
    if let Some(icon) = &config.icon {
        run_width += icon.size + icon.spacing;
        run_height = run_height.max(icon.size);
    }
    let content_height = config.height.unwrap_or(run_height);
    Size::new(run_width + 2.0 * PADDING, content_height + 2.0 * PADDING)
}

/// Apply the width policy to a measured size.
///
/// The tap target stretches to `available_width` unless `adaptive_width` is
/// requested alone; `full_width` wins when both are set.
pub fn resolve_width(config: &ButtonConfig, measured: Size, available_width: f64) -> f64 {
    if config.full_width || !config.adaptive_width {
        available_width
    } else {
        measured.width
    }
}
