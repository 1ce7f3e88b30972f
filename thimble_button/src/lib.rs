// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thimble_button --heading-base-level=0

//! Thimble Button: a renderer-agnostic, visually configurable press target.
//!
//! This crate assembles the two lower layers into one component:
//!
//! - [`thimble_style`] resolves the visual treatment (fill, border, shadow).
//! - [`thimble_tap`] dispatches taps with single-flight busy gating.
//!
//! A [`Button`] owns its runtime state (the loading flag inside its
//! [`thimble_tap::TapDispatcher`]) and takes a fresh [`ButtonConfig`] per
//! render pass. [`Button::render`] produces a [`RenderPlan`]: frame, corner
//! shape, resolved paint, centered content (the label+icon run, or a spinner
//! while busy), and the interactivity gate. The host framework paints the
//! plan, delivers taps via [`Button::tap`], and drives in-flight actions via
//! [`Button::poll`] on its main loop.
//!
//! Like the rest of Thimble, this crate does not render, shape text, or run
//! an executor. Hosts plug in text measurement ([`TextMeasure`]) and haptics
//! ([`thimble_tap::Haptics`]).
//!
//! ## Size stability
//!
//! The tap target is always sized from the label+icon run, even while the
//! spinner is shown, so toggling the busy state never changes the measured
//! size (the equivalent of reserving the layout with an invisible copy of the
//! content).
//!
//! ## Minimal example
//!
//! ```rust
//! use thimble_button::{Button, ButtonConfig, Content, MonospaceMeasure};
//! use thimble_style::{Palette, StyleVariant};
//! use thimble_tap::{NoHaptics, TapAction, TapOutcome};
//! use peniko::Color;
//!
//! let config = ButtonConfig::new("Sign in")
//!     .with_palette(Palette::new(Color::from_rgb8(0, 0, 0), Color::WHITE))
//!     .with_style(StyleVariant::outline());
//! let mut button = Button::new(config).with_action(TapAction::sync(|| {}));
//!
//! let plan = button.render(320.0, &MonospaceMeasure::default());
//! assert!(plan.interactive);
//! assert!(matches!(plan.content, Content::Run(_)));
//!
//! assert_eq!(button.tap(&mut NoHaptics), TapOutcome::Invoked);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod button;
mod config;
pub mod layout;

pub use button::{Button, Content, GateFlags, RenderPlan};
pub use config::{ButtonConfig, FontToken, Icon};
pub use layout::{ContentItem, ContentRun, MonospaceMeasure, PADDING, TextMeasure};

// Re-export the companion crates so hosts can depend on this crate alone.
pub use thimble_style as style;
pub use thimble_tap as tap;
