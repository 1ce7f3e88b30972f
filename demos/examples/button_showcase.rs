// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless tour of the button styles and both dispatch paths.
//!
//! Builds the classic showcase set (solid, icon, gradient, glass, neumorphic,
//! outline, capsule tag), renders each plan, then demonstrates the
//! single-flight busy gate by driving an async action with a no-op waker.
//!
//! Run:
//! - `cargo run -p thimble_demos --example button_showcase`

use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

use peniko::{Color, Gradient};
use thimble_button::{Button, ButtonConfig, Content, FontToken, Icon, MonospaceMeasure};
use thimble_style::{CornerStyle, Palette, StyleVariant};
use thimble_tap::{Haptics, TapAction, TapOutcome};

/// Future that needs a few polls before it resolves, standing in for a
/// network call or timer.
struct Countdown(u32);

impl Future for Countdown {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
        if self.0 == 0 {
            Poll::Ready(())
        } else {
            self.0 -= 1;
            Poll::Pending
        }
    }
}

/// Haptics hook that just reports pulses on stdout.
struct LoggingHaptics;

impl Haptics for LoggingHaptics {
    fn pulse(&mut self) {
        println!("    * haptic pulse");
    }
}

fn describe(name: &str, button: &Button) {
    let plan = button.render(320.0, &MonospaceMeasure::default());
    let content = match &plan.content {
        Content::Run(run) => format!("run of {} item(s)", run.len()),
        Content::Spinner { .. } => "spinner".to_string(),
    };
    let fill = match &plan.fill {
        thimble_style::Fill::Solid(_) => "solid",
        thimble_style::Fill::Gradient(_) => "gradient",
        thimble_style::Fill::Frosted { .. } => "frosted",
    };
    println!(
        "  {name}: {:.0}x{:.0}, fill {fill}, border {}, shadow {}, {content}, interactive: {}",
        plan.bounds.width(),
        plan.bounds.height(),
        plan.border
            .map_or("none".to_string(), |b| format!("{}px", b.width)),
        plan.shadow.map_or("none".to_string(), |s| format!(
            "r{} @ ({}, {})",
            s.radius, s.offset.x, s.offset.y
        )),
        plan.interactive,
    );
}

fn main() {
    let white_on_pink = Palette::new(Color::from_rgb8(255, 45, 85), Color::WHITE);
    let white_on_black = Palette::new(Color::from_rgb8(0, 0, 0), Color::WHITE);

    println!("showcase:");

    let mut login = Button::new(
        ButtonConfig::new("Login with Apple")
            .with_width(false, false)
            .with_height(20.0)
            .with_palette(white_on_pink)
            .with_font(FontToken::BODY),
    )
    .with_action(TapAction::sync(|| println!("    login tapped")));
    describe("solid", &login);

    let icon_login = Button::new(
        ButtonConfig::new("Login with Apple")
            .with_height(40.0)
            .with_palette(white_on_black)
            .with_font(FontToken::BODY)
            .with_icon(Icon {
                name: "apple.logo".to_string(),
                size: 18.0,
                spacing: 16.0,
            }),
    );
    describe("solid+icon", &icon_login);

    let gradient = Gradient::new_linear((0.0, 0.0), (1.0, 0.0))
        .with_stops([Color::from_rgb8(255, 149, 0), Color::from_rgb8(255, 59, 48)]);
    let glass = Button::new(
        ButtonConfig::new("Glass Button")
            .with_height(50.0)
            .with_icon(Icon::named("snowflake"))
            .with_style(StyleVariant::Glass {
                background_opacity: 0.25,
                stroke_color: Color::WHITE.with_alpha(0.5),
            }),
    );
    describe("glass", &glass);

    let neumorphic = Button::new(
        ButtonConfig::new("Neumorphic")
            .with_height(50.0)
            .with_style(StyleVariant::neumorphic()),
    );
    describe("neumorphic", &neumorphic);

    let outline = Button::new(
        ButtonConfig::new("Outline")
            .with_height(30.0)
            .with_style(StyleVariant::outline()),
    );
    describe("outline", &outline);

    let tag = Button::new(
        ButtonConfig::new("Capsule Tag")
            .with_width(false, true)
            .with_palette(Palette::new(Color::from_rgb8(52, 199, 89), Color::WHITE))
            .with_corner_style(CornerStyle::Capsule)
            .with_font(FontToken::SUBHEADLINE),
    );
    describe("capsule tag", &tag);

    println!("\nsync dispatch:");
    let outcome = login.tap(&mut LoggingHaptics);
    println!("    outcome: {outcome:?}");

    println!("\nasync dispatch with the busy gate:");
    let completions = Rc::new(Cell::new(0_u32));
    let counted = completions.clone();
    let mut submit = Button::new(
        ButtonConfig::new("Gradient Button")
            .with_height(50.0)
            .with_icon(Icon::named("flame.fill"))
            .with_style(StyleVariant::Gradient(gradient)),
    )
    .with_action(TapAction::deferred(move || {
        let counted = counted.clone();
        async move {
            Countdown(3).await;
            counted.set(counted.get() + 1);
        }
    }));

    assert_eq!(submit.tap(&mut LoggingHaptics), TapOutcome::Started);
    describe("while busy", &submit);

    // A tap during the in-flight action is dropped silently.
    assert_eq!(submit.tap(&mut LoggingHaptics), TapOutcome::Suppressed);

    let mut cx = Context::from_waker(Waker::noop());
    let mut polls = 0;
    while submit.poll(&mut cx).is_pending() {
        polls += 1;
    }
    println!("    resolved after {polls} poll(s), completions: {}", completions.get());
    describe("after resolution", &submit);
}
