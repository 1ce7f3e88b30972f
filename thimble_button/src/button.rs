// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The button component: runtime state plus render planning.

use core::fmt;
use core::task::{Context, Poll};

use kurbo::{Point, Rect, RoundedRect, Size};
use peniko::Color;
use thimble_style::{Border, Fill, ResolvedStyle, Shadow};
use thimble_tap::{Haptics, TapAction, TapDispatcher, TapOutcome};

use crate::config::ButtonConfig;
use crate::layout::{self, ContentRun, TextMeasure};

bitflags::bitflags! {
    /// Reasons a button is currently non-interactive. Empty means taps are
    /// accepted.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct GateFlags: u8 {
        /// Caller set `disabled` in the configuration.
        const DISABLED = 0b0000_0001;
        /// A deferred action is in flight.
        const BUSY     = 0b0000_0010;
    }
}

/// What the button shows inside its frame.
#[derive(Clone, Debug)]
pub enum Content {
    /// The idle label+icon run.
    Run(ContentRun),
    /// Indeterminate progress indicator shown while busy.
    Spinner {
        /// Indicator color; the effective foreground.
        tint: Color,
    },
}

/// Everything a host needs to paint one button frame.
///
/// `bounds` is identical whether `content` is the run or the spinner; the run
/// is always reserved (see [`layout::measure`]).
#[derive(Clone, Debug)]
pub struct RenderPlan {
    /// Tap-target frame, origin at (0, 0).
    pub bounds: Rect,
    /// Corner shape to clip the fill to and stroke the border along.
    pub shape: RoundedRect,
    /// Background fill.
    pub fill: Fill,
    /// Border overlay, if any.
    pub border: Option<Border>,
    /// Drop shadow, if any.
    pub shadow: Option<Shadow>,
    /// Effective foreground color for label, icon, or spinner.
    pub foreground: Color,
    /// Content to draw centered in the frame.
    pub content: Content,
    /// False while disabled or busy; the host should not deliver taps.
    pub interactive: bool,
}

/// A configurable press target with single-flight async dispatch.
///
/// Configuration is replaced wholesale per render pass via
/// [`Button::update_config`]; the loading flag lives in the owned
/// [`TapDispatcher`] and survives configuration updates. Each instance owns
/// its state exclusively; nothing is shared across instances.
pub struct Button {
    config: ButtonConfig,
    action: Option<TapAction>,
    dispatcher: TapDispatcher,
}

impl Button {
    /// Create a button with no action configured.
    pub fn new(config: ButtonConfig) -> Self {
        Self {
            config,
            action: None,
            dispatcher: TapDispatcher::new(),
        }
    }

    /// Attach the tap action.
    pub fn with_action(mut self, action: TapAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Replace the configuration for a new render pass.
    ///
    /// Runtime state (the loading flag and any in-flight action) is kept.
    pub fn update_config(&mut self, config: ButtonConfig) {
        self.config = config;
    }

    /// Replace or clear the tap action.
    pub fn set_action(&mut self, action: Option<TapAction>) {
        self.action = action;
    }

    /// True while a deferred action is in flight.
    pub fn is_loading(&self) -> bool {
        self.dispatcher.is_busy()
    }

    /// Why the button is currently non-interactive, if at all.
    pub fn gate(&self) -> GateFlags {
        let mut flags = GateFlags::empty();
        if self.config.disabled {
            flags |= GateFlags::DISABLED;
        }
        if self.dispatcher.is_busy() {
            flags |= GateFlags::BUSY;
        }
        flags
    }

    /// Deliver one user tap.
    ///
    /// The interactivity gate applies before dispatch: a disabled or busy
    /// button suppresses the tap without touching the action.
    pub fn tap(&mut self, haptics: &mut dyn Haptics) -> TapOutcome {
        if !self.gate().is_empty() {
            return TapOutcome::Suppressed;
        }
        self.dispatcher.tap(self.action.as_mut(), haptics)
    }

    /// Drive the in-flight action, if any. See [`TapDispatcher::poll`].
    pub fn poll(&mut self, cx: &mut Context<'_>) -> Poll<()> {
        self.dispatcher.poll(cx)
    }

    /// Padded tap-target size; busy-state independent.
    pub fn measure(&self, text: &dyn TextMeasure) -> Size {
        layout::measure(&self.config, text)
    }

    /// Tap-target frame at origin for the given available width.
    pub fn frame(&self, available_width: f64, text: &dyn TextMeasure) -> Rect {
        let measured = self.measure(text);
        let width = layout::resolve_width(&self.config, measured, available_width);
        Rect::from_origin_size(Point::ORIGIN, Size::new(width, measured.height))
    }

    /// Assemble the paint plan for the current state.
    pub fn render(&self, available_width: f64, text: &dyn TextMeasure) -> RenderPlan {
        let ResolvedStyle {
            fill,
            border,
            shadow,
            foreground,
        } = self
            .config
            .style
            .resolve(&self.config.palette, self.config.disabled);
        let bounds = self.frame(available_width, text);
        let shape = self.config.corner_style.clip_shape(bounds);
        let content = if self.is_loading() {
            Content::Spinner { tint: foreground }
        } else {
            Content::Run(layout::content_run(&self.config))
        };
        RenderPlan {
            bounds,
            shape,
            fill,
            border,
            shadow,
            foreground,
            content,
            interactive: self.gate().is_empty(),
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("config", &self.config)
            .field("action", &self.action)
            .field("dispatcher", &self.dispatcher)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use core::future::Future;
    use core::pin::Pin;
    use core::task::Waker;

    use thimble_style::{NEUTRAL_GRAY, StyleVariant};
    use thimble_tap::NoHaptics;

    use crate::config::Icon;
    use crate::layout::MonospaceMeasure;

    struct Gate(Rc<Cell<bool>>);

    impl Future for Gate {
        type Output = ();

        fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
            if self.0.get() {
                Poll::Ready(())
            } else {
                Poll::Pending
            }
        }
    }

    struct CountingHaptics(u32);

    impl Haptics for CountingHaptics {
        fn pulse(&mut self) {
            self.0 += 1;
        }
    }

    fn cx() -> Context<'static> {
        Context::from_waker(Waker::noop())
    }

    fn measurer() -> MonospaceMeasure {
        MonospaceMeasure::default()
    }

    /// Button with a deferred action gated on the returned flag.
    fn gated_button(config: ButtonConfig) -> (Button, Rc<Cell<bool>>, Rc<Cell<u32>>) {
        let gate = Rc::new(Cell::new(false));
        let invocations = Rc::new(Cell::new(0_u32));
        let button = Button::new(config).with_action(TapAction::deferred({
            let gate = gate.clone();
            let invocations = invocations.clone();
            move || {
                invocations.set(invocations.get() + 1);
                Gate(gate.clone())
            }
        }));
        (button, gate, invocations)
    }

    #[test]
    fn bounds_are_stable_across_busy_toggle() {
        let config = ButtonConfig::new("Submit").with_icon(Icon::named("arrow"));
        let (mut button, gate, _) = gated_button(config);

        let idle = button.render(320.0, &measurer());
        button.tap(&mut NoHaptics);
        let busy = button.render(320.0, &measurer());

        assert!(button.is_loading());
        assert_eq!(idle.bounds, busy.bounds, "toggling busy must not change size");
        assert!(matches!(busy.content, Content::Spinner { .. }));

        gate.set(true);
        assert_eq!(button.poll(&mut cx()), Poll::Ready(()));
        let settled = button.render(320.0, &measurer());
        assert_eq!(idle.bounds, settled.bounds);
        assert!(matches!(settled.content, Content::Run(_)));
    }

    #[test]
    fn spinner_is_tinted_with_foreground() {
        let (mut button, _gate, _) = gated_button(ButtonConfig::new("Go"));
        button.tap(&mut NoHaptics);

        let plan = button.render(320.0, &measurer());
        match plan.content {
            Content::Spinner { tint } => {
                assert_eq!(tint, button.config().palette.foreground);
            }
            Content::Run(_) => panic!("busy button must show the spinner"),
        }
    }

    #[test]
    fn busy_button_is_non_interactive_and_single_flight() {
        let (mut button, gate, invocations) = gated_button(ButtonConfig::new("Go"));

        assert_eq!(button.tap(&mut NoHaptics), TapOutcome::Started);
        assert_eq!(button.gate(), GateFlags::BUSY);
        assert!(!button.render(320.0, &measurer()).interactive);

        // Tap again before resolution: exactly one invocation in total.
        assert_eq!(button.tap(&mut NoHaptics), TapOutcome::Suppressed);
        assert_eq!(invocations.get(), 1, "no double-invocation while busy");

        gate.set(true);
        assert_eq!(button.poll(&mut cx()), Poll::Ready(()));
        assert!(button.render(320.0, &measurer()).interactive);
        assert_eq!(invocations.get(), 1);
    }

    #[test]
    fn disabled_button_suppresses_taps() {
        let ran = Rc::new(Cell::new(false));
        let flagged = ran.clone();
        let mut button = Button::new(ButtonConfig::new("Go").with_disabled(true))
            .with_action(TapAction::sync(move || flagged.set(true)));
        let mut haptics = CountingHaptics(0);

        assert_eq!(button.tap(&mut haptics), TapOutcome::Suppressed);
        assert!(!ran.get(), "disabled button never invokes the action");
        assert_eq!(haptics.0, 0, "no pulse for a suppressed tap");
        assert_eq!(button.gate(), GateFlags::DISABLED);
        assert!(!button.render(320.0, &measurer()).interactive);
    }

    #[test]
    fn disabled_render_uses_gray_foreground() {
        let button = Button::new(
            ButtonConfig::new("Go")
                .with_style(StyleVariant::neumorphic())
                .with_disabled(true),
        );
        let plan = button.render(320.0, &measurer());

        assert_eq!(plan.foreground, NEUTRAL_GRAY);
        assert!(plan.shadow.is_none(), "disabled suppresses the shadow");
    }

    #[test]
    fn sync_tap_pulses_and_stays_idle() {
        let count = Rc::new(Cell::new(0_u32));
        let counted = count.clone();
        let mut button = Button::new(ButtonConfig::new("Go").with_style(StyleVariant::neumorphic()))
            .with_action(TapAction::sync(move || counted.set(counted.get() + 1)));
        let mut haptics = CountingHaptics(0);

        assert_eq!(button.tap(&mut haptics), TapOutcome::Invoked);
        assert_eq!(count.get(), 1);
        assert_eq!(haptics.0, 1, "tactile pulse fires exactly once per tap");
        assert!(!button.is_loading(), "sync taps never toggle the busy state");
    }

    #[test]
    fn update_config_keeps_runtime_state() {
        let (mut button, _gate, _) = gated_button(ButtonConfig::new("Go"));
        button.tap(&mut NoHaptics);
        assert!(button.is_loading());

        button.update_config(ButtonConfig::new("Go again"));
        assert!(button.is_loading(), "loading flag survives a config refresh");
        assert_eq!(button.config().title, "Go again");
    }

    #[test]
    fn capsule_frame_rounds_to_half_height() {
        let config = ButtonConfig::new("Tag")
            .with_width(false, true)
            .with_corner_style(thimble_style::CornerStyle::Capsule);
        let button = Button::new(config);
        let plan = button.render(320.0, &measurer());

        let expected = plan.bounds.height() / 2.0;
        assert_eq!(plan.shape.radii().top_left, expected);
    }

    #[test]
    fn tap_without_action_is_a_no_op() {
        let mut button = Button::new(ButtonConfig::new("Go"));
        assert_eq!(button.tap(&mut NoHaptics), TapOutcome::NoAction);
        assert!(!button.is_loading());
    }
}
