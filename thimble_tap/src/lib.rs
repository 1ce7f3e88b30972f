// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thimble_tap --heading-base-level=0

//! Thimble Tap: deterministic tap dispatch with single-flight busy gating.
//!
//! This crate converts a user tap into exactly one callback invocation. A
//! [`TapAction`] is a tagged union over the two callback kinds — a synchronous
//! closure or a deferred (asynchronous) closure producing a future — so the
//! mutual exclusivity of the two kinds is structural rather than checked at
//! runtime.
//!
//! The [`TapDispatcher`] is a two-state machine:
//!
//! - `Idle` + tap with a deferred action: the future is created and stored,
//!   the dispatcher enters `Busy`, and the tap reports [`TapOutcome::Started`].
//! - `Idle` + tap with a sync action: the closure runs immediately, a haptic
//!   pulse fires through the host's [`Haptics`] hook, and the dispatcher stays
//!   `Idle`.
//! - `Busy` + tap: the tap is dropped silently ([`TapOutcome::Suppressed`]).
//!   This is defined behavior, not an error.
//!
//! ## Driving the in-flight future
//!
//! Like the rest of Thimble, this crate owns no executor. The host's render or
//! event loop drives the stored future by calling [`TapDispatcher::poll`] on
//! the single logical thread that owns the dispatcher; `Busy` clears when the
//! future resolves. There is no cancellation: once dispatched, a future runs
//! to completion. Failures inside the callback are invisible by contract (the
//! future's output is `()`); callers handle their own errors internally.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::task::{Context, Poll, Waker};
//! use thimble_tap::{NoHaptics, Phase, TapAction, TapDispatcher, TapOutcome};
//!
//! let mut dispatcher = TapDispatcher::new();
//! let mut action = Some(TapAction::deferred(|| async {}));
//!
//! // First tap starts the action and enters Busy.
//! let outcome = dispatcher.tap(action.as_mut(), &mut NoHaptics);
//! assert_eq!(outcome, TapOutcome::Started);
//! assert_eq!(dispatcher.phase(), Phase::Busy);
//!
//! // A second tap while busy is dropped silently.
//! let outcome = dispatcher.tap(action.as_mut(), &mut NoHaptics);
//! assert_eq!(outcome, TapOutcome::Suppressed);
//!
//! // The host drives the future; Busy clears on completion.
//! let mut cx = Context::from_waker(Waker::noop());
//! assert_eq!(dispatcher.poll(&mut cx), Poll::Ready(()));
//! assert_eq!(dispatcher.phase(), Phase::Idle);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

/// Boxed future produced by a deferred tap action.
pub type ActionFuture = Pin<Box<dyn Future<Output = ()> + 'static>>;

/// A tap callback: exactly one of the two kinds.
///
/// "No action configured" is expressed as `Option::<TapAction>::None` at the
/// call site, keeping absence and kind both structural.
pub enum TapAction {
    /// Synchronous callback; expected to return promptly. Each invocation is
    /// followed by a haptic pulse.
    Sync(Box<dyn FnMut() + 'static>),
    /// Deferred callback: produces a future the host drives to completion.
    /// At most one produced future is in flight per dispatcher.
    Deferred(Box<dyn FnMut() -> ActionFuture + 'static>),
}

impl TapAction {
    /// Wrap a synchronous callback.
    pub fn sync(callback: impl FnMut() + 'static) -> Self {
        Self::Sync(Box::new(callback))
    }

    /// Wrap an asynchronous callback.
    ///
    /// The closure is invoked once per accepted tap and its future is boxed
    /// and handed to the dispatcher.
    pub fn deferred<F>(mut callback: impl FnMut() -> F + 'static) -> Self
    where
        F: Future<Output = ()> + 'static,
    {
        Self::Deferred(Box::new(move || Box::pin(callback())))
    }
}

impl fmt::Debug for TapAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync(_) => f.write_str("TapAction::Sync"),
            Self::Deferred(_) => f.write_str("TapAction::Deferred"),
        }
    }
}

/// Host hook for tactile feedback.
///
/// The dispatcher pulses this after each successful synchronous invocation.
/// Hosts without a haptic engine can pass [`NoHaptics`].
pub trait Haptics {
    /// Fire one brief tactile pulse.
    fn pulse(&mut self);
}

/// No-op [`Haptics`] implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn pulse(&mut self) {}
}

/// Dispatcher phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No deferred action in flight; taps are accepted.
    Idle,
    /// A deferred action is in flight; taps are dropped.
    Busy,
}

/// Result of processing one tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// A synchronous callback ran and the haptic pulse fired.
    Invoked,
    /// A deferred callback was invoked; its future is now in flight.
    Started,
    /// The dispatcher was busy; the tap was dropped silently.
    Suppressed,
    /// No action is configured; the tap was a no-op.
    NoAction,
}

/// Per-instance tap dispatch state.
///
/// Owns at most one in-flight future. All mutation happens on the host's
/// single logical thread; the type is deliberately not `Sync` and needs no
/// locking.
#[derive(Default)]
pub struct TapDispatcher {
    in_flight: Option<ActionFuture>,
}

impl TapDispatcher {
    /// Create an idle dispatcher.
    pub fn new() -> Self {
        Self { in_flight: None }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        if self.in_flight.is_some() {
            Phase::Busy
        } else {
            Phase::Idle
        }
    }

    /// True while a deferred action is in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Process one tap against the configured action.
    ///
    /// Implements the dispatch state machine: busy taps are suppressed before
    /// any callback is touched, deferred actions enter `Busy`, synchronous
    /// actions run immediately and pulse `haptics` once.
    pub fn tap(&mut self, action: Option<&mut TapAction>, haptics: &mut dyn Haptics) -> TapOutcome {
        if self.in_flight.is_some() {
            return TapOutcome::Suppressed;
        }
        match action {
            Some(TapAction::Deferred(callback)) => {
                self.in_flight = Some(callback());
                TapOutcome::Started
            }
            Some(TapAction::Sync(callback)) => {
                callback();
                haptics.pulse();
                TapOutcome::Invoked
            }
            None => TapOutcome::NoAction,
        }
    }

    /// Drive the in-flight future, if any.
    ///
    /// Returns `Poll::Ready(())` when the dispatcher is idle, including the
    /// call on which the in-flight future resolves. The host must call this
    /// on the same logical thread that owns the dispatcher.
    pub fn poll(&mut self, cx: &mut Context<'_>) -> Poll<()> {
        let Some(future) = self.in_flight.as_mut() else {
            return Poll::Ready(());
        };
        match future.as_mut().poll(cx) {
            Poll::Ready(()) => {
                self.in_flight = None;
                Poll::Ready(())
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl fmt::Debug for TapDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TapDispatcher")
            .field("phase", &self.phase())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use core::task::Waker;

    /// Future that stays pending until its gate flag is set.
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

    #[test]
    fn sync_tap_invokes_once_and_pulses_once() {
        let count = Rc::new(Cell::new(0_u32));
        let counted = count.clone();
        let mut action = Some(TapAction::sync(move || counted.set(counted.get() + 1)));
        let mut haptics = CountingHaptics(0);
        let mut dispatcher = TapDispatcher::new();

        let outcome = dispatcher.tap(action.as_mut(), &mut haptics);

        assert_eq!(outcome, TapOutcome::Invoked);
        assert_eq!(count.get(), 1, "sync callback runs exactly once per tap");
        assert_eq!(haptics.0, 1, "haptic pulse fires exactly once");
        assert_eq!(dispatcher.phase(), Phase::Idle, "sync taps never enter Busy");
    }

    #[test]
    fn sync_tap_fires_on_every_tap() {
        let count = Rc::new(Cell::new(0_u32));
        let counted = count.clone();
        let mut action = Some(TapAction::sync(move || counted.set(counted.get() + 1)));
        let mut haptics = CountingHaptics(0);
        let mut dispatcher = TapDispatcher::new();

        for _ in 0..3 {
            let outcome = dispatcher.tap(action.as_mut(), &mut haptics);
            assert_eq!(outcome, TapOutcome::Invoked);
        }

        assert_eq!(count.get(), 3, "one invocation per tap");
        assert_eq!(haptics.0, 3, "one pulse per tap");
    }

    #[test]
    fn deferred_tap_is_single_flight() {
        let gate = Rc::new(Cell::new(false));
        let invocations = Rc::new(Cell::new(0_u32));

        let gate_in_action = gate.clone();
        let counted = invocations.clone();
        let mut action = Some(TapAction::deferred(move || {
            counted.set(counted.get() + 1);
            Gate(gate_in_action.clone())
        }));
        let mut dispatcher = TapDispatcher::new();

        assert_eq!(
            dispatcher.tap(action.as_mut(), &mut NoHaptics),
            TapOutcome::Started
        );
        assert!(dispatcher.is_busy(), "deferred tap enters Busy");

        // Second tap before resolution: dropped, no second invocation.
        assert_eq!(
            dispatcher.tap(action.as_mut(), &mut NoHaptics),
            TapOutcome::Suppressed
        );
        assert_eq!(invocations.get(), 1, "callback body executes exactly once");

        // Still pending until the gate opens.
        assert_eq!(dispatcher.poll(&mut cx()), Poll::Pending);
        assert!(dispatcher.is_busy());

        gate.set(true);
        assert_eq!(dispatcher.poll(&mut cx()), Poll::Ready(()));
        assert_eq!(dispatcher.phase(), Phase::Idle, "Busy clears on resolution");
        assert_eq!(invocations.get(), 1);
    }

    #[test]
    fn deferred_tap_accepts_again_after_resolution() {
        let invocations = Rc::new(Cell::new(0_u32));
        let counted = invocations.clone();
        let mut action = Some(TapAction::deferred(move || {
            counted.set(counted.get() + 1);
            async {}
        }));
        let mut dispatcher = TapDispatcher::new();

        assert_eq!(
            dispatcher.tap(action.as_mut(), &mut NoHaptics),
            TapOutcome::Started
        );
        assert_eq!(dispatcher.poll(&mut cx()), Poll::Ready(()));

        assert_eq!(
            dispatcher.tap(action.as_mut(), &mut NoHaptics),
            TapOutcome::Started
        );
        assert_eq!(invocations.get(), 2, "a new tap is accepted once idle again");
    }

    #[test]
    fn deferred_tap_does_not_pulse_haptics() {
        let mut action = Some(TapAction::deferred(|| async {}));
        let mut haptics = CountingHaptics(0);
        let mut dispatcher = TapDispatcher::new();

        dispatcher.tap(action.as_mut(), &mut haptics);
        dispatcher.poll(&mut cx());

        assert_eq!(haptics.0, 0, "only sync invocations pulse");
    }

    #[test]
    fn no_action_is_a_no_op() {
        let mut dispatcher = TapDispatcher::new();
        let outcome = dispatcher.tap(None, &mut NoHaptics);

        assert_eq!(outcome, TapOutcome::NoAction);
        assert_eq!(dispatcher.phase(), Phase::Idle);
    }

    #[test]
    fn poll_while_idle_is_ready() {
        let mut dispatcher = TapDispatcher::new();
        assert_eq!(dispatcher.poll(&mut cx()), Poll::Ready(()));
    }

    #[test]
    fn suppressed_tap_never_touches_sync_callback_while_busy() {
        // A dispatcher made busy by a deferred action must not run a sync
        // callback either; the gate applies before the action is inspected.
        let gate = Rc::new(Cell::new(false));
        let mut deferred = Some(TapAction::deferred({
            let gate = gate.clone();
            move || Gate(gate.clone())
        }));
        let mut dispatcher = TapDispatcher::new();
        dispatcher.tap(deferred.as_mut(), &mut NoHaptics);

        let ran = Rc::new(Cell::new(false));
        let flagged = ran.clone();
        let mut sync = Some(TapAction::sync(move || flagged.set(true)));
        let outcome = dispatcher.tap(sync.as_mut(), &mut NoHaptics);

        assert_eq!(outcome, TapOutcome::Suppressed);
        assert!(!ran.get(), "busy gate precedes callback dispatch");
    }
}
