// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction state: focus and menu visibility driven by host pointer events.
//!
//! The controller tracks a [`Phase`], the reachable combinations of focus and
//! menu visibility. "Open but unfocused" has no representation: opening always
//! focuses and blurring always closes.
//!
//! Each handler returns the [`Effects`] the host must carry out, such as
//! suppressing the native default action or moving keyboard focus. Focus
//! requests carry a [`Timing`]; [`Timing::NextTurn`] asks the host to run the
//! request after the current event dispatch has fully finished, which is how a
//! clear interaction wins against the toolkit's own mouse-up/blur handling.
//!
//! ## Event ordering
//!
//! Pressing on the menu surface must be reported through
//! [`InteractionController::menu_mouse_down`] before the paired click is
//! delivered. The mouse-down keeps focus in the widget (and suppresses the
//! native blur), so the click that follows still finds an open, focused menu.
//!
//! ## Minimal example
//!
//! ```
//! use understory_combobox::interaction::{ContainerEvent, Effect, InteractionController, Phase, TargetKind, Timing};
//!
//! let mut ctl = InteractionController::new();
//! let effects = ctl.container_activate(ContainerEvent::new(TargetKind::Other), false);
//! assert_eq!(ctl.phase(), Phase::Open);
//! assert_eq!(effects.as_slice(), &[Effect::FocusInput(Timing::Immediate), Effect::PreventDefault]);
//!
//! ctl.blur();
//! assert_eq!(ctl.phase(), Phase::Idle);
//! ```

use smallvec::SmallVec;

/// Reachable focus/menu combinations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Unfocused with the menu closed. The initial phase.
    #[default]
    Idle,
    /// Focused with the menu open.
    Open,
    /// Focused with the menu closed, typically right after picking an option.
    Focused,
}

impl Phase {
    /// Returns `true` if the widget holds focus.
    #[must_use]
    pub fn is_focused(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Returns `true` if the menu is visible.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// When a focus request should run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Timing {
    /// Within the current event dispatch.
    Immediate,
    /// After the current event dispatch completes (timer, microtask, or frame
    /// callback, at the host's choice).
    ///
    /// Once scheduled the request always runs; hosts should treat a target that
    /// has gone away in the meantime as a no-op.
    NextTurn,
}

/// A request for the host, produced by a state transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Suppress the native default action of the event being handled.
    PreventDefault,
    /// Stop the event being handled from reaching ancestors.
    StopPropagation,
    /// Move keyboard focus to the query input.
    FocusInput(Timing),
    /// Take keyboard focus away from the query input.
    BlurInput,
}

/// Effects produced by one transition, in the order they should be applied.
pub type Effects = SmallVec<[Effect; 4]>;

/// What a container pointer event landed on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// The single-line query input.
    TextInput,
    /// A multi-line text area.
    TextArea,
    /// Anything else inside the container (tags, icons, padding).
    #[default]
    Other,
}

impl TargetKind {
    /// Returns `true` for editable text targets, whose native handling is left alone.
    #[must_use]
    pub fn is_text(self) -> bool {
        matches!(self, Self::TextInput | Self::TextArea)
    }
}

/// A click or touch on the widget body.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ContainerEvent {
    /// The element the event was dispatched to.
    pub target: TargetKind,
    /// `true` if an inner handler already suppressed the default action.
    ///
    /// Such events are ignored, which is how the clear and remove affordances
    /// keep the bubbling click from also toggling the container.
    pub default_prevented: bool,
}

impl ContainerEvent {
    /// Creates a fresh event on `target`.
    #[must_use]
    pub fn new(target: TargetKind) -> Self {
        Self {
            target,
            default_prevented: false,
        }
    }

    /// Marks the event as already default-prevented.
    #[must_use]
    pub fn prevented(mut self) -> Self {
        self.default_prevented = true;
        self
    }
}

/// The kind of pointer event that reached the clear affordance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// A mouse event carrying the pressed button index (0 is primary).
    Mouse {
        /// Button index as reported by the host.
        button: u16,
    },
    /// A touch-end event.
    Touch,
}

/// A pointer interaction with the clear affordance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClearEvent {
    /// The kind of pointer event.
    pub kind: PointerKind,
}

impl ClearEvent {
    /// A mouse event with `button`.
    #[must_use]
    pub fn mouse(button: u16) -> Self {
        Self {
            kind: PointerKind::Mouse { button },
        }
    }

    /// A primary-button mouse event.
    #[must_use]
    pub fn primary() -> Self {
        Self::mouse(0)
    }

    /// A touch-end event.
    #[must_use]
    pub fn touch() -> Self {
        Self {
            kind: PointerKind::Touch,
        }
    }

    /// Returns `true` if the clear should proceed: touch, or the primary mouse button.
    #[must_use]
    pub fn is_actionable(self) -> bool {
        match self.kind {
            PointerKind::Touch => true,
            PointerKind::Mouse { button } => button == 0,
        }
    }

    /// Returns the timing for the refocus that follows a clear.
    ///
    /// Touch-end refocuses immediately; everything else waits a turn so the
    /// host's own mouse-up/blur processing cannot steal focus back.
    #[must_use]
    pub fn refocus_timing(self) -> Timing {
        match self.kind {
            PointerKind::Touch => Timing::Immediate,
            PointerKind::Mouse { .. } => Timing::NextTurn,
        }
    }
}

/// Focus/menu state machine for one widget instance.
#[derive(Clone, Debug, Default)]
pub struct InteractionController {
    phase: Phase,
}

impl InteractionController {
    /// Creates a controller in [`Phase::Idle`].
    #[must_use]
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` if the widget holds focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.phase.is_focused()
    }

    /// Returns `true` if the menu is visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase.is_open()
    }

    /// Handles a click or touch on the container.
    ///
    /// From [`Phase::Idle`] this always opens and focuses; from any focused
    /// phase it closes and unfocuses. Disabled widgets and already
    /// default-prevented events are ignored.
    pub fn container_activate(&mut self, event: ContainerEvent, disabled: bool) -> Effects {
        let mut effects = Effects::new();
        if disabled || event.default_prevented {
            return effects;
        }

        if self.phase.is_focused() {
            self.transition(Phase::Idle);
            effects.push(Effect::BlurInput);
        } else {
            self.transition(Phase::Open);
            effects.push(Effect::FocusInput(Timing::Immediate));
        }

        if !event.target.is_text() {
            effects.push(Effect::PreventDefault);
        }
        effects
    }

    /// Settles the state after an option was picked: menu closed, focus kept.
    pub fn option_picked(&mut self) {
        self.transition(Phase::Focused);
    }

    /// Handles a mouse-down on the menu surface.
    ///
    /// Must be delivered before the click it precedes. Keeps focus inside the
    /// widget and suppresses the native blur that would otherwise close the
    /// menu before the click lands.
    pub fn menu_mouse_down(&mut self) -> Effects {
        if !self.phase.is_focused() {
            self.transition(Phase::Focused);
        }
        Effects::from_slice(&[
            Effect::StopPropagation,
            Effect::PreventDefault,
            Effect::FocusInput(Timing::Immediate),
        ])
    }

    /// Handles loss of focus. Always lands in [`Phase::Idle`], even when disabled.
    pub fn blur(&mut self) {
        self.transition(Phase::Idle);
    }

    /// Returns the effects of an accepted clear interaction.
    ///
    /// Gating (disabled, clearable, button) is the caller's job; this only
    /// encodes the pointer handling and refocus timing.
    #[must_use]
    pub fn clear_effects(event: ClearEvent) -> Effects {
        Effects::from_slice(&[
            Effect::PreventDefault,
            Effect::FocusInput(event.refocus_timing()),
        ])
    }

    fn transition(&mut self, next: Phase) {
        if self.phase != next {
            tracing::debug!(from = ?self.phase, to = ?next, "interaction phase changed");
            self.phase = next;
        }
    }
}
