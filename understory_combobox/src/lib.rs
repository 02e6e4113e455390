// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_combobox --heading-base-level=0

//! Understory Combobox: a headless interaction engine for select/combobox widgets.
//!
//! This crate owns the _state machine_ behind a combobox: which options are
//! selected, whether the menu is open, whether the widget holds focus, and what
//! the user has typed into the filter field. It does **not** draw anything or
//! capture input; a host toolkit forwards its events, applies the returned
//! effects, and renders from a [`ViewModel`].
//!
//! The pieces, leaf to root:
//!
//! - [`visible_options`]: pure filtering of the catalog by query and selection.
//! - [`SelectionStore`]: the committed [`SelectionValue`] and its mode-aware mutations.
//! - [`interaction::InteractionController`]: focus and menu visibility, driven by pointer events.
//! - [`SelectEngine`]: all of the above for one widget instance.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_combobox::{SelectEngine, SelectOption};
//! use understory_combobox::interaction::{ContainerEvent, Effect, TargetKind, Timing};
//!
//! let mut engine = SelectEngine::builder([
//!     SelectOption::labeled("red"),
//!     SelectOption::labeled("blue"),
//!     SelectOption::labeled("green"),
//! ])
//! .clearable(true)
//! .build()
//! .unwrap();
//!
//! // Click the widget body: it focuses and opens.
//! let effects = engine.activate_container(ContainerEvent::new(TargetKind::Other));
//! assert!(engine.is_open() && engine.is_focused());
//! assert!(effects.contains(&Effect::FocusInput(Timing::Immediate)));
//!
//! // Type to filter, then pick.
//! engine.change_query("bl");
//! let view = engine.view();
//! assert_eq!(view.visible_options.len(), 1);
//! let blue = view.visible_options.entries()[0].option.clone();
//!
//! engine.mouse_down_menu();
//! engine.activate_option(&blue);
//! assert_eq!(engine.selection().single(), Some(&blue));
//! assert!(!engine.is_open() && engine.is_focused());
//! assert_eq!(engine.query(), "");
//! ```
//!
//! ## Modes
//!
//! The selection shape is fixed when the engine is built:
//!
//! - **Single**: `Option<SelectOption>`. Picking replaces; clearing yields `None`.
//! - **Multi**: `Option<Vec<SelectOption>>` in selection order. `None` means
//!   "never set"; clearing or removing the last option yields an empty vector,
//!   so listeners can tell the two apart. Already-selected options are
//!   excluded from the menu, and Backspace on an empty query pops the last one.
//!
//! Clearing is only possible when the widget is clearable. A disabled widget
//! rejects every mutation and ignores container and clear interaction; blur
//! always applies. Rejected operations are silent: nothing is returned as an
//! error and the change listener is not called.
//!
//! ## Effects and timing
//!
//! Handlers return [`interaction::Effects`], a small list of requests for the
//! host: suppress the native default, stop propagation, move focus to or from
//! the query input. A focus request tagged [`interaction::Timing::NextTurn`]
//! must be scheduled after the current event dispatch (a zero-delay timer, a
//! microtask, or a frame callback); this is what clearing with the mouse uses
//! so the toolkit's own mouse-up handling cannot steal focus back.
//!
//! ## Features
//!
//! - `std` (default): forwards to `tracing/std` and `thiserror/std`.
//! - `serde`: deserialize [`SelectConfig`] and [`SelectOption`] from caller props.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod error;
mod filter;
pub mod interaction;
mod option;
mod selection;

pub use config::{ChangeListener, DEFAULT_PLACEHOLDER, DefaultValue, SelectConfig, SelectEngineBuilder};
pub use engine::{Key, SelectEngine, ViewModel};
pub use error::ConfigError;
pub use filter::{VisibleOption, VisibleOptions, visible_options};
pub use option::{NumberValue, OptionValue, SelectOption};
pub use selection::{SelectionStore, SelectionValue};
