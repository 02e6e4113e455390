// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-widget engine: selection, interaction and query composed into one unit.
//!
//! Hosts forward their events to the `SelectEngine` handlers, apply the
//! returned [`Effects`], and render from [`SelectEngine::view`]. The change
//! listener is called synchronously whenever the selection commits.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::config::ChangeListener;
use crate::interaction::{
    ClearEvent, ContainerEvent, Effect, Effects, InteractionController, Phase, Timing,
};
use crate::{
    OptionValue, SelectConfig, SelectEngineBuilder, SelectOption, SelectionStore, SelectionValue,
    VisibleOptions, visible_options,
};

/// A key press in the query input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Backspace: pops the last multi selection when the query is empty.
    Backspace,
    /// Any other key; the engine ignores it.
    Other,
}

/// Everything a renderer needs to draw the widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel<'a> {
    /// Menu contents for the current query and selection.
    pub visible_options: VisibleOptions<'a>,
    /// The committed selection.
    pub selection: &'a SelectionValue,
    /// Whether the menu (and the open-state dropdown indicator) is shown.
    pub is_open: bool,
    /// Whether the widget holds focus.
    pub is_focused: bool,
    /// Current query text.
    pub query: &'a str,
    /// Show the "every option is already selected" message instead of a plain empty list.
    pub is_all_selected: bool,
    /// The query input only accepts edits while the menu is open.
    pub is_read_only: bool,
    /// Whether the widget is disabled.
    pub is_disabled: bool,
    /// Whether to render the clear affordance.
    pub show_clear: bool,
    /// Text to show in the empty input.
    pub placeholder: &'a str,
    /// Form field name.
    pub name: &'a str,
}

/// Stateful interaction engine for one combobox instance.
///
/// Instances share nothing; each owns its selection, interaction state and query.
pub struct SelectEngine {
    catalog: Vec<SelectOption>,
    config: SelectConfig,
    store: SelectionStore,
    controller: InteractionController,
    query: String,
    on_change: Option<ChangeListener>,
}

impl fmt::Debug for SelectEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectEngine")
            .field("catalog", &self.catalog)
            .field("config", &self.config)
            .field("store", &self.store)
            .field("controller", &self.controller)
            .field("query", &self.query)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl SelectEngine {
    /// Starts building an engine over `catalog`.
    #[must_use]
    pub fn builder(catalog: impl IntoIterator<Item = SelectOption>) -> SelectEngineBuilder {
        SelectEngineBuilder::new(catalog)
    }

    pub(crate) fn from_parts(
        catalog: Vec<SelectOption>,
        config: SelectConfig,
        initial: SelectionValue,
        on_change: Option<ChangeListener>,
    ) -> Self {
        let mut store = SelectionStore::with_value(initial, config.is_clearable);
        store.set_disabled(config.is_disabled);
        Self {
            catalog,
            config,
            store,
            controller: InteractionController::new(),
            query: String::new(),
            on_change,
        }
    }

    /// Returns the option catalog.
    #[must_use]
    pub fn catalog(&self) -> &[SelectOption] {
        &self.catalog
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// Returns the committed selection.
    #[must_use]
    pub fn selection(&self) -> &SelectionValue {
        self.store.value()
    }

    /// Returns the number of committed selection changes so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    /// Returns the query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the focus/menu phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    /// Returns `true` if the menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    /// Returns `true` if the widget holds focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.controller.is_focused()
    }

    /// Returns `true` if the widget is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.store.is_disabled()
    }

    /// Enables or disables the widget. Every handler reads this on entry.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.is_disabled = disabled;
        self.store.set_disabled(disabled);
    }

    /// Returns the menu contents for the current query and selection.
    #[must_use]
    pub fn visible_options(&self) -> VisibleOptions<'_> {
        visible_options(&self.catalog, &self.query, self.store.value())
    }

    /// Builds the view model for rendering.
    #[must_use]
    pub fn view(&self) -> ViewModel<'_> {
        let visible_options = self.visible_options();
        let selection = self.store.value();
        let placeholder = match selection {
            SelectionValue::Single(Some(option)) => option.label(),
            SelectionValue::Multi(Some(options)) if !options.is_empty() => "",
            _ => self.config.placeholder.as_str(),
        };
        ViewModel {
            is_all_selected: visible_options.is_all_selected(),
            visible_options,
            selection,
            is_open: self.is_open(),
            is_focused: self.is_focused(),
            query: &self.query,
            is_read_only: !self.is_open(),
            is_disabled: self.is_disabled(),
            show_clear: self.store.is_clearable() && !self.is_disabled() && !selection.is_null(),
            placeholder,
            name: &self.config.name,
        }
    }

    /// Handles a click or touch on the widget body.
    ///
    /// Opening from the unfocused state also resets the query, so the menu
    /// always reopens on the full list.
    pub fn activate_container(&mut self, event: ContainerEvent) -> Effects {
        let was_focused = self.controller.is_focused();
        let effects = self.controller.container_activate(event, self.is_disabled());
        if !was_focused && self.controller.is_open() {
            self.query.clear();
        }
        effects
    }

    /// Handles a mouse-down on the menu surface.
    ///
    /// Deliver this before the click that follows it (see
    /// [`SelectEngine::activate_option`]).
    pub fn mouse_down_menu(&mut self) -> Effects {
        if self.is_disabled() {
            return Effects::new();
        }
        self.controller.menu_mouse_down()
    }

    /// Handles a click on a menu option: selects it, resets the query, closes
    /// the menu and keeps focus.
    pub fn activate_option(&mut self, option: &SelectOption) -> Effects {
        if !self.store.select(option.clone()) {
            return Effects::new();
        }
        self.notify();
        self.query.clear();
        self.controller.option_picked();
        Effects::from_slice(&[Effect::FocusInput(Timing::Immediate)])
    }

    /// Like [`SelectEngine::activate_option`], addressing the option by catalog index.
    ///
    /// Out-of-range indices are ignored.
    pub fn activate_option_at(&mut self, index: usize) -> Effects {
        match self.catalog.get(index).cloned() {
            Some(option) => self.activate_option(&option),
            None => Effects::new(),
        }
    }

    /// Replaces the query text.
    ///
    /// Returns `false` and leaves the query alone while the input is read-only
    /// (menu closed) or the widget is disabled.
    pub fn change_query(&mut self, text: impl Into<String>) -> bool {
        if self.is_disabled() || !self.is_open() {
            return false;
        }
        self.query = text.into();
        tracing::trace!(query = %self.query, "query changed");
        true
    }

    /// Handles a key press in the query input.
    pub fn key_press(&mut self, key: Key) -> Effects {
        if key == Key::Backspace {
            self.pop_last();
        }
        Effects::new()
    }

    /// Removes the most recent multi selection, but only while the query is empty.
    ///
    /// Returns `true` if the selection changed.
    pub fn pop_last(&mut self) -> bool {
        if !self.query.is_empty() || !self.store.pop_last() {
            return false;
        }
        self.notify();
        true
    }

    /// Handles the remove affordance on a selected multi option.
    ///
    /// The returned effects always suppress the default action so the
    /// bubbling click does not also toggle the container.
    pub fn remove(&mut self, value: &OptionValue) -> Effects {
        if self.store.remove(value) {
            self.notify();
        }
        Effects::from_slice(&[Effect::PreventDefault])
    }

    /// Handles the clear affordance.
    ///
    /// Ignored when disabled, not clearable, or pressed with a non-primary
    /// mouse button. Otherwise clears, notifies, and asks for the input to be
    /// refocused: immediately for touch, on the next turn for mouse.
    pub fn activate_clear(&mut self, event: ClearEvent) -> Effects {
        if !event.is_actionable() || !self.store.clear() {
            return Effects::new();
        }
        self.notify();
        InteractionController::clear_effects(event)
    }

    /// Handles loss of focus. Always closes and unfocuses, even when disabled.
    pub fn blur(&mut self) -> Effects {
        self.controller.blur();
        Effects::new()
    }

    fn notify(&mut self) {
        let value = self.store.value();
        tracing::debug!(
            name = %self.config.name,
            selected = value.len(),
            revision = self.store.revision(),
            "selection changed"
        );
        if let Some(listener) = self.on_change.as_mut() {
            listener(value);
        }
    }
}
