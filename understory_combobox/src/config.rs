// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller configuration and the engine builder.
//!
//! [`SelectConfig`] mirrors the props a host component receives. With the
//! `serde` feature it deserializes from camelCase keys, so props coming from a
//! JSON or script layer can be handed over unchanged:
//!
//! ```json
//! { "isMulti": true, "isClearable": true, "defaultValue": [{ "label": "red", "value": "red" }] }
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashSet;

use crate::{ConfigError, SelectEngine, SelectOption, SelectionValue};

/// The placeholder shown when nothing is selected, unless configured otherwise.
pub const DEFAULT_PLACEHOLDER: &str = "select...";

/// A default selection as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum DefaultValue {
    /// A single option, for single mode.
    One(SelectOption),
    /// A sequence of options, for multi mode.
    Many(Vec<SelectOption>),
}

/// Widget configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SelectConfig {
    /// Multi-choice instead of single-choice.
    pub is_multi: bool,
    /// Offer the clear affordance and allow clearing to null/empty.
    pub is_clearable: bool,
    /// Reject every mutation and ignore container/clear interaction.
    pub is_disabled: bool,
    /// Form field name, passed through to the view.
    pub name: String,
    /// Text shown when nothing is selected.
    pub placeholder: String,
    /// Initial selection; its shape must match `is_multi`.
    pub default_value: Option<DefaultValue>,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            is_multi: false,
            is_clearable: false,
            is_disabled: false,
            name: String::new(),
            placeholder: DEFAULT_PLACEHOLDER.into(),
            default_value: None,
        }
    }
}

impl SelectConfig {
    /// Resolves the default value into the tagged selection for this mode.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ShapeMismatch`] if the default's shape does not match `is_multi`.
    /// - [`ConfigError::DuplicateDefault`] if a multi default repeats a value.
    pub fn initial_selection(&self) -> Result<SelectionValue, ConfigError> {
        match (self.is_multi, &self.default_value) {
            (false, None) => Ok(SelectionValue::Single(None)),
            (false, Some(DefaultValue::One(option))) => Ok(SelectionValue::Single(Some(option.clone()))),
            (true, None) => Ok(SelectionValue::Multi(None)),
            (true, Some(DefaultValue::Many(options))) => {
                let mut seen = HashSet::with_capacity(options.len());
                if let Some(dup) = options.iter().find(|option| !seen.insert(option.value())) {
                    return Err(ConfigError::DuplicateDefault {
                        value: dup.value().clone(),
                    });
                }
                Ok(SelectionValue::Multi(Some(options.clone())))
            }
            (multi, Some(_)) => Err(ConfigError::ShapeMismatch { multi }),
        }
    }
}

/// Listener invoked with every committed selection value.
pub type ChangeListener = Box<dyn FnMut(&SelectionValue)>;

/// Builds a [`SelectEngine`].
///
/// ```
/// use understory_combobox::{SelectEngine, SelectOption};
///
/// let engine = SelectEngine::builder([SelectOption::labeled("red"), SelectOption::labeled("blue")])
///     .multi(true)
///     .clearable(true)
///     .default_multi([SelectOption::labeled("blue")])
///     .on_change(|value| println!("now {} selected", value.len()))
///     .build()
///     .unwrap();
/// assert_eq!(engine.selection().len(), 1);
/// ```
pub struct SelectEngineBuilder {
    catalog: Vec<SelectOption>,
    config: SelectConfig,
    on_change: Option<ChangeListener>,
}

impl fmt::Debug for SelectEngineBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectEngineBuilder")
            .field("catalog", &self.catalog)
            .field("config", &self.config)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl SelectEngineBuilder {
    /// Starts a builder over `catalog` with the default configuration.
    #[must_use]
    pub fn new(catalog: impl IntoIterator<Item = SelectOption>) -> Self {
        Self {
            catalog: catalog.into_iter().collect(),
            config: SelectConfig::default(),
            on_change: None,
        }
    }

    /// Replaces the whole configuration.
    #[must_use]
    pub fn config(mut self, config: SelectConfig) -> Self {
        self.config = config;
        self
    }

    /// Chooses multi or single mode.
    #[must_use]
    pub fn multi(mut self, multi: bool) -> Self {
        self.config.is_multi = multi;
        self
    }

    /// Enables or disables the clear affordance.
    #[must_use]
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.config.is_clearable = clearable;
        self
    }

    /// Starts the widget disabled or enabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.is_disabled = disabled;
        self
    }

    /// Sets the form field name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Sets the empty-selection placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = placeholder.into();
        self
    }

    /// Sets a single-mode default.
    #[must_use]
    pub fn default_single(mut self, option: SelectOption) -> Self {
        self.config.default_value = Some(DefaultValue::One(option));
        self
    }

    /// Sets a multi-mode default. An empty sequence is a real default, not "unset".
    #[must_use]
    pub fn default_multi(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.config.default_value = Some(DefaultValue::Many(options.into_iter().collect()));
        self
    }

    /// Registers the change listener.
    #[must_use]
    pub fn on_change(mut self, listener: impl FnMut(&SelectionValue) + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    /// Validates the configuration and builds the engine.
    ///
    /// # Errors
    ///
    /// See [`SelectConfig::initial_selection`].
    pub fn build(self) -> Result<SelectEngine, ConfigError> {
        let initial = self.config.initial_selection()?;
        Ok(SelectEngine::from_parts(
            self.catalog,
            self.config,
            initial,
            self.on_change,
        ))
    }
}
