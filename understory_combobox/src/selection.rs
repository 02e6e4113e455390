// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection state: the committed choice(s) and the mode-aware mutations on it.
//!
//! [`SelectionValue`] is resolved once from the widget mode and never changes
//! shape afterwards. [`SelectionStore`] owns it together with the clearable and
//! disabled policy, and reports whether each mutation was committed so the
//! caller can notify listeners.
//!
//! ## Rejections
//!
//! Every mutation is a silent no-op (returns `false`, leaves the revision
//! untouched) when:
//! - the store is disabled (checked on entry of every call),
//! - `clear` is called on a non-clearable store,
//! - `remove` finds no matching value, or `pop_last` finds nothing to pop,
//! - a multi-only mutation is called on a single store.
//!
//! ## Minimal example
//!
//! ```
//! use understory_combobox::{SelectOption, SelectionStore};
//!
//! let red = SelectOption::labeled("red");
//! let blue = SelectOption::labeled("blue");
//!
//! let mut store = SelectionStore::multi(Some(Vec::new()), true);
//! assert!(store.select(red.clone()));
//! assert!(store.select(blue));
//! assert!(store.pop_last());
//! assert_eq!(store.value().options(), &[red]);
//!
//! assert!(store.clear());
//! assert!(store.value().options().is_empty());
//! ```

use alloc::vec::Vec;

use crate::{OptionValue, SelectOption};

/// The committed selection, tagged by mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionValue {
    /// Single mode: one option or nothing.
    Single(Option<SelectOption>),
    /// Multi mode: options in selection order.
    ///
    /// `None` is the "never set" state and is distinct from an empty sequence,
    /// which is what clearing or removing the last option produces.
    Multi(Option<Vec<SelectOption>>),
}

impl SelectionValue {
    /// Returns `true` for the multi variant.
    #[must_use]
    pub fn is_multi(&self) -> bool {
        matches!(self, Self::Multi(_))
    }

    /// Returns `true` if the value is null: nothing selected in single mode, or
    /// the unset sentinel in multi mode.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Single(None) | Self::Multi(None))
    }

    /// Returns the selected options as a slice, in selection order.
    ///
    /// Null and empty values both yield an empty slice.
    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        match self {
            Self::Single(Some(option)) => core::slice::from_ref(option),
            Self::Multi(Some(options)) => options,
            Self::Single(None) | Self::Multi(None) => &[],
        }
    }

    /// Returns the single-mode option, if this is a single value with a selection.
    #[must_use]
    pub fn single(&self) -> Option<&SelectOption> {
        match self {
            Self::Single(option) => option.as_ref(),
            Self::Multi(_) => None,
        }
    }

    /// Returns the multi-mode sequence, if this is a multi value that has been set.
    #[must_use]
    pub fn multi(&self) -> Option<&[SelectOption]> {
        match self {
            Self::Multi(options) => options.as_deref(),
            Self::Single(_) => None,
        }
    }

    /// Returns the number of selected options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options().len()
    }

    /// Returns `true` if no option is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options().is_empty()
    }

    /// Returns `true` if an option with `value` is selected.
    #[must_use]
    pub fn contains(&self, value: &OptionValue) -> bool {
        self.options().iter().any(|option| option.value() == value)
    }
}

/// Holds the selection and applies mode-aware mutations.
#[derive(Clone, Debug)]
pub struct SelectionStore {
    value: SelectionValue,
    clearable: bool,
    disabled: bool,
    revision: u64,
}

impl SelectionStore {
    /// Creates a single-mode store.
    #[must_use]
    pub fn single(initial: Option<SelectOption>, clearable: bool) -> Self {
        Self::with_value(SelectionValue::Single(initial), clearable)
    }

    /// Creates a multi-mode store. `None` starts in the unset state.
    #[must_use]
    pub fn multi(initial: Option<Vec<SelectOption>>, clearable: bool) -> Self {
        Self::with_value(SelectionValue::Multi(initial), clearable)
    }

    /// Creates a store around an existing value; the variant fixes the mode.
    #[must_use]
    pub fn with_value(value: SelectionValue, clearable: bool) -> Self {
        Self {
            value,
            clearable,
            disabled: false,
            revision: 0,
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> &SelectionValue {
        &self.value
    }

    /// Returns `true` if [`SelectionStore::clear`] is permitted.
    #[must_use]
    pub fn is_clearable(&self) -> bool {
        self.clearable
    }

    /// Returns `true` if mutations are currently rejected.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enables or disables mutation. Takes effect on the next call.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Returns the commit counter.
    ///
    /// Bumped once per committed mutation, including commits that leave an
    /// equal value behind (clearing an already-empty selection still counts,
    /// since listeners are notified).
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Selects `option`.
    ///
    /// Single mode replaces the current value. Multi mode appends to the end,
    /// starting a new sequence from the unset state. Duplicates are not
    /// filtered here: the menu never offers an already-selected option.
    pub fn select(&mut self, option: SelectOption) -> bool {
        if self.disabled {
            return false;
        }
        match &mut self.value {
            SelectionValue::Single(current) => *current = Some(option),
            SelectionValue::Multi(current) => current.get_or_insert_with(Vec::new).push(option),
        }
        self.commit()
    }

    /// Removes the first selected option whose value is `value` (multi only).
    pub fn remove(&mut self, value: &OptionValue) -> bool {
        if self.disabled {
            return false;
        }
        let SelectionValue::Multi(Some(options)) = &mut self.value else {
            return false;
        };
        let Some(idx) = options.iter().position(|option| option.value() == value) else {
            return false;
        };
        options.remove(idx);
        self.commit()
    }

    /// Removes the most recently selected option (multi only).
    pub fn pop_last(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        let SelectionValue::Multi(Some(options)) = &mut self.value else {
            return false;
        };
        if options.pop().is_none() {
            return false;
        }
        self.commit()
    }

    /// Clears the selection: null in single mode, an empty sequence in multi mode.
    ///
    /// Rejected unless the store is clearable.
    pub fn clear(&mut self) -> bool {
        if self.disabled || !self.clearable {
            return false;
        }
        match &mut self.value {
            SelectionValue::Single(current) => *current = None,
            SelectionValue::Multi(current) => *current = Some(Vec::new()),
        }
        self.commit()
    }

    fn commit(&mut self) -> bool {
        self.revision = self.revision.wrapping_add(1);
        tracing::trace!(revision = self.revision, selected = self.value.len(), "selection committed");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn red() -> SelectOption {
        SelectOption::labeled("red")
    }

    fn blue() -> SelectOption {
        SelectOption::labeled("blue")
    }

    #[test]
    fn single_select_replaces() {
        let mut store = SelectionStore::single(None, false);
        assert!(store.select(red()));
        assert!(store.select(blue()));
        assert_eq!(store.value(), &SelectionValue::Single(Some(blue())));
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn multi_select_appends_from_unset() {
        let mut store = SelectionStore::multi(None, false);
        assert!(store.value().is_null());
        assert!(store.select(red()));
        assert!(store.select(blue()));
        assert_eq!(store.value().multi(), Some(&[red(), blue()][..]));
    }

    #[test]
    fn remove_takes_first_match_only() {
        let mut store = SelectionStore::multi(Some(vec![red(), blue(), red()]), false);
        assert!(store.remove(&"red".into()));
        assert_eq!(store.value().options(), &[blue(), red()]);

        let rev = store.revision();
        assert!(!store.remove(&"green".into()));
        assert_eq!(store.revision(), rev);
    }

    #[test]
    fn remove_last_leaves_empty_not_null() {
        let mut store = SelectionStore::multi(Some(vec![red()]), false);
        assert!(store.remove(red().value()));
        assert_eq!(store.value(), &SelectionValue::Multi(Some(Vec::new())));
    }

    #[test]
    fn remove_and_pop_on_unset_are_noops() {
        let mut store = SelectionStore::multi(None, true);
        assert!(!store.remove(red().value()));
        assert!(!store.pop_last());
        assert!(store.value().is_null());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn multi_only_mutations_ignore_single_mode() {
        let mut store = SelectionStore::single(Some(red()), true);
        assert!(!store.remove(red().value()));
        assert!(!store.pop_last());
        assert_eq!(store.value().single(), Some(&red()));
    }

    #[test]
    fn clear_requires_clearable() {
        let mut store = SelectionStore::single(Some(red()), false);
        assert!(!store.clear());
        assert_eq!(store.value().single(), Some(&red()));

        let mut store = SelectionStore::single(Some(red()), true);
        assert!(store.clear());
        assert_eq!(store.value(), &SelectionValue::Single(None));
    }

    #[test]
    fn clear_multi_yields_empty_sequence() {
        let mut store = SelectionStore::multi(None, true);
        assert!(store.clear());
        assert_eq!(store.value(), &SelectionValue::Multi(Some(Vec::new())));
        assert!(!store.value().is_null());

        // Clearing again still commits.
        assert!(store.clear());
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn disabled_rejects_everything() {
        let mut store = SelectionStore::multi(Some(vec![red()]), true);
        store.set_disabled(true);
        assert!(!store.select(blue()));
        assert!(!store.remove(red().value()));
        assert!(!store.pop_last());
        assert!(!store.clear());
        assert_eq!(store.value().options(), &[red()]);
        assert_eq!(store.revision(), 0);

        store.set_disabled(false);
        assert!(store.select(blue()));
    }

    #[test]
    fn contains_matches_by_value() {
        let value = SelectionValue::Multi(Some(vec![SelectOption::new("Red", "red")]));
        assert!(value.contains(&"red".into()));
        assert!(!value.contains(&"Red".into()));
    }
}
