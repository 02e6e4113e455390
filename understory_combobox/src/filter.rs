// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Option filtering: compute the menu contents from the catalog, the query
//! text and the current selection.
//!
//! ## Rules
//!
//! - A non-empty query keeps only options whose label contains it as a
//!   substring (case-sensitive, unanchored).
//! - In multi mode, options whose value is already selected are excluded.
//! - Catalog order is always preserved.
//! - When nothing remains *and* every catalog option is selected, the result
//!   reports [`VisibleOptions::is_all_selected`] so renderers can show an
//!   explanatory message instead of a plain empty list.
//!
//! ## Minimal example
//!
//! ```
//! use understory_combobox::{SelectOption, SelectionValue, visible_options};
//!
//! let catalog = [
//!     SelectOption::labeled("red"),
//!     SelectOption::labeled("blue"),
//!     SelectOption::labeled("green"),
//! ];
//! let selection = SelectionValue::Multi(Some(vec![catalog[0].clone()]));
//!
//! let visible = visible_options(&catalog, "e", &selection);
//! let labels: Vec<&str> = visible.iter().map(|o| o.label()).collect();
//! assert_eq!(labels, ["blue", "green"]);
//! assert!(!visible.is_all_selected());
//! ```

use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::{OptionValue, SelectOption, SelectionValue};

/// One entry in the visible menu list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VisibleOption<'a> {
    /// The catalog option.
    pub option: &'a SelectOption,
    /// Position of `option` within the catalog.
    pub index: usize,
    /// `true` if this entry is the current single-mode selection.
    ///
    /// Multi mode never marks entries; selected options are excluded instead.
    pub is_selected: bool,
}

impl<'a> VisibleOption<'a> {
    /// Returns the option label.
    #[must_use]
    pub fn label(&self) -> &'a str {
        self.option.label()
    }

    /// Returns the option value.
    #[must_use]
    pub fn value(&self) -> &'a OptionValue {
        self.option.value()
    }
}

/// The filtered menu contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleOptions<'a> {
    entries: Vec<VisibleOption<'a>>,
    all_selected: bool,
}

impl<'a> VisibleOptions<'a> {
    /// Returns the visible entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[VisibleOption<'a>] {
        &self.entries
    }

    /// Returns an iterator over the visible entries.
    pub fn iter(&self) -> core::slice::Iter<'_, VisibleOption<'a>> {
        self.entries.iter()
    }

    /// Returns the number of visible entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entry is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the list is empty because every catalog option is
    /// already selected.
    ///
    /// An empty list caused by a query that matches nothing reports `false`.
    #[must_use]
    pub fn is_all_selected(&self) -> bool {
        self.all_selected
    }
}

impl<'a, 'b> IntoIterator for &'b VisibleOptions<'a> {
    type Item = &'b VisibleOption<'a>;
    type IntoIter = core::slice::Iter<'b, VisibleOption<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Computes the visible subset of `catalog` for `query` and `selection`.
///
/// The selection variant decides the mode: [`SelectionValue::Multi`] excludes
/// already-selected values, [`SelectionValue::Single`] never excludes.
#[must_use]
pub fn visible_options<'a>(
    catalog: &'a [SelectOption],
    query: &str,
    selection: &SelectionValue,
) -> VisibleOptions<'a> {
    let matches_query = |option: &SelectOption| query.is_empty() || option.label().contains(query);

    match selection {
        SelectionValue::Single(current) => {
            let current = current.as_ref().map(SelectOption::value);
            let entries = catalog
                .iter()
                .enumerate()
                .filter(|&(_, option)| matches_query(option))
                .map(|(index, option)| VisibleOption {
                    option,
                    index,
                    is_selected: current == Some(option.value()),
                })
                .collect();
            VisibleOptions {
                entries,
                all_selected: false,
            }
        }
        SelectionValue::Multi(selected) => {
            let started = selected.is_some();
            let selected = selected.as_deref().unwrap_or_default();
            let excluded: HashSet<&OptionValue> = selected.iter().map(SelectOption::value).collect();
            let entries: Vec<_> = catalog
                .iter()
                .enumerate()
                .filter(|&(_, option)| matches_query(option) && !excluded.contains(option.value()))
                .map(|(index, option)| VisibleOption {
                    option,
                    index,
                    is_selected: false,
                })
                .collect();
            let all_selected = started && entries.is_empty() && selected.len() == catalog.len();
            VisibleOptions {
                entries,
                all_selected,
            }
        }
    }
}
