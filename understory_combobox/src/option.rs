// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selectable options: a display label plus a stable identity value.

use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// The identity key of a [`SelectOption`].
///
/// Options are compared by value, never by label. Hosts that feed options from
/// JSON get either a string or a number here; with the `serde` feature the
/// two forms deserialize untagged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum OptionValue {
    /// A textual key.
    Text(String),
    /// A numeric key.
    Number(NumberValue),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) => fmt::Display::fmt(n, f),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Number(NumberValue::new(value))
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Number(NumberValue::new(value.into()))
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        Self::Number(NumberValue::new(value.into()))
    }
}

/// A double-precision numeric key with total equality.
///
/// `-0.0` equals `0.0`, and every NaN equals every other NaN, so the key can
/// be hashed and used for identity like a string.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NumberValue(f64);

impl NumberValue {
    /// Wraps a number.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the wrapped number.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    fn canonical(self) -> f64 {
        if self.0.is_nan() {
            f64::NAN
        } else if self.0 == 0.0 {
            0.0
        } else {
            self.0
        }
    }
}

impl PartialEq for NumberValue {
    fn eq(&self, other: &Self) -> bool {
        self.canonical().to_bits() == other.canonical().to_bits()
    }
}

impl Eq for NumberValue {}

impl Hash for NumberValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().to_bits().hash(state);
    }
}

impl PartialOrd for NumberValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NumberValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().total_cmp(&other.canonical())
    }
}

impl fmt::Display for NumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.canonical(), f)
    }
}

impl PartialEq<str> for OptionValue {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Self::Text(text) if text == other)
    }
}

impl PartialEq<&str> for OptionValue {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// A label/value pair the user may select.
///
/// Immutable once constructed. Uniqueness of `value` within a catalog is the
/// caller's responsibility; the engine treats `value` as the identity key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct SelectOption {
    label: String,
    value: OptionValue,
}

impl SelectOption {
    /// Creates an option from a label and a value.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Creates an option whose value is its label.
    #[must_use]
    pub fn labeled(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: OptionValue::Text(label.clone()),
            label,
        }
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the identity value.
    #[must_use]
    pub fn value(&self) -> &OptionValue {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn labeled_uses_label_as_value() {
        let red = SelectOption::labeled("red");
        assert_eq!(red.label(), "red");
        assert_eq!(red.value(), &OptionValue::Text("red".into()));
        assert_eq!(red, SelectOption::new("red", "red"));
    }

    #[test]
    fn values_compare_by_kind() {
        assert_ne!(OptionValue::from("1"), OptionValue::from(1));
        assert_eq!(OptionValue::from(7_i32), OptionValue::from(7.0));
        assert!(OptionValue::from("blue") == "blue");
    }

    #[test]
    fn display_matches_raw_value() {
        assert_eq!(OptionValue::from("green").to_string(), "green");
        assert_eq!(OptionValue::from(-3).to_string(), "-3");
        assert_eq!(OptionValue::from(1.5).to_string(), "1.5");
        assert_eq!(OptionValue::from(-0.0).to_string(), "0");
    }

    #[test]
    fn fractional_numbers_are_keys() {
        let mut seen = hashbrown::HashSet::new();
        assert!(seen.insert(OptionValue::from(1.5)));
        assert!(!seen.insert(OptionValue::from(1.5)));
        assert!(seen.insert(OptionValue::from(2.5)));
        assert_ne!(OptionValue::from(1.5), OptionValue::from(1));
    }

    #[test]
    fn signed_zero_and_nan_are_single_keys() {
        assert_eq!(NumberValue::new(-0.0), NumberValue::new(0.0));
        assert_eq!(NumberValue::new(f64::NAN), NumberValue::new(-f64::NAN));
        assert!(NumberValue::new(-1.0) < NumberValue::new(0.5));

        let mut seen = hashbrown::HashSet::new();
        assert!(seen.insert(NumberValue::new(0.0)));
        assert!(!seen.insert(NumberValue::new(-0.0)));
    }
}
