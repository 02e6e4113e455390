// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

use crate::OptionValue;

/// Reasons a [`SelectEngineBuilder`](crate::SelectEngineBuilder) refuses to build.
///
/// Only construction can fail. Runtime operations that do not apply are
/// silent no-ops instead of errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The default value does not have the shape the mode requires.
    #[error("{} widget given a {} default value", mode_name(.multi), shape_name(.multi))]
    ShapeMismatch {
        /// `true` if the widget is in multi mode.
        multi: bool,
    },
    /// The multi default selects the same value twice.
    #[error("default selection contains `{value}` more than once")]
    DuplicateDefault {
        /// The repeated value.
        value: OptionValue,
    },
}

fn mode_name(multi: &bool) -> &'static str {
    if *multi { "multi-select" } else { "single-select" }
}

fn shape_name(multi: &bool) -> &'static str {
    if *multi { "single-option" } else { "multi-option" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_mode() {
        assert_eq!(
            ConfigError::ShapeMismatch { multi: true }.to_string(),
            "multi-select widget given a single-option default value"
        );
        assert_eq!(
            ConfigError::DuplicateDefault {
                value: "red".into()
            }
            .to_string(),
            "default selection contains `red` more than once"
        );
    }
}
