// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deserializing caller props into [`SelectConfig`].

#![cfg(feature = "serde")]

use understory_combobox::{
    ConfigError, DefaultValue, OptionValue, SelectConfig, SelectEngine, SelectOption,
    SelectionValue,
};

#[test]
fn empty_object_uses_defaults() {
    let config: SelectConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, SelectConfig::default());
}

#[test]
fn camel_case_multi_props() {
    let config: SelectConfig = serde_json::from_str(
        r#"{
            "isMulti": true,
            "isClearable": true,
            "name": "colors",
            "defaultValue": [
                { "label": "red", "value": "red" },
                { "label": "seven", "value": 7 }
            ]
        }"#,
    )
    .unwrap();

    assert!(config.is_multi);
    assert!(config.is_clearable);
    assert!(!config.is_disabled);
    assert_eq!(config.name, "colors");
    assert_eq!(
        config.default_value,
        Some(DefaultValue::Many(vec![
            SelectOption::labeled("red"),
            SelectOption::new("seven", 7),
        ]))
    );

    let engine = SelectEngine::builder([SelectOption::labeled("red")])
        .config(config)
        .build()
        .unwrap();
    assert_eq!(engine.selection().len(), 2);
}

#[test]
fn fractional_values_round_trip() {
    let option: SelectOption =
        serde_json::from_str(r#"{ "label": "one and a half", "value": 1.5 }"#).unwrap();
    assert_eq!(option.value(), &OptionValue::from(1.5));

    let json = serde_json::to_string(&option).unwrap();
    let back: SelectOption = serde_json::from_str(&json).unwrap();
    assert_eq!(back, option);

    let config: SelectConfig = serde_json::from_str(
        r#"{ "isMulti": true, "defaultValue": [{ "label": "half", "value": 0.5 }] }"#,
    )
    .unwrap();
    let engine = SelectEngine::builder([
        SelectOption::new("half", 0.5),
        SelectOption::new("one and a half", 1.5),
    ])
    .config(config)
    .build()
    .unwrap();
    let view = engine.view();
    assert_eq!(view.visible_options.len(), 1);
    assert_eq!(view.visible_options.entries()[0].value(), &OptionValue::from(1.5));
}

#[test]
fn single_default_and_null() {
    let config: SelectConfig =
        serde_json::from_str(r#"{ "defaultValue": { "label": "blue", "value": "blue" } }"#).unwrap();
    assert_eq!(
        config.initial_selection(),
        Ok(SelectionValue::Single(Some(SelectOption::labeled("blue"))))
    );

    let config: SelectConfig =
        serde_json::from_str(r#"{ "isMulti": true, "defaultValue": null }"#).unwrap();
    assert_eq!(config.initial_selection(), Ok(SelectionValue::Multi(None)));
}

#[test]
fn mismatched_shape_is_reported_at_build() {
    let config: SelectConfig = serde_json::from_str(
        r#"{ "isMulti": true, "defaultValue": { "label": "blue", "value": "blue" } }"#,
    )
    .unwrap();
    let err = SelectEngine::builder(Vec::<SelectOption>::new()).config(config).build().unwrap_err();
    assert_eq!(err, ConfigError::ShapeMismatch { multi: true });
}
