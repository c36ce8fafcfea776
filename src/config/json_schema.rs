//! JSON Schema generation for the lintlayer project file.
//!
//! This module generates a JSON Schema (Draft-07) for
//! `.lintlayer/config.yml` and preset files, enabling editor completion
//! and validation.

use serde_json::{json, Value};

use crate::mode::Mode;

/// Generates JSON Schema for lintlayer configuration.
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Create a new schema generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate the complete JSON Schema for `.lintlayer/config.yml`.
    pub fn generate(&self) -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "$id": "https://lintlayer.dev/schemas/config.json",
            "title": "lintlayer Configuration",
            "description": "Layered, mode-aware rule-set composition",
            "type": "object",
            "properties": {
                "disable": {
                    "type": "boolean",
                    "default": false,
                    "description": "Force every rule off, including rules from presets"
                },
                "fragments": {
                    "type": "array",
                    "items": { "$ref": "#/definitions/fragment" },
                    "description": "Fragments in output order"
                }
            },
            "additionalProperties": false,
            "definitions": {
                "fragment": self.fragment_schema(),
                "extends": self.extends_schema(),
                "rule": self.rule_schema(),
                "ruleEntry": self.rule_entry_schema(),
                "severity": self.severity_schema(),
                "modeTable": self.mode_table_schema()
            }
        })
    }

    /// Generate schema for a fragment.
    fn fragment_schema(&self) -> Value {
        json!({
            "type": "object",
            "description": "One configuration fragment; unknown keys are passed through",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Display name"
                },
                "language": {
                    "type": "string",
                    "description": "Language tag, e.g. css/css"
                },
                "files": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "File globs this fragment applies to"
                },
                "ignores": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "File globs excluded from this fragment"
                },
                "plugins": {
                    "type": "object",
                    "additionalProperties": true,
                    "description": "Plugin registrations"
                },
                "extends": {
                    "type": "array",
                    "items": { "$ref": "#/definitions/extends" },
                    "description": "Presets and inline fragments to build on"
                },
                "rules": {
                    "type": "object",
                    "additionalProperties": { "$ref": "#/definitions/rule" },
                    "description": "Rules keyed by name"
                }
            },
            "additionalProperties": true
        })
    }

    /// Generate schema for an `extends` item.
    fn extends_schema(&self) -> Value {
        json!({
            "oneOf": [
                {
                    "type": "object",
                    "properties": {
                        "preset": {
                            "type": "string",
                            "description": "Preset file, relative to the referencing file"
                        }
                    },
                    "required": ["preset"],
                    "additionalProperties": false
                },
                { "$ref": "#/definitions/fragment" }
            ]
        })
    }

    /// Generate schema for a rule value.
    fn rule_schema(&self) -> Value {
        json!({
            "oneOf": [
                { "$ref": "#/definitions/ruleEntry" },
                {
                    "type": "object",
                    "properties": {
                        "mode": { "$ref": "#/definitions/modeTable" }
                    },
                    "required": ["mode"],
                    "additionalProperties": false
                }
            ]
        })
    }

    /// Generate schema for a rule entry.
    fn rule_entry_schema(&self) -> Value {
        json!({
            "oneOf": [
                { "$ref": "#/definitions/severity" },
                {
                    "type": "array",
                    "items": [{ "$ref": "#/definitions/severity" }],
                    "additionalItems": true,
                    "minItems": 1,
                    "description": "Severity followed by rule options"
                }
            ]
        })
    }

    /// Generate schema for a severity.
    fn severity_schema(&self) -> Value {
        json!({
            "oneOf": [
                { "type": "string", "enum": ["off", "warn", "error"] },
                { "type": "integer", "enum": [0, 1, 2] }
            ]
        })
    }

    /// Generate schema for a mode table.
    fn mode_table_schema(&self) -> Value {
        let properties: serde_json::Map<String, Value> = Mode::ALL
            .iter()
            .map(|mode| {
                (
                    mode.as_str().to_string(),
                    json!({ "$ref": "#/definitions/ruleEntry" }),
                )
            })
            .collect();

        json!({
            "type": "object",
            "description": "Entry per mode; a missing mode leaves the rule unset",
            "properties": properties,
            "additionalProperties": false
        })
    }
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new()
    }
}
