//! Decoding of the JSON record set and its projection to a tree
//!
//! The input is a JSON object mapping trunk names to dongle records, e.g.
//!
//! ```text
//! {"trunk0": {"imei": "123456789012345", "imsi": "001010000000001", "rx-gain": 5}}
//! ```
//!
//! Records are decoded with serde into typed structs; attribute values may
//! be any JSON scalar (deployment variants send gains as numbers) and are
//! rendered to strings as written. Unknown attributes are ignored.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::ast::{Ast, Section};
use crate::error::Error;

/// A decoded record set: trunk name to dongle record. `BTreeMap` keeps the
/// generated section order deterministic.
pub type DongleConfig = BTreeMap<String, DongleRecord>;

/// One dongle record. `calls_out` drives dialplan handling elsewhere and
/// never appears in the dongle file itself.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DongleRecord {
    pub imei: Option<Value>,
    pub imsi: Option<Value>,
    #[serde(rename = "rx-gain")]
    pub rx_gain: Option<Value>,
    #[serde(rename = "tx-gain")]
    pub tx_gain: Option<Value>,
    pub calls_out: Option<Value>,
}

/// Decodes a JSON record set.
pub fn decode(src: &str) -> Result<DongleConfig, Error> {
    serde_json::from_str(src).map_err(Error::from)
}

/// Renders a scalar JSON value the way it was written: strings bare,
/// numbers and booleans via their literal form.
fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Builds the target tree: one section per record, entries in the fixed
/// order `imei`, `imsi`, `rx-gain`, `tx-gain`; absent attributes are
/// skipped. No implicit `main` section is synthesized.
pub fn to_ast(config: &DongleConfig) -> Ast {
    let mut ast = Ast::new();
    for (name, record) in config {
        let mut section = Section::new(name, 0);
        if let Some(imei) = &record.imei {
            section.push("imei", &scalar(imei));
        }
        if let Some(imsi) = &record.imsi {
            section.push("imsi", &scalar(imsi));
        }
        if let Some(rx) = &record.rx_gain {
            section.push("rx-gain", &scalar(rx));
        }
        if let Some(tx) = &record.tx_gain {
            section.push("tx-gain", &scalar(tx));
        }
        ast.sections.push(section);
    }
    ast
}

/// Projects a tree to JSON: section name to an object of its entries.
/// Duplicate keys collapse to the last one; ordering and duplicates only
/// survive in the text form.
pub fn ast_to_json(ast: &Ast) -> Value {
    let mut root = serde_json::Map::new();
    for section in &ast.sections {
        let mut object = serde_json::Map::new();
        for entry in &section.entries {
            object.insert(entry.key.clone(), Value::String(entry.value.clone()));
        }
        root.insert(section.name.clone(), Value::Object(object));
    }
    Value::Object(root)
}
