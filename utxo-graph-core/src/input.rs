// JSON input parsing for the wasm boundary.

use std::fmt;

use crate::interaction::PointerActivation;
use crate::layout::{GraphConfig, Utxo};

#[derive(Debug, Clone)]
pub struct InputError {
    /// Which argument failed: "items", "config" or "activation".
    pub input: &'static str,
    pub line: usize, // 1-based
    pub col: usize,  // 1-based
    pub msg: String,
}

impl InputError {
    fn from_json(input: &'static str, e: serde_json::Error) -> Self {
        Self { input, line: e.line().max(1), col: e.column().max(1), msg: e.to_string() }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {} at {}:{}: {}", self.input, self.line, self.col, self.msg)
    }
}
impl std::error::Error for InputError {}

/// Parse a JSON array of outputs. Blank input counts as no outputs.
pub fn parse_items(json: &str) -> Result<Vec<Utxo>, InputError> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    let items: Option<Vec<Utxo>> =
        serde_json::from_str(json).map_err(|e| InputError::from_json("items", e))?;
    Ok(items.unwrap_or_default())
}

/// Parse a (partial) config object. Blank input gives the defaults.
pub fn parse_config(json: &str) -> Result<GraphConfig, InputError> {
    if json.trim().is_empty() {
        return Ok(GraphConfig::default());
    }
    serde_json::from_str(json).map_err(|e| InputError::from_json("config", e))
}

pub fn parse_activation(json: &str) -> Result<PointerActivation, InputError> {
    serde_json::from_str(json).map_err(|e| InputError::from_json("activation", e))
}
