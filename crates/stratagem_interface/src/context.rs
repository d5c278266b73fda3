//! Named values appended to a prompt.

use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use stratagem_error::{InternalError, StratagemResult};

/// Opening delimiter of the context block appended to every template.
pub const CONTEXT_OPEN: &str = "<<<CONTEXT>>>";

/// Closing delimiter of the context block.
pub const CONTEXT_CLOSE: &str = "<<<END CONTEXT>>>";

/// Mapping from names to values handed to the LLM alongside a template.
///
/// Keys are kept ordered and nested objects are serialised with sorted keys,
/// so identical inputs always render to identical bytes.
///
/// # Examples
///
/// ```
/// use stratagem_interface::PromptContext;
///
/// let mut context = PromptContext::new();
/// context.insert("zeta", &"last").unwrap();
/// context.insert("alpha", &vec!["first"]).unwrap();
///
/// let block = context.render_block();
/// assert!(block.find("alpha").unwrap() < block.find("zeta").unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptContext {
    values: BTreeMap<String, JsonValue>,
}

impl PromptContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialises `value` and stores it under `name`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the value cannot be represented as JSON; the
    /// domain types always can.
    pub fn insert<T: Serialize + ?Sized>(
        &mut self,
        name: impl Into<String>,
        value: &T,
    ) -> StratagemResult<()> {
        let name = name.into();
        let value = serde_json::to_value(value).map_err(|e| {
            InternalError::new(format!("Context value '{}' is not serialisable: {}", name, e))
        })?;
        self.values.insert(name, value);
        Ok(())
    }

    /// Value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.values.get(name)
    }

    /// Names in canonical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Canonical UTF-8 JSON rendering of the whole mapping.
    pub fn to_canonical_json(&self) -> String {
        let object: serde_json::Map<String, JsonValue> = self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), canonicalize(v)))
            .collect();
        JsonValue::Object(object).to_string()
    }

    /// The delimited block appended to a template.
    pub fn render_block(&self) -> String {
        format!(
            "{}\n{}\n{}",
            CONTEXT_OPEN,
            self.to_canonical_json(),
            CONTEXT_CLOSE
        )
    }
}

/// Rebuilds objects with keys inserted in sorted order, whatever map the
/// `serde_json` build uses.
fn canonicalize(value: &JsonValue) -> JsonValue {
    match value {
        JsonValue::Object(map) => {
            let mut entries: Vec<(&String, &JsonValue)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            JsonValue::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.clone(), canonicalize(v)))
                    .collect(),
            )
        }
        JsonValue::Array(items) => JsonValue::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}
