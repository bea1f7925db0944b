//! Named attribute sets loaded from JSON style documents.
//!
//! A style document maps names to (possibly partial) attribute objects:
//!
//! ```json
//! { "styles": { "coastline": { "draw_interior": false, "outline_width": 2.0 } } }
//! ```
//!
//! Fields missing from an entry take the attribute defaults. Values are not
//! range-checked.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::attributes::ShapeAttributes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleError::Parse(msg) => write!(f, "invalid style document: {msg}"),
            StyleError::Serialize(msg) => write!(f, "failed to serialize styles: {msg}"),
        }
    }
}

impl std::error::Error for StyleError {}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSheet {
    #[serde(default)]
    pub styles: BTreeMap<String, ShapeAttributes>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, StyleError> {
        let sheet: StyleSheet =
            serde_json::from_str(json).map_err(|e| StyleError::Parse(e.to_string()))?;
        debug!(styles = sheet.styles.len(), "loaded style sheet");
        Ok(sheet)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, StyleError> {
        let sheet: StyleSheet =
            serde_json::from_slice(bytes).map_err(|e| StyleError::Parse(e.to_string()))?;
        debug!(styles = sheet.styles.len(), "loaded style sheet");
        Ok(sheet)
    }

    /// Fails if any style holds a NaN or infinite float, since JSON would
    /// write it as `null` and the document could not be read back.
    pub fn to_json_string(&self) -> Result<String, StyleError> {
        for (name, attrs) in &self.styles {
            if let Some(field) = attrs.non_finite_field() {
                return Err(StyleError::Serialize(format!(
                    "style {name:?} has a non-finite {field}"
                )));
            }
        }
        serde_json::to_string_pretty(self).map_err(|e| StyleError::Serialize(e.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&ShapeAttributes> {
        self.styles.get(name)
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        attributes: ShapeAttributes,
    ) -> Option<ShapeAttributes> {
        self.styles.insert(name.into(), attributes)
    }

    /// Returns a copy of the named style, or the default attributes if the
    /// sheet has no such entry.
    pub fn resolve(&self, name: &str) -> ShapeAttributes {
        match self.styles.get(name) {
            Some(attrs) => attrs.clone(),
            None => {
                warn!(style = name, "unknown style, using default attributes");
                ShapeAttributes::default()
            }
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
