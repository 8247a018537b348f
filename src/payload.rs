use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::input::InputState;

/// Request body for a prediction service: every declared feature mapped to a
/// number or `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    entries: Vec<(&'static str, Option<f64>)>,
}

impl Payload {
    /// Empty text becomes `null`; anything else is parsed as a float.
    ///
    /// Text that does not parse to a finite number is also sent as `null`,
    /// which is what `JSON.stringify` does with `NaN`. The numeric input type
    /// keeps such text out of the form in practice.
    pub fn from_inputs(inputs: &InputState) -> Self {
        let entries = inputs
            .iter()
            .map(|(name, text)| (name, parse_field(name, text)))
            .collect();
        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<Option<f64>> {
        self.entries
            .iter()
            .find(|(name, _)| *name == id)
            .map(|(_, v)| *v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn null_count(&self) -> usize {
        self.entries.iter().filter(|(_, v)| v.is_none()).count()
    }
}

fn parse_field(name: &str, text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        Ok(v) => {
            tracing::warn!(field = name, value = %v, "non-finite input sent as null");
            None
        }
        Err(_) => {
            tracing::warn!(field = name, text, "unparseable input sent as null");
            None
        }
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
