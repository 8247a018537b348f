use hashbrown::HashMap;

use crate::error::FormError;
use crate::features::FeatureSet;

/// Text typed into each feature field, keyed by feature identifier.
///
/// Every declared feature has exactly one entry (initially empty); iteration
/// follows the declared feature order rather than map order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    features: FeatureSet,
    values: HashMap<&'static str, String>,
}

impl InputState {
    pub fn new(features: FeatureSet) -> Self {
        let values = features
            .names()
            .iter()
            .map(|&name| (name, String::new()))
            .collect();
        Self { features, values }
    }

    pub fn features(&self) -> FeatureSet {
        self.features
    }

    /// Replaces the text for `id`. Identifiers outside the feature set are
    /// rejected so the payload can never grow extra keys.
    pub fn set(&mut self, id: &str, text: impl Into<String>) -> Result<(), FormError> {
        let key = self
            .features
            .resolve(id)
            .ok_or_else(|| FormError::UnknownField(id.to_string()))?;
        self.values.insert(key, text.into());
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.features
            .names()
            .iter()
            .map(move |&name| (name, self.get(name).unwrap_or("")))
    }

    /// Fields still empty; the browser's `required` check blocks submission
    /// while this is non-empty.
    pub fn missing(&self) -> Vec<&'static str> {
        self.iter()
            .filter(|(_, text)| text.is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}
