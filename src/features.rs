//! Feature identifiers sent to the prediction services.
//!
//! An identifier doubles as the HTML field name, the placeholder text and the
//! JSON key of the outgoing payload, so the lists below are the wire contract.

/// Inputs of the PVOUT regression service, in display order.
pub const REGRESSION_FEATURES: &[&str] = &[
    "DNI",
    "DIF",
    "GHI",
    "GTI",
    "TEMP",
    "X",
    "Y",
    "water_area",
    "urban_area",
    "forests_area",
    "protected_area",
    "DNI_to_GHI_ratio",
    "GTI_to_GHI_ratio",
    "Diffuse_fraction",
    "TEMP_log",
    "X_sin",
    "X_cos",
    "Y_sin",
    "Y_cos",
    "Solar_Potential_Index",
];

/// Inputs of the suitability classifier, in display order.
///
/// This is the regression set plus `PVOUT` (the regression target becomes a
/// feature downstream) and `Suitability_Index`.
pub const CLASSIFICATION_FEATURES: &[&str] = &[
    "DNI",
    "DIF",
    "GHI",
    "GTI",
    "PVOUT",
    "TEMP",
    "X",
    "Y",
    "water_area",
    "urban_area",
    "forests_area",
    "protected_area",
    "DNI_to_GHI_ratio",
    "GTI_to_GHI_ratio",
    "Diffuse_fraction",
    "TEMP_log",
    "X_sin",
    "X_cos",
    "Y_sin",
    "Y_cos",
    "Solar_Potential_Index",
    "Suitability_Index",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureSet {
    Regression,
    Classification,
}

impl FeatureSet {
    pub fn names(self) -> &'static [&'static str] {
        match self {
            FeatureSet::Regression => REGRESSION_FEATURES,
            FeatureSet::Classification => CLASSIFICATION_FEATURES,
        }
    }

    pub fn count(self) -> usize {
        self.names().len()
    }

    pub fn contains(self, id: &str) -> bool {
        self.names().iter().any(|n| *n == id)
    }

    /// Looks up the `'static` identifier matching `id`.
    pub fn resolve(self, id: &str) -> Option<&'static str> {
        self.names().iter().copied().find(|n| *n == id)
    }
}
