//! Page-level model: the two form kinds and the shell that holds one of each.
//!
//! Kept free of browser types so the page inventory and copy can be unit
//! tested on the host.

use crate::config::DashboardConfig;
use crate::features::FeatureSet;
use crate::form::{FormSpec, PredictionForm};
use crate::response::{ResponseExtractor, ResultFormatter};

pub const PAGE_TITLE: &str = "Solar Site Reliability Dashboard";

/// Prefix of every diagnostic written to the console for a failed request.
pub const DIAGNOSTIC_PREFIX: &str = "Prediction error:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Regression,
    Classification,
}

impl FormKind {
    pub fn label(self) -> &'static str {
        match self {
            FormKind::Regression => "regression",
            FormKind::Classification => "classification",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            FormKind::Regression => "PVOUT Prediction",
            FormKind::Classification => "Site Suitability Classification",
        }
    }

    pub fn result_title(self) -> &'static str {
        match self {
            FormKind::Regression => "Predicted PVOUT",
            FormKind::Classification => "Predicted Suitability Class",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormKind::Regression => "Predict PVOUT",
            FormKind::Classification => "Predict Suitability",
        }
    }

    pub fn failure_notice(self) -> &'static str {
        match self {
            FormKind::Regression => {
                "Prediction error: check backend is running and that inputs are valid."
            }
            FormKind::Classification => "Prediction error: check classification backend is running.",
        }
    }

    /// CSS accent class for the form card.
    pub fn accent(self) -> &'static str {
        match self {
            FormKind::Regression => "accent-blue",
            FormKind::Classification => "accent-green",
        }
    }

    pub fn features(self) -> FeatureSet {
        match self {
            FormKind::Regression => FeatureSet::Regression,
            FormKind::Classification => FeatureSet::Classification,
        }
    }

    pub fn extractor(self) -> ResponseExtractor {
        match self {
            FormKind::Regression => ResponseExtractor::regression(),
            FormKind::Classification => ResponseExtractor::classification(),
        }
    }

    pub fn formatter(self) -> ResultFormatter {
        match self {
            FormKind::Regression => ResultFormatter::Fixed(3),
            FormKind::Classification => ResultFormatter::Identity,
        }
    }

    /// Display order on the page, top to bottom.
    pub fn all() -> &'static [FormKind] {
        &[FormKind::Regression, FormKind::Classification]
    }
}

/// The application shell: one form of each kind, sharing nothing.
#[derive(Debug, Clone)]
pub struct Dashboard {
    regression: PredictionForm,
    classification: PredictionForm,
}

impl Dashboard {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            regression: PredictionForm::new(FormSpec::new(FormKind::Regression, config)),
            classification: PredictionForm::new(FormSpec::new(FormKind::Classification, config)),
        }
    }

    pub fn title(&self) -> &'static str {
        PAGE_TITLE
    }

    pub fn form(&self, kind: FormKind) -> &PredictionForm {
        match kind {
            FormKind::Regression => &self.regression,
            FormKind::Classification => &self.classification,
        }
    }

    pub fn form_mut(&mut self, kind: FormKind) -> &mut PredictionForm {
        match kind {
            FormKind::Regression => &mut self.regression,
            FormKind::Classification => &mut self.classification,
        }
    }

    pub fn into_forms(self) -> (PredictionForm, PredictionForm) {
        (self.regression, self.classification)
    }
}
