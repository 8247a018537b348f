//! # solar_dash
//!
//! Client-side core of the Solar Site Reliability Dashboard: two prediction
//! forms posting site features to external services, one PVOUT regressor and
//! one suitability classifier.
//!
//! Everything here is host-testable. The browser app in
//! `crates/solar_dash_web` binds these models to Leptos signals.
//!
//! ## Quick Start
//!
//! ```no_run
//! use solar_dash::prelude::*;
//!
//! # async fn run() -> Result<(), FormError> {
//! let config = DashboardConfig::default();
//! let mut form = PredictionForm::new(FormSpec::new(FormKind::Regression, &config));
//! form.edit("DNI", "812.5")?;
//!
//! let outcome = form.submit(&PredictionClient::new()).await?;
//! if let Some(notice) = form.notice_for(&outcome) {
//!     eprintln!("{notice}");
//! }
//! println!("{:?}", form.result());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod features;
pub mod float_fmt;
pub mod form;
pub mod input;
pub mod payload;
pub mod response;

pub mod prelude {
    pub use crate::client::PredictionClient;
    pub use crate::config::DashboardConfig;
    pub use crate::dashboard::{Dashboard, FormKind, PAGE_TITLE};
    pub use crate::error::{FormError, PredictionError};
    pub use crate::features::FeatureSet;
    pub use crate::form::{FormSpec, PredictionForm, SubmissionState, SubmitOutcome};
    pub use crate::payload::Payload;
}
