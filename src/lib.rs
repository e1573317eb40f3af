// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod advice;
pub mod api;
pub mod assessment;
pub mod config;
pub mod history;
pub mod scorer;
pub mod validate;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::assessment::{RiskInput, RiskLevel, RiskResult};
pub use crate::scorer::{compute_risk, compute_risk_with};
