//! assessment.rs — Wire-level value objects for a risk assessment.
//!
//! Field names and enum spellings follow the public JSON contract of the
//! original predict API (`gender`, `Residence_type`, `"formerly smoked"`, ...),
//! so existing clients keep working unchanged. Every field defaults to its
//! zero-contribution value: an absent field feeds the scorer as falsy/zero
//! rather than being rejected here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One form submission, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskInput {
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub age: f32,
    /// The wire accepts `true`/`false` or `0`/`1` (the browser shell posts numbers).
    #[serde(default, deserialize_with = "flag")]
    pub hypertension: bool,
    #[serde(default, deserialize_with = "flag")]
    pub heart_disease: bool,
    #[serde(default)]
    pub ever_married: EverMarried,
    #[serde(default)]
    pub work_type: WorkType,
    /// Accepted for API parity; carries no weight in the score.
    #[serde(default, rename = "Residence_type", skip_serializing_if = "Option::is_none")]
    pub residence_type: Option<ResidenceType>,
    #[serde(default)]
    pub avg_glucose_level: f32,
    #[serde(default)]
    pub bmi: f32,
    #[serde(default)]
    pub smoking_status: SmokingStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EverMarried {
    Yes,
    #[default]
    No,
}

impl EverMarried {
    pub fn is_yes(self) -> bool {
        matches!(self, EverMarried::Yes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorkType {
    #[default]
    Private,
    #[serde(rename = "Self-employed")]
    SelfEmployed,
    #[serde(rename = "Govt_job")]
    GovtJob,
    #[serde(rename = "children")]
    Children,
    #[serde(rename = "Never_worked")]
    NeverWorked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResidenceType {
    Urban,
    Rural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SmokingStatus {
    #[serde(rename = "never smoked")]
    NeverSmoked,
    #[serde(rename = "formerly smoked")]
    FormerlySmoked,
    #[serde(rename = "smokes")]
    Smokes,
    #[default]
    #[serde(rename = "Unknown", alias = "unknown")]
    Unknown,
}

/// Qualitative tier assigned by thresholding the probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Display title used by the results panel ("Higher", not "High").
    pub fn title(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "Higher",
        }
    }
}

/// Outcome of one scorer invocation. Produced once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Clamped to [0.05, 0.95].
    pub probability: f32,
    pub risk_level: RiskLevel,
    pub timestamp: DateTime<Utc>,
    /// The submission this result was derived from.
    pub input: RiskInput,
}

impl RiskResult {
    /// Binary prediction the original API also reports: 1 iff probability >= 0.5.
    pub fn prediction(&self) -> u8 {
        if self.probability >= 0.5 {
            1
        } else {
            0
        }
    }
}

/// Deserialize a boolean that may arrive as a JSON bool or as 0/1.
fn flag<'de, D>(de: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(u8),
    }
    Ok(match Flag::deserialize(de)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    })
}

impl Default for RiskInput {
    fn default() -> Self {
        Self {
            gender: Gender::default(),
            age: 0.0,
            hypertension: false,
            heart_disease: false,
            ever_married: EverMarried::default(),
            work_type: WorkType::default(),
            residence_type: None,
            avg_glucose_level: 0.0,
            bmi: 0.0,
            smoking_status: SmokingStatus::default(),
        }
    }
}
