//! advice.rs — explanatory text shown next to a result.

use serde::Serialize;

use crate::assessment::RiskLevel;

/// Human-readable explanation and recommendation for a risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskAdvice {
    pub headline: &'static str,
    pub message: &'static str,
    pub recommendation: &'static str,
}

pub fn for_level(level: RiskLevel) -> RiskAdvice {
    match level {
        RiskLevel::Low => RiskAdvice {
            headline: "Low Risk",
            message: "Your current risk factors suggest a lower probability of stroke. \
                      Continue maintaining healthy lifestyle choices.",
            recommendation: "Keep up with regular exercise, healthy diet, and routine \
                             medical checkups.",
        },
        RiskLevel::Moderate => RiskAdvice {
            headline: "Moderate Risk",
            message: "You have some risk factors that may increase stroke probability. \
                      Consider lifestyle modifications.",
            recommendation: "Consult your healthcare provider about risk reduction \
                             strategies and monitoring.",
        },
        RiskLevel::High => RiskAdvice {
            headline: "Higher Risk",
            message: "Multiple risk factors indicate elevated stroke risk. Medical \
                      consultation is strongly recommended.",
            recommendation: "Schedule an appointment with your healthcare provider for \
                             comprehensive evaluation.",
        },
    }
}
