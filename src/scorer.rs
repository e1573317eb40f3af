//! # Risk Scorer
//! Pure, testable logic that maps a `RiskInput` → `RiskResult`.
//! No I/O, no shared state, total over its input domain — it never fails.
//!
//! The score is a strictly additive weighted sum over independent factors,
//! perturbed by a small uniform jitter, clamped to [0.05, 0.95], and
//! bucketed into three tiers. Out-of-range numbers are not rejected; they
//! simply fall through the conditional branches and contribute nothing.
//! The randomness source is injected so tests can seed it.

use chrono::Utc;
use rand::Rng;

use crate::assessment::{Gender, RiskInput, RiskLevel, RiskResult, SmokingStatus, WorkType};

// Factor weights. These are heuristic and intentionally preserved as-is;
// they are not derived from any fitted model.
const W_AGE_OVER_65: f32 = 0.30;
const W_AGE_OVER_55: f32 = 0.20;
const W_AGE_OVER_45: f32 = 0.10;
const W_MALE: f32 = 0.05;
const W_HYPERTENSION: f32 = 0.25;
const W_HEART_DISEASE: f32 = 0.30;
const W_SMOKES: f32 = 0.20;
const W_FORMERLY_SMOKED: f32 = 0.10;
const W_BMI_OVER_30: f32 = 0.15;
const W_BMI_OVER_25: f32 = 0.05;
const W_GLUCOSE_OVER_200: f32 = 0.20;
const W_GLUCOSE_OVER_140: f32 = 0.10;
const W_SELF_EMPLOYED: f32 = 0.02;
const W_EVER_MARRIED: f32 = -0.02;

/// Jitter amplitude: a uniform draw in [-JITTER, +JITTER).
const JITTER: f32 = 0.10;

/// Probability clamp bounds, fixed regardless of jitter magnitude.
const PROB_FLOOR: f32 = 0.05;
const PROB_CEIL: f32 = 0.95;

const TIER_MODERATE: f32 = 0.33;
const TIER_HIGH: f32 = 0.66;

/// Weighted factor total before jitter and clamping.
///
/// Each factor contributes at most one of its tiers; branches within a
/// factor are mutually exclusive and factors are independent, so the
/// summation order is irrelevant.
pub fn deterministic_sum(input: &RiskInput) -> f32 {
    let mut score = 0.0f32;

    // Age brackets (stronger influence after 55)
    if input.age > 65.0 {
        score += W_AGE_OVER_65;
    } else if input.age > 55.0 {
        score += W_AGE_OVER_55;
    } else if input.age > 45.0 {
        score += W_AGE_OVER_45;
    }

    if input.gender == Gender::Male {
        score += W_MALE;
    }

    // Medical conditions
    if input.hypertension {
        score += W_HYPERTENSION;
    }
    if input.heart_disease {
        score += W_HEART_DISEASE;
    }

    // Lifestyle
    match input.smoking_status {
        SmokingStatus::Smokes => score += W_SMOKES,
        SmokingStatus::FormerlySmoked => score += W_FORMERLY_SMOKED,
        SmokingStatus::NeverSmoked | SmokingStatus::Unknown => {}
    }

    if input.bmi > 30.0 {
        score += W_BMI_OVER_30;
    } else if input.bmi > 25.0 {
        score += W_BMI_OVER_25;
    }

    if input.avg_glucose_level > 200.0 {
        score += W_GLUCOSE_OVER_200;
    } else if input.avg_glucose_level > 140.0 {
        score += W_GLUCOSE_OVER_140;
    }

    if input.work_type == WorkType::SelfEmployed {
        score += W_SELF_EMPLOYED;
    }

    // Slight protective effect
    if input.ever_married.is_yes() {
        score += W_EVER_MARRIED;
    }

    score
}

/// Assign the qualitative tier for a probability.
pub fn risk_tier(probability: f32) -> RiskLevel {
    if probability < TIER_MODERATE {
        RiskLevel::Low
    } else if probability < TIER_HIGH {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

/// Score one assessment with an injected randomness source.
///
/// Jitter is applied after the deterministic sum and before the clamp, so
/// the probability always lands in [0.05, 0.95] whatever the draw.
pub fn compute_risk_with<R: Rng>(input: &RiskInput, rng: &mut R) -> RiskResult {
    let sum = deterministic_sum(input);
    let jitter = rng.random_range(-JITTER..JITTER);
    let probability = (sum + jitter).clamp(PROB_FLOOR, PROB_CEIL);

    RiskResult {
        probability,
        risk_level: risk_tier(probability),
        timestamp: Utc::now(),
        input: input.clone(),
    }
}

/// Convenience wrapper drawing jitter from the thread-local RNG.
pub fn compute_risk(input: &RiskInput) -> RiskResult {
    compute_risk_with(input, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::EverMarried;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn saturated() -> RiskInput {
        RiskInput {
            gender: Gender::Male,
            age: 70.0,
            hypertension: true,
            heart_disease: true,
            ever_married: EverMarried::No,
            work_type: WorkType::Private,
            avg_glucose_level: 250.0,
            bmi: 35.0,
            smoking_status: SmokingStatus::Smokes,
            ..RiskInput::default()
        }
    }

    #[test]
    fn saturated_input_sums_to_1_45() {
        let sum = deterministic_sum(&saturated());
        assert!((sum - 1.45).abs() < 1e-6, "expected 1.45, got {sum}");
    }

    #[test]
    fn saturated_input_clamps_to_ceiling_for_any_seed() {
        let input = saturated();
        for seed in 0..256u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let r = compute_risk_with(&input, &mut rng);
            assert_eq!(r.probability, 0.95, "seed {seed}");
            assert_eq!(r.risk_level, RiskLevel::High, "seed {seed}");
        }
    }

    #[test]
    fn zero_contribution_input_stays_low_for_any_seed() {
        // Every factor at its zero branch: sum = 0, so after jitter and the
        // floor clamp the probability sits in [0.05, 0.10).
        let input = RiskInput::default();
        assert_eq!(deterministic_sum(&input), 0.0);

        for seed in 0..256u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let r = compute_risk_with(&input, &mut rng);
            assert!(
                (0.05..0.10 + 1e-6).contains(&r.probability),
                "seed {seed}: probability {} out of floor band",
                r.probability
            );
            assert_eq!(r.risk_level, RiskLevel::Low, "seed {seed}");
        }
    }

    #[test]
    fn probability_always_within_clamp_bounds() {
        let inputs = [
            RiskInput::default(),
            saturated(),
            RiskInput {
                age: -40.0,
                bmi: 500.0,
                avg_glucose_level: -1.0,
                ..RiskInput::default()
            },
        ];
        for input in &inputs {
            for seed in 0..64u64 {
                let mut rng = StdRng::seed_from_u64(seed);
                let r = compute_risk_with(input, &mut rng);
                assert!((0.05..=0.95).contains(&r.probability));
            }
        }
    }

    #[test]
    fn age_brackets_are_monotone_in_the_deterministic_sum() {
        let mut prev = f32::NEG_INFINITY;
        for age in [30.0, 50.0, 60.0, 70.0] {
            let sum = deterministic_sum(&RiskInput {
                age,
                ..RiskInput::default()
            });
            assert!(sum >= prev, "sum decreased at age {age}");
            prev = sum;
        }
    }

    #[test]
    fn factor_branches_are_mutually_exclusive() {
        // An age inside the top bracket must not also collect lower brackets.
        let top = deterministic_sum(&RiskInput {
            age: 80.0,
            ..RiskInput::default()
        });
        assert!((top - 0.30).abs() < 1e-6);

        let mid = deterministic_sum(&RiskInput {
            bmi: 28.0,
            ..RiskInput::default()
        });
        assert!((mid - 0.05).abs() < 1e-6);
    }

    #[test]
    fn married_yes_is_protective() {
        let married = deterministic_sum(&RiskInput {
            ever_married: EverMarried::Yes,
            age: 60.0,
            ..RiskInput::default()
        });
        let single = deterministic_sum(&RiskInput {
            ever_married: EverMarried::No,
            age: 60.0,
            ..RiskInput::default()
        });
        assert!((single - married - 0.02).abs() < 1e-6);
    }

    #[test]
    fn tier_thresholds_at_fixed_probabilities() {
        assert_eq!(risk_tier(0.32), RiskLevel::Low);
        assert_eq!(risk_tier(0.33), RiskLevel::Moderate);
        assert_eq!(risk_tier(0.65), RiskLevel::Moderate);
        assert_eq!(risk_tier(0.66), RiskLevel::High);
    }

    #[test]
    fn negative_age_contributes_nothing() {
        let sum = deterministic_sum(&RiskInput {
            age: -5.0,
            ..RiskInput::default()
        });
        assert_eq!(sum, 0.0);
    }
}
