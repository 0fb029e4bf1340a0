//! Heuristic readmission risk estimate
//!
//! A fixed rule table, not a trained model: a constant base rate plus five
//! additive adjustments, capped, then stratified into three levels. The
//! whole assessment is deterministic; the "confidence" figure some displays
//! show is a fixed placeholder with no statistical meaning.

use serde::{Deserialize, Serialize};

use crate::models::DiagnosisCategory;

/// Population base readmission rate the score starts from
pub const BASE_RATE: f64 = 0.11;
/// Upper bound on the reported score
pub const SCORE_CAP: f64 = 0.85;
/// Fixed placeholder shown as "model confidence"; decorative only
pub const DISPLAY_CONFIDENCE: f64 = 0.65;

const PRIOR_INPATIENT_WEIGHT: f64 = 0.15;
const PRIOR_EMERGENCY_WEIGHT: f64 = 0.10;
const HIGH_MEDICATION_WEIGHT: f64 = 0.08;
const LONG_STAY_WEIGHT: f64 = 0.07;
const HIGH_RISK_DIAGNOSIS_WEIGHT: f64 = 0.05;

const HIGH_MEDICATION_THRESHOLD: u32 = 20;
const LONG_STAY_THRESHOLD: u32 = 7;

/// Patient inputs from the risk assessment form.
///
/// Demographics and the lab/diagnosis counts are accepted for form parity
/// but do not enter the score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskInput {
    /// Decade age band, e.g. `[60-70)`
    pub age: String,
    /// Gender label
    pub gender: String,
    /// Race or ethnicity label
    pub race: String,
    /// Days in hospital
    pub time_in_hospital: u32,
    /// Number of medications
    pub num_medications: u32,
    /// Number of lab procedures
    pub num_lab_procedures: u32,
    /// Number of diagnoses
    pub number_diagnoses: u32,
    /// Prior inpatient visits
    pub number_inpatient: u32,
    /// Prior emergency visits
    pub number_emergency: u32,
    /// Primary diagnosis category
    pub primary_diagnosis: DiagnosisCategory,
}

/// Stratified risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Score below 0.20
    Low,
    /// Score in [0.20, 0.40)
    Moderate,
    /// Score at or above 0.40
    High,
}

impl RiskLevel {
    /// Stratify a capped score
    #[must_use]
    pub fn for_score(score: f64) -> Self {
        if score < 0.20 {
            Self::Low
        } else if score < 0.40 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Discharge recommendation shown alongside the level
    #[must_use]
    pub const fn recommendation(&self) -> &'static str {
        match self {
            Self::Low => "Standard discharge protocol recommended.",
            Self::Moderate => "Consider follow-up appointment within 7 days.",
            Self::High => {
                "High-risk patient. Recommend case management, early follow-up, \
                 and medication reconciliation."
            }
        }
    }
}

/// One triggered adjustment in an assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskFactor {
    /// Human-readable description of the factor
    pub description: String,
    /// Additive weight the factor contributed
    pub weight: f64,
}

/// Result of one risk assessment
#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    /// Capped score in [`BASE_RATE`], [`SCORE_CAP`]
    pub score: f64,
    /// Stratified level
    pub level: RiskLevel,
    /// Adjustments that fired, in rule order
    pub factors: Vec<RiskFactor>,
    /// Relative change versus the base rate, `(score - base) / base`
    pub baseline_delta: f64,
}

/// Score a patient with the fixed additive rule table
#[must_use]
pub fn assess(input: &RiskInput) -> RiskAssessment {
    let mut score = BASE_RATE;
    let mut factors = Vec::new();

    if input.number_inpatient >= 1 {
        score += PRIOR_INPATIENT_WEIGHT;
        factors.push(RiskFactor {
            description: format!("Prior hospitalizations: {} visit(s)", input.number_inpatient),
            weight: PRIOR_INPATIENT_WEIGHT,
        });
    }
    if input.number_emergency >= 1 {
        score += PRIOR_EMERGENCY_WEIGHT;
        factors.push(RiskFactor {
            description: format!("Prior emergency visits: {} visit(s)", input.number_emergency),
            weight: PRIOR_EMERGENCY_WEIGHT,
        });
    }
    if input.num_medications >= HIGH_MEDICATION_THRESHOLD {
        score += HIGH_MEDICATION_WEIGHT;
        factors.push(RiskFactor {
            description: format!("High medication count: {} medications", input.num_medications),
            weight: HIGH_MEDICATION_WEIGHT,
        });
    }
    if input.time_in_hospital >= LONG_STAY_THRESHOLD {
        score += LONG_STAY_WEIGHT;
        factors.push(RiskFactor {
            description: format!("Extended hospital stay: {} days", input.time_in_hospital),
            weight: LONG_STAY_WEIGHT,
        });
    }
    if matches!(
        input.primary_diagnosis,
        DiagnosisCategory::Circulatory | DiagnosisCategory::Respiratory
    ) {
        score += HIGH_RISK_DIAGNOSIS_WEIGHT;
        factors.push(RiskFactor {
            description: format!("High-risk diagnosis: {}", input.primary_diagnosis),
            weight: HIGH_RISK_DIAGNOSIS_WEIGHT,
        });
    }

    let score = score.min(SCORE_CAP);
    RiskAssessment {
        score,
        level: RiskLevel::for_score(score),
        factors,
        baseline_delta: (score - BASE_RATE) / BASE_RATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline_input() -> RiskInput {
        RiskInput {
            age: "[50-60)".to_string(),
            gender: "Male".to_string(),
            race: "Caucasian".to_string(),
            time_in_hospital: 3,
            num_medications: 10,
            num_lab_procedures: 40,
            number_diagnoses: 7,
            number_inpatient: 0,
            number_emergency: 0,
            primary_diagnosis: DiagnosisCategory::Other,
        }
    }

    #[test]
    fn baseline_patient_scores_the_base_rate() {
        let assessment = assess(&baseline_input());
        assert_eq!(assessment.score, BASE_RATE);
        assert_eq!(assessment.level, RiskLevel::Low);
        assert!(assessment.factors.is_empty());
        assert_eq!(assessment.baseline_delta, 0.0);
    }

    #[test]
    fn single_prior_admission_is_moderate() {
        let mut input = baseline_input();
        input.number_inpatient = 1;

        let assessment = assess(&input);
        assert!((assessment.score - 0.26).abs() < 1e-9);
        assert_eq!(assessment.level, RiskLevel::Moderate);
        assert_eq!(assessment.factors.len(), 1);
    }

    #[test]
    fn all_factors_sum_uncapped() {
        let input = RiskInput {
            time_in_hospital: 10,
            num_medications: 30,
            number_inpatient: 2,
            number_emergency: 2,
            primary_diagnosis: DiagnosisCategory::Respiratory,
            ..baseline_input()
        };

        let assessment = assess(&input);
        assert!((assessment.score - 0.56).abs() < 1e-9);
        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(assessment.factors.len(), 5);
    }

    #[test]
    fn demographics_do_not_move_the_score() {
        let mut input = baseline_input();
        input.age = "[90-100)".to_string();
        input.gender = "Female".to_string();
        input.race = "Hispanic".to_string();
        input.num_lab_procedures = 99;
        input.number_diagnoses = 16;

        assert_eq!(assess(&input).score, BASE_RATE);
    }

    #[test]
    fn level_thresholds_are_half_open() {
        assert_eq!(RiskLevel::for_score(0.19), RiskLevel::Low);
        assert_eq!(RiskLevel::for_score(0.20), RiskLevel::Moderate);
        assert_eq!(RiskLevel::for_score(0.39), RiskLevel::Moderate);
        assert_eq!(RiskLevel::for_score(0.40), RiskLevel::High);
    }
}
