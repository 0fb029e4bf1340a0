//! Common domain type definitions
//!
//! Enum types and fixed domains shared between the aggregation layer and
//! the risk assessment form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The ten decade age bands used by the source data and the risk form
pub const AGE_BANDS: [&str; 10] = [
    "[0-10)", "[10-20)", "[20-30)", "[30-40)", "[40-50)", "[50-60)", "[60-70)", "[70-80)",
    "[80-90)", "[90-100)",
];

/// Primary diagnosis category on the risk form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosisCategory {
    /// Diseases of the circulatory system
    Circulatory,
    /// Diseases of the respiratory system
    Respiratory,
    /// Diseases of the digestive system
    Digestive,
    /// Diabetes mellitus
    Diabetes,
    /// Injury and poisoning
    Injury,
    /// Musculoskeletal and connective tissue
    Musculoskeletal,
    /// Genitourinary system
    Genitourinary,
    /// Everything else
    Other,
}

impl DiagnosisCategory {
    /// Category label as it appears in the source data
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Circulatory => "Circulatory",
            Self::Respiratory => "Respiratory",
            Self::Digestive => "Digestive",
            Self::Diabetes => "Diabetes",
            Self::Injury => "Injury",
            Self::Musculoskeletal => "Musculoskeletal",
            Self::Genitourinary => "Genitourinary",
            Self::Other => "Other",
        }
    }
}

impl From<&str> for DiagnosisCategory {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "circulatory" => Self::Circulatory,
            "respiratory" => Self::Respiratory,
            "digestive" => Self::Digestive,
            "diabetes" => Self::Diabetes,
            "injury" => Self::Injury,
            "musculoskeletal" => Self::Musculoskeletal,
            "genitourinary" => Self::Genitourinary,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for DiagnosisCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
