//! Advisory models

use serde::{Deserialize, Serialize};

/// What an advisory is about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryCategory {
    Irrigation,
    Fertilizer,
    Pest,
}

impl std::fmt::Display for AdvisoryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvisoryCategory::Irrigation => write!(f, "Irrigation"),
            AdvisoryCategory::Fertilizer => write!(f, "Fertilizer"),
            AdvisoryCategory::Pest => write!(f, "Pest"),
        }
    }
}

/// The rule outcome behind an advisory
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    /// Soil moisture below 20%
    IrrigationNeeded,
    MoistureSufficient,
    /// Organic matter below 2%
    CompostRecommended,
    PestMonitoring,
}

impl AdvisoryKind {
    pub fn category(&self) -> AdvisoryCategory {
        match self {
            AdvisoryKind::IrrigationNeeded | AdvisoryKind::MoistureSufficient => {
                AdvisoryCategory::Irrigation
            }
            AdvisoryKind::CompostRecommended => AdvisoryCategory::Fertilizer,
            AdvisoryKind::PestMonitoring => AdvisoryCategory::Pest,
        }
    }

    /// Lookup key for localized display text
    pub fn key(&self) -> &'static str {
        match self {
            AdvisoryKind::IrrigationNeeded => "advisory.irrigation_needed",
            AdvisoryKind::MoistureSufficient => "advisory.moisture_sufficient",
            AdvisoryKind::CompostRecommended => "advisory.compost_recommended",
            AdvisoryKind::PestMonitoring => "advisory.pest_monitoring",
        }
    }

    /// Default (English) message
    pub fn message(&self) -> &'static str {
        match self {
            AdvisoryKind::IrrigationNeeded => "apply supplemental irrigation within 3 days",
            AdvisoryKind::MoistureSufficient => "soil moisture sufficient for ~5 days",
            AdvisoryKind::CompostRecommended => "apply ~30kg/ha organic compost",
            AdvisoryKind::PestMonitoring => {
                "scout fields weekly for pests and check leaf undersides for early damage"
            }
        }
    }
}

/// A single categorized recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub category: AdvisoryCategory,
    pub kind: AdvisoryKind,
    pub message: String,
}

impl Advisory {
    pub fn new(kind: AdvisoryKind) -> Self {
        Self {
            category: kind.category(),
            kind,
            message: kind.message().to_string(),
        }
    }
}

impl From<AdvisoryKind> for Advisory {
    fn from(kind: AdvisoryKind) -> Self {
        Advisory::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_categories() {
        assert_eq!(AdvisoryKind::IrrigationNeeded.category(), AdvisoryCategory::Irrigation);
        assert_eq!(AdvisoryKind::MoistureSufficient.category(), AdvisoryCategory::Irrigation);
        assert_eq!(AdvisoryKind::CompostRecommended.category(), AdvisoryCategory::Fertilizer);
        assert_eq!(AdvisoryKind::PestMonitoring.category(), AdvisoryCategory::Pest);
    }

    #[test]
    fn test_rule_messages_verbatim() {
        assert_eq!(
            AdvisoryKind::IrrigationNeeded.message(),
            "apply supplemental irrigation within 3 days"
        );
        assert_eq!(
            AdvisoryKind::MoistureSufficient.message(),
            "soil moisture sufficient for ~5 days"
        );
        assert_eq!(
            AdvisoryKind::CompostRecommended.message(),
            "apply ~30kg/ha organic compost"
        );
    }

    #[test]
    fn test_advisory_serializes_snake_case() {
        let json = serde_json::to_value(Advisory::new(AdvisoryKind::CompostRecommended)).unwrap();
        assert_eq!(json["category"], "fertilizer");
        assert_eq!(json["kind"], "compost_recommended");
        assert_eq!(json["message"], "apply ~30kg/ha organic compost");
    }
}
