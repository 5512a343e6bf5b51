use serde::{Deserialize, Serialize};

/// One administrative area and its pre-computed flood indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Barangay {
    pub id: &'static str,
    pub name: &'static str,
    /// Flood Risk Index, taken as published and never recomputed.
    pub fri: f64,
    pub risk_level: RiskLevel,
    pub hazard: f64,
    pub vulnerability: f64,
    pub exposure: f64,
    #[serde(rename = "softCM")]
    pub soft_cm: f64,
    #[serde(rename = "hardCM")]
    pub hard_cm: f64,
    pub description: &'static str,
    pub recommendation: &'static str,
}

impl Barangay {
    /// The indicator value this record contributes to `category`.
    pub fn value(&self, category: MapCategory) -> f64 {
        match category {
            MapCategory::Fri => self.fri,
            MapCategory::Hazard => self.hazard,
            MapCategory::Vulnerability => self.vulnerability,
            MapCategory::Exposure => self.exposure,
            MapCategory::SoftCm => self.soft_cm,
            MapCategory::HardCm => self.hard_cm,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::VeryLow => write!(f, "Very Low"),
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::VeryHigh => write!(f, "Very High"),
        }
    }
}

/// Display rating derived from an indicator value.
///
/// Variants are declared from least to most severe so the derived ordering
/// doubles as a severity ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "Very Low")]
    VeryLow,
    /// Hard-countermeasure band straddling the two lowest tiers.
    #[serde(rename = "Low/Very Low")]
    LowOrVeryLow,
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::VeryLow => write!(f, "Very Low"),
            Rating::LowOrVeryLow => write!(f, "Low/Very Low"),
            Rating::Low => write!(f, "Low"),
            Rating::Moderate => write!(f, "Moderate"),
            Rating::High => write!(f, "High"),
            Rating::VeryHigh => write!(f, "Very High"),
        }
    }
}

impl From<RiskLevel> for Rating {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::VeryLow => Rating::VeryLow,
            RiskLevel::Low => Rating::Low,
            RiskLevel::Moderate => Rating::Moderate,
            RiskLevel::High => Rating::High,
            RiskLevel::VeryHigh => Rating::VeryHigh,
        }
    }
}

/// The six indicator categories shown in the atlas, each with its own map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MapCategory {
    #[serde(rename = "FRI")]
    Fri,
    #[serde(rename = "HAZARD")]
    Hazard,
    #[serde(rename = "VULNERABILITY")]
    Vulnerability,
    #[serde(rename = "EXPOSURE")]
    Exposure,
    #[serde(rename = "SOFT_CM")]
    SoftCm,
    #[serde(rename = "HARD_CM")]
    HardCm,
}

impl MapCategory {
    pub const ALL: [MapCategory; 6] = [
        MapCategory::Fri,
        MapCategory::Hazard,
        MapCategory::Vulnerability,
        MapCategory::Exposure,
        MapCategory::SoftCm,
        MapCategory::HardCm,
    ];

    /// Storage key used for this category in the persisted image mapping.
    pub fn key(self) -> &'static str {
        match self {
            MapCategory::Fri => "FRI",
            MapCategory::Hazard => "HAZARD",
            MapCategory::Vulnerability => "VULNERABILITY",
            MapCategory::Exposure => "EXPOSURE",
            MapCategory::SoftCm => "SOFT_CM",
            MapCategory::HardCm => "HARD_CM",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MapCategory::Fri => "Flood Risk Index",
            MapCategory::Hazard => "Hazard",
            MapCategory::Vulnerability => "Vulnerability",
            MapCategory::Exposure => "Exposure",
            MapCategory::SoftCm => "Soft Countermeasures",
            MapCategory::HardCm => "Hard Countermeasures",
        }
    }

    pub fn figure(self) -> &'static str {
        match self {
            MapCategory::Fri => "Figure 1.1: Flood Risk Index Map",
            MapCategory::Hazard => "Figure 2.1: Hazard Map",
            MapCategory::Vulnerability => "Figure 2.2: Vulnerability Map",
            MapCategory::Exposure => "Figure 2.3: Exposure Map",
            MapCategory::SoftCm => "Figure 2.4: Soft Countermeasures Map",
            MapCategory::HardCm => "Figure 2.5: Hard Countermeasures Map",
        }
    }

    pub fn table_ref(self) -> &'static str {
        match self {
            MapCategory::Fri => "Table 10.1",
            MapCategory::Hazard => "Table 4.3",
            MapCategory::Vulnerability => "Table 5.3",
            MapCategory::Exposure => "Table 6.3",
            MapCategory::SoftCm => "Table 7.2",
            MapCategory::HardCm => "Table 8.2",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MapCategory::Fri => {
                "Figure 1.1 shows Luzong (High Risk) in deep orange. San Ramon East is the safest."
            }
            MapCategory::Hazard => {
                "Figure 2.1: Luzong and Sto. Tomas are Very High risk (Deep Red) due to river proximity."
            }
            MapCategory::Vulnerability => {
                "Figure 2.2: Sto. Tomas is most vulnerable (socio-economic factors)."
            }
            MapCategory::Exposure => {
                "Figure 2.3: Luzong has highest physical exposure (Grey/Black)."
            }
            MapCategory::SoftCm => "Figure 2.4: Uniformly Low (Yellow) across all barangays.",
            MapCategory::HardCm => {
                "Figure 2.5: Luzong has moderate defenses (Dark Blue); others are Very Low."
            }
        }
    }

    /// Header of the value column in the ranked table.
    pub fn value_header(self) -> &'static str {
        match self {
            MapCategory::Fri => "Risk Index",
            MapCategory::SoftCm => "SCI",
            MapCategory::HardCm => "HCI",
            _ => "Index Value",
        }
    }

    /// Default static map image, relative to the asset directory root.
    pub fn image_path(self) -> &'static str {
        match self {
            MapCategory::Fri => "/fri_map.png",
            MapCategory::Hazard => "/hazard_map.png",
            MapCategory::Vulnerability => "/vulnerability_map.png",
            MapCategory::Exposure => "/exposure_map.png",
            MapCategory::SoftCm => "/soft_cm_map.png",
            MapCategory::HardCm => "/hard_cm_map.png",
        }
    }
}

impl std::fmt::Display for MapCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The thesis behind the dataset, as shown on the about page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Study {
    pub title: &'static str,
    pub objective: &'static str,
    pub methodology: &'static str,
    pub key_findings: &'static [Finding],
    pub research_team: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Finding {
    /// Lead-in shown in bold, e.g. `Awareness Gap:`.
    pub headline: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Model => write!(f, "model"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            is_error: false,
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
            is_error: true,
        }
    }
}
