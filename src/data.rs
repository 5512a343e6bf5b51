//! The published Manabo flood-risk dataset, the study summary and the
//! advisor's briefing.
//!
//! Figures come from Table 10.1 and Figures 2.1 to 2.5 of the 2025 study and
//! are treated as read-only constants.

use crate::models::{Barangay, Finding, RiskLevel, Study};

pub const MUNICIPALITY: &str = "Manabo, Abra";

pub static BARANGAYS: &[Barangay] = &[
    Barangay {
        id: "luzong",
        name: "Luzong",
        fri: 0.766,
        risk_level: RiskLevel::High,
        hazard: 1.000,
        vulnerability: 0.456,
        exposure: 0.795,
        soft_cm: 0.333,
        hard_cm: 0.500,
        description: "Highest risk area due to proximity to Abra River. High exposure and insufficient structural defenses.",
        recommendation: "Immediate evacuation planning, structural reinforcement of dikes, and prioritized relief distribution.",
    },
    Barangay {
        id: "sto-tomas",
        name: "Sto. Tomas",
        fri: 0.561,
        risk_level: RiskLevel::Moderate,
        hazard: 0.833,
        vulnerability: 0.548,
        exposure: 0.425,
        soft_cm: 0.333,
        hard_cm: 0.000,
        description: "High vulnerability due to population density and poverty incidence. Significant hazard level.",
        recommendation: "Focus on social protection programs, flood-proofing housing, and establishment of evacuation centers.",
    },
    Barangay {
        id: "san-ramon-west",
        name: "San Ramon West",
        fri: 0.540,
        risk_level: RiskLevel::Moderate,
        hazard: 0.750,
        vulnerability: 0.502,
        exposure: 0.503,
        soft_cm: 0.333,
        hard_cm: 0.000,
        description: "Moderate to High risk. Lacks significant hard countermeasures despite high hazard.",
        recommendation: "Invest in drainage systems and hard infrastructure. Conduct community drills.",
    },
    Barangay {
        id: "catacdegan-nuevo",
        name: "Catacdegan Nuevo",
        fri: 0.496,
        risk_level: RiskLevel::Moderate,
        hazard: 0.583,
        vulnerability: 0.393,
        exposure: 0.667,
        soft_cm: 0.333,
        hard_cm: 0.000,
        description: "High exposure of population and infrastructure. Moderate hazard level.",
        recommendation: "Land use planning to restrict building in flood-prone zones. Early warning system enhancement.",
    },
    Barangay {
        id: "san-juan-sur",
        name: "San Juan Sur",
        fri: 0.346,
        risk_level: RiskLevel::Low,
        hazard: 0.500,
        vulnerability: 0.373,
        exposure: 0.232,
        soft_cm: 0.333,
        hard_cm: 0.000,
        description: "Moderate hazard but lower exposure compared to riverbank barangays.",
        recommendation: "Maintain drainage systems and improve household-level preparedness.",
    },
    Barangay {
        id: "san-juan-norte",
        name: "San Juan Norte",
        fri: 0.346,
        risk_level: RiskLevel::Low,
        hazard: 0.500,
        vulnerability: 0.459,
        exposure: 0.155,
        soft_cm: 0.333,
        hard_cm: 0.000,
        description: "Similar profile to San Juan Sur with slightly higher vulnerability.",
        recommendation: "Social support for vulnerable groups (elderly/children) during monsoon seasons.",
    },
    Barangay {
        id: "san-jose-sur",
        name: "San Jose Sur",
        fri: 0.297,
        risk_level: RiskLevel::Low,
        hazard: 0.500,
        vulnerability: 0.139,
        exposure: 0.116,
        soft_cm: 0.333,
        hard_cm: 0.167,
        description: "Low vulnerability and exposure indices contribute to a lower overall risk.",
        recommendation: "Serve as a support hub for high-risk neighboring barangays.",
    },
    Barangay {
        id: "ayyeng",
        name: "Ayyeng",
        fri: 0.236,
        risk_level: RiskLevel::Low,
        hazard: 0.333,
        vulnerability: 0.262,
        exposure: 0.000,
        soft_cm: 0.333,
        hard_cm: 0.333,
        description: "Very low exposure, likely situated on higher ground or further from the river.",
        recommendation: "Potential location for main evacuation centers and relief warehouses.",
    },
    Barangay {
        id: "san-jose-norte",
        name: "San Jose Norte",
        fri: 0.216,
        risk_level: RiskLevel::Low,
        hazard: 0.250,
        vulnerability: 0.459,
        exposure: 0.077,
        soft_cm: 0.333,
        hard_cm: 0.000,
        description: "Low hazard and exposure, though vulnerability remains moderate.",
        recommendation: "Focus on poverty alleviation to reduce socio-economic vulnerability.",
    },
    Barangay {
        id: "catacdegan-viejo",
        name: "Catacdegan Viejo",
        fri: 0.215,
        risk_level: RiskLevel::Low,
        hazard: 0.167,
        vulnerability: 0.505,
        exposure: 0.178,
        soft_cm: 0.333,
        hard_cm: 0.000,
        description: "Low physical risk but relatively high social vulnerability.",
        recommendation: "Community-based education and livelihood programs.",
    },
    Barangay {
        id: "san-ramon-east",
        name: "San Ramon East",
        fri: 0.146,
        risk_level: RiskLevel::VeryLow,
        hazard: 0.083,
        vulnerability: 0.282,
        exposure: 0.110,
        soft_cm: 0.333,
        hard_cm: 0.167,
        description: "The safest barangay in the municipality according to the index.",
        recommendation: "Ideal location for critical infrastructure and emergency command center.",
    },
];

/// Look up a barangay by slug, case-insensitively.
pub fn find(id: &str) -> Option<&'static Barangay> {
    BARANGAYS.iter().find(|b| b.id.eq_ignore_ascii_case(id.trim()))
}

pub static STUDY: Study = Study {
    title: "Mapping and Indexing Flood Risk in Manabo, Abra (2025)",
    objective: "To develop a comprehensive Flood Risk Index (FRI) map for the 11 barangays of Manabo, identifying high-risk zones to guide local government planning.",
    methodology: "A quantitative-developmental design integrating GIS mapping, secondary data analysis, and the Analytic Hierarchy Process (AHP) to weigh risk factors.",
    key_findings: &[
        Finding {
            headline: "Luzong",
            detail: "is the only High Risk barangay due to river proximity and lack of structural defenses.",
        },
        Finding {
            headline: "Awareness Gap:",
            detail: "Residents have high general hazard awareness but low personal vulnerability awareness.",
        },
        Finding {
            headline: "Soft Countermeasures:",
            detail: "Low across the board. Education and drills need significant improvement.",
        },
    ],
    research_team: &[
        "Benedito, Angelzen A.",
        "Duran, Rolly A.",
        "Pasal, Dominique B.",
        "Tadeo, Jeffershane Mae R.",
        "Tulan, Whitney B.",
    ],
};

pub const ADVISOR_GREETING: &str = "Hello! I am the Manabo Flood Resilience Advisor. I have access to the 2025 Thesis data regarding flood risk in our municipality. Ask me about the risk level of your barangay or how to prepare for the next typhoon.";

pub const ADVISOR_FAILURE: &str =
    "I'm having trouble connecting to the server. Please ensure the API Key is valid.";

pub const ADVISOR_INSTRUCTION: &str = r#"You are the Manabo Flood Resilience Advisor, an expert DRRM assistant based on the "Mapping and Indexing Flood Risk in Manabo, Abra" thesis (2025).

Your knowledge base is strictly limited to the following findings:
1. **Risk Overview:** Luzong is the ONLY "High Risk" barangay (FRI 0.766). Sto. Tomas, San Ramon West, and Catacdegan Nuevo are "Moderate Risk". The rest are Low/Very Low.
2. **The Problem:** Residents are highly aware of "Hazard" (3.73/5) but have low awareness of their personal "Vulnerability" (3.17/5) and "Exposure" (2.67/5).
3. **Countermeasures:**
   - *Soft (Education/Drills):* Uniformly LOW (0.333) across all barangays.
   - *Hard (Dikes/Drainage):* Missing (0.000) in many high-risk areas like Sto. Tomas and San Ramon West.
4. **Geography:** Risk is highest along the Abra River.
5. **Color Coding:** Hazard maps are Red, Vulnerability is Green, Hard CM is Blue.

**Your Goal:** Provide actionable, specific advice to residents, planners, or students.
- If asked about a specific barangay, look up its data in the provided context (Luzong, Sto. Tomas, etc.).
- If asked for recommendations, suggest: improving "Soft" countermeasures (drills, education), building "Hard" defenses in high-risk zones, and using San Ramon East (Very Low Risk) as an evacuation hub.
- Be professional, empathetic, and concise.
- Do not hallucinate data outside of Manabo, Abra."#;
