use serde::{Deserialize, Serialize};

/// National-strategy priority an idea can be aligned with.
///
/// Declaration order matters: rule-based detection walks priorities in this
/// order and truncates, so earlier variants win when more than three match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoroccanPriority {
    GreenMorocco,
    DigitalMorocco,
    #[serde(rename = "vision_2030")]
    Vision2030,
    YouthEmployment,
    WomenEntrepreneurship,
    RuralDevelopment,
    HealthcareImprovement,
}

impl MoroccanPriority {
    pub const ALL: [MoroccanPriority; 7] = [
        MoroccanPriority::GreenMorocco,
        MoroccanPriority::DigitalMorocco,
        MoroccanPriority::Vision2030,
        MoroccanPriority::YouthEmployment,
        MoroccanPriority::WomenEntrepreneurship,
        MoroccanPriority::RuralDevelopment,
        MoroccanPriority::HealthcareImprovement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoroccanPriority::GreenMorocco => "green_morocco",
            MoroccanPriority::DigitalMorocco => "digital_morocco",
            MoroccanPriority::Vision2030 => "vision_2030",
            MoroccanPriority::YouthEmployment => "youth_employment",
            MoroccanPriority::WomenEntrepreneurship => "women_entrepreneurship",
            MoroccanPriority::RuralDevelopment => "rural_development",
            MoroccanPriority::HealthcareImprovement => "healthcare_improvement",
        }
    }
}

impl std::fmt::Display for MoroccanPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MoroccanPriority {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let code = s.trim().to_lowercase();
        MoroccanPriority::ALL
            .into_iter()
            .find(|p| p.as_str() == code)
            .ok_or_else(|| anyhow::anyhow!("Invalid Moroccan priority: {}", s))
    }
}
