use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UnknownIndicator;

/// One of the three healthcare indicator families.
///
/// Serialized by its column key (e.g. `"Health_Workers"`), which is also the
/// header used in the fixture CSV files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Indicator {
    /// Number of healthcare workers.
    #[serde(rename = "Health_Workers")]
    WorkforceCount,
    /// Number of healthcare institutions.
    #[serde(rename = "Healthcare_Institutions")]
    InstitutionCount,
    /// Healthcare service level.
    #[serde(rename = "Healthcare_Services")]
    ServiceLevel,
}

impl Indicator {
    /// All families, in dropdown order.
    pub const ALL: [Indicator; 3] = [
        Indicator::WorkforceCount,
        Indicator::InstitutionCount,
        Indicator::ServiceLevel,
    ];

    /// Column key used in CSV headers and selection payloads.
    pub fn key(&self) -> &'static str {
        match self {
            Indicator::WorkforceCount => "Health_Workers",
            Indicator::InstitutionCount => "Healthcare_Institutions",
            Indicator::ServiceLevel => "Healthcare_Services",
        }
    }

    /// Human-readable label for dropdowns, axes and titles.
    pub fn label(&self) -> &'static str {
        match self {
            Indicator::WorkforceCount => "Healthcare Workers",
            Indicator::InstitutionCount => "Healthcare Institutions",
            Indicator::ServiceLevel => "Healthcare Services",
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Indicator::WorkforceCount => "WorkforceCount",
            Indicator::InstitutionCount => "InstitutionCount",
            Indicator::ServiceLevel => "ServiceLevel",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Indicator {
    type Err = UnknownIndicator;

    /// Accepts the column key, the display label or the variant name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Indicator::ALL
            .into_iter()
            .find(|i| s == i.key() || s == i.label() || s == i.variant_name())
            .ok_or_else(|| UnknownIndicator(s.to_string()))
    }
}
