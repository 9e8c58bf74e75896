//! Static country reference data.
//!
//! Countries are grouped by region for display. Lookup is an exact,
//! case-sensitive match on the country name and ignores grouping.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskTier {
    High,
    Mid,
    Normal,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::High => "High",
            RiskTier::Mid => "Mid",
            RiskTier::Normal => "Normal",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub risk: RiskTier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub countries: &'static [Country],
}

const fn country(name: &'static str, risk: RiskTier) -> Country {
    Country { name, risk }
}

static REGIONS: &[Region] = &[
    Region {
        name: "Africa",
        countries: &[
            country("South Africa", RiskTier::High),
            country("Egypt", RiskTier::High),
            country("Kenya", RiskTier::High),
        ],
    },
    Region {
        name: "Asia",
        countries: &[
            country("China", RiskTier::Mid),
            country("Japan", RiskTier::Mid),
            country("South Korea", RiskTier::Mid),
        ],
    },
    Region {
        name: "North America",
        countries: &[
            country("United States", RiskTier::Normal),
            country("Canada", RiskTier::Normal),
        ],
    },
    Region {
        name: "Europe",
        countries: &[
            country("United Kingdom", RiskTier::Normal),
            country("Germany", RiskTier::Normal),
            country("France", RiskTier::Normal),
            country("Italy", RiskTier::Normal),
        ],
    },
];

/// Regions in display order.
pub fn regions() -> &'static [Region] {
    REGIONS
}

/// Every country across all regions, in display order.
pub fn countries() -> impl Iterator<Item = &'static Country> {
    REGIONS.iter().flat_map(|region| region.countries.iter())
}

/// Risk tier recorded for `name`, or `None` for names not in the table.
pub fn lookup_risk(name: &str) -> Option<RiskTier> {
    countries().find(|c| c.name == name).map(|c| c.risk)
}
