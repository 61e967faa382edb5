//! Country descriptors for the supported jurisdictions.
//!
//! A `Country` travels alongside a calculation result to the export
//! collaborator so the rendered document can carry the right jurisdiction
//! and currency. Formatting itself lives outside this workspace.

use serde::{Deserialize, Serialize};

use super::money::Currency;

/// A supported country with its currency descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Country display name.
    pub name: &'static str,
    /// ISO 3166-1 alpha-2 code.
    pub code: &'static str,
    /// Currency used for estate figures in this country.
    pub currency: Currency,
    /// Currency symbol for display.
    pub symbol: &'static str,
}

/// All countries the system supports.
pub const COUNTRIES: [Country; 5] = [
    Country {
        name: "Cameroon",
        code: "CM",
        currency: Currency::Xaf,
        symbol: "FCFA",
    },
    Country {
        name: "Nigeria",
        code: "NG",
        currency: Currency::Ngn,
        symbol: "\u{20a6}",
    },
    Country {
        name: "United Kingdom",
        code: "GB",
        currency: Currency::Gbp,
        symbol: "\u{a3}",
    },
    Country {
        name: "United States",
        code: "US",
        currency: Currency::Usd,
        symbol: "$",
    },
    Country {
        name: "Saudi Arabia",
        code: "SA",
        currency: Currency::Sar,
        symbol: "SR",
    },
];

impl Country {
    /// Looks up a country by its ISO 3166-1 alpha-2 code.
    #[must_use]
    pub fn by_code(code: &str) -> Option<Self> {
        COUNTRIES
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .cloned()
    }
}

impl Default for Country {
    /// Cameroon is the system default jurisdiction.
    fn default() -> Self {
        COUNTRIES[0].clone()
    }
}
