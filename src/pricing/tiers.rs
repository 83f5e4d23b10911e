use serde::{Deserialize, Serialize};

/// key: pricing-policy -> version tag carried into checkout metadata
pub const PRICING_POLICY_VERSION: &str = "2024-calculator-v2";

/// Monthly plan floor in EUR. Covers the included invoice allowance.
pub const BASE_PRICE_EUR: u32 = 19;

/// Invoices per month covered by the base price.
pub const INCLUDED_INVOICES: u32 = 10;

pub const MIN_INVOICES: u32 = 1;
pub const MAX_INVOICES: u32 = 500;
pub const MAX_MOVEMENTS: u32 = 1000;

/// Companies a single self-serve subscription may carry before a quote is required.
pub const MAX_COMPANIES: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageDimension {
    Invoices,
    Movements,
}

/// key: pricing-tiers -> priced usage brackets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TierKey {
    #[serde(rename = "invoices_11_50")]
    Invoices11To50,
    #[serde(rename = "invoices_51_200")]
    Invoices51To200,
    #[serde(rename = "invoices_201_500")]
    Invoices201To500,
    #[serde(rename = "movements_1_100")]
    Movements1To100,
    #[serde(rename = "movements_101_200")]
    Movements101To200,
    #[serde(rename = "movements_201_500")]
    Movements201To500,
    #[serde(rename = "movements_501_1000")]
    Movements501To1000,
}

impl TierKey {
    pub const ALL: [TierKey; 7] = [
        TierKey::Invoices11To50,
        TierKey::Invoices51To200,
        TierKey::Invoices201To500,
        TierKey::Movements1To100,
        TierKey::Movements101To200,
        TierKey::Movements201To500,
        TierKey::Movements501To1000,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TierKey::Invoices11To50 => "invoices_11_50",
            TierKey::Invoices51To200 => "invoices_51_200",
            TierKey::Invoices201To500 => "invoices_201_500",
            TierKey::Movements1To100 => "movements_1_100",
            TierKey::Movements101To200 => "movements_101_200",
            TierKey::Movements201To500 => "movements_201_500",
            TierKey::Movements501To1000 => "movements_501_1000",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == value.trim())
    }

    pub fn dimension(&self) -> UsageDimension {
        match self {
            TierKey::Invoices11To50 | TierKey::Invoices51To200 | TierKey::Invoices201To500 => {
                UsageDimension::Invoices
            }
            _ => UsageDimension::Movements,
        }
    }

    pub fn bracket(&self) -> &'static TierBracket {
        let table: &'static [TierBracket] = match self.dimension() {
            UsageDimension::Invoices => &INVOICE_TIERS,
            UsageDimension::Movements => &MOVEMENT_TIERS,
        };
        // Every key appears in exactly one table row.
        table
            .iter()
            .find(|bracket| bracket.key == *self)
            .unwrap_or(&table[table.len() - 1])
    }

    pub fn addon_eur(&self) -> u32 {
        self.bracket().addon_eur
    }

    pub fn label(&self) -> String {
        let bracket = self.bracket();
        let unit = match self.dimension() {
            UsageDimension::Invoices => "invoices",
            UsageDimension::Movements => "bank movements",
        };
        format!("{}–{} {unit}/month", bracket.lower, bracket.upper)
    }
}

impl std::fmt::Display for TierKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a tier table. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierBracket {
    pub key: TierKey,
    pub lower: u32,
    pub upper: u32,
    pub addon_eur: u32,
}

pub static INVOICE_TIERS: [TierBracket; 3] = [
    TierBracket {
        key: TierKey::Invoices11To50,
        lower: INCLUDED_INVOICES + 1,
        upper: 50,
        addon_eur: 4,
    },
    TierBracket {
        key: TierKey::Invoices51To200,
        lower: 51,
        upper: 200,
        addon_eur: 9,
    },
    TierBracket {
        key: TierKey::Invoices201To500,
        lower: 201,
        upper: MAX_INVOICES,
        addon_eur: 19,
    },
];

pub static MOVEMENT_TIERS: [TierBracket; 4] = [
    TierBracket {
        key: TierKey::Movements1To100,
        lower: 1,
        upper: 100,
        addon_eur: 3,
    },
    TierBracket {
        key: TierKey::Movements101To200,
        lower: 101,
        upper: 200,
        addon_eur: 5,
    },
    TierBracket {
        key: TierKey::Movements201To500,
        lower: 201,
        upper: 500,
        addon_eur: 9,
    },
    TierBracket {
        key: TierKey::Movements501To1000,
        lower: 501,
        upper: MAX_MOVEMENTS,
        addon_eur: 15,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_contiguous(table: &[TierBracket], first_lower: u32, last_upper: u32) {
        assert_eq!(table[0].lower, first_lower);
        assert_eq!(table[table.len() - 1].upper, last_upper);
        for pair in table.windows(2) {
            assert_eq!(pair[0].upper + 1, pair[1].lower, "gap or overlap at {:?}", pair[1].key);
            assert!(pair[0].addon_eur <= pair[1].addon_eur);
        }
        for bracket in table {
            assert!(bracket.lower <= bracket.upper);
        }
    }

    #[test]
    fn invoice_table_covers_domain_above_allowance() {
        assert_contiguous(&INVOICE_TIERS, INCLUDED_INVOICES + 1, MAX_INVOICES);
    }

    #[test]
    fn movement_table_covers_positive_domain() {
        assert_contiguous(&MOVEMENT_TIERS, 1, MAX_MOVEMENTS);
    }

    #[test]
    fn keys_round_trip_through_their_string_form() {
        for key in TierKey::ALL {
            assert_eq!(TierKey::parse(key.as_str()), Some(key));
            let encoded = serde_json::to_value(key).unwrap();
            assert_eq!(encoded, serde_json::json!(key.as_str()));
        }
        assert_eq!(TierKey::parse("invoices_1_10"), None);
    }

    #[test]
    fn labels_describe_bracket_bounds() {
        assert_eq!(TierKey::Invoices11To50.label(), "11–50 invoices/month");
        assert_eq!(
            TierKey::Movements101To200.label(),
            "101–200 bank movements/month"
        );
        assert_eq!(TierKey::Movements101To200.addon_eur(), 5);
    }
}
