//! Display currencies and amount formatting.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A currency that amounts can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// West African CFA franc.
    #[default]
    Xof,
    /// Central African CFA franc.
    Xaf,
    /// Nigerian naira.
    Ngn,
    /// South African rand.
    Zar,
    /// Moroccan dirham.
    Mad,
    /// Tunisian dinar.
    Tnd,
    /// Algerian dinar.
    Dzd,
    /// Kenyan shilling.
    Kes,
    /// Ghanaian cedi.
    Ghs,
    /// CFP franc.
    Xpf,
    /// US dollar.
    Usd,
    /// Euro.
    Eur,
}

impl Currency {
    /// Every supported currency.
    pub const ALL: [Currency; 12] = [
        Currency::Xof,
        Currency::Xaf,
        Currency::Ngn,
        Currency::Zar,
        Currency::Mad,
        Currency::Tnd,
        Currency::Dzd,
        Currency::Kes,
        Currency::Ghs,
        Currency::Xpf,
        Currency::Usd,
        Currency::Eur,
    ];

    /// Returns the ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Xof => "XOF",
            Currency::Xaf => "XAF",
            Currency::Ngn => "NGN",
            Currency::Zar => "ZAR",
            Currency::Mad => "MAD",
            Currency::Tnd => "TND",
            Currency::Dzd => "DZD",
            Currency::Kes => "KES",
            Currency::Ghs => "GHS",
            Currency::Xpf => "XPF",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Returns the display symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Xof => "CFA",
            Currency::Xaf => "FCFA",
            Currency::Ngn => "₦",
            Currency::Zar => "R",
            Currency::Mad => "DH",
            Currency::Tnd => "د.ت",
            Currency::Dzd => "دج",
            Currency::Kes => "KSh",
            Currency::Ghs => "₵",
            Currency::Xpf => "₣",
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| EngineError::invalid_argument("currency", format!("unknown currency code: {}", s)))
    }
}

/// Formats an amount for display, rounded half away from zero to two decimals.
///
/// # Examples
///
/// ```
/// use timetrack_engine::models::{format_amount, Currency};
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::from(1500), Currency::Xof), "1500.00 CFA");
/// assert_eq!(format_amount(Decimal::new(12345, 3), Currency::Eur), "12.35 €");
/// ```
pub fn format_amount(amount: Decimal, currency: Currency) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    format!("{} {}", rounded, currency.symbol())
}
