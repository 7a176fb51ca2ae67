use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString},
};

/// Fiat currencies the dashboard can quote bitcoin in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Currency {
    #[default]
    #[strum(to_string = "USD")]
    Usd,
    #[strum(to_string = "EUR")]
    Eur,
    #[strum(to_string = "GBP")]
    Gbp,
}

impl Currency {
    /// ISO 4217 code, as used by the spot price endpoint.
    pub fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
        }
    }

    /// Lowercase code for the `vs_currency` query parameter.
    pub fn api_code(self) -> &'static str {
        match self {
            Self::Usd => "usd",
            Self::Eur => "eur",
            Self::Gbp => "gbp",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
        }
    }
}
