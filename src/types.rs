use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::decimal::Rate;
use crate::errors::CalcError;

/// how contributions enter a savings product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    /// a single deposit at the start of the term
    #[serde(rename = "deposit", alias = "lump_sum")]
    LumpSum,
    /// an equal contribution at the start of every month
    #[serde(rename = "savings", alias = "periodic")]
    Periodic,
}

/// how interest accrues on a savings product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestMethod {
    Simple,
    Compound,
}

/// tax withholding class applied to interest income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxClass {
    /// 15.4%
    #[serde(rename = "normal", alias = "standard")]
    Standard,
    /// 9.5%
    #[serde(rename = "preferential")]
    Preferential,
    /// 0%
    #[serde(rename = "none", alias = "exempt")]
    Exempt,
}

impl TaxClass {
    /// fraction of interest withheld
    pub fn rate(&self) -> Rate {
        match self {
            TaxClass::Standard => Rate::from_decimal(dec!(0.154)),
            TaxClass::Preferential => Rate::from_decimal(dec!(0.095)),
            TaxClass::Exempt => Rate::ZERO,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaxClass::Standard => "standard (15.4%)",
            TaxClass::Preferential => "preferential (9.5%)",
            TaxClass::Exempt => "exempt (0%)",
        }
    }
}

/// loan repayment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepaymentMethod {
    /// constant total payment (annuity)
    #[serde(rename = "equal_pi", alias = "equal_principal_interest")]
    EqualPrincipalInterest,
    /// constant principal share, declining payment
    #[serde(rename = "equal_p", alias = "equal_principal")]
    EqualPrincipal,
    /// interest only, principal due at maturity
    #[serde(rename = "bullet")]
    Bullet,
}

impl RepaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            RepaymentMethod::EqualPrincipalInterest => "equal principal and interest",
            RepaymentMethod::EqualPrincipal => "equal principal",
            RepaymentMethod::Bullet => "bullet",
        }
    }
}

/// string codes, first entry is the canonical one
macro_rules! codes {
    (@first $first:literal $(, $rest:literal)*) => { $first };
    ($ty:ty, $field:literal, $( $variant:path => [$($code:literal),+] ),+ $(,)?) => {
        impl $ty {
            pub fn code(&self) -> &'static str {
                match self {
                    $( $variant => codes!(@first $($code),+), )+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $ty {
            type Err = CalcError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $( $($code)|+ => Ok($variant), )+
                    _ => Err(CalcError::Parse {
                        field: $field,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

codes!(ProductType, "product type",
    ProductType::LumpSum => ["deposit", "lump_sum"],
    ProductType::Periodic => ["savings", "periodic"],
);

codes!(InterestMethod, "interest method",
    InterestMethod::Simple => ["simple"],
    InterestMethod::Compound => ["compound"],
);

codes!(TaxClass, "tax class",
    TaxClass::Standard => ["normal", "standard"],
    TaxClass::Preferential => ["preferential"],
    TaxClass::Exempt => ["none", "exempt"],
);

codes!(RepaymentMethod, "repayment method",
    RepaymentMethod::EqualPrincipalInterest => ["equal_pi", "equal_principal_interest"],
    RepaymentMethod::EqualPrincipal => ["equal_p", "equal_principal"],
    RepaymentMethod::Bullet => ["bullet"],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rates() {
        assert_eq!(TaxClass::Standard.rate().as_decimal(), dec!(0.154));
        assert_eq!(TaxClass::Preferential.rate().as_decimal(), dec!(0.095));
        assert!(TaxClass::Exempt.rate().is_zero());
    }

    #[test]
    fn test_original_codes_parse() {
        assert_eq!("deposit".parse::<ProductType>().unwrap(), ProductType::LumpSum);
        assert_eq!("savings".parse::<ProductType>().unwrap(), ProductType::Periodic);
        assert_eq!("none".parse::<TaxClass>().unwrap(), TaxClass::Exempt);
        assert_eq!(" Equal_PI ".parse::<RepaymentMethod>().unwrap(), RepaymentMethod::EqualPrincipalInterest);
        assert_eq!("equal_principal".parse::<RepaymentMethod>().unwrap(), RepaymentMethod::EqualPrincipal);
        assert!("weekly".parse::<InterestMethod>().is_err());
    }

    #[test]
    fn test_display_uses_canonical_code() {
        assert_eq!(TaxClass::Standard.to_string(), "normal");
        assert_eq!(RepaymentMethod::EqualPrincipal.to_string(), "equal_p");
        assert_eq!(ProductType::LumpSum.to_string(), "deposit");
    }

    #[test]
    fn test_serde_names_match_codes() {
        let json = serde_json::to_string(&RepaymentMethod::Bullet).unwrap();
        assert_eq!(json, "\"bullet\"");
        let parsed: TaxClass = serde_json::from_str("\"exempt\"").unwrap();
        assert_eq!(parsed, TaxClass::Exempt);
        let parsed: ProductType = serde_json::from_str("\"savings\"").unwrap();
        assert_eq!(parsed, ProductType::Periodic);
    }
}
