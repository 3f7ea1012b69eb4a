use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::decimal::Rate;
use crate::errors::Result;
use crate::interest::{checked_mul, Contributions, InterestAccrual};
use crate::types::InterestMethod;

/// simple (non-compounding) interest on the contributed principal
pub struct SimpleInterest {
    contributions: Contributions,
    annual_rate: Rate,
}

impl SimpleInterest {
    pub fn new(contributions: Contributions, annual_rate: Rate) -> Self {
        Self {
            contributions,
            annual_rate,
        }
    }
}

impl InterestAccrual for SimpleInterest {
    fn interest_at(&self, month: u32) -> Result<Decimal> {
        let yearly = checked_mul(
            self.contributions.amount().as_decimal(),
            self.annual_rate.as_decimal(),
            "simple interest",
        )?;

        // a monthly deposit made at the start of month k earns for (month - k + 1) months,
        // so the month-weights sum to the triangular number month(month+1)/2
        let weight = match self.contributions {
            Contributions::Single(_) => Decimal::from(month),
            Contributions::Monthly(_) => {
                let m = u64::from(month);
                Decimal::from(m * (m + 1) / 2)
            }
        };

        Ok(checked_mul(yearly, weight, "simple interest")? / dec!(12))
    }

    fn method(&self) -> InterestMethod {
        InterestMethod::Simple
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;

    #[test]
    fn test_lump_sum_is_linear() {
        let model = SimpleInterest::new(
            Contributions::Single(Money::from_major(1_000_000)),
            Rate::from_percent(dec!(3.5)),
        );
        assert_eq!(model.interest_at(12).unwrap(), dec!(35000));
        assert_eq!(model.interest_at(6).unwrap(), dec!(17500));
        assert_eq!(model.interest_at(0).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_monthly_deposits_use_triangular_weights() {
        let model = SimpleInterest::new(
            Contributions::Monthly(Money::from_major(100_000)),
            Rate::from_percentage(12),
        );
        // 100,000 x 1% x (12 x 13 / 2)
        assert_eq!(model.interest_at(12).unwrap(), dec!(78000));
        // first month: one deposit, one month of interest
        assert_eq!(model.interest_at(1).unwrap(), dec!(1000));
    }

    #[test]
    fn test_zero_rate_earns_nothing() {
        let model = SimpleInterest::new(Contributions::Monthly(Money::from_major(1_000)), Rate::ZERO);
        assert!(model.interest_at(24).unwrap().is_zero());
    }
}
