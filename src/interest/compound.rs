use rust_decimal::Decimal;

use crate::decimal::Rate;
use crate::errors::{CalcError, Result};
use crate::interest::{checked_mul, compound_factor, Contributions, InterestAccrual};
use crate::types::InterestMethod;

/// monthly compounding; each deposit compounds from the start of the month it was made
pub struct CompoundInterest {
    contributions: Contributions,
    monthly_rate: Rate,
}

impl CompoundInterest {
    pub fn new(contributions: Contributions, annual_rate: Rate) -> Self {
        Self {
            contributions,
            monthly_rate: annual_rate.monthly_rate(),
        }
    }

    /// balance including interest at the end of `month`
    pub fn future_value(&self, month: u32) -> Result<Decimal> {
        let amount = self.contributions.amount().as_decimal();
        let r = self.monthly_rate.as_decimal();

        match self.contributions {
            Contributions::Single(_) => {
                checked_mul(amount, compound_factor(self.monthly_rate, month)?, "compound balance")
            }
            Contributions::Monthly(_) if r.is_zero() => self.contributions.principal_at(month),
            Contributions::Monthly(_) => {
                // annuity due: A * ((1+r)^n - 1) / r * (1+r)
                let growth = (compound_factor(self.monthly_rate, month)? - Decimal::ONE)
                    .checked_div(r)
                    .ok_or(CalcError::Overflow { context: "compound balance" })?;
                let fv = checked_mul(amount, growth, "compound balance")?;
                checked_mul(fv, Decimal::ONE + r, "compound balance")
            }
        }
    }
}

impl InterestAccrual for CompoundInterest {
    fn interest_at(&self, month: u32) -> Result<Decimal> {
        if self.monthly_rate.is_zero() || month == 0 {
            return Ok(Decimal::ZERO);
        }
        Ok(self.future_value(month)? - self.contributions.principal_at(month)?)
    }

    fn method(&self) -> InterestMethod {
        InterestMethod::Compound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;
    use rust_decimal_macros::dec;

    #[test]
    fn test_lump_sum_compounds_monthly() {
        let model = CompoundInterest::new(
            Contributions::Single(Money::from_major(1_000)),
            Rate::from_percentage(12),
        );
        // 1,000 x 1.01^2 - 1,000
        assert_eq!(model.interest_at(2).unwrap(), dec!(20.1));

        let annual = model.interest_at(12).unwrap();
        assert!(annual > dec!(126.82) && annual < dec!(126.83));
    }

    #[test]
    fn test_monthly_deposits_are_annuity_due() {
        let model = CompoundInterest::new(
            Contributions::Monthly(Money::from_major(1_000)),
            Rate::from_percentage(12),
        );
        // first deposit earns one month before the end of month 1
        let first = model.interest_at(1).unwrap();
        assert!((first - dec!(10)).abs() < dec!(0.0000001));

        // month 2: 1,000 x 1.01^2 + 1,000 x 1.01 - 2,000
        let second = model.interest_at(2).unwrap();
        assert!((second - dec!(30.1)).abs() < dec!(0.0000001));
    }

    #[test]
    fn test_zero_rate_short_circuits() {
        let model = CompoundInterest::new(Contributions::Monthly(Money::from_major(1_000)), Rate::ZERO);
        assert_eq!(model.interest_at(36).unwrap(), Decimal::ZERO);
        assert_eq!(model.future_value(36).unwrap(), dec!(36000));
    }

    #[test]
    fn test_compound_beats_simple_over_long_terms() {
        use crate::interest::SimpleInterest;

        let deposits = Contributions::Monthly(Money::from_major(500_000));
        let rate = Rate::from_percent(dec!(4));
        let compound = CompoundInterest::new(deposits, rate).interest_at(60).unwrap();
        let simple = SimpleInterest::new(deposits, rate).interest_at(60).unwrap();
        assert!(compound > simple);
    }
}
