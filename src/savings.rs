use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SavingsPlan;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::interest::{accrual_model, checked_add, checked_mul, effective_rate, Contributions};

/// one month of the growth series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub month: u32,
    pub principal: Money,
    pub interest: Money,
    pub total: Money,
}

/// projected outcome of a savings plan; every amount is in whole currency units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsResult {
    pub total_principal: Money,
    pub pre_tax_interest: Money,
    pub tax_amount: Money,
    pub post_tax_interest: Money,
    pub total_amount: Money,
    pub growth_series: Vec<GrowthPoint>,
}

/// interest split after withholding, still unrounded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxWithholding {
    pub pre_tax: Decimal,
    pub tax: Decimal,
    pub post_tax: Decimal,
}

impl TaxWithholding {
    pub fn apply(pre_tax: Decimal, tax_rate: Rate) -> Result<Self> {
        let tax = checked_mul(pre_tax, tax_rate.as_decimal(), "withheld tax")?;
        Ok(Self {
            pre_tax,
            tax,
            post_tax: pre_tax - tax,
        })
    }
}

/// stateless calculator for deposit and installment-savings projections
#[derive(Debug, Clone, Copy, Default)]
pub struct SavingsCalculator;

impl SavingsCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(&self, plan: &SavingsPlan) -> Result<SavingsResult> {
        plan.validate()?;

        let rate = effective_rate(plan.annual_rate);
        let contributions = Contributions::new(plan.product_type, plan.contribution);
        let model = accrual_model(plan.interest_method, contributions, rate);

        let mut growth_series = Vec::with_capacity(plan.duration_months as usize);
        for month in 1..=plan.duration_months {
            let principal = contributions.principal_at(month)?;
            let interest = model.interest_at(month)?;
            growth_series.push(GrowthPoint {
                month,
                principal: Money::whole(principal),
                interest: Money::whole(interest),
                total: Money::whole(checked_add(principal, interest, "growth total")?),
            });
        }

        let total_principal = contributions.principal_at(plan.duration_months)?;
        let interest = TaxWithholding::apply(
            model.interest_at(plan.duration_months)?,
            plan.tax_class.rate(),
        )?;
        let total_amount = checked_add(total_principal, interest.post_tax, "total amount")?;

        debug!(
            "savings {} {:?} over {} months at {}: principal {}, interest {}, tax {}",
            plan.product_type,
            model.method(),
            plan.duration_months,
            rate,
            total_principal,
            interest.pre_tax,
            interest.tax
        );

        Ok(SavingsResult {
            total_principal: Money::whole(total_principal),
            pre_tax_interest: Money::whole(interest.pre_tax),
            tax_amount: Money::whole(interest.tax),
            post_tax_interest: Money::whole(interest.post_tax),
            total_amount: Money::whole(total_amount),
            growth_series,
        })
    }
}
