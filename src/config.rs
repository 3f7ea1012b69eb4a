use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{CalcError, Result};
use crate::types::{InterestMethod, ProductType, RepaymentMethod, TaxClass};

/// savings or deposit plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsPlan {
    pub product_type: ProductType,
    /// lump sum for a deposit, per-month amount for periodic savings
    pub contribution: Money,
    pub duration_months: u32,
    /// nominal annual rate
    pub annual_rate: Rate,
    pub interest_method: InterestMethod,
    pub tax_class: TaxClass,
}

impl Default for SavingsPlan {
    fn default() -> Self {
        Self {
            product_type: ProductType::Periodic,
            contribution: Money::from_major(1_000_000),
            duration_months: 12,
            annual_rate: Rate::from_percent(dec!(3.5)),
            interest_method: InterestMethod::Simple,
            tax_class: TaxClass::Standard,
        }
    }
}

impl SavingsPlan {
    pub fn builder() -> SavingsPlanBuilder {
        SavingsPlanBuilder::new()
    }

    /// reject amounts the engine cannot give a meaningful projection for
    pub fn validate(&self) -> Result<()> {
        if self.contribution.is_negative() {
            return Err(CalcError::invalid_plan(format!(
                "contribution must not be negative, got {}",
                self.contribution
            )));
        }
        Ok(())
    }
}

/// installment loan plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanPlan {
    pub principal: Money,
    pub duration_months: u32,
    pub annual_rate: Rate,
    /// leading interest-only months
    pub grace_months: u32,
    pub repayment_method: RepaymentMethod,
}

impl Default for LoanPlan {
    fn default() -> Self {
        Self {
            principal: Money::from_major(50_000_000),
            duration_months: 24,
            annual_rate: Rate::from_percent(dec!(4.5)),
            grace_months: 0,
            repayment_method: RepaymentMethod::EqualPrincipalInterest,
        }
    }
}

impl LoanPlan {
    pub fn builder() -> LoanPlanBuilder {
        LoanPlanBuilder::new()
    }

    /// months left for repaying principal after the grace period
    pub fn repayment_months(&self) -> u32 {
        self.duration_months.saturating_sub(self.grace_months)
    }

    pub fn validate(&self) -> Result<()> {
        if self.principal.is_negative() {
            return Err(CalcError::invalid_plan(format!(
                "loan principal must not be negative, got {}",
                self.principal
            )));
        }
        Ok(())
    }
}

/// builder for savings plans; unset fields fall back to `SavingsPlan::default()`
#[derive(Debug, Clone, Default)]
pub struct SavingsPlanBuilder {
    product_type: Option<ProductType>,
    contribution: Option<Money>,
    duration_months: Option<u32>,
    annual_rate: Option<Rate>,
    interest_method: Option<InterestMethod>,
    tax_class: Option<TaxClass>,
}

impl SavingsPlanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = Some(product_type);
        self
    }

    pub fn lump_sum(self, amount: Money) -> Self {
        self.product_type(ProductType::LumpSum).contribution(amount)
    }

    pub fn monthly(self, amount: Money) -> Self {
        self.product_type(ProductType::Periodic).contribution(amount)
    }

    pub fn contribution(mut self, amount: Money) -> Self {
        self.contribution = Some(amount);
        self
    }

    pub fn months(mut self, months: u32) -> Self {
        self.duration_months = Some(months);
        self
    }

    pub fn rate(mut self, rate: Rate) -> Self {
        self.annual_rate = Some(rate);
        self
    }

    pub fn interest_method(mut self, method: InterestMethod) -> Self {
        self.interest_method = Some(method);
        self
    }

    pub fn tax_class(mut self, tax_class: TaxClass) -> Self {
        self.tax_class = Some(tax_class);
        self
    }

    pub fn build(self) -> Result<SavingsPlan> {
        let defaults = SavingsPlan::default();
        let plan = SavingsPlan {
            product_type: self.product_type.unwrap_or(defaults.product_type),
            contribution: self.contribution.unwrap_or(defaults.contribution),
            duration_months: self.duration_months.unwrap_or(defaults.duration_months),
            annual_rate: self.annual_rate.unwrap_or(defaults.annual_rate),
            interest_method: self.interest_method.unwrap_or(defaults.interest_method),
            tax_class: self.tax_class.unwrap_or(defaults.tax_class),
        };
        plan.validate()?;
        Ok(plan)
    }
}

/// builder for loan plans; unset fields fall back to `LoanPlan::default()`
#[derive(Debug, Clone, Default)]
pub struct LoanPlanBuilder {
    principal: Option<Money>,
    duration_months: Option<u32>,
    annual_rate: Option<Rate>,
    grace_months: Option<u32>,
    repayment_method: Option<RepaymentMethod>,
}

impl LoanPlanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.principal = Some(amount);
        self
    }

    pub fn months(mut self, months: u32) -> Self {
        self.duration_months = Some(months);
        self
    }

    pub fn rate(mut self, rate: Rate) -> Self {
        self.annual_rate = Some(rate);
        self
    }

    pub fn grace_months(mut self, months: u32) -> Self {
        self.grace_months = Some(months);
        self
    }

    pub fn method(mut self, method: RepaymentMethod) -> Self {
        self.repayment_method = Some(method);
        self
    }

    pub fn build(self) -> Result<LoanPlan> {
        let defaults = LoanPlan::default();
        let plan = LoanPlan {
            principal: self.principal.unwrap_or(defaults.principal),
            duration_months: self.duration_months.unwrap_or(defaults.duration_months),
            annual_rate: self.annual_rate.unwrap_or(defaults.annual_rate),
            grace_months: self.grace_months.unwrap_or(defaults.grace_months),
            repayment_method: self.repayment_method.unwrap_or(defaults.repayment_method),
        };
        plan.validate()?;
        if plan.grace_months > plan.duration_months {
            return Err(CalcError::invalid_plan(format!(
                "grace period of {} months exceeds the {} month term",
                plan.grace_months, plan.duration_months
            )));
        }
        Ok(plan)
    }
}
