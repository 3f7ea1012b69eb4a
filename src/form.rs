//! coercion of raw calculator-form strings into typed plans

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::{LoanPlan, SavingsPlan};
use crate::decimal::{Money, Rate};
use crate::errors::{CalcError, Result};

/// savings form exactly as the input widgets hand it over
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsForm {
    /// `savings` (monthly) or `deposit` (lump sum)
    #[serde(rename = "type")]
    pub product_type: String,
    pub amount: String,
    pub months: String,
    pub rate: String,
    pub method: String,
    pub tax: String,
}

impl Default for SavingsForm {
    fn default() -> Self {
        Self::from_plan(&SavingsPlan::default())
    }
}

impl SavingsForm {
    pub fn from_plan(plan: &SavingsPlan) -> Self {
        Self {
            product_type: plan.product_type.to_string(),
            amount: plan.contribution.as_decimal().normalize().to_string(),
            months: plan.duration_months.to_string(),
            rate: plan.annual_rate.as_percentage().normalize().to_string(),
            method: plan.interest_method.to_string(),
            tax: plan.tax_class.to_string(),
        }
    }

    pub fn to_plan(&self) -> Result<SavingsPlan> {
        let plan = SavingsPlan {
            product_type: self.product_type.parse()?,
            contribution: parse_amount("amount", &self.amount)?,
            duration_months: parse_months("months", &self.months)?,
            annual_rate: parse_rate("rate", &self.rate)?,
            interest_method: self.method.parse()?,
            tax_class: self.tax.parse()?,
        };
        plan.validate()?;
        Ok(plan)
    }
}

/// loan form exactly as the input widgets hand it over
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanForm {
    pub amount: String,
    pub months: String,
    pub rate: String,
    #[serde(default)]
    pub grace: String,
    pub method: String,
}

impl Default for LoanForm {
    fn default() -> Self {
        Self::from_plan(&LoanPlan::default())
    }
}

impl LoanForm {
    pub fn from_plan(plan: &LoanPlan) -> Self {
        Self {
            amount: plan.principal.as_decimal().normalize().to_string(),
            months: plan.duration_months.to_string(),
            rate: plan.annual_rate.as_percentage().normalize().to_string(),
            grace: plan.grace_months.to_string(),
            method: plan.repayment_method.to_string(),
        }
    }

    pub fn to_plan(&self) -> Result<LoanPlan> {
        let plan = LoanPlan {
            principal: parse_amount("amount", &self.amount)?,
            duration_months: parse_months("months", &self.months)?,
            annual_rate: parse_rate("rate", &self.rate)?,
            grace_months: parse_months("grace", &self.grace)?,
            repayment_method: self.method.parse()?,
        };
        plan.validate()?;
        Ok(plan)
    }
}

/// strip thousands separators and blanks; an empty field reads as zero
fn parse_number(field: &'static str, raw: &str) -> Result<Decimal> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| CalcError::Parse {
            field,
            value: raw.to_string(),
        })
}

pub fn parse_amount(field: &'static str, raw: &str) -> Result<Money> {
    parse_number(field, raw).map(Money::from_decimal)
}

/// annual rate typed as a percentage, e.g. `3.5`
pub fn parse_rate(field: &'static str, raw: &str) -> Result<Rate> {
    parse_number(field, raw).map(Rate::from_percent)
}

/// whole month count; fractions and negatives are rejected
pub fn parse_months(field: &'static str, raw: &str) -> Result<u32> {
    let value = parse_number(field, raw)?;
    let invalid = || CalcError::Parse {
        field,
        value: raw.to_string(),
    };
    if !value.fract().is_zero() {
        return Err(invalid());
    }
    value.to_u32().ok_or_else(invalid)
}
