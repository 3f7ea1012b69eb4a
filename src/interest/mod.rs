pub mod compound;
pub mod simple;

use log::warn;
use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{CalcError, Result};
use crate::types::{InterestMethod, ProductType};

pub use compound::CompoundInterest;
pub use simple::SimpleInterest;

/// when contributions enter the account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contributions {
    /// one deposit before the first month
    Single(Money),
    /// the same amount at the start of every month
    Monthly(Money),
}

impl Contributions {
    pub fn new(product_type: ProductType, amount: Money) -> Self {
        match product_type {
            ProductType::LumpSum => Contributions::Single(amount),
            ProductType::Periodic => Contributions::Monthly(amount),
        }
    }

    pub fn amount(&self) -> Money {
        match self {
            Contributions::Single(amount) | Contributions::Monthly(amount) => *amount,
        }
    }

    /// principal paid in through the end of `month`
    pub fn principal_at(&self, month: u32) -> Result<Decimal> {
        match self {
            Contributions::Single(amount) => Ok(amount.as_decimal()),
            Contributions::Monthly(amount) => {
                checked_mul(amount.as_decimal(), Decimal::from(month), "accumulated principal")
            }
        }
    }
}

/// trait for month-indexed interest accrual on a savings product
pub trait InterestAccrual {
    /// unrounded interest earned through the end of `month`; zero for month 0
    fn interest_at(&self, month: u32) -> Result<Decimal>;

    fn method(&self) -> InterestMethod;
}

/// pick the accrual model for a product
pub fn accrual_model(
    method: InterestMethod,
    contributions: Contributions,
    annual_rate: Rate,
) -> Box<dyn InterestAccrual> {
    match method {
        InterestMethod::Simple => Box::new(SimpleInterest::new(contributions, annual_rate)),
        InterestMethod::Compound => Box::new(CompoundInterest::new(contributions, annual_rate)),
    }
}

/// negative rates project as principal-only, the same as a zero rate
pub fn effective_rate(annual_rate: Rate) -> Rate {
    if annual_rate.is_negative() {
        warn!("negative annual rate {} treated as 0%", annual_rate);
        Rate::ZERO
    } else {
        annual_rate
    }
}

/// (1 + r)^periods by repeated squaring
pub fn compound_factor(monthly_rate: Rate, periods: u32) -> Result<Decimal> {
    let mut base = Decimal::ONE + monthly_rate.as_decimal();
    let mut factor = Decimal::ONE;
    let mut exp = periods;
    while exp > 0 {
        if exp & 1 == 1 {
            factor = checked_mul(factor, base, "compound factor")?;
        }
        exp >>= 1;
        if exp > 0 {
            base = checked_mul(base, base, "compound factor")?;
        }
    }
    Ok(factor)
}

pub(crate) fn checked_mul(a: Decimal, b: Decimal, context: &'static str) -> Result<Decimal> {
    a.checked_mul(b).ok_or(CalcError::Overflow { context })
}

pub(crate) fn checked_add(a: Decimal, b: Decimal, context: &'static str) -> Result<Decimal> {
    a.checked_add(b).ok_or(CalcError::Overflow { context })
}
