use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::LoanPlan;
use crate::decimal::{Money, Rate};
use crate::errors::{CalcError, Result};
use crate::interest::{checked_add, checked_mul, compound_factor, effective_rate};
use crate::types::RepaymentMethod;

/// one repayment round, every amount rounded to whole units on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub round: u32,
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    /// outstanding principal after this round
    pub balance: Money,
}

/// projected repayment of a loan plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanResult {
    pub total_interest: Money,
    pub total_repayment: Money,
    pub schedule: Vec<ScheduleRow>,
}

impl LoanResult {
    /// get row for a specific round (1-based)
    pub fn get_round(&self, round: u32) -> Option<&ScheduleRow> {
        round
            .checked_sub(1)
            .and_then(|index| self.schedule.get(index as usize))
    }

    /// payment due in the first round
    pub fn first_payment(&self) -> Money {
        self.get_round(1).map(|row| row.payment).unwrap_or(Money::ZERO)
    }

    /// borrowed principal as implied by the totals
    pub fn loan_principal(&self) -> Money {
        self.total_repayment - self.total_interest
    }

    /// balance left after the last round
    pub fn final_balance(&self) -> Money {
        self.schedule.last().map(|row| row.balance).unwrap_or(Money::ZERO)
    }
}

/// stateless loan amortization calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct LoanAmortizationCalculator;

impl LoanAmortizationCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(&self, plan: &LoanPlan) -> Result<LoanResult> {
        plan.validate()?;

        let principal = plan.principal.as_decimal();
        let monthly_rate = effective_rate(plan.annual_rate).monthly_rate();
        let r = monthly_rate.as_decimal();
        let term = plan.duration_months;
        let repayment_months = plan.repayment_months();

        // a grace period that swallows the whole term still has to repay at maturity
        let method = if repayment_months == 0 {
            RepaymentMethod::Bullet
        } else {
            plan.repayment_method
        };

        let installment = match method {
            RepaymentMethod::EqualPrincipalInterest => {
                annuity_payment(principal, monthly_rate, repayment_months)?
            }
            RepaymentMethod::EqualPrincipal => principal / Decimal::from(repayment_months),
            RepaymentMethod::Bullet => Decimal::ZERO,
        };

        let mut schedule = Vec::with_capacity(term as usize);
        let mut remaining = principal;
        let mut total_interest = Decimal::ZERO;

        for round in 1..=term {
            let interest = checked_mul(remaining, r, "monthly interest")?;
            let in_grace = round <= plan.grace_months && !(repayment_months == 0 && round == term);

            let scheduled_principal = if in_grace {
                Decimal::ZERO
            } else {
                match method {
                    RepaymentMethod::EqualPrincipalInterest => installment - interest,
                    RepaymentMethod::EqualPrincipal => installment,
                    RepaymentMethod::Bullet if round == term => remaining,
                    RepaymentMethod::Bullet => Decimal::ZERO,
                }
            };
            let principal_paid = scheduled_principal.min(remaining).max(Decimal::ZERO);

            let payment = match method {
                RepaymentMethod::EqualPrincipalInterest if !in_grace => installment,
                _ => principal_paid + interest,
            };

            remaining -= principal_paid;
            total_interest = checked_add(total_interest, interest, "total interest")?;

            schedule.push(ScheduleRow {
                round,
                payment: Money::whole(payment),
                principal: Money::whole(principal_paid),
                interest: Money::whole(interest),
                balance: Money::whole(remaining),
            });
        }

        let total_repayment = checked_add(principal, total_interest, "total repayment")?;

        debug!(
            "loan {} of {} over {} months ({} grace) at {}: interest {}, residual {}",
            method,
            plan.principal,
            term,
            plan.grace_months,
            plan.annual_rate,
            total_interest,
            remaining
        );

        Ok(LoanResult {
            total_interest: Money::whole(total_interest),
            total_repayment: Money::whole(total_repayment),
            schedule,
        })
    }
}

/// fixed installment repaying `principal` over `months`: P * r * (1+r)^n / ((1+r)^n - 1)
pub fn annuity_payment(principal: Decimal, monthly_rate: Rate, months: u32) -> Result<Decimal> {
    if months == 0 {
        return Ok(principal);
    }

    let r = monthly_rate.as_decimal();
    if r.is_zero() {
        return Ok(principal / Decimal::from(months));
    }

    let compound = compound_factor(monthly_rate, months)?;
    let numerator = checked_mul(checked_mul(principal, r, "annuity payment")?, compound, "annuity payment")?;
    let denominator = compound - Decimal::ONE;

    numerator
        .checked_div(denominator)
        .ok_or(CalcError::Overflow { context: "annuity payment" })
}
