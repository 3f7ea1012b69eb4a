//! chart- and table-ready views of calculator results

use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::payments::{LoanResult, ScheduleRow};
use crate::savings::{GrowthPoint, SavingsResult};

/// serializable view of a savings projection, amounts as plain integers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsView {
    pub total_principal: i64,
    pub pre_tax_interest: i64,
    pub tax_amount: i64,
    pub post_tax_interest: i64,
    pub total_amount: i64,
    pub chart_data: Vec<ChartPointView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPointView {
    pub month: u32,
    pub principal: i64,
    pub interest: i64,
    pub total: i64,
}

/// serializable view of a loan projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanView {
    pub total_interest: i64,
    pub total_repayment: i64,
    pub loan_principal: i64,
    pub first_payment: i64,
    pub schedule: Vec<ScheduleRowView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRowView {
    pub round: u32,
    pub payment: i64,
    pub principal: i64,
    pub interest: i64,
    pub balance: i64,
}

impl From<&GrowthPoint> for ChartPointView {
    fn from(point: &GrowthPoint) -> Self {
        Self {
            month: point.month,
            principal: point.principal.to_i64(),
            interest: point.interest.to_i64(),
            total: point.total.to_i64(),
        }
    }
}

impl From<&ScheduleRow> for ScheduleRowView {
    fn from(row: &ScheduleRow) -> Self {
        Self {
            round: row.round,
            payment: row.payment.to_i64(),
            principal: row.principal.to_i64(),
            interest: row.interest.to_i64(),
            balance: row.balance.to_i64(),
        }
    }
}

impl SavingsView {
    pub fn from_result(result: &SavingsResult) -> Self {
        Self {
            total_principal: result.total_principal.to_i64(),
            pre_tax_interest: result.pre_tax_interest.to_i64(),
            tax_amount: result.tax_amount.to_i64(),
            post_tax_interest: result.post_tax_interest.to_i64(),
            total_amount: result.total_amount.to_i64(),
            chart_data: result.growth_series.iter().map(ChartPointView::from).collect(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl LoanView {
    pub fn from_result(result: &LoanResult) -> Self {
        Self {
            total_interest: result.total_interest.to_i64(),
            total_repayment: result.total_repayment.to_i64(),
            loan_principal: result.loan_principal().to_i64(),
            first_payment: result.first_payment().to_i64(),
            schedule: result.schedule.iter().map(ScheduleRowView::from).collect(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// whole-unit amount with thousands separators, e.g. `1,029,610`
pub fn format_money(amount: Money) -> String {
    let value = amount.to_i64();
    let digits = value.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
