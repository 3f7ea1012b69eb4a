pub mod config;
pub mod decimal;
pub mod errors;
pub mod form;
pub mod interest;
pub mod payments;
pub mod report;
pub mod savings;
pub mod types;

// re-export key types
pub use config::{LoanPlan, LoanPlanBuilder, SavingsPlan, SavingsPlanBuilder};
pub use decimal::{Money, Rate};
pub use errors::{CalcError, Result};
pub use form::{LoanForm, SavingsForm};
pub use interest::{CompoundInterest, Contributions, InterestAccrual, SimpleInterest};
pub use payments::{LoanAmortizationCalculator, LoanResult, ScheduleRow};
pub use report::{format_money, LoanView, SavingsView};
pub use savings::{GrowthPoint, SavingsCalculator, SavingsResult};
pub use types::{InterestMethod, ProductType, RepaymentMethod, TaxClass};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;

/// project a savings or deposit plan
pub fn calculate_savings(plan: &SavingsPlan) -> Result<SavingsResult> {
    SavingsCalculator::new().compute(plan)
}

/// project the repayment schedule of a loan plan
pub fn calculate_loan(plan: &LoanPlan) -> Result<LoanResult> {
    LoanAmortizationCalculator::new().compute(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_loan_scenario_equal_installments() {
        let plan = LoanPlan::builder()
            .amount(Money::from_major(50_000_000))
            .months(24)
            .rate(Rate::from_percent(dec!(4.5)))
            .grace_months(0)
            .method(RepaymentMethod::EqualPrincipalInterest)
            .build()
            .unwrap();

        let result = calculate_loan(&plan).unwrap();
        assert_eq!(result.schedule.len(), 24);
        assert_eq!(result.schedule[0].interest, Money::from_major(187_500));
        assert!(result.schedule.iter().all(|row| row.payment == result.schedule[0].payment));
        assert_eq!(result.final_balance(), Money::ZERO);
        assert_eq!(result.total_repayment, Money::from_major(50_000_000) + result.total_interest);
    }

    #[test]
    fn test_savings_scenario_deposit() {
        let plan = SavingsPlan::builder()
            .lump_sum(Money::from_major(1_000_000))
            .months(12)
            .rate(Rate::from_percent(dec!(3.5)))
            .interest_method(InterestMethod::Simple)
            .tax_class(TaxClass::Standard)
            .build()
            .unwrap();

        let result = calculate_savings(&plan).unwrap();
        assert_eq!(result.total_principal, Money::from_major(1_000_000));
        assert_eq!(result.pre_tax_interest, Money::from_major(35_000));
        assert_eq!(result.tax_amount, Money::from_major(5_390));
        assert_eq!(result.total_amount, Money::from_major(1_029_610));
    }

    #[test]
    fn test_calls_are_independent() {
        let loan = LoanPlan::default();
        let savings = SavingsPlan::default();

        let first = calculate_loan(&loan).unwrap();
        let _ = calculate_savings(&savings).unwrap();
        let second = calculate_loan(&loan).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_results_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SavingsResult>();
        assert_send_sync::<LoanResult>();
        assert_send_sync::<SavingsCalculator>();
        assert_send_sync::<LoanAmortizationCalculator>();
    }
}
