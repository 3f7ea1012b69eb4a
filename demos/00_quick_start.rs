//! quick start - minimal example to get started
use rust_decimal_macros::dec;
use savings_loan_rs::{
    calculate_loan, calculate_savings, InterestMethod, LoanPlan, LoanView, Money, Rate, RepaymentMethod,
    SavingsPlan, SavingsView, TaxClass,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // save 1,000,000 a month for a year at 3.5%, compounded monthly
    let savings = SavingsPlan::builder()
        .monthly(Money::from_major(1_000_000))
        .months(12)
        .rate(Rate::from_percent(dec!(3.5)))
        .interest_method(InterestMethod::Compound)
        .tax_class(TaxClass::Standard)
        .build()?;

    let projection = calculate_savings(&savings)?;
    println!("{}", SavingsView::from_result(&projection).to_json_pretty()?);

    // borrow 50,000,000 over two years with a three month grace period
    let loan = LoanPlan::builder()
        .amount(Money::from_major(50_000_000))
        .months(24)
        .rate(Rate::from_percent(dec!(4.5)))
        .grace_months(3)
        .method(RepaymentMethod::EqualPrincipalInterest)
        .build()?;

    let schedule = calculate_loan(&loan)?;
    println!("{}", LoanView::from_result(&schedule).to_json_pretty()?);

    Ok(())
}
