pub mod amortization;

pub use amortization::{annuity_payment, LoanAmortizationCalculator, LoanResult, ScheduleRow};
