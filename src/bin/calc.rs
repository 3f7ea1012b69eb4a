//! Savings and loan calculator CLI
//!
//! Projects a savings plan or a loan repayment schedule and prints a summary
//! with the month-by-month table, or the chart-ready JSON view.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::info;

use savings_loan_rs::{
    calculate_loan, calculate_savings, format_money, LoanForm, LoanView, SavingsForm, SavingsView,
};

#[derive(Parser, Debug)]
#[command(name = "calc")]
#[command(about = "Project savings growth and loan repayment schedules")]
struct Cli {
    /// Print the JSON report instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Savings (monthly contributions) or deposit (lump sum) projection
    Savings(SavingsArgs),
    /// Loan amortization schedule
    Loan(LoanArgs),
}

#[derive(Args, Debug)]
struct SavingsArgs {
    /// savings | deposit
    #[arg(long = "type")]
    product_type: Option<String>,
    /// Monthly contribution or lump sum; thousands separators allowed
    #[arg(long)]
    amount: Option<String>,
    #[arg(long)]
    months: Option<String>,
    /// Annual rate in percent
    #[arg(long)]
    rate: Option<String>,
    /// simple | compound
    #[arg(long)]
    method: Option<String>,
    /// normal | preferential | none
    #[arg(long)]
    tax: Option<String>,
}

#[derive(Args, Debug)]
struct LoanArgs {
    #[arg(long)]
    amount: Option<String>,
    #[arg(long)]
    months: Option<String>,
    /// Annual rate in percent
    #[arg(long)]
    rate: Option<String>,
    /// Interest-only months before repayment starts
    #[arg(long)]
    grace: Option<String>,
    /// equal_pi | equal_p | bullet
    #[arg(long)]
    method: Option<String>,
}

impl SavingsArgs {
    fn into_form(self) -> SavingsForm {
        let defaults = SavingsForm::default();
        SavingsForm {
            product_type: self.product_type.unwrap_or(defaults.product_type),
            amount: self.amount.unwrap_or(defaults.amount),
            months: self.months.unwrap_or(defaults.months),
            rate: self.rate.unwrap_or(defaults.rate),
            method: self.method.unwrap_or(defaults.method),
            tax: self.tax.unwrap_or(defaults.tax),
        }
    }
}

impl LoanArgs {
    fn into_form(self) -> LoanForm {
        let defaults = LoanForm::default();
        LoanForm {
            amount: self.amount.unwrap_or(defaults.amount),
            months: self.months.unwrap_or(defaults.months),
            rate: self.rate.unwrap_or(defaults.rate),
            grace: self.grace.unwrap_or(defaults.grace),
            method: self.method.unwrap_or(defaults.method),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Savings(args) => run_savings(args.into_form(), cli.json),
        Command::Loan(args) => run_loan(args.into_form(), cli.json),
    }
}

fn run_savings(form: SavingsForm, json: bool) -> anyhow::Result<()> {
    let plan = form.to_plan().context("invalid savings input")?;
    info!("projecting {} plan over {} months", plan.product_type, plan.duration_months);

    let result = calculate_savings(&plan).context("savings projection failed")?;

    if json {
        println!("{}", SavingsView::from_result(&result).to_json_pretty()?);
        return Ok(());
    }

    println!("Savings projection ({}, {}, tax {})", plan.product_type, plan.interest_method, plan.tax_class.label());
    println!("  Maturity amount (after tax): {:>16}", format_money(result.total_amount));
    println!("  Total principal:             {:>16}", format_money(result.total_principal));
    println!("  Interest before tax:        +{:>16}", format_money(result.pre_tax_interest));
    println!("  Withheld tax:               -{:>16}", format_money(result.tax_amount));
    println!("  Interest after tax:         +{:>16}", format_money(result.post_tax_interest));
    println!();

    println!("{:>5} {:>16} {:>14} {:>16}", "Month", "Principal", "Interest", "Total");
    println!("{}", "-".repeat(54));
    for point in &result.growth_series {
        println!(
            "{:>5} {:>16} {:>14} {:>16}",
            point.month,
            format_money(point.principal),
            format_money(point.interest),
            format_money(point.total),
        );
    }

    Ok(())
}

fn run_loan(form: LoanForm, json: bool) -> anyhow::Result<()> {
    let plan = form.to_plan().context("invalid loan input")?;
    info!(
        "projecting {} loan over {} months with {} grace months",
        plan.repayment_method, plan.duration_months, plan.grace_months
    );

    let result = calculate_loan(&plan).context("loan projection failed")?;

    if json {
        println!("{}", LoanView::from_result(&result).to_json_pretty()?);
        return Ok(());
    }

    println!("Loan repayment ({}, {})", plan.repayment_method.label(), plan.annual_rate);
    println!("  Total repayment:    {:>16}", format_money(result.total_repayment));
    println!("  Loan principal:     {:>16}", format_money(result.loan_principal()));
    println!("  Total interest:    +{:>16}", format_money(result.total_interest));
    println!("  First payment:      {:>16}", format_money(result.first_payment()));
    println!();

    println!("{:>5} {:>14} {:>14} {:>14} {:>16}", "Round", "Payment", "Principal", "Interest", "Balance");
    println!("{}", "-".repeat(67));
    for row in &result.schedule {
        println!(
            "{:>5} {:>14} {:>14} {:>14} {:>16}",
            row.round,
            format_money(row.payment),
            format_money(row.principal),
            format_money(row.interest),
            format_money(row.balance),
        );
    }

    Ok(())
}
