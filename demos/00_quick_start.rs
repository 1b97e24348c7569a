/// quick start - amortize a loan and print the schedule
use rust_decimal_macros::dec;
use salary_loan_rs::{compute_loan, LoanRequest, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a 5,000 loan at 5% annual over 12 months
    let request = LoanRequest::new(
        Money::from_major(5_000),
        Rate::from_percentage(dec!(5.0)),
        12,
    )?;

    let result = compute_loan(&request)?;

    println!("monthly payment: {}", result.monthly_payment);
    println!("total repayment: {}", result.total_repayment);
    println!("total interest:  {}", result.total_interest);
    println!();
    println!("month  starting   payment  principal  interest    ending");

    for row in &result.schedule {
        println!(
            "{:>5}  {:>8}  {:>8}  {:>9}  {:>8}  {:>8}",
            row.month,
            row.starting_balance,
            row.payment,
            row.principal_portion,
            row.interest_portion,
            row.ending_balance
        );
    }

    Ok(())
}
