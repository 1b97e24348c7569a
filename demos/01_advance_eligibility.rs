/// salary advance eligibility - approvals, declines, and fees
use rust_decimal_macros::dec;
use salary_loan_rs::{evaluate_advance, AdvancePolicy, AdvanceRequest, Money, PayFrequency};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let policy = AdvancePolicy::default();

    // within the 40% ceiling: approved with fees
    let request = AdvanceRequest::new(
        Money::from_major(3_000),
        PayFrequency::Monthly,
        Money::from_major(1_000),
    )?;
    let decision = evaluate_advance(&request, &policy)?;
    println!("eligible: {}", decision.eligible);
    println!("approved: {}", decision.approved_amount);
    println!("fees:     {}", decision.fees);
    println!("message:  {}", decision.message);
    println!();

    // above the ceiling: declined with a reason
    let request = AdvanceRequest::new(
        Money::from_major(3_000),
        PayFrequency::BiWeekly,
        Money::from_decimal(dec!(1500.00)),
    )?;
    let decision = evaluate_advance(&request, &policy)?;
    println!("eligible: {}", decision.eligible);
    println!("message:  {}", decision.message);

    Ok(())
}
