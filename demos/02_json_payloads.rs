/// json payloads - round-trip requests and results the way an api layer would
use rust_decimal_macros::dec;
use salary_loan_rs::{
    compute_loan_with_context, AffordabilityPolicy, EligibilityContext, LoanRequest, Money, Rate,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let payload = r#"{
        "principal": "24000",
        "annual_rate": "0.15",
        "term_months": 24
    }"#;

    let request: LoanRequest = serde_json::from_str(payload)?;
    request.validate()?;

    let context = EligibilityContext::new(
        Money::from_major(4_000),
        Money::from_decimal(dec!(350.50)),
    )?;

    let result = compute_loan_with_context(&request, &context, &AffordabilityPolicy::default())?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    // the reverse calculation is also reachable on its own
    let eligible = salary_loan_rs::max_eligible_loan(
        &context,
        Rate::from_percentage(dec!(15)),
        24,
        &AffordabilityPolicy::default(),
    )?;
    println!("max eligible loan: {}", eligible);

    Ok(())
}
