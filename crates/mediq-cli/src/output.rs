use anyhow::Result;
use mediq_core::{MedicineInfoResult, SymptomSuggestionResult};
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_medicine(info: &MedicineInfoResult) {
    println!("Medicine: {}", info.medicine_name);
    println!();
    println!("{}", info.information);
    println!();
    println!("Disclaimer: {}", info.disclaimer);
}

pub fn print_triage(triage: &SymptomSuggestionResult) {
    println!("Symptoms: {}", triage.symptoms);
    println!("Severity: {}", triage.severity);
    if let Some(category) = &triage.ai_category {
        println!("Category: {}", category);
    }
    println!();
    println!("{}", triage.suggestion);
    println!();
    println!(
        "See a doctor: {}",
        if triage.requires_doctor { "yes" } else { "no" }
    );
    println!(
        "Medicine may help: {}",
        if triage.can_suggest_medicine { "yes" } else { "no" }
    );
}
