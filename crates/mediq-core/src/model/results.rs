use serde::{Deserialize, Deserializer, Serialize};

/// Result of a medicine-information lookup
///
/// Immutable once produced; a later success or an explicit clear replaces
/// it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineInfoResult {
    pub medicine_name: String,
    pub information: String,
    pub disclaimer: String,
}

/// Triage severity reported by the symptom service
///
/// Labels decode case-insensitively. A null, missing or unrecognised label
/// decodes as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Serious,
    #[default]
    Unknown,
}

impl Severity {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "mild" => Severity::Mild,
            "moderate" => Severity::Moderate,
            "serious" => Severity::Serious,
            _ => Severity::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Serious => "serious",
            Severity::Unknown => "unknown",
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.as_deref().map(Severity::from_label).unwrap_or_default())
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a symptom-based triage request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomSuggestionResult {
    pub symptoms: String,
    #[serde(default)]
    pub severity: Severity,
    pub suggestion: String,
    pub requires_doctor: bool,
    pub can_suggest_medicine: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_symptom_result_decodes_camel_case() {
        let result: SymptomSuggestionResult = serde_json::from_value(json!({
            "symptoms": "fever",
            "severity": "moderate",
            "suggestion": "Rest and hydrate",
            "requiresDoctor": false,
            "canSuggestMedicine": true,
            "aiCategory": "infection"
        }))
        .unwrap();

        assert_eq!(result.severity, Severity::Moderate);
        assert!(result.can_suggest_medicine);
        assert_eq!(result.ai_category.as_deref(), Some("infection"));
    }

    #[test]
    fn test_unrecognised_severity_is_unknown() {
        let result: SymptomSuggestionResult = serde_json::from_value(json!({
            "symptoms": "cough",
            "severity": "critical",
            "suggestion": "See a doctor",
            "requiresDoctor": true,
            "canSuggestMedicine": false
        }))
        .unwrap();

        assert_eq!(result.severity, Severity::Unknown);
        assert_eq!(result.ai_category, None);
    }

    #[test]
    fn test_severity_label_case_is_ignored() {
        let result: SymptomSuggestionResult = serde_json::from_value(json!({
            "symptoms": "chest pain",
            "severity": "Serious",
            "suggestion": "Seek urgent care",
            "requiresDoctor": true,
            "canSuggestMedicine": false
        }))
        .unwrap();

        assert_eq!(result.severity, Severity::Serious);
        assert_eq!(Severity::from_label(" MODERATE "), Severity::Moderate);
    }

    #[test]
    fn test_null_or_missing_severity_is_unknown() {
        let with_null: SymptomSuggestionResult = serde_json::from_value(json!({
            "symptoms": "headache",
            "severity": null,
            "suggestion": "Rest",
            "requiresDoctor": false,
            "canSuggestMedicine": true
        }))
        .unwrap();
        let missing: SymptomSuggestionResult = serde_json::from_value(json!({
            "symptoms": "headache",
            "suggestion": "Rest",
            "requiresDoctor": false,
            "canSuggestMedicine": true
        }))
        .unwrap();

        assert_eq!(with_null.severity, Severity::Unknown);
        assert_eq!(missing.severity, Severity::Unknown);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Severity::Serious).unwrap(), json!("serious"));
    }

    #[test]
    fn test_medicine_result_requires_disclaimer() {
        let decoded = serde_json::from_value::<MedicineInfoResult>(json!({
            "medicineName": "paracetamol",
            "information": "Analgesic"
        }));
        assert!(decoded.is_err());
    }
}
