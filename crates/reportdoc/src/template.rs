//! Labels for the structured report template.

use serde::{Deserialize, Serialize};

/// Every literal the structured compiler emits.
///
/// Missing keys in a deserialized template fall back to [`Default`], so a
/// config file only needs the labels it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportTemplate {
    pub title: String,

    pub summary_heading: String,
    pub current_average_label: String,
    pub target_average_label: String,
    pub gap_label: String,

    pub justification_heading: String,
    pub strengths_heading: String,
    pub weaknesses_heading: String,
    pub implications_heading: String,

    pub plan_heading: String,
    pub short_term_heading: String,
    pub mid_term_heading: String,
    pub long_term_heading: String,

    /// Rendered for an absent summary value
    pub placeholder: String,
}

impl Default for ReportTemplate {
    fn default() -> Self {
        Self {
            title: "Estado de Madurez en Ciberseguridad – Basado en NIST CSF 2.0".to_string(),
            summary_heading: "📊 Resumen del Puntaje de Madurez".to_string(),
            current_average_label: "Puntaje promedio actual: ".to_string(),
            target_average_label: "Puntaje objetivo: ".to_string(),
            gap_label: "Brecha de madurez: ".to_string(),
            justification_heading: "📌 Justificación del Resultado".to_string(),
            strengths_heading: "Fortalezas".to_string(),
            weaknesses_heading: "Debilidades".to_string(),
            implications_heading: "Implicancias".to_string(),
            plan_heading: "🚀 Plan para Avanzar en la Madurez".to_string(),
            short_term_heading: "Corto Plazo (0 – 6 meses)".to_string(),
            mid_term_heading: "Mediano Plazo (6 – 18 meses)".to_string(),
            long_term_heading: "Largo Plazo (18 – 36 meses)".to_string(),
            placeholder: "-".to_string(),
        }
    }
}

impl ReportTemplate {
    /// English labels
    pub fn english() -> Self {
        Self {
            title: "Cybersecurity Maturity Status – Based on NIST CSF 2.0".to_string(),
            summary_heading: "Summary".to_string(),
            current_average_label: "Current average score: ".to_string(),
            target_average_label: "Target score: ".to_string(),
            gap_label: "Maturity gap: ".to_string(),
            justification_heading: "Justification".to_string(),
            strengths_heading: "Strengths".to_string(),
            weaknesses_heading: "Weaknesses".to_string(),
            implications_heading: "Implications".to_string(),
            plan_heading: "Plan".to_string(),
            short_term_heading: "Short Term (0 – 6 months)".to_string(),
            mid_term_heading: "Mid Term (6 – 18 months)".to_string(),
            long_term_heading: "Long Term (18 – 36 months)".to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let template: ReportTemplate =
            serde_json::from_str(r#"{"title": "Informe", "placeholder": "n/a"}"#).unwrap();
        assert_eq!(template.title, "Informe");
        assert_eq!(template.placeholder, "n/a");
        assert_eq!(template.strengths_heading, "Fortalezas");
    }

    #[test]
    fn test_horizons_carry_month_ranges() {
        for template in [ReportTemplate::default(), ReportTemplate::english()] {
            assert!(template.short_term_heading.contains("0 – 6"));
            assert!(template.mid_term_heading.contains("6 – 18"));
            assert!(template.long_term_heading.contains("18 – 36"));
        }
    }
}
