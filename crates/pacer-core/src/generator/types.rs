//! Wire types exchanged with the external generator.
//!
//! Field names follow the generator's JSON contract (camelCase), which is
//! why these types carry serde renames while the rest of the workspace
//! uses snake_case.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A file attached to a project draft, passed through to the generator.
///
/// `data` is the base64 payload produced by an external encoder; the core
/// never inspects or re-encodes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    pub data: String,
    pub mime_type: String,
}

/// Which draft field a feasibility adjustment option replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    /// Raise `daily_work_time`.
    Hours,
    /// Extend `end_date`.
    Deadline,
    /// Simplify `goal`.
    Goal,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Hours => "hours",
            Self::Deadline => "deadline",
            Self::Goal => "goal",
        };
        f.write_str(s)
    }
}

impl FromStr for OptionKind {
    type Err = OptionKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hours" => Ok(Self::Hours),
            "deadline" => Ok(Self::Deadline),
            "goal" => Ok(Self::Goal),
            other => Err(OptionKindParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`OptionKind`] string.
#[derive(Debug, Clone)]
pub struct OptionKindParseError(pub String);

impl fmt::Display for OptionKindParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid option kind: {:?}", self.0)
    }
}

impl std::error::Error for OptionKindParseError {}

/// One suggested adjustment when a draft is judged infeasible.
///
/// `suggested_value` is always transported as a string; `Hours` values are
/// parsed to a number only when the option is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityOption {
    #[serde(rename = "type")]
    pub kind: OptionKind,
    pub description: String,
    pub suggested_value: String,
}

/// Verdict of the feasibility check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityReport {
    pub is_feasible: bool,
    pub reasoning: String,
    #[serde(default)]
    pub options: Vec<FeasibilityOption>,
}

impl FeasibilityReport {
    /// The report used when the check itself fails: proceed as feasible.
    pub fn assumed_feasible(reason: &str) -> Self {
        Self {
            is_feasible: true,
            reasoning: format!("Feasibility check unavailable ({reason}); proceeding anyway."),
            options: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_kind_display_roundtrip() {
        let variants = [OptionKind::Hours, OptionKind::Deadline, OptionKind::Goal];
        for v in &variants {
            let s = v.to_string();
            let parsed: OptionKind = s.parse().expect("should parse");
            assert_eq!(*v, parsed);
        }
    }

    #[test]
    fn option_kind_invalid() {
        assert!("scope".parse::<OptionKind>().is_err());
    }

    #[test]
    fn report_deserializes_from_wire_format() {
        let json = r#"{
            "isFeasible": false,
            "reasoning": "Two weeks is not enough.",
            "options": [
                {"type": "hours", "description": "Work 4h per day", "suggestedValue": "4"},
                {"type": "deadline", "description": "Extend to March", "suggestedValue": "2024-03-01"}
            ]
        }"#;
        let report: FeasibilityReport = serde_json::from_str(json).unwrap();
        assert!(!report.is_feasible);
        assert_eq!(report.options.len(), 2);
        assert_eq!(report.options[0].kind, OptionKind::Hours);
        assert_eq!(report.options[1].suggested_value, "2024-03-01");
    }

    #[test]
    fn report_options_default_to_empty() {
        let json = r#"{"isFeasible": true, "reasoning": "Looks fine."}"#;
        let report: FeasibilityReport = serde_json::from_str(json).unwrap();
        assert!(report.is_feasible);
        assert!(report.options.is_empty());
    }

    #[test]
    fn attachment_uses_camel_case_mime_type() {
        let att = Attachment {
            name: "syllabus.pdf".to_owned(),
            data: "aGVsbG8=".to_owned(),
            mime_type: "application/pdf".to_owned(),
        };
        let json = serde_json::to_string(&att).unwrap();
        assert!(json.contains("\"mimeType\""), "got: {json}");
    }

    #[test]
    fn assumed_feasible_report_carries_no_options() {
        let report = FeasibilityReport::assumed_feasible("transport error");
        assert!(report.is_feasible);
        assert!(report.options.is_empty());
        assert!(report.reasoning.contains("transport error"));
    }
}
