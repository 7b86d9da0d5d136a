//! # Domain Model: Employee Records and Input Normalization
//!
//! This module defines the [`Employee`] record, its on-disk line format, and
//! the normalization applied to user input before a record reaches the store.
//!
//! ## The Line Format
//!
//! One record per line, four comma-separated fields:
//!
//! ```text
//! 104233,Ada Lovelace,Engineering,Staff Engineer
//! ```
//!
//! Parsing is deliberately forgiving: fields are trimmed, short rows are
//! padded with empty strings, extra fields past the fourth are dropped, and
//! blank lines are skipped. A malformed row never fails a load.
//!
//! ## Normalization
//!
//! Raw input is normalized once, at the API boundary:
//!
//! 1. **ID**: trimmed. Must be exactly 6 ASCII digits to pass validation.
//! 2. **Text fields**: [`smart_title`] capitalizes each word but preserves a
//!    fixed table of all-caps terms, so "head of it" becomes "Head Of IT"
//!    rather than "Head Of It".
//!
//! ## Validation
//!
//! [`Employee::validate`] checks the format rules only. Uniqueness of the id
//! within the collection is the command layer's job.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Result, RosterError};

/// Field delimiter of the backing file.
pub const DELIMITER: char = ',';

/// Number of fields in a record line.
pub const FIELD_COUNT: usize = 4;

/// Required length of an employee id.
pub const ID_LEN: usize = 6;

/// Terms that stay fully capitalized under [`smart_title`].
static ALL_CAPS_TERMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["IT", "HR", "CEO", "CTO", "CFO", "UI", "UX"]
        .into_iter()
        .collect()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub department: String,
    pub role: String,
}

impl Employee {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: department.into(),
            role: role.into(),
        }
    }

    /// Build a record from raw user input: trims the id and title-cases the
    /// text fields. Does not validate; see [`Employee::validate`].
    pub fn from_input(id: &str, name: &str, department: &str, role: &str) -> Self {
        Self {
            id: id.trim().to_string(),
            name: smart_title(name),
            department: smart_title(department),
            role: smart_title(role),
        }
    }

    /// Parse one line of the backing file.
    ///
    /// Returns `None` for blank lines. Short rows are padded with empty
    /// fields, extra fields are dropped.
    pub fn parse_line(line: &str) -> Option<Self> {
        if line.trim().is_empty() {
            return None;
        }

        let mut fields: [String; FIELD_COUNT] = Default::default();
        for (slot, value) in fields.iter_mut().zip(line.split(DELIMITER)) {
            *slot = value.trim().to_string();
        }

        let [id, name, department, role] = fields;
        Some(Self {
            id,
            name,
            department,
            role,
        })
    }

    /// Encode the record as one line of the backing file (no trailing newline).
    pub fn to_line(&self) -> String {
        format!(
            "{}{d}{}{d}{}{d}{}",
            self.id,
            self.name,
            self.department,
            self.role,
            d = DELIMITER
        )
    }

    /// Check the format rules: all fields present, id is 6 digits, and no
    /// field contains the delimiter or a line break (the line format has no
    /// escaping).
    pub fn validate(&self) -> Result<()> {
        for (label, value) in self.labeled_fields() {
            if value.is_empty() {
                return Err(RosterError::Validation(format!("{} is required", label)));
            }
        }

        validate_id(&self.id)?;

        for (label, value) in self.labeled_fields() {
            if value.contains(DELIMITER) || value.contains('\n') || value.contains('\r') {
                return Err(RosterError::Validation(format!(
                    "{} must not contain commas or line breaks",
                    label
                )));
            }
        }

        Ok(())
    }

    fn labeled_fields(&self) -> [(&'static str, &str); FIELD_COUNT] {
        [
            ("ID", &self.id),
            ("Name", &self.name),
            ("Department", &self.department),
            ("Role", &self.role),
        ]
    }
}

/// Check that an id is exactly [`ID_LEN`] ASCII digits.
pub fn validate_id(id: &str) -> Result<()> {
    if id.len() != ID_LEN || !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(RosterError::Validation(format!(
            "employee ID must be exactly {} digits",
            ID_LEN
        )));
    }
    Ok(())
}

/// Word-wise capitalization that preserves known all-caps terms.
///
/// Splits on whitespace, so runs of spaces collapse to single separators.
pub fn smart_title(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let upper = word.to_uppercase();
            if ALL_CAPS_TERMS.contains(upper.as_str()) {
                upper
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_reads_four_fields() {
        let employee = Employee::parse_line("104233,Ada Lovelace,Engineering,Staff Engineer")
            .expect("line should parse");
        assert_eq!(employee.id, "104233");
        assert_eq!(employee.name, "Ada Lovelace");
        assert_eq!(employee.department, "Engineering");
        assert_eq!(employee.role, "Staff Engineer");
    }

    #[test]
    fn parse_line_trims_fields() {
        let employee =
            Employee::parse_line(" 104233 , Ada Lovelace ,  IT , Analyst ").expect("should parse");
        assert_eq!(employee.id, "104233");
        assert_eq!(employee.name, "Ada Lovelace");
        assert_eq!(employee.department, "IT");
        assert_eq!(employee.role, "Analyst");
    }

    #[test]
    fn parse_line_pads_short_rows() {
        let employee = Employee::parse_line("104233,Ada Lovelace").expect("should parse");
        assert_eq!(employee.department, "");
        assert_eq!(employee.role, "");
    }

    #[test]
    fn parse_line_drops_extra_fields() {
        let employee = Employee::parse_line("104233,Ada,IT,Dev,leftover").expect("should parse");
        assert_eq!(employee.role, "Dev");
    }

    #[test]
    fn parse_line_skips_blank_lines() {
        assert!(Employee::parse_line("").is_none());
        assert!(Employee::parse_line("   \t").is_none());
    }

    #[test]
    fn line_round_trip() {
        let employee = Employee::new("104233", "Ada Lovelace", "Engineering", "Staff Engineer");
        let parsed = Employee::parse_line(&employee.to_line()).expect("should parse");
        assert_eq!(parsed, employee);
    }

    #[test]
    fn from_input_normalizes() {
        let employee = Employee::from_input(" 104233 ", "ada lovelace", "it", "staff engineer");
        assert_eq!(employee.id, "104233");
        assert_eq!(employee.name, "Ada Lovelace");
        assert_eq!(employee.department, "IT");
        assert_eq!(employee.role, "Staff Engineer");
    }

    #[test]
    fn validate_rejects_empty_fields() {
        let employee = Employee::new("104233", "", "IT", "Dev");
        let err = employee.validate().expect_err("empty name must fail");
        assert!(err.to_string().contains("Name is required"));
    }

    #[test]
    fn validate_rejects_short_id() {
        let err = validate_id("1234").expect_err("short id must fail");
        assert!(err.to_string().contains("6 digits"));
    }

    #[test]
    fn validate_rejects_non_numeric_id() {
        assert!(validate_id("12a456").is_err());
        assert!(validate_id("12 456").is_err());
    }

    #[test]
    fn validate_rejects_delimiter_in_field() {
        let employee = Employee::new("104233", "Lovelace, Ada", "IT", "Dev");
        let err = employee.validate().expect_err("comma in name must fail");
        assert!(err.to_string().contains("commas"));
    }

    #[test]
    fn smart_title_capitalizes_words() {
        assert_eq!(smart_title("ada lovelace"), "Ada Lovelace");
        assert_eq!(smart_title("STAFF engineer"), "Staff Engineer");
    }

    #[test]
    fn smart_title_preserves_all_caps_terms() {
        assert_eq!(smart_title("head of it"), "Head Of IT");
        assert_eq!(smart_title("hr business partner"), "HR Business Partner");
        assert_eq!(smart_title("ux designer"), "UX Designer");
    }

    #[test]
    fn smart_title_collapses_whitespace() {
        assert_eq!(smart_title("  ada   lovelace "), "Ada Lovelace");
    }

    #[test]
    fn employee_serializes_to_json() {
        let employee = Employee::new("104233", "Ada", "IT", "Dev");
        let json = serde_json::to_string(&employee).expect("should encode");
        assert!(json.contains("\"id\":\"104233\""));
    }
}
