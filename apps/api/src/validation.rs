//! Field-level validation for resume documents.
//!
//! Every schema reports all of its violations at once, each tagged with a dotted
//! field path (`experience.1.description.0`). A passing value is returned
//! unchanged.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument};

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

/// The full set of violations found in one candidate value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(pub Vec<Violation>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|v| format!("{}: {}", v.path, v.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![Violation {
            path: path.into(),
            message: message.into(),
        }])
    }

    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    /// Messages reported for one exact field path.
    pub fn messages_for(&self, path: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|v| v.path == path)
            .map(|v| v.message.as_str())
            .collect()
    }
}

/// A value that can be checked against its field rules.
pub trait Validate {
    /// Appends violations for `self` to `report`, prefixing paths with `prefix`.
    fn collect_violations(&self, prefix: &str, report: &mut Vec<Violation>);

    /// Checks the value, returning it unchanged on success.
    fn validated(self) -> Result<Self, ValidationErrors>
    where
        Self: Sized,
    {
        let mut report = Vec::new();
        self.collect_violations("", &mut report);
        if report.is_empty() {
            Ok(self)
        } else {
            Err(ValidationErrors(report))
        }
    }
}

fn join(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}

fn min_chars(
    report: &mut Vec<Violation>,
    prefix: &str,
    field: &str,
    value: &str,
    min: usize,
    message: &str,
) {
    if value.chars().count() < min {
        report.push(Violation {
            path: join(prefix, field),
            message: message.to_string(),
        });
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
            .expect("email pattern is a valid regex")
    })
}

/// Standard address syntax: no leading dot, no consecutive dots in the local
/// part, dotted domain ending in an alphabetic TLD.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    !local.starts_with('.') && !local.contains("..") && email_regex().is_match(value)
}

impl Validate for PersonalInfo {
    fn collect_violations(&self, prefix: &str, report: &mut Vec<Violation>) {
        min_chars(
            report,
            prefix,
            "fullName",
            &self.full_name,
            2,
            "Name must be at least 2 characters",
        );
        if !is_valid_email(&self.email) {
            report.push(Violation {
                path: join(prefix, "email"),
                message: "Invalid email address".to_string(),
            });
        }
        min_chars(
            report,
            prefix,
            "phone",
            &self.phone,
            10,
            "Phone number must be at least 10 digits",
        );
        min_chars(
            report,
            prefix,
            "location",
            &self.location,
            2,
            "Location must be at least 2 characters",
        );
        min_chars(
            report,
            prefix,
            "summary",
            &self.summary,
            50,
            "Summary must be at least 50 characters",
        );
    }
}

impl Validate for EducationEntry {
    fn collect_violations(&self, prefix: &str, report: &mut Vec<Violation>) {
        min_chars(report, prefix, "school", &self.school, 2, "School name is required");
        min_chars(report, prefix, "degree", &self.degree, 2, "Degree is required");
        min_chars(report, prefix, "field", &self.field, 2, "Field of study is required");
        min_chars(report, prefix, "startDate", &self.start_date, 4, "Start date is required");
        min_chars(report, prefix, "endDate", &self.end_date, 4, "End date is required");
    }
}

impl Validate for ExperienceEntry {
    fn collect_violations(&self, prefix: &str, report: &mut Vec<Violation>) {
        min_chars(report, prefix, "company", &self.company, 2, "Company name is required");
        min_chars(report, prefix, "position", &self.position, 2, "Position is required");
        min_chars(report, prefix, "location", &self.location, 2, "Location is required");
        min_chars(report, prefix, "startDate", &self.start_date, 4, "Start date is required");
        min_chars(report, prefix, "endDate", &self.end_date, 4, "End date is required");

        let description = join(prefix, "description");
        for (i, point) in self.description.iter().enumerate() {
            min_chars(
                report,
                &description,
                &i.to_string(),
                point,
                10,
                "Description must be at least 10 characters",
            );
        }
    }
}

impl Validate for ResumeDocument {
    fn collect_violations(&self, prefix: &str, report: &mut Vec<Violation>) {
        self.personal_info
            .collect_violations(&join(prefix, "personalInfo"), report);

        let education = join(prefix, "education");
        for (i, entry) in self.education.iter().enumerate() {
            entry.collect_violations(&join(&education, &i.to_string()), report);
        }

        let experience = join(prefix, "experience");
        for (i, entry) in self.experience.iter().enumerate() {
            entry.collect_violations(&join(&experience, &i.to_string()), report);
        }

        if self.template.trim().is_empty() {
            report.push(Violation {
                path: join(prefix, "template"),
                message: "Template is required".to_string(),
            });
        }
    }
}
