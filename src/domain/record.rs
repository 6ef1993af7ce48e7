// src/domain/record.rs

use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

/// Lifecycle of a public complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Pending,
    UnderInvestigation,
    Resolved,
}

impl Status {
    pub const ALL: [Status; 3] = [
        Status::Pending,
        Status::UnderInvestigation,
        Status::Resolved,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::UnderInvestigation => "Under Investigation",
            Status::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    // complaints
    Bribery,
    Corruption,
    PoliceMisconduct,
    HealthcareCorruption,
    EducationCorruption,
    PublicDistributionFraud,
    // success stories
    Administrative,
    LawEnforcement,
    Education,
    Healthcare,
    PublicServices,
}

impl Category {
    /// Badges shown above the success-stories gallery, in display order.
    pub const STORY_FILTERS: [Category; 5] = [
        Category::Administrative,
        Category::LawEnforcement,
        Category::Education,
        Category::Healthcare,
        Category::PublicServices,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Bribery => "Bribery",
            Category::Corruption => "Corruption",
            Category::PoliceMisconduct => "Police Misconduct",
            Category::HealthcareCorruption => "Healthcare Corruption",
            Category::EducationCorruption => "Education Corruption",
            Category::PublicDistributionFraud => "Public Distribution Fraud",
            Category::Administrative => "Administrative",
            Category::LawEnforcement => "Law Enforcement",
            Category::Education => "Education",
            Category::Healthcare => "Healthcare",
            Category::PublicServices => "Public Services",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A complaint or success story from the seed dataset. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: NaiveDate,
    pub category: Category,

    // Complaints only
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub reporter: Option<String>,

    // Success stories only
    #[serde(default)]
    pub impact: Option<String>,

    pub upvotes: u32,
    pub comments: u32,
    #[serde(default)]
    pub evidence: bool,
}

impl Record {
    /// Display name of whoever filed the complaint.
    pub fn reporter_name(&self) -> &str {
        self.reporter.as_deref().unwrap_or("Anonymous")
    }

    /// Single-letter avatar fallback.
    pub fn reporter_initial(&self) -> char {
        self.reporter_name().chars().next().unwrap_or('A')
    }

    pub fn status_label(&self) -> Option<&'static str> {
        self.status.map(Status::label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_complaint_without_optional_fields() {
        let json = r#"{
            "id": 9,
            "title": "t",
            "description": "d",
            "location": "l",
            "date": "2024-02-29",
            "status": "under_investigation",
            "category": "police_misconduct",
            "upvotes": 3,
            "comments": 1
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, Some(Status::UnderInvestigation));
        assert_eq!(record.category, Category::PoliceMisconduct);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert!(!record.evidence);
        assert_eq!(record.reporter_name(), "Anonymous");
        assert_eq!(record.reporter_initial(), 'A');
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(Status::UnderInvestigation.to_string(), "Under Investigation");
        assert_eq!(Category::PublicDistributionFraud.label(), "Public Distribution Fraud");
    }
}
