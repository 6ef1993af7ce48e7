// src/domain/wizard.rs

use chrono::NaiveDateTime;
use serde::Serialize;

pub const NOT_SPECIFIED: &str = "Not specified";

/// Format produced by `<input type="datetime-local">`.
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    BasicDetails,
    Evidence,
    Review,
    Submit,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::BasicDetails, Step::Evidence, Step::Review, Step::Submit];

    /// 1-based position in the form.
    pub fn index(self) -> u8 {
        match self {
            Step::BasicDetails => 1,
            Step::Evidence => 2,
            Step::Review => 3,
            Step::Submit => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::BasicDetails => "Basic Details",
            Step::Evidence => "Evidence",
            Step::Review => "Review",
            Step::Submit => "Submit",
        }
    }

    fn next(self) -> Step {
        match self {
            Step::BasicDetails => Step::Evidence,
            Step::Evidence => Step::Review,
            Step::Review | Step::Submit => Step::Submit,
        }
    }

    fn previous(self) -> Step {
        match self {
            Step::BasicDetails | Step::Evidence => Step::BasicDetails,
            Step::Review => Step::Evidence,
            Step::Submit => Step::Review,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncidentType {
    Bribery,
    PoliceMisconduct,
    Harassment,
    AbuseOfPower,
    Fraud,
    Other,
}

impl IncidentType {
    pub const ALL: [IncidentType; 6] = [
        IncidentType::Bribery,
        IncidentType::PoliceMisconduct,
        IncidentType::Harassment,
        IncidentType::AbuseOfPower,
        IncidentType::Fraud,
        IncidentType::Other,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            IncidentType::Bribery => "bribery",
            IncidentType::PoliceMisconduct => "police-misconduct",
            IncidentType::Harassment => "harassment",
            IncidentType::AbuseOfPower => "abuse-of-power",
            IncidentType::Fraud => "fraud",
            IncidentType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IncidentType::Bribery => "Bribery/Corruption",
            IncidentType::PoliceMisconduct => "Police Misconduct",
            IncidentType::Harassment => "Harassment",
            IncidentType::AbuseOfPower => "Abuse of Power",
            IncidentType::Fraud => "Fraud",
            IncidentType::Other => "Other",
        }
    }

    pub fn from_slug(raw: &str) -> Option<IncidentType> {
        let raw = raw.trim();
        IncidentType::ALL.into_iter().find(|t| t.slug() == raw)
    }
}

/// Opaque handle to an attached file. Only the name is kept; bytes are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvidenceFile {
    pub name: String,
}

impl EvidenceFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Everything the reporter has entered so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DraftReport {
    pub incident_type: Option<IncidentType>,
    pub location: String,
    pub occurred_at: Option<NaiveDateTime>,
    pub description: String,
    pub people_involved: String,
    pub evidence_files: Vec<EvidenceFile>,
    pub anonymous: bool,
    pub legal_assistance: bool,
}

/// A single field update for the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    IncidentType(Option<IncidentType>),
    Location(String),
    OccurredAt(Option<NaiveDateTime>),
    Description(String),
    PeopleInvolved(String),
}

impl DraftField {
    /// Builds an update from a form key/value pair. Unknown keys yield `None`.
    /// Values are never rejected: an unrecognised incident type or an
    /// unparsable date clears the field instead.
    pub fn from_form(key: &str, value: &str) -> Option<DraftField> {
        let field = match key {
            "incident_type" | "incidentType" => {
                DraftField::IncidentType(IncidentType::from_slug(value))
            }
            "location" => DraftField::Location(value.to_string()),
            "occurred_at" | "date" => DraftField::OccurredAt(
                NaiveDateTime::parse_from_str(value.trim(), DATETIME_LOCAL_FORMAT).ok(),
            ),
            "description" => DraftField::Description(value.to_string()),
            "people_involved" | "peopleInvolved" => DraftField::PeopleInvolved(value.to_string()),
            _ => return None,
        };
        Some(field)
    }
}

fn or_not_specified(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        value.to_string()
    }
}

impl DraftReport {
    /// Label/value pairs for the review step. Missing values read "Not specified".
    pub fn review(&self) -> Vec<(&'static str, String)> {
        let evidence = match self.evidence_files.len() {
            0 => "No files uploaded".to_string(),
            n => format!("{n} files uploaded"),
        };

        vec![
            (
                "Type of Incident",
                self.incident_type
                    .map(|t| t.slug().to_string())
                    .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            ),
            ("Location", or_not_specified(&self.location)),
            (
                "Date and Time",
                self.occurred_at
                    .map(|dt| dt.format(DATETIME_LOCAL_FORMAT).to_string())
                    .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            ),
            ("Description", or_not_specified(&self.description)),
            ("People Involved", or_not_specified(&self.people_involved)),
            ("Evidence Files", evidence),
            (
                "Reporting Mode",
                if self.anonymous { "Anonymous" } else { "Identified" }.to_string(),
            ),
            (
                "Legal Assistance",
                if self.legal_assistance {
                    "Requested"
                } else {
                    "Not requested"
                }
                .to_string(),
            ),
        ]
    }
}

/// Four-step incident report form. Transitions past either end are no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportWizard {
    step: Step,
    draft: DraftReport,
}

impl Default for ReportWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWizard {
    pub fn new() -> Self {
        Self {
            step: Step::BasicDetails,
            draft: DraftReport::default(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// 25, 50, 75 or 100.
    pub fn progress(&self) -> u8 {
        self.step.index() * 25
    }

    pub fn draft(&self) -> &DraftReport {
        &self.draft
    }

    pub fn next(&mut self) {
        self.step = self.step.next();
    }

    pub fn previous(&mut self) {
        self.step = self.step.previous();
    }

    /// Last write wins; allowed on every step.
    pub fn update_field(&mut self, field: DraftField) {
        match field {
            DraftField::IncidentType(v) => self.draft.incident_type = v,
            DraftField::Location(v) => self.draft.location = v,
            DraftField::OccurredAt(v) => self.draft.occurred_at = v,
            DraftField::Description(v) => self.draft.description = v,
            DraftField::PeopleInvolved(v) => self.draft.people_involved = v,
        }
    }

    pub fn attach_evidence(&mut self, file: EvidenceFile) {
        self.draft.evidence_files.push(file);
    }

    /// Removes the file at `index`, shifting later files down. Out of range is a no-op.
    pub fn remove_evidence(&mut self, index: usize) -> Option<EvidenceFile> {
        (index < self.draft.evidence_files.len()).then(|| self.draft.evidence_files.remove(index))
    }

    pub fn set_anonymous(&mut self, on: bool) {
        self.draft.anonymous = on;
    }

    pub fn set_legal_assistance(&mut self, on: bool) {
        self.draft.legal_assistance = on;
    }

    /// On the final step, hands back the finished draft and resets the form.
    /// On any other step nothing happens.
    pub fn submit(&mut self) -> Option<DraftReport> {
        if self.step != Step::Submit {
            return None;
        }
        let report = std::mem::take(&mut self.draft);
        self.step = Step::BasicDetails;
        Some(report)
    }
}
