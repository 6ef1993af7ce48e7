// src/domain/lawyer.rs

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Lawyer {
    pub id: u32,
    pub name: String,
    pub specialization: String,
    pub experience_years: u32,
    pub rating: f32,
    pub reviews: u32,
    /// Rupees per hour, before the platform fee.
    pub hourly_fee: u32,
    pub availability: Vec<String>,
}

impl Lawyer {
    /// "Adv. Priya Sharma" -> "APS"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Platform fee added on top of the lawyer's hourly rate, in percent.
pub const PLATFORM_FEE_PERCENT: u32 = 10;

pub fn fee_with_platform(hourly_fee: u32) -> u32 {
    hourly_fee + hourly_fee * PLATFORM_FEE_PERCENT / 100
}

/// Specialization filter choices as (value, label).
pub const SPECIALIZATION_FILTERS: [(&str, &str); 5] = [
    ("all", "All Specializations"),
    ("anti-corruption", "Anti-Corruption"),
    ("criminal", "Criminal Law"),
    ("public", "Public Interest"),
    ("civil", "Civil Rights"),
];

pub fn booking_dates() -> Vec<NaiveDate> {
    (5..=8)
        .filter_map(|day| NaiveDate::from_ymd_opt(2024, 3, day))
        .collect()
}

pub fn booking_times() -> Vec<NaiveTime> {
    [10, 11, 12, 14, 15, 16]
        .into_iter()
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .collect()
}

/// "March 5, 2024"
pub fn format_booking_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "2:00 PM"
pub fn format_booking_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// What gets handed to the scheduling side when a consultation is booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub lawyer_id: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Browse-and-book state for the lawyer carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawyerSelector {
    specialization: String,
    index: usize,
    selected: Option<u32>,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
}

impl Default for LawyerSelector {
    fn default() -> Self {
        Self {
            specialization: "all".to_string(),
            index: 0,
            selected: None,
            date: None,
            time: None,
        }
    }
}

impl LawyerSelector {
    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    /// Lawyers matching the current specialization filter.
    pub fn filtered<'a>(&self, lawyers: &'a [Lawyer]) -> Vec<&'a Lawyer> {
        if self.specialization.eq_ignore_ascii_case("all") {
            return lawyers.iter().collect();
        }
        let needle = self.specialization.to_lowercase();
        lawyers
            .iter()
            .filter(|l| l.specialization.to_lowercase().contains(&needle))
            .collect()
    }

    /// Changing the filter rewinds the carousel to its first card.
    pub fn set_specialization(&mut self, specialization: &str) {
        let specialization = specialization.trim();
        self.specialization = if specialization.is_empty() {
            "all".to_string()
        } else {
            specialization.to_string()
        };
        self.index = 0;
    }

    pub fn previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn next(&mut self, lawyers: &[Lawyer]) {
        let last = self.filtered(lawyers).len().saturating_sub(1);
        self.index = (self.index + 1).min(last);
    }

    /// Ignores ids that are not in the roster.
    pub fn select(&mut self, lawyer_id: u32, lawyers: &[Lawyer]) {
        if lawyers.iter().any(|l| l.id == lawyer_id) {
            self.selected = Some(lawyer_id);
        }
    }

    pub fn choose_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    pub fn choose_time(&mut self, time: Option<NaiveTime>) {
        self.time = time;
    }

    /// A booking needs a lawyer, a date and a time.
    pub fn book(&self) -> Option<BookingRequest> {
        Some(BookingRequest {
            lawyer_id: self.selected?,
            date: self.date?,
            time: self.time?,
        })
    }
}
