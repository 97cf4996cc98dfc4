use chrono::{DateTime, NaiveDate, Utc};
use dotenv::dotenv;
use std::env;

use crate::domain::contact::Contact;
use crate::errors::AppError;

/// Reads `key` from the process environment after loading `.env` (if any).
pub fn get_env_value_by_key(key: &str) -> Result<String, AppError> {
    dotenv().ok();

    env::var(key).map_err(|_| AppError::NotFound(format!("{} in env", key)))
}

/// Parses an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date taken as UTC midnight.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| AppError::Validation(format!("'{}' is not a valid timestamp", value)))
}

pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

pub fn is_absent(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.is_empty())
}

/// Empty input from the command line means "no value".
pub fn optional_field(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

pub fn display_contact(contact: &Contact) -> String {
    let mut output = format!(
        "Id: {}\n\
        Name: {} {}\n\
        Email: {}",
        contact.id, contact.first_name, contact.last_name, contact.email
    );

    if let Some(phone) = &contact.phone {
        output.push_str(&format!("\nPhone: {}", phone));
    }
    if let Some(company) = &contact.company {
        output.push_str(&format!("\nCompany: {}", company));
    }
    if let Some(notes) = &contact.notes {
        output.push_str(&format!("\nNotes: {}", notes));
    }

    output.push_str(&format!(
        "\nCreated: {}\nUpdated: {}",
        contact.created_at.date_naive(),
        contact.updated_at.date_naive()
    ));
    output
}

pub fn listing_line(index: usize, contact: &Contact) -> String {
    let name = format!("{} {}", contact.first_name, contact.last_name);
    format!(
        "{index:>3}. {:<36} {:<22} {:<32} {:<22} {:<15}",
        contact.id,
        name,
        contact.email,
        contact.company.as_deref().unwrap_or("-"),
        contact.phone.as_deref().unwrap_or("-"),
    )
}
