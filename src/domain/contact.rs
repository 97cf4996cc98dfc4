use super::*;
use crate::helper;
pub use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,

    pub first_name: String,
    pub last_name: String,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(
        default = "default_timestamp",
        deserialize_with = "deserialize_timestamp"
    )]
    pub created_at: DateTime<Utc>,

    #[serde(
        default = "default_timestamp",
        deserialize_with = "deserialize_timestamp"
    )]
    pub updated_at: DateTime<Utc>,
}

/// Everything a caller supplies when creating a contact.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A partial update. `None` leaves a field alone; for the optional fields
/// `Some(None)` clears the value.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ContactPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub company: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn name_req() -> String {
        "First and last name are required".to_string()
    }

    pub fn email_req() -> String {
        "Email is required and must be a valid email. Must not exceed 254 characters".to_string()
    }
}

impl Contact {
    /// Stamps a fresh record. Only the manager calls this; it owns id assignment.
    pub(crate) fn from_new(id: String, data: NewContact, now: DateTime<Utc>) -> Self {
        Contact {
            id,
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            phone: data.phone,
            company: data.company,
            notes: data.notes,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Any one of phone, company or notes missing qualifies.
    pub fn is_missing_info(&self) -> bool {
        helper::is_absent(self.phone.as_deref())
            || helper::is_absent(self.company.as_deref())
            || helper::is_blank(self.notes.as_deref())
    }

    pub fn matches_query(&self, lowercase_query: &str) -> bool {
        self.first_name.to_lowercase().contains(lowercase_query)
            || self.last_name.to_lowercase().contains(lowercase_query)
            || self.email.to_lowercase().contains(lowercase_query)
            || self
                .company
                .as_ref()
                .is_some_and(|company| company.to_lowercase().contains(lowercase_query))
    }

    /// Lowercased company plus the lowercased words of the notes.
    pub fn tags(&self) -> HashSet<String> {
        let mut tags: HashSet<String> = HashSet::new();

        if let Some(company) = &self.company
            && !company.is_empty()
        {
            tags.insert(company.to_lowercase());
        }

        if let Some(notes) = &self.notes {
            tags.extend(notes.to_lowercase().split_whitespace().map(str::to_string));
        }
        tags
    }
}

impl NewContact {
    pub fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        NewContact {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_string());
        self
    }

    pub fn with_company(mut self, company: &str) -> Self {
        self.company = Some(company.to_string());
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !validate_name(&self.first_name) || !validate_name(&self.last_name) {
            return Err(AppError::Validation(ValidationReq::name_req()));
        }

        if !validate_email(&self.email)? {
            return Err(AppError::Validation(ValidationReq::email_req()));
        }
        Ok(())
    }
}

impl ContactPatch {
    pub fn is_empty(&self) -> bool {
        *self == ContactPatch::default()
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let names = [&self.first_name, &self.last_name];
        if names
            .into_iter()
            .flatten()
            .any(|name| !validate_name(name))
        {
            return Err(AppError::Validation(ValidationReq::name_req()));
        }

        if let Some(email) = &self.email
            && !validate_email(email)?
        {
            return Err(AppError::Validation(ValidationReq::email_req()));
        }
        Ok(())
    }

    /// Merges the supplied fields over `contact`. Timestamps are the caller's business.
    pub fn apply_to(self, contact: &mut Contact) {
        if let Some(first_name) = self.first_name {
            contact.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            contact.last_name = last_name;
        }
        if let Some(email) = self.email {
            contact.email = email;
        }
        if let Some(phone) = self.phone {
            contact.phone = phone;
        }
        if let Some(company) = self.company {
            contact.company = company;
        }
        if let Some(notes) = self.notes {
            contact.notes = notes;
        }
    }
}

pub fn validate_name(name: &str) -> bool {
    !name.trim().is_empty()
}

pub fn validate_email(email: &str) -> Result<bool, AppError> {
    // Must contain '@' with a '.' somewhere in the domain part
    // Not more than 254 characters
    let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")?;
    Ok(re.is_match(email) && email.len() <= 254)
}

fn default_timestamp() -> DateTime<Utc> {
    Utc::now()
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    helper::parse_timestamp(&value).map_err(serde::de::Error::custom)
}
