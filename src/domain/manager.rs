use super::*;

use chrono::{DateTime, TimeDelta, Utc};
use log::warn;
use uuid::Uuid;

pub const DEFAULT_RECENT_DAYS: i64 = 30;

/// The three list selections offered to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactFilter {
    #[default]
    All,
    Recent,
    Incomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCounts {
    pub all: usize,
    pub recent: usize,
    pub incomplete: usize,
}

/// Owns the canonical, ordered contact list.
///
/// Every read hands out clones; nothing outside the manager can reach the
/// internal `Vec`. The manager is not synchronised: share it across threads
/// behind a `Mutex` (or similar single-writer lock).
#[derive(Debug, Clone, PartialEq)]
pub struct ContactManager {
    contacts: Vec<Contact>,
}

impl Default for ContactManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactManager {
    /// A manager pre-loaded with the demonstration dataset.
    pub fn new() -> Self {
        Self::with_contacts(seed::demo_contacts())
    }

    /// A manager holding exactly `contacts` (which may be empty).
    /// Later records reusing an earlier id are dropped.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let mut seen: HashSet<String> = HashSet::with_capacity(contacts.len());
        let mut unique = Vec::with_capacity(contacts.len());

        for contact in contacts {
            if seen.insert(contact.id.clone()) {
                unique.push(contact);
            } else {
                warn!("Dropping contact with duplicate id {}", contact.id);
            }
        }

        Self { contacts: unique }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn add_contact(&mut self, data: NewContact) -> Contact {
        let contact = Contact::from_new(self.fresh_id(), data, Utc::now());

        self.contacts.push(contact.clone());
        contact
    }

    pub fn get_contact(&self, id: &str) -> Option<Contact> {
        self.contacts.iter().find(|c| c.id == id).cloned()
    }

    /// Snapshot of the whole collection in insertion order.
    pub fn contact_list(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    pub fn update_contact(&mut self, id: &str, patch: ContactPatch) -> Option<Contact> {
        let contact = self.contacts.iter_mut().find(|c| c.id == id)?;

        patch.apply_to(contact);
        // never let updated_at fall behind created_at, even with a skewed clock
        contact.updated_at = Utc::now().max(contact.created_at);

        Some(contact.clone())
    }

    pub fn delete_contact(&mut self, id: &str) -> bool {
        match self.contacts.iter().position(|c| c.id == id) {
            Some(index) => {
                self.contacts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Case-insensitive substring match on first name, last name, email and company.
    pub fn search(&self, query: &str) -> Vec<Contact> {
        search_in(&self.contacts, query)
    }

    pub fn recent(&self, days: i64) -> Vec<Contact> {
        self.recent_as_of(days, Utc::now())
    }

    /// Contacts created on or after `now - days`. A window reaching past the
    /// representable range covers everything.
    pub fn recent_as_of(&self, days: i64, now: DateTime<Utc>) -> Vec<Contact> {
        let cutoff = TimeDelta::try_days(days)
            .and_then(|window| now.checked_sub_signed(window))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        self.contacts
            .iter()
            .filter(|c| c.created_at >= cutoff)
            .cloned()
            .collect()
    }

    pub fn missing_info(&self) -> Vec<Contact> {
        self.contacts
            .iter()
            .filter(|c| c.is_missing_info())
            .cloned()
            .collect()
    }

    pub fn by_company(&self) -> BTreeMap<String, Vec<Contact>> {
        let mut groups: BTreeMap<String, Vec<Contact>> = BTreeMap::new();

        for contact in &self.contacts {
            if let Some(company) = &contact.company
                && !company.is_empty()
            {
                groups
                    .entry(company.clone())
                    .or_default()
                    .push(contact.clone());
            }
        }
        groups
    }

    /// Same groups as [`Self::by_company`], ordered by each company's first appearance.
    pub fn by_company_in_order(&self) -> Vec<(String, Vec<Contact>)> {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<(String, Vec<Contact>)> = Vec::new();

        for contact in &self.contacts {
            if let Some(company) = &contact.company
                && !company.is_empty()
            {
                let index = *positions.entry(company.clone()).or_insert_with(|| {
                    groups.push((company.clone(), Vec::new()));
                    groups.len() - 1
                });
                groups[index].1.push(contact.clone());
            }
        }
        groups
    }

    /// Contacts carrying at least one of `tags`. No tags means no filtering.
    pub fn filter_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<Contact> {
        if tags.is_empty() {
            return self.contact_list();
        }

        let wanted: Vec<String> = tags.iter().map(|t| t.as_ref().to_lowercase()).collect();

        self.contacts
            .iter()
            .filter(|contact| {
                let contact_tags = contact.tags();
                wanted.iter().any(|tag| contact_tags.contains(tag))
            })
            .cloned()
            .collect()
    }

    /// The list a user sees: the selected filter, narrowed by `query` when one is given.
    pub fn view(&self, filter: ContactFilter, query: Option<&str>) -> Vec<Contact> {
        self.view_as_of(filter, query, DEFAULT_RECENT_DAYS, Utc::now())
    }

    pub fn view_as_of(
        &self,
        filter: ContactFilter,
        query: Option<&str>,
        days: i64,
        now: DateTime<Utc>,
    ) -> Vec<Contact> {
        let filtered = match filter {
            ContactFilter::All => self.contact_list(),
            ContactFilter::Recent => self.recent_as_of(days, now),
            ContactFilter::Incomplete => self.missing_info(),
        };

        match query {
            Some(q) if !q.is_empty() => search_in(&filtered, q),
            _ => filtered,
        }
    }

    pub fn counts(&self) -> FilterCounts {
        FilterCounts {
            all: self.contacts.len(),
            recent: self.recent(DEFAULT_RECENT_DAYS).len(),
            incomplete: self.contacts.iter().filter(|c| c.is_missing_info()).count(),
        }
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.contacts.iter().any(|c| c.id == id) {
                return id;
            }
        }
    }
}

fn search_in(contacts: &[Contact], query: &str) -> Vec<Contact> {
    let query = query.to_lowercase();

    contacts
        .iter()
        .filter(|c| c.matches_query(&query))
        .cloned()
        .collect()
}
