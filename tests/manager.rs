use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::thread;

use raincloud::prelude::*;

fn empty_manager() -> ContactManager {
    ContactManager::with_contacts(Vec::new())
}

fn search_fixture() -> ContactManager {
    let mut manager = empty_manager();
    manager.add_contact(NewContact::new("John", "Doe", "john@example.com").with_company("TechCorp"));
    manager.add_contact(NewContact::new("Jane", "Smith", "jane@example.com").with_company("DataSys"));
    manager.add_contact(NewContact::new("Bob", "Johnson", "bob@example.com"));
    manager
}

#[test]
fn new_manager_is_seeded_with_demo_data() {
    let manager = ContactManager::new();

    assert_eq!(manager.contact_list(), demo_contacts());
    assert_eq!(ContactManager::default(), manager);
}

#[test]
fn initializes_with_provided_contacts() {
    let now = Utc::now();
    let contact = Contact {
        id: "1".to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: "test@example.com".to_string(),
        phone: None,
        company: None,
        notes: None,
        created_at: now,
        updated_at: now,
    };

    let manager = ContactManager::with_contacts(vec![contact]);
    let contacts = manager.contact_list();

    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].email, "test@example.com");
    assert!(empty_manager().contact_list().is_empty());
}

#[test]
fn adds_contact_with_all_optional_fields() {
    let mut manager = empty_manager();

    let contact = manager.add_contact(
        NewContact::new("Jane", "Smith", "jane@example.com")
            .with_phone("+1-555-0123")
            .with_company("TechCorp")
            .with_notes("Important client"),
    );

    assert_eq!(contact.phone.as_deref(), Some("+1-555-0123"));
    assert_eq!(contact.company.as_deref(), Some("TechCorp"));
    assert_eq!(contact.notes.as_deref(), Some("Important client"));
    assert_eq!(manager.get_contact(&contact.id), Some(contact));
}

#[test]
fn ids_are_unique_across_many_additions() {
    let mut manager = empty_manager();

    let ids: HashSet<String> = (0..500)
        .map(|i| {
            manager
                .add_contact(NewContact::new("User", &i.to_string(), "u@example.com"))
                .id
        })
        .collect();

    assert_eq!(ids.len(), 500);
}

#[test]
fn update_merges_partial_fields() {
    let mut manager = empty_manager();
    let added = manager.add_contact(NewContact::new("John", "Doe", "john@example.com"));

    let updated = manager
        .update_contact(
            &added.id,
            ContactPatch {
                first_name: Some("Jonathan".to_string()),
                company: Some(Some("NewCorp".to_string())),
                ..Default::default()
            },
        )
        .expect("contact exists");

    assert_eq!(updated.first_name, "Jonathan");
    assert_eq!(updated.last_name, "Doe");
    assert_eq!(updated.email, "john@example.com");
    assert_eq!(updated.company.as_deref(), Some("NewCorp"));
    assert_eq!(updated.created_at, added.created_at);
    assert!(updated.updated_at >= updated.created_at);
    assert!(updated.updated_at >= added.updated_at);
}

#[test]
fn update_can_clear_optional_fields() {
    let mut manager = empty_manager();
    let added = manager.add_contact(
        NewContact::new("John", "Doe", "john@example.com").with_phone("555-0100"),
    );

    let updated = manager
        .update_contact(
            &added.id,
            ContactPatch {
                phone: Some(None),
                ..Default::default()
            },
        )
        .expect("contact exists");

    assert_eq!(updated.phone, None);
    assert!(updated.is_missing_info());
}

#[test]
fn unknown_ids_are_reported_as_absent() {
    let mut manager = ContactManager::new();

    assert!(manager.get_contact("non-existent-id").is_none());
    assert!(
        manager
            .update_contact("non-existent-id", ContactPatch::default())
            .is_none()
    );
    assert!(!manager.delete_contact("non-existent-id"));
    assert_eq!(manager.len(), 13);
}

#[test]
fn delete_then_get_is_not_found() {
    let mut manager = empty_manager();
    let first = manager.add_contact(NewContact::new("Alice", "A", "alice@example.com"));
    let second = manager.add_contact(NewContact::new("Bob", "B", "bob@example.com"));

    assert!(manager.delete_contact(&first.id));
    assert!(manager.get_contact(&first.id).is_none());

    let remaining = manager.contact_list();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);
}

#[test]
fn search_matches_names_email_and_company_case_insensitively() {
    let manager = search_fixture();

    let by_first: Vec<String> = manager
        .search("John")
        .into_iter()
        .map(|c| c.first_name)
        .collect();
    // Bob Johnson matches on last name
    assert_eq!(by_first, vec!["John", "Bob"]);

    assert_eq!(manager.search("smith").len(), 1);
    assert_eq!(manager.search("jane@example.com")[0].first_name, "Jane");
    assert!(manager.search("NonExistent").is_empty());
    assert_eq!(manager.search("").len(), 3);
}

#[test]
fn search_by_company_returns_exactly_that_company() {
    let manager = search_fixture();

    let results = manager.search("techcorp");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].company.as_deref(), Some("TechCorp"));
}

#[test]
fn search_does_not_look_at_phone_or_notes() {
    let mut manager = empty_manager();
    manager.add_contact(
        NewContact::new("Quiet", "Person", "q@example.com")
            .with_phone("+1-555-9999")
            .with_notes("blockchain"),
    );

    assert!(manager.search("9999").is_empty());
    assert!(manager.search("blockchain").is_empty());
}

#[test]
fn recent_includes_new_contacts_and_excludes_old_seed_data() {
    let mut manager = ContactManager::new();
    let fresh = manager.add_contact(NewContact::new("Recent", "Contact", "recent@example.com"));

    assert!(manager.recent(1).iter().any(|c| c.id == fresh.id));

    let as_of = DateTime::parse_from_rfc3339("2024-03-15T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc);
    let ids: Vec<String> = manager
        .recent_as_of(DEFAULT_RECENT_DAYS, as_of)
        .into_iter()
        .map(|c| c.id)
        .collect();

    assert!(ids.contains(&"4".to_string()));
    assert!(ids.contains(&"5".to_string()));
    assert!(!ids.contains(&"1".to_string()));
}

#[test]
fn missing_info_tracks_updates() {
    let mut manager = empty_manager();
    let john = manager.add_contact(NewContact::new("John", "Doe", "john@example.com"));

    assert!(manager.missing_info().iter().any(|c| c.id == john.id));

    manager.update_contact(
        &john.id,
        ContactPatch {
            phone: Some(Some("555-0123".to_string())),
            company: Some(Some("Acme".to_string())),
            notes: Some(Some("x".to_string())),
            ..Default::default()
        },
    );

    assert!(manager.missing_info().is_empty());
}

#[test]
fn missing_info_flags_any_single_gap() {
    let mut manager = empty_manager();
    manager.add_contact(
        NewContact::new("Complete", "User", "complete@example.com")
            .with_phone("+1-555-0123")
            .with_company("Corp")
            .with_notes("All fields"),
    );
    manager.add_contact(NewContact::new("Incomplete", "User", "incomplete@example.com"));
    manager.add_contact(
        NewContact::new("Missing", "Phone", "nophone@example.com")
            .with_company("Corp")
            .with_notes("has notes"),
    );

    let emails: Vec<String> = manager
        .missing_info()
        .into_iter()
        .map(|c| c.email)
        .collect();

    assert_eq!(emails, vec!["incomplete@example.com", "nophone@example.com"]);
}

#[test]
fn groups_by_company() {
    let mut manager = empty_manager();
    manager.add_contact(NewContact::new("Alice", "A", "alice@example.com").with_company("TechCorp"));
    manager.add_contact(NewContact::new("Bob", "B", "bob@example.com").with_company("TechCorp"));
    manager.add_contact(NewContact::new("Charlie", "C", "charlie@example.com").with_company("DataSys"));
    manager.add_contact(NewContact::new("Dana", "D", "dana@example.com"));

    let groups = manager.by_company();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups["TechCorp"].len(), 2);
    assert_eq!(groups["TechCorp"][0].first_name, "Alice");
    assert_eq!(groups["TechCorp"][1].first_name, "Bob");
    assert_eq!(groups["DataSys"].len(), 1);
    assert!(!groups.contains_key("NonExistent"));
}

#[test]
fn filters_by_company_and_note_tags() {
    let mut manager = empty_manager();
    manager.add_contact(
        NewContact::new("Alice", "A", "alice@example.com")
            .with_company("TechCorp")
            .with_notes("developer backend"),
    );
    manager.add_contact(
        NewContact::new("Bob", "B", "bob@example.com")
            .with_company("DataSys")
            .with_notes("designer frontend"),
    );

    let by_company = manager.filter_by_tags(&["TechCorp"]);
    assert_eq!(by_company.len(), 1);
    assert_eq!(by_company[0].first_name, "Alice");

    assert_eq!(manager.filter_by_tags(&["techcorp"]).len(), 1);
    assert_eq!(
        manager.filter_by_tags(&["FRONTEND", "nothing"])[0].first_name,
        "Bob"
    );
    assert!(manager.filter_by_tags(&["tech"]).is_empty());

    let none: [&str; 0] = [];
    assert_eq!(manager.filter_by_tags(&none), manager.contact_list());
}

#[test]
fn view_applies_query_within_filter() {
    let manager = ContactManager::new();

    let incomplete = manager.view(ContactFilter::Incomplete, Some("kevin"));
    assert_eq!(incomplete.len(), 1);
    assert_eq!(incomplete[0].id, "13");

    // Alex Chen has every field filled in
    assert!(manager.view(ContactFilter::Incomplete, Some("alex")).is_empty());
    assert_eq!(manager.view(ContactFilter::All, Some("alex")).len(), 1);
    assert_eq!(manager.view(ContactFilter::All, None), manager.contact_list());
}

#[test]
fn shared_manager_behind_a_lock() {
    let manager = Arc::new(Mutex::new(empty_manager()));

    thread::scope(|s| {
        for worker in 0..4 {
            let manager = Arc::clone(&manager);
            s.spawn(move || {
                for i in 0..25 {
                    let mut guard = manager.lock().unwrap();
                    guard.add_contact(NewContact::new(
                        &format!("Worker{worker}"),
                        &format!("N{i}"),
                        "w@example.com",
                    ));
                }
            });
        }
    });

    let manager = manager.lock().unwrap();
    let ids: HashSet<String> = manager.contact_list().into_iter().map(|c| c.id).collect();
    assert_eq!(manager.len(), 100);
    assert_eq!(ids.len(), 100);
}
