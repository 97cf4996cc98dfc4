use super::*;

use chrono::{DateTime, NaiveDate, Utc};

struct SeedRow {
    id: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    phone: Option<&'static str>,
    company: Option<&'static str>,
    notes: Option<&'static str>,
    created: (i32, u32, u32),
    updated: (i32, u32, u32),
}

const DEMO_ROWS: &[SeedRow] = &[
    SeedRow {
        id: "1",
        first_name: "Alex",
        last_name: "Chen",
        email: "alex.chen@acme.com",
        phone: Some("+1-555-0123"),
        company: Some("ACME Corp"),
        notes: Some("Lead developer, interested in cloud solutions"),
        created: (2024, 1, 15),
        updated: (2024, 1, 15),
    },
    SeedRow {
        id: "2",
        first_name: "Sarah",
        last_name: "Johnson",
        email: "s.johnson@techflow.io",
        phone: Some("+1-555-0456"),
        company: Some("TechFlow"),
        notes: Some("CTO, looking for scalable infrastructure"),
        created: (2024, 2, 3),
        updated: (2024, 2, 10),
    },
    SeedRow {
        id: "3",
        first_name: "Marcus",
        last_name: "Rodriguez",
        email: "mrodriguez@startupx.com",
        phone: Some("+1-555-0789"),
        company: Some("StartupX"),
        notes: Some("Founder, rapid growth phase"),
        created: (2024, 2, 20),
        updated: (2024, 2, 20),
    },
    SeedRow {
        id: "4",
        first_name: "Emily",
        last_name: "Park",
        email: "emily@designstudio.co",
        phone: Some("+1-555-0321"),
        company: Some("Design Studio"),
        notes: Some("Creative director, needs collaboration tools"),
        created: (2024, 3, 1),
        updated: (2024, 3, 5),
    },
    SeedRow {
        id: "5",
        first_name: "David",
        last_name: "Kumar",
        email: "d.kumar@enterprise.net",
        phone: Some("+1-555-0654"),
        company: Some("Enterprise Solutions"),
        notes: Some("VP Engineering, enterprise client"),
        created: (2024, 3, 10),
        updated: (2024, 3, 10),
    },
    SeedRow {
        id: "6",
        first_name: "Jennifer",
        last_name: "Martinez",
        email: "jmartinez@globaltechcorp.com",
        phone: Some("+1-555-0987"),
        company: Some("GlobalTech Corp"),
        notes: Some("Product Manager, mobile-first strategy"),
        created: (2024, 11, 15),
        updated: (2024, 11, 15),
    },
    SeedRow {
        id: "7",
        first_name: "Michael",
        last_name: "Thompson",
        email: "mthompson@cloudsync.io",
        phone: None,
        company: Some("CloudSync"),
        notes: Some("CEO, needs integration solutions"),
        created: (2024, 11, 20),
        updated: (2024, 11, 20),
    },
    SeedRow {
        id: "8",
        first_name: "Lisa",
        last_name: "Wang",
        email: "lwang@innovatetech.com",
        phone: Some("+1-555-0234"),
        company: Some("InnovateTech"),
        notes: Some("Head of Engineering, AI/ML focus"),
        created: (2024, 12, 1),
        updated: (2024, 12, 1),
    },
    SeedRow {
        id: "9",
        first_name: "Robert",
        last_name: "Davis",
        email: "rdavis@startup123.com",
        phone: Some("+1-555-0567"),
        company: Some("Startup123"),
        notes: Some("CTO, early-stage company"),
        created: (2024, 12, 5),
        updated: (2024, 12, 5),
    },
    SeedRow {
        id: "10",
        first_name: "Amanda",
        last_name: "Lee",
        email: "alee@digitalventures.net",
        phone: Some("+1-555-0890"),
        company: Some("Digital Ventures"),
        notes: Some("Director of Technology, fintech background"),
        created: (2024, 12, 10),
        updated: (2024, 12, 10),
    },
    SeedRow {
        id: "11",
        first_name: "Carlos",
        last_name: "Garcia",
        email: "cgarcia@megacorp.com",
        phone: Some("+1-555-0345"),
        company: Some("MegaCorp"),
        notes: None,
        created: (2024, 12, 12),
        updated: (2024, 12, 12),
    },
    SeedRow {
        id: "12",
        first_name: "Nina",
        last_name: "Patel",
        email: "npatel@techsolutions.org",
        phone: None,
        company: Some("TechSolutions"),
        notes: Some("Senior Developer, DevOps specialist"),
        created: (2024, 12, 15),
        updated: (2024, 12, 15),
    },
    SeedRow {
        id: "13",
        first_name: "Kevin",
        last_name: "Brown",
        email: "kbrown@futuretech.io",
        phone: Some("+1-555-0678"),
        company: None,
        notes: Some("Freelance consultant, blockchain expert"),
        created: (2024, 12, 18),
        updated: (2024, 12, 18),
    },
];

fn midnight_utc((year, month, day): (i32, u32, u32)) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

/// The fixed demonstration dataset a fresh manager starts with.
pub fn demo_contacts() -> Vec<Contact> {
    DEMO_ROWS
        .iter()
        .map(|row| Contact {
            id: row.id.to_string(),
            first_name: row.first_name.to_string(),
            last_name: row.last_name.to_string(),
            email: row.email.to_string(),
            phone: row.phone.map(str::to_string),
            company: row.company.map(str::to_string),
            notes: row.notes.map(str::to_string),
            created_at: midnight_utc(row.created),
            updated_at: midnight_utc(row.updated),
        })
        .collect()
}
