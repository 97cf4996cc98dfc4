use crate::{
    calculator::Calculator,
    cli::print_contacts,
    helper,
    prelude::{
        AppError, ContactFilter, ContactManager, ContactPatch, ContactStorage, NewContact,
        StorageMediums, UserDataClient,
        command::{Cli, Commands},
        parse_storage_type,
    },
};
use chrono::Utc;
use clap::Parser;
use log::{debug, info};

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Calc { keys } => run_calculator(&keys),
        Commands::Users { id } => run_user_fetch(id.as_deref()),
        command => {
            let medium = StorageMediums::from(&cli.storage_choice)?;
            let store = parse_storage_type(Some(medium), Some(&cli.data_dir))?;
            let storage = ContactStorage::new(store);
            run_contact_command(command, &storage)
        }
    }
}

/// Loads the stored collection (seeding the demo data on first use) and runs `command` on it.
pub fn run_contact_command(command: Commands, storage: &ContactStorage) -> Result<(), AppError> {
    let mut manager = if storage.has_existing_data() {
        ContactManager::with_contacts(storage.get_contacts())
    } else {
        info!("No stored contacts, starting from the demo dataset");
        ContactManager::new()
    };
    debug!(
        "Loaded {} contacts from {} storage",
        manager.len(),
        storage.get_medium()
    );

    match command {
        Commands::Add {
            first_name,
            last_name,
            email,
            phone,
            company,
            notes,
        } => {
            let new_contact = NewContact {
                first_name,
                last_name,
                email,
                phone: phone.and_then(helper::optional_field),
                company: company.and_then(helper::optional_field),
                notes: notes.and_then(helper::optional_field),
            };
            new_contact.validate()?;

            let contact = manager.add_contact(new_contact);
            storage.save_contacts(&manager.contact_list())?;

            println!("Contact added successfully");
            println!("{}", helper::display_contact(&contact));
            Ok(())
        }

        Commands::List { filter, days, query } => {
            let counts = manager.counts();
            println!(
                "All ({}) | Recent ({}) | Incomplete ({})",
                counts.all, counts.recent, counts.incomplete
            );

            let filter: ContactFilter = filter.into();
            let contacts = manager.view_as_of(filter, query.as_deref(), days, Utc::now());

            if contacts.is_empty() {
                println!("No contacts found");
                return Ok(());
            }
            print_contacts(&contacts);
            Ok(())
        }

        Commands::Show { id } => {
            let contact = manager
                .get_contact(&id)
                .ok_or(AppError::NotFound("Contact".to_string()))?;

            println!("{}", helper::display_contact(&contact));
            Ok(())
        }

        Commands::Edit {
            id,
            first_name,
            last_name,
            email,
            phone,
            company,
            notes,
        } => {
            let patch = ContactPatch {
                first_name,
                last_name,
                email,
                phone: phone.map(helper::optional_field),
                company: company.map(helper::optional_field),
                notes: notes.map(helper::optional_field),
            };

            if patch.is_empty() {
                return Err(AppError::Validation("Nothing to update".to_string()));
            }
            patch.validate()?;

            let contact = manager
                .update_contact(&id, patch)
                .ok_or(AppError::NotFound("Contact".to_string()))?;
            storage.save_contacts(&manager.contact_list())?;

            println!("Contact updated successfully");
            println!("{}", helper::display_contact(&contact));
            Ok(())
        }

        Commands::Delete { id } => {
            if !manager.delete_contact(&id) {
                return Err(AppError::NotFound("Contact".to_string()));
            }
            storage.save_contacts(&manager.contact_list())?;

            println!("Contact deleted successfully");
            Ok(())
        }

        Commands::Search { query } => {
            let contacts = manager.search(&query);

            if contacts.is_empty() {
                println!("Couldn't find a contact matching {query}");
                return Ok(());
            }
            print_contacts(&contacts);
            Ok(())
        }

        Commands::Companies => {
            let groups = manager.by_company_in_order();

            if groups.is_empty() {
                println!("No contacts with a company yet");
                return Ok(());
            }
            for (company, contacts) in &groups {
                println!("{} ({})", company, contacts.len());
                for contact in contacts {
                    println!("     - {} <{}>", contact.full_name(), contact.email);
                }
            }
            Ok(())
        }

        Commands::Tags { tags } => {
            let contacts = manager.filter_by_tags(&tags);

            if contacts.is_empty() {
                println!("Found no contact with the tags {:?}", tags);
                return Ok(());
            }
            print_contacts(&contacts);
            Ok(())
        }

        Commands::Missing => {
            let contacts = manager.missing_info();

            if contacts.is_empty() {
                println!("Every contact is complete");
                return Ok(());
            }
            print_contacts(&contacts);
            Ok(())
        }

        Commands::Clear => {
            storage.clear_contacts()?;
            println!("Stored contacts cleared");
            Ok(())
        }

        Commands::Calc { keys } => run_calculator(&keys),
        Commands::Users { id } => run_user_fetch(id.as_deref()),
    }
}

pub fn run_user_fetch(user_id: Option<&str>) -> Result<(), AppError> {
    let outcome = UserDataClient::new().fetch_user_data(user_id);

    if let Some(error) = &outcome.error {
        eprintln!("{}", error);
    }

    println!("Fetched Users ({}):", outcome.users.len());
    if outcome.users.is_empty() {
        println!("No users found. Run with RUST_LOG=info for details.");
    }
    for user in &outcome.users {
        println!(
            "{:<38} {:<32} {:<20} {}",
            user.id,
            user.email,
            user.name.as_deref().unwrap_or("-"),
            user.created_at
        );
    }
    Ok(())
}

pub fn run_calculator(keys: &[String]) -> Result<(), AppError> {
    let mut calc = Calculator::new();

    for key in keys {
        calc.press(key)?;
    }

    println!("{}", calc.display());
    Ok(())
}
