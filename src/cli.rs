pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::Contact;
use crate::helper;

pub fn print_contacts(contacts: &[Contact]) {
    for (mut i, c) in contacts.iter().enumerate() {
        i += 1;
        println!("{}", helper::listing_line(i, c));
    }
}
