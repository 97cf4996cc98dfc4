pub mod contact;
pub mod manager;
pub mod seed;

use crate::errors::AppError;
use std::collections::{BTreeMap, HashMap, HashSet};

pub use contact::{Contact, ContactPatch, NewContact};
pub use manager::{ContactFilter, ContactManager, DEFAULT_RECENT_DAYS, FilterCounts};
