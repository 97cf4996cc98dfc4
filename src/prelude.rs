pub use crate::calculator::{Calculator, Operation};
pub use crate::cli::{command, run_app};
pub use crate::domain::{
    Contact, ContactFilter, ContactManager, ContactPatch, DEFAULT_RECENT_DAYS, FilterCounts,
    NewContact,
    contact::{self, DateTime, Utc},
    seed::demo_contacts,
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, ContactStorage, KeyValueStore, STORAGE_KEY, StorageMediums,
    file::FileStorage,
    memory::MemStorage,
    parse_storage_type,
    remote::{FetchOutcome, UserData, UserDataClient},
};
