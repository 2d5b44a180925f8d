//! Rolodex - a local, single-user contact directory.
//!
//! Stores names, phone numbers, and birthdays, persists them to a single
//! JSON file, and supports lookup, case-insensitive substring search, and
//! paged listing. Built for one process and one thread; every mutation is
//! followed by a synchronous full-file rewrite.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (names, phone numbers, birthdays)
//! - **models**: the contact record and its phone-list mutations
//! - **directory**: the keyed record collection plus persistence and search
//! - **pagination**: stateless page slicing over search results
//! - **error**: storage/lookup/paging error types
//! - **config**: data path and log level from the environment
//! - **cli**: the interactive command loop (thin I/O over the above)

pub mod cli;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod pagination;

pub use config::Config;
pub use directory::{Directory, DirectoryError, DirectoryResult};
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{ConfigError, NotFoundError, OutOfRangeError, StorageError};
pub use models::ContactRecord;
pub use pagination::Paginator;
