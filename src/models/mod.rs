//! Data structures stored in the directory.

pub mod record;

pub use record::ContactRecord;
