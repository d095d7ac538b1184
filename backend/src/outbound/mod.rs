//! Outbound adapters implementing the domain's driven ports.
//!
//! - **memory**: process-local record store for tests and database-less runs
//! - **persistence**: PostgreSQL repositories using Diesel ORM
//!
//! Adapters only translate between domain types and storage representations.

pub mod memory;
pub mod persistence;
