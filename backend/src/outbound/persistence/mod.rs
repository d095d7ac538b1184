//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories are thin translators between Diesel rows (`models.rs`,
//! `schema.rs`) and domain types. They run on `diesel-async` connections
//! drawn from a `bb8` pool and map every failure into the `Connection` or
//! `Query` variant of their port error.
//!
//! # Example
//!
//! ```no_run
//! use expense_tracker::outbound::persistence::{
//!     DbPool, DieselCostRepository, DieselUserRepository, PoolConfig,
//! };
//!
//! # async fn wire() -> Result<(), expense_tracker::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/expenses")).await?;
//! let users = DieselUserRepository::new(pool.clone());
//! let costs = DieselCostRepository::new(pool);
//! # let _ = (users, costs);
//! # Ok(())
//! # }
//! ```

mod diesel_cost_repository;
mod diesel_error_mapping;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_cost_repository::DieselCostRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
