//! Builders for the HTTP state over the configured record store.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::info;

use expense_tracker::domain::ports::UserRepository;
use expense_tracker::domain::{User, UserId};
use expense_tracker::inbound::http::state::HttpState;
use expense_tracker::outbound::memory::InMemoryRecordStore;
use expense_tracker::outbound::persistence::{DieselCostRepository, DieselUserRepository};

use super::ServerConfig;

/// Upsert the demo user `1` (John Doe).
///
/// # Errors
/// Returns an I/O error wrapping the store failure.
async fn seed_demo_user<U: UserRepository + ?Sized>(users: &U) -> std::io::Result<()> {
    let id = UserId::new("1").map_err(std::io::Error::other)?;
    let user = User::new(id, "John", "Doe").map_err(std::io::Error::other)?;
    users.upsert(&user).await.map_err(|err| {
        std::io::Error::other(format!("seeding demo user failed: {err}"))
    })?;
    info!(user_id = %user.id(), "demo user seeded");
    Ok(())
}

/// Build handler state over Diesel when a pool is configured, otherwise
/// over a fresh in-memory store.
///
/// # Errors
/// Propagates failures from seeding the demo user.
pub(super) async fn build_http_state(
    config: &ServerConfig,
) -> std::io::Result<web::Data<HttpState>> {
    let state = match &config.db_pool {
        Some(pool) => {
            let users = Arc::new(DieselUserRepository::new(pool.clone()));
            let costs = Arc::new(DieselCostRepository::new(pool.clone()));
            if config.seed_demo_user {
                seed_demo_user(users.as_ref()).await?;
            }
            info!("using PostgreSQL record store");
            HttpState::from_repositories(users, costs)
        }
        None => {
            let store = Arc::new(InMemoryRecordStore::new(Arc::new(DefaultClock)));
            if config.seed_demo_user {
                seed_demo_user(store.as_ref()).await?;
            }
            info!("using in-memory record store");
            HttpState::from_repositories(store.clone(), store)
        }
    };
    Ok(web::Data::new(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use expense_tracker::domain::ports::UserSummaryQuery;
    use std::net::SocketAddr;

    #[tokio::test]
    async fn demo_user_is_seeded_in_memory() {
        let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0))).with_demo_user(true);

        let state = build_http_state(&config).await.expect("state builds");
        let summary = state.users.user_summary("1").await.expect("demo user");
        assert_eq!(summary.first_name, "John");
        assert!(summary.total.abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn store_starts_empty_without_seeding() {
        let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)));

        let state = build_http_state(&config).await.expect("state builds");
        assert!(state.users.user_summary("1").await.is_err());
    }
}
