//! Accounts Router

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AccountAppState};

/// Create the accounts router with PostgreSQL repository
pub fn accounts_router(repo: PgAccountRepository, config: AccountConfig) -> Router {
    accounts_router_generic(repo, config)
}

/// Create a generic accounts router for any repository implementation
pub fn accounts_router_generic<R>(repo: R, config: AccountConfig) -> Router
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let state = AccountAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/logout", post(handlers::logout::<R>))
        .route("/user", get(handlers::user_info::<R>))
        .route("/update_user_info", put(handlers::update_user_info::<R>))
        .with_state(state)
}
