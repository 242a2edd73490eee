use std::sync::Arc;

use axum::{http::Uri, routing::get, Router};

use super::health::health_check;
use super::users::{create_user, delete_user, get_user, list_users, update_user};
use crate::errors::ApiError;
use crate::middleware::with_middleware_stack;
use crate::services::{InMemoryUserRepository, UserRepository};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUserRepository::new()))
    }
}

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

pub fn create_routes(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .nest("/api/users", user_routes())
        .fallback(route_not_found)
        .with_state(state);

    with_middleware_stack(router)
}
