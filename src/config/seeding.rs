use anyhow::Result;
use std::collections::HashSet;
use std::sync::Arc;

use crate::models::{CreateUserRequest, User};
use crate::services::UserRepository;

pub struct DemoSeeder {
    users: Arc<dyn UserRepository>,
}

impl DemoSeeder {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub fn demo_users() -> Vec<CreateUserRequest> {
        vec![
            CreateUserRequest {
                name: "João Silva".to_string(),
                email: "joao@email.com".to_string(),
            },
            CreateUserRequest {
                name: "Maria Santos".to_string(),
                email: "maria@email.com".to_string(),
            },
        ]
    }

    /// Insert the demo users, skipping emails that already exist.
    pub async fn seed_users(&self) -> Result<Vec<User>> {
        tracing::info!("Seeding demo users...");

        let mut existing: HashSet<String> = self
            .users
            .list()
            .await?
            .into_iter()
            .map(|u| u.email)
            .collect();

        let mut created = Vec::new();
        for request in Self::demo_users() {
            let fields = request.validate()?;
            if !existing.insert(fields.email.clone()) {
                continue;
            }

            let user = self.users.create(fields).await?;
            tracing::info!(user_id = user.id, "Created demo user");
            created.push(user);
        }

        Ok(created)
    }
}
