//! Seed data script - creates the demo accounts
//!
//! Run with: cargo run --bin seed-data
//!
//! This creates (when missing):
//! - an administrator holding ADMIN
//! - a regular user holding USER
//!
//! and prints a bearer token for each.

use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tracing::info;

use repairdesk_api::{
    auth::{user, user_role, AuthConfig, AuthService, Role},
    config, db, models,
};

struct SeedUser {
    name: &'static str,
    last_name: &'static str,
    email: &'static str,
    role: Role,
}

const SEED_USERS: &[SeedUser] = &[
    SeedUser {
        name: "Admin",
        last_name: "RepairDesk",
        email: "admin@repairdesk.local",
        role: Role::Admin,
    },
    SeedUser {
        name: "User",
        last_name: "RepairDesk",
        email: "user@repairdesk.local",
        role: Role::User,
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = config::load_config()?;
    config::init_tracing(cfg.log_level(), cfg.log_json);

    info!("=== RepairDesk seed data ===");

    let pool = db::establish_connection_from_app_config(&cfg).await?;
    db::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let auth = AuthService::new(AuthConfig::from(&cfg), pool.clone());

    for seed in SEED_USERS {
        let account = ensure_user(&pool, seed).await?;
        let token = auth.issue_token_for_user(account.id).await?;
        info!(email = %account.email, role = %seed.role, "seeded account");
        println!("{} ({}): {}", account.email, seed.role, token);
    }

    Ok(())
}

async fn ensure_user(db: &DatabaseConnection, seed: &SeedUser) -> anyhow::Result<user::Model> {
    let account = match user::Entity::find()
        .filter(user::Column::Email.eq(seed.email))
        .one(db)
        .await?
    {
        Some(existing) => existing,
        None => {
            let now = models::now();
            user::ActiveModel {
                name: Set(seed.name.to_string()),
                last_name: Set(Some(seed.last_name.to_string())),
                email: Set(seed.email.to_string()),
                created_at: Set(now),
                updated_at: Set(now),
                deleted_at: Set(None),
                ..Default::default()
            }
            .insert(db)
            .await?
        }
    };

    let has_role = user_role::Entity::find()
        .filter(user_role::Column::UserId.eq(account.id))
        .filter(user_role::Column::RoleName.eq(seed.role.as_ref()))
        .one(db)
        .await?
        .is_some();

    if !has_role {
        user_role::ActiveModel {
            user_id: Set(account.id),
            role_name: Set(seed.role.to_string()),
            created_at: Set(models::now()),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(account)
}
