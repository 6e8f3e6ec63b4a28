/*!
 * # Role-Based Access Control (RBAC) Module
 *
 * Fixed role set of the admin backend. Roles are granted per user through
 * `user_roles` and travel in the `roles` claim of a bearer token.
 */

use lazy_static::lazy_static;
use std::collections::HashMap;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    User,
}

/// Role definition shown to operators
#[derive(Debug, Clone)]
pub struct RoleDefinition {
    pub role: Role,
    pub description: &'static str,
}

lazy_static! {
    pub static ref ROLES: HashMap<String, RoleDefinition> = {
        let mut roles = HashMap::new();

        roles.insert(
            Role::Admin.to_string(),
            RoleDefinition {
                role: Role::Admin,
                description: "Administrator with access to every resource",
            },
        );

        roles.insert(
            Role::User.to_string(),
            RoleDefinition {
                role: Role::User,
                description: "Regular user who files support requests",
            },
        );

        roles
    };
}

/// True for role names this service knows how to gate on.
pub fn is_known_role(name: &str) -> bool {
    ROLES.contains_key(name)
}

pub fn all_roles() -> impl Iterator<Item = Role> {
    Role::iter()
}
