//! Role-definition resolution.
//!
//! Turns a role given as a name, a UUID, or an already fully-qualified
//! role-definition id into the fully-qualified form. Name lookups go through
//! the [`RoleDefinitions`] trait so callers can resolve against a mock
//! instead of a live authorization API.

use uuid::Uuid;

use crate::config::CloudContext;
use crate::error::{GantryError, Result};

/// A role definition as returned by the authorization API.
#[derive(Debug, Clone)]
pub struct RoleDefinition {
    pub id: String,
    pub role_name: String,
}

/// Lookup of role definitions under a scope.
pub trait RoleDefinitions {
    /// List role definitions whose `roleName` equals `role_name` exactly.
    fn list_for_name(&self, scope: &str, role_name: &str) -> Result<Vec<RoleDefinition>>;
}

/// Whether a role string is already a fully-qualified role-definition id.
fn is_role_definition_id(role: &str) -> bool {
    let lower = role.to_ascii_lowercase();
    match lower.strip_prefix("/subscriptions/") {
        Some(rest) => rest
            .find("/providers/microsoft.authorization/roledefinitions/")
            .is_some_and(|pos| pos > 0),
        None => false,
    }
}

/// Resolve a role name, UUID, or id to a fully-qualified role-definition id.
///
/// Name lookups require exactly one match under the scope; zero matches is
/// `RoleNotFound` and several is `AmbiguousRole` listing every candidate.
pub fn resolve_role_id(
    roles: &dyn RoleDefinitions,
    ctx: &CloudContext,
    role: &str,
    scope: &str,
) -> Result<String> {
    if is_role_definition_id(role) {
        return Ok(role.to_string());
    }

    if Uuid::parse_str(role).is_ok() {
        return Ok(format!(
            "/subscriptions/{}/providers/Microsoft.Authorization/roleDefinitions/{}",
            ctx.subscription()?,
            role
        ));
    }

    let mut defs = roles.list_for_name(scope, role)?;
    match defs.len() {
        0 => Err(GantryError::RoleNotFound(role.to_string())),
        1 => Ok(defs.remove(0).id),
        _ => Err(GantryError::AmbiguousRole {
            role: role.to_string(),
            ids: defs.into_iter().map(|d| d.id).collect(),
        }),
    }
}
