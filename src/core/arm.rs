//! Blocking management-API client.
//!
//! One synchronous HTTP exchange per operation, no retries. The bearer
//! token is read per call from `GANTRY_TOKEN` (or `AZURE_ACCESS_TOKEN`),
//! so commands that never reach the API run without one.

use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde_json::Value;

use crate::config::CloudContext;
use crate::core::roles::{RoleDefinition, RoleDefinitions};
use crate::error::{GantryError, Result};

const AUTHORIZATION_API_VERSION: &str = "2022-04-01";
const CONTAINER_API_VERSION: &str = "2023-05-01";

pub struct ArmClient {
    http: Client,
    endpoint: String,
}

impl ArmClient {
    pub fn new(ctx: &CloudContext) -> Self {
        Self {
            http: Client::new(),
            endpoint: ctx.endpoint.trim_end_matches('/').to_string(),
        }
    }

    fn token(&self) -> Result<String> {
        std::env::var("GANTRY_TOKEN")
            .or_else(|_| std::env::var("AZURE_ACCESS_TOKEN"))
            .map_err(|_| {
                GantryError::Config(
                    "no access token: set GANTRY_TOKEN or AZURE_ACCESS_TOKEN".to_string(),
                )
            })
    }

    fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(GantryError::Api {
            status: status.as_u16(),
            message: response.text().unwrap_or_default(),
        })
    }

    /// Create or update a container group with a single PUT.
    pub fn create_container_group(
        &self,
        subscription: &str,
        resource_group: &str,
        name: &str,
        body: &Value,
    ) -> Result<Value> {
        let url = format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.ContainerInstance/containerGroups/{}",
            self.endpoint, subscription, resource_group, name
        );
        tracing::debug!("PUT {}", url);

        let response = self
            .http
            .put(&url)
            .bearer_auth(self.token()?)
            .query(&[("api-version", CONTAINER_API_VERSION)])
            .json(body)
            .send()?;
        let response = Self::check(response)?;
        Ok(response.json()?)
    }
}

#[derive(Deserialize)]
struct RoleDefinitionList {
    #[serde(default)]
    value: Vec<RoleDefinitionEntry>,
}

#[derive(Deserialize)]
struct RoleDefinitionEntry {
    id: String,
    properties: RoleDefinitionProperties,
}

#[derive(Deserialize)]
struct RoleDefinitionProperties {
    #[serde(rename = "roleName")]
    role_name: String,
}

impl RoleDefinitions for ArmClient {
    fn list_for_name(&self, scope: &str, role_name: &str) -> Result<Vec<RoleDefinition>> {
        let url = format!(
            "{}{}/providers/Microsoft.Authorization/roleDefinitions",
            self.endpoint, scope
        );
        tracing::debug!("GET {} (roleName eq '{}')", url, role_name);

        let filter = format!("roleName eq '{}'", role_name);
        let response = self
            .http
            .get(&url)
            .bearer_auth(self.token()?)
            .query(&[
                ("api-version", AUTHORIZATION_API_VERSION),
                ("$filter", filter.as_str()),
            ])
            .send()?;
        let response = Self::check(response)?;

        let list: RoleDefinitionList = response.json()?;
        Ok(list
            .value
            .into_iter()
            .map(|entry| RoleDefinition {
                id: entry.id,
                role_name: entry.properties.role_name,
            })
            .collect())
    }
}
