//! Typed record of parsed `create` arguments.
//!
//! Validators read and rewrite fields on this record in place; once every
//! validator has passed, [`CreateNamespace::to_request_body`] renders the
//! normalized container-group request.

use std::collections::BTreeMap;

use serde_json::{json, Value};

/// Sentinel identity value meaning "the system-assigned identity".
pub const MSI_LOCAL_ID: &str = "[system]";

/// Role assigned to the system identity when `--role` is not given.
pub const DEFAULT_IDENTITY_ROLE: &str = "Contributor";

/// IP address type for the container group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum IpAddressType {
    Public,
    Private,
}

impl IpAddressType {
    pub fn as_str(self) -> &'static str {
        match self {
            IpAddressType::Public => "Public",
            IpAddressType::Private => "Private",
        }
    }
}

/// Parsed `create` arguments, before and after validation.
///
/// `secret_map` and `identity_role_id` start empty and are filled in by the
/// validators; `vnet` absorbs the deprecated `vnet_name` and
/// `network_profile` is rewritten to its fully-qualified form.
#[derive(Debug, Default, Clone)]
pub struct CreateNamespace {
    pub image: Option<String>,
    pub command_line: Option<String>,
    /// Raw `key=value` tokens as given on the command line.
    pub secrets: Vec<String>,
    /// Validated secrets, values base64-encoded.
    pub secret_map: BTreeMap<String, String>,
    pub azure_file_volume_mount_path: Option<String>,
    pub gitrepo_dir: Option<String>,
    /// `Some(vec![])` means a bare `--assign-identity` (system identity).
    pub assign_identity: Option<Vec<String>>,
    pub identity_scope: Option<String>,
    /// `None` means the role was not explicitly requested.
    pub identity_role: Option<String>,
    /// Fully-qualified role-definition id, set during validation.
    pub identity_role_id: Option<String>,
    pub vnet: Option<String>,
    /// Deprecated alias for `vnet`.
    pub vnet_name: Option<String>,
    pub subnet: Option<String>,
    pub network_profile: Option<String>,
    pub ip_address: Option<IpAddressType>,
    pub dns_name_label: Option<String>,
    pub resource_group: String,
}

impl CreateNamespace {
    /// The role to resolve when a scope is given.
    pub fn effective_identity_role(&self) -> &str {
        self.identity_role.as_deref().unwrap_or(DEFAULT_IDENTITY_ROLE)
    }

    /// Render the container-group request body from the validated record.
    pub fn to_request_body(&self, name: &str, location: &str) -> Value {
        let mut container_props = json!({
            "image": self.image,
            "resources": { "requests": { "cpu": 1.0, "memoryInGB": 1.5 } },
        });
        if let Some(cmd) = &self.command_line {
            container_props["command"] =
                Value::from(cmd.split_whitespace().collect::<Vec<_>>());
        }

        let mut properties = json!({
            "osType": "Linux",
            "containers": [{ "name": name, "properties": container_props }],
        });

        if !self.secret_map.is_empty() {
            properties["volumes"] = json!([{
                "name": "secrets",
                "secret": self.secret_map,
            }]);
        }

        if self.ip_address.is_some() || self.dns_name_label.is_some() {
            let mut ip = json!({
                "type": self.ip_address.unwrap_or(IpAddressType::Public).as_str(),
                "ports": [{ "protocol": "TCP", "port": 80 }],
            });
            if let Some(label) = &self.dns_name_label {
                ip["dnsNameLabel"] = Value::from(label.as_str());
            }
            properties["ipAddress"] = ip;
        }

        if let Some(profile) = &self.network_profile {
            properties["networkProfile"] = json!({ "id": profile });
        }

        let mut body = json!({
            "location": location,
            "properties": properties,
        });

        if let Some(identities) = &self.assign_identity {
            body["identity"] = identity_section(identities);
        }

        body
    }
}

/// Build the `identity` section from the raw identity list.
fn identity_section(identities: &[String]) -> Value {
    let system = identities.is_empty() || identities.iter().any(|i| i == MSI_LOCAL_ID);
    let user_ids: Vec<&String> = identities.iter().filter(|i| *i != MSI_LOCAL_ID).collect();

    let kind = match (system, user_ids.is_empty()) {
        (true, true) => "SystemAssigned",
        (true, false) => "SystemAssigned, UserAssigned",
        (false, false) => "UserAssigned",
        (false, true) => "None",
    };

    let mut section = json!({ "type": kind });
    if !user_ids.is_empty() {
        let mut assigned = serde_json::Map::new();
        for id in user_ids {
            assigned.insert(id.clone(), json!({}));
        }
        section["userAssignedIdentities"] = Value::Object(assigned);
    }
    section
}
