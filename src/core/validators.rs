//! Argument validation and normalization for `create`.
//!
//! Each validator is a stateless, single-pass function over a
//! [`CreateNamespace`]: it passes, rewrites a field into its normalized
//! form, or fails with a user-facing error. Running a validator twice on
//! the same record is a no-op.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::config::CloudContext;
use crate::core::namespace::{CreateNamespace, MSI_LOCAL_ID};
use crate::core::resource_id::{is_valid_resource_id, resource_id};
use crate::core::roles::{resolve_role_id, RoleDefinitions};
use crate::error::{GantryError, Result};

/// Base images with no long-running entrypoint.
const SHORT_RUNNING_IMAGES: [&str; 8] = [
    "alpine", "busybox", "ubuntu", "node", "golang", "centos", "python", "php",
];

/// The Azure file volume mount path cannot contain a drive separator.
pub fn validate_volume_mount_path(ns: &CreateNamespace) -> Result<()> {
    if let Some(path) = &ns.azure_file_volume_mount_path {
        if path.contains(':') {
            return Err(GantryError::InvalidArgument(
                "the volume mount path cannot contain ':'".to_string(),
            ));
        }
    }
    Ok(())
}

/// Parse every `key=value` token into the secret map, base64-encoding the
/// values. Duplicate keys are last-write-wins.
pub fn validate_secrets(ns: &mut CreateNamespace) -> Result<()> {
    for token in &ns.secrets {
        if let Some((key, encoded)) = parse_secret(token)? {
            ns.secret_map.insert(key, encoded);
        }
    }
    Ok(())
}

/// Parse a single `key=value` secret token.
///
/// Splits on the first `=` and base64-encodes the value. An empty token
/// yields nothing; a token without `=` is an error.
pub fn parse_secret(token: &str) -> Result<Option<(String, String)>> {
    if token.is_empty() {
        return Ok(None);
    }
    match token.split_once('=') {
        Some((key, value)) => Ok(Some((key.to_string(), STANDARD.encode(value)))),
        None => Err(GantryError::InvalidArgument(
            "secrets must be specified in key=value format".to_string(),
        )),
    }
}

/// Path-traversal guard for the git repository volume directory.
pub fn validate_gitrepo_directory(ns: &CreateNamespace) -> Result<()> {
    if let Some(dir) = &ns.gitrepo_dir {
        if dir.contains("..") {
            return Err(GantryError::InvalidArgument(
                "the git repo directory cannot contain '..'".to_string(),
            ));
        }
    }
    Ok(())
}

/// Warn when the image has no long-running process and no command line was
/// given; the group would exit as soon as it starts. Never fails.
pub fn validate_image(ns: &CreateNamespace) {
    if let Some(image) = &ns.image {
        if is_short_running_image(image) && ns.command_line.is_none() {
            tracing::warn!(
                "image \"{}\" has no long-running process; pass --command-line to keep \
                 the container group running, e.g. \"tail -f /dev/null\"",
                image
            );
        }
    }
}

/// Whether the image, stripped of any tag, is a known short-running base.
pub fn is_short_running_image(image: &str) -> bool {
    let base = image.split(':').next().unwrap_or(image);
    SHORT_RUNNING_IMAGES.contains(&base)
}

/// Validate managed-identity arguments and resolve the role to assign.
///
/// `--scope` and `--role` only make sense together with the system identity;
/// when a scope is given, the effective role is resolved to its
/// fully-qualified id and stored in `identity_role_id`. The logical role
/// name is kept on the record since it reads better in output.
pub fn validate_msi(
    ctx: &CloudContext,
    roles: &dyn RoleDefinitions,
    ns: &mut CreateNamespace,
) -> Result<()> {
    match &ns.assign_identity {
        Some(identities) => {
            if ns.identity_scope.is_none() {
                if let Some(role) = &ns.identity_role {
                    return Err(GantryError::Usage(format!(
                        "'--role {}' is not applicable as the '--scope' is not provided",
                        role
                    )));
                }
                return Ok(());
            }

            if !identities.is_empty() && !identities.iter().any(|i| i == MSI_LOCAL_ID) {
                return Err(GantryError::Usage(
                    "'--scope'/'--role' is only applicable when assigning the system identity"
                        .to_string(),
                ));
            }

            let scope = ns.identity_scope.clone().unwrap_or_default();
            let role = ns.effective_identity_role().to_string();
            ns.identity_role_id = Some(resolve_role_id(roles, ctx, &role, &scope)?);
            Ok(())
        }
        None => {
            if ns.identity_scope.is_some() || ns.identity_role.is_some() {
                return Err(GantryError::Usage(
                    "--assign-identity [--scope SCOPE] [--role ROLE]".to_string(),
                ));
            }
            Ok(())
        }
    }
}

/// Validate the vnet/subnet pairing.
///
/// `--vnet-name` is deprecated and copied into `--vnet` for compatibility.
/// Unless the subnet is already a fully-qualified id, vnet and subnet must
/// be given together.
pub fn validate_subnet(ns: &mut CreateNamespace) -> Result<()> {
    if ns.vnet.is_none() {
        if let Some(name) = ns.vnet_name.take() {
            ns.vnet = Some(name);
        }
    }

    let subnet_is_id = ns
        .subnet
        .as_deref()
        .is_some_and(is_valid_resource_id);
    if !subnet_is_id && (ns.vnet.is_some() != ns.subnet.is_some()) {
        return Err(GantryError::Usage(
            "--vnet NAME --subnet NAME | --vnet ID --subnet NAME | --subnet ID".to_string(),
        ));
    }
    Ok(())
}

/// Validate the network profile and qualify a short name into a full id.
///
/// A network profile supplies the group's network, so it excludes a public
/// IP address and a DNS name label.
pub fn validate_network_profile(ctx: &CloudContext, ns: &mut CreateNamespace) -> Result<()> {
    use crate::core::namespace::IpAddressType;

    let Some(profile) = ns.network_profile.clone() else {
        return Ok(());
    };

    if ns.ip_address == Some(IpAddressType::Public) {
        return Err(GantryError::Usage(
            "cannot use \"--network-profile\" with IP address type \"Public\"".to_string(),
        ));
    }
    if ns.dns_name_label.is_some() {
        return Err(GantryError::Usage(
            "cannot use \"--network-profile\" with \"--dns-name-label\"".to_string(),
        ));
    }

    if !is_valid_resource_id(&profile) {
        ns.network_profile = Some(resource_id(
            ctx.subscription()?,
            &ns.resource_group,
            "Microsoft.Network",
            "networkProfiles",
            &profile,
        ));
    }
    Ok(())
}
