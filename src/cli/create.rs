//! Create command.
//!
//! Builds the namespace record from the parsed arguments, runs every
//! validator, then either prints the normalized request (`--dry-run`) or
//! submits it to the management API.

use crate::cli::{output, CreateArgs};
use crate::config::CloudContext;
use crate::core::arm::ArmClient;
use crate::core::namespace::CreateNamespace;
use crate::core::validators;
use crate::error::Result;

/// Validate the arguments and create the container group.
pub fn execute(args: CreateArgs) -> Result<()> {
    let ctx = CloudContext::resolve(args.subscription.clone())?;
    let arm = ArmClient::new(&ctx);
    let mut ns = namespace_from(&args);

    validators::validate_volume_mount_path(&ns)?;
    validators::validate_secrets(&mut ns)?;
    validators::validate_gitrepo_directory(&ns)?;
    validators::validate_image(&ns);
    validators::validate_msi(&ctx, &arm, &mut ns)?;
    validators::validate_subnet(&mut ns)?;
    validators::validate_network_profile(&ctx, &mut ns)?;

    let body = ns.to_request_body(&args.name, &args.location);

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&body)?);
        output::success("validation passed (dry run, nothing created)");
        return Ok(());
    }

    arm.create_container_group(ctx.subscription()?, &ns.resource_group, &args.name, &body)?;

    output::success(&format!("created container group {}", args.name));
    if let Some(image) = &ns.image {
        output::kv("image:", image);
    }
    output::kv("resource group:", &ns.resource_group);
    if let Some(role_id) = &ns.identity_role_id {
        // The logical role name reads better than the id.
        output::kv("identity role:", ns.effective_identity_role());
        tracing::debug!("assigned role definition {}", role_id);
    }
    Ok(())
}

fn namespace_from(args: &CreateArgs) -> CreateNamespace {
    CreateNamespace {
        image: args.image.clone(),
        command_line: args.command_line.clone(),
        secrets: args.secrets.clone(),
        azure_file_volume_mount_path: args.azure_file_volume_mount_path.clone(),
        gitrepo_dir: args.gitrepo_dir.clone(),
        assign_identity: args.assign_identity.clone(),
        identity_scope: args.identity_scope.clone(),
        identity_role: args.identity_role.clone(),
        vnet: args.vnet.clone(),
        vnet_name: args.vnet_name.clone(),
        subnet: args.subnet.clone(),
        network_profile: args.network_profile.clone(),
        ip_address: args.ip_address,
        dns_name_label: args.dns_name_label.clone(),
        resource_group: args.resource_group.clone(),
        ..Default::default()
    }
}
