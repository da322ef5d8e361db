//! Command-line interface.

pub mod completions;
pub mod create;
pub mod output;

use clap::{Args, Parser, Subcommand};

use crate::core::namespace::IpAddressType;

/// Gantry - deploy container groups from the command line.
#[derive(Parser)]
#[command(
    name = "gantry",
    about = "Deploy container groups from the command line",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a container group
    Create(CreateArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `gantry create`.
#[derive(Args)]
pub struct CreateArgs {
    /// Name of the container group
    #[arg(short, long)]
    pub name: String,

    /// Target resource group
    #[arg(short = 'g', long)]
    pub resource_group: String,

    /// Region to deploy into
    #[arg(short, long, default_value = "eastus")]
    pub location: String,

    /// Container image (e.g., nginx:latest)
    #[arg(long)]
    pub image: Option<String>,

    /// Command line to run when the container starts
    #[arg(long)]
    pub command_line: Option<String>,

    /// Secrets in key=value format (values are stored base64-encoded)
    #[arg(long, num_args = 1..)]
    pub secrets: Vec<String>,

    /// Mount path for the Azure file volume
    #[arg(long)]
    pub azure_file_volume_mount_path: Option<String>,

    /// Target directory in the git repository volume
    #[arg(long)]
    pub gitrepo_dir: Option<String>,

    /// Assign managed identities; a bare flag assigns the system identity
    #[arg(long, num_args = 0..)]
    pub assign_identity: Option<Vec<String>>,

    /// Scope the system identity's role assignment applies to
    #[arg(long = "scope")]
    pub identity_scope: Option<String>,

    /// Role name, UUID, or id to assign to the system identity
    #[arg(long = "role")]
    pub identity_role: Option<String>,

    /// Virtual network name or id
    #[arg(long)]
    pub vnet: Option<String>,

    /// Deprecated alias for --vnet
    #[arg(long, hide = true)]
    pub vnet_name: Option<String>,

    /// Subnet name or id
    #[arg(long)]
    pub subnet: Option<String>,

    /// Network profile name or id
    #[arg(long)]
    pub network_profile: Option<String>,

    /// IP address type
    #[arg(long, value_enum)]
    pub ip_address: Option<IpAddressType>,

    /// DNS name label for the public IP
    #[arg(long)]
    pub dns_name_label: Option<String>,

    /// Subscription id override
    #[arg(long)]
    pub subscription: Option<String>,

    /// Validate and print the request without creating anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    match command {
        Command::Create(args) => create::execute(args),
        Command::Completions { shell } => completions::execute(shell),
    }
}
