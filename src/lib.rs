//! Gantry - deploy container groups from the command line.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── create        # Validate and submit a container group
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! ├── core/             # Core library components
//! │   ├── namespace     # Typed record of parsed create arguments
//! │   ├── validators    # Argument validation and normalization
//! │   ├── resource_id   # Fully-qualified resource id parsing/building
//! │   ├── roles         # Role-definition resolution
//! │   └── arm           # Blocking management-API client
//! ├── config            # .gantry.toml cloud context
//! └── error             # Error taxonomy
//! ```
//!
//! Validators are stateless functions over a
//! [`core::namespace::CreateNamespace`]; each one either passes, rewrites a
//! field into its normalized form, or fails with a user-facing error before
//! anything is sent to the management API.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
