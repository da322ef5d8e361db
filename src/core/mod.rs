//! Core library components.
//!
//! This module contains the reusable logic for validating container-group
//! arguments and talking to the management API.

pub mod arm;
pub mod namespace;
pub mod resource_id;
pub mod roles;
pub mod validators;
