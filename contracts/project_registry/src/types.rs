//! # Types
//!
//! ## Config / State split
//!
//! A `Project` is stored as two separate ledger entries:
//!
//! - [`ProjectConfig`]: written once by `create`; never mutated.
//! - [`ProjectState`]: written on every `list` / `unlist`.
//!
//! The public API returns the reconstructed [`Project`].
//!
//! ## Lifecycle
//!
//! ```text
//! create ──► Unlisted ◄──► Listed
//! ```
//!
//! Only the project owner may toggle between the two states. There is no
//! terminal state and no other transition.

use soroban_sdk::{contracttype, Address, String};

/// Listing status of a project.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProjectStatus {
    /// Registered but not offered to the market. Every project starts here.
    Unlisted,
    /// Offered to the market.
    Listed,
}

/// Immutable project configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectConfig {
    pub id: u64,
    pub owner: Address,
    pub name: String,
    pub description: String,
    pub estimated_credits: i128,
    pub created_at: u64,
}

/// Mutable project state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectState {
    pub status: ProjectStatus,
}

/// Full representation of a registered project.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    /// Unique identifier, assigned from 1 upward and never reused.
    pub id: u64,
    /// Address that paid the creation fee; the only one allowed to list/unlist.
    pub owner: Address,
    pub name: String,
    pub description: String,
    /// Estimated credits (tonnes of CO2 reduction) declared by the owner.
    pub estimated_credits: i128,
    /// Ledger timestamp of creation.
    pub created_at: u64,
    pub status: ProjectStatus,
}
