//! # Events
//!
//! | Topic                   | Data               |
//! |-------------------------|--------------------|
//! | `("created", id)`       | [`ProjectCreated`] |
//! | `("listed", id)`        | [`ProjectListed`]  |
//! | `("unlisted", id)`      | [`ProjectUnlisted`]|
//! | `("fees_out",)`         | [`FeesCollected`]  |

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectCreated {
    pub project_id: u64,
    pub owner: Address,
    pub name: String,
    pub estimated_credits: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectListed {
    pub project_id: u64,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectUnlisted {
    pub project_id: u64,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesCollected {
    pub to: Address,
    pub amount: i128,
}

pub fn emit_project_created(
    env: &Env,
    project_id: u64,
    owner: Address,
    name: String,
    estimated_credits: i128,
) {
    env.events().publish(
        (symbol_short!("created"), project_id),
        ProjectCreated {
            project_id,
            owner,
            name,
            estimated_credits,
        },
    );
}

pub fn emit_project_listed(env: &Env, project_id: u64, owner: Address) {
    env.events().publish(
        (symbol_short!("listed"), project_id),
        ProjectListed { project_id, owner },
    );
}

pub fn emit_project_unlisted(env: &Env, project_id: u64, owner: Address) {
    env.events().publish(
        (symbol_short!("unlisted"), project_id),
        ProjectUnlisted { project_id, owner },
    );
}

pub fn emit_fees_collected(env: &Env, to: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("fees_out"),), FeesCollected { to, amount });
}
