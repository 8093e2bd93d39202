//! # Storage
//!
//! ## Instance storage
//!
//! | Key             | Type      | Description                              |
//! |-----------------|-----------|------------------------------------------|
//! | `Admin`         | `Address` | May collect creation fees                |
//! | `FeeToken`      | `Address` | Token the creation fee is paid in        |
//! | `MinFee`        | `i128`    | Minimum creation fee                     |
//! | `ProjectCount`  | `u64`     | Next project id to assign                |
//! | `CollectedFees` | `i128`    | Creation fees held and not yet collected |
//!
//! ## Persistent storage
//!
//! | Key              | Type            | Description                     |
//! |------------------|-----------------|---------------------------------|
//! | `ProjConfig(id)` | `ProjectConfig` | Immutable project configuration |
//! | `ProjState(id)`  | `ProjectState`  | Mutable listing status          |

use carbon_common::ttl::{bump_instance, bump_persistent};
use carbon_common::Error;
use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Project, ProjectConfig, ProjectState};

/// Project ids start at 1.
const FIRST_PROJECT_ID: u64 = 1;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    FeeToken,
    MinFee,
    ProjectCount,
    CollectedFees,
    ProjConfig(u64),
    ProjState(u64),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

pub fn init_config(env: &Env, admin: &Address, fee_token: &Address, min_fee: i128) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Admin, admin);
    instance.set(&DataKey::FeeToken, fee_token);
    instance.set(&DataKey::MinFee, &min_fee);
    instance.set(&DataKey::ProjectCount, &FIRST_PROJECT_ID);
    instance.set(&DataKey::CollectedFees, &0i128);
    bump_instance(env);
}

pub fn get_admin(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("admin not set")
}

pub fn get_fee_token(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::FeeToken)
        .expect("fee token not set")
}

pub fn get_min_fee(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::MinFee)
        .unwrap_or(0)
}

/// Id the next `create` will assign.
pub fn peek_project_id(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::ProjectCount)
        .unwrap_or(FIRST_PROJECT_ID)
}

/// Reads, increments and stores the project counter.
/// Returns the id to use for the *current* project (pre-increment value).
pub fn get_and_increment_project_id(env: &Env) -> Result<u64, Error> {
    let current = peek_project_id(env);
    let next = current.checked_add(1).ok_or(Error::ArithmeticOverflow)?;
    env.storage()
        .instance()
        .set(&DataKey::ProjectCount, &next);
    Ok(current)
}

pub fn get_collected_fees(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::CollectedFees)
        .unwrap_or(0)
}

pub fn add_collected_fees(env: &Env, amount: i128) -> Result<(), Error> {
    let total = get_collected_fees(env)
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    env.storage()
        .instance()
        .set(&DataKey::CollectedFees, &total);
    Ok(())
}

/// Zero the collected-fee counter and return what it held.
pub fn take_collected_fees(env: &Env) -> i128 {
    let total = get_collected_fees(env);
    env.storage()
        .instance()
        .set(&DataKey::CollectedFees, &0i128);
    total
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Save both the immutable config and initial mutable state for a new project.
pub fn save_project(env: &Env, project: &Project) {
    let config_key = DataKey::ProjConfig(project.id);
    let state_key = DataKey::ProjState(project.id);

    let config = ProjectConfig {
        id: project.id,
        owner: project.owner.clone(),
        name: project.name.clone(),
        description: project.description.clone(),
        estimated_credits: project.estimated_credits,
        created_at: project.created_at,
    };

    let state = ProjectState {
        status: project.status,
    };

    env.storage().persistent().set(&config_key, &config);
    env.storage().persistent().set(&state_key, &state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

/// Load the full `Project` by combining config and state.
pub fn load_project(env: &Env, id: u64) -> Option<Project> {
    let config = load_project_config(env, id)?;
    let state = load_project_state(env, id)?;
    Some(Project {
        id: config.id,
        owner: config.owner,
        name: config.name,
        description: config.description,
        estimated_credits: config.estimated_credits,
        created_at: config.created_at,
        status: state.status,
    })
}

pub fn load_project_config(env: &Env, id: u64) -> Option<ProjectConfig> {
    let key = DataKey::ProjConfig(id);
    let config: ProjectConfig = env.storage().persistent().get(&key)?;
    bump_persistent(env, &key);
    Some(config)
}

pub fn load_project_state(env: &Env, id: u64) -> Option<ProjectState> {
    let key = DataKey::ProjState(id);
    let state: ProjectState = env.storage().persistent().get(&key)?;
    bump_persistent(env, &key);
    Some(state)
}

/// Save only the mutable project state.
pub fn save_project_state(env: &Env, id: u64, state: &ProjectState) {
    let key = DataKey::ProjState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}
