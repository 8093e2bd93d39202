//! # Project Registry Contract
//!
//! Records carbon reduction projects and their market listing status.
//!
//! | Phase        | Entry Point(s)                                   |
//! |--------------|--------------------------------------------------|
//! | Bootstrap    | `__constructor(admin, fee_token, min_fee)`       |
//! | Registration | [`ProjectRegistry::create`]                      |
//! | Lifecycle    | [`ProjectRegistry::list`], [`ProjectRegistry::unlist`] |
//! | Fees         | [`ProjectRegistry::collect_fees`]                |
//! | Queries      | `get_project`, `is_listed`, `is_unlisted`, `current_id`, `min_fee`, `collected_fees` |
//!
//! Creating a project costs at least `min_fee` of `fee_token`, paid by the
//! owner into this contract. Fees accumulate until the admin collects them.

#![no_std]

use carbon_common::Error;
use soroban_sdk::{contract, contractimpl, panic_with_error, token, Address, Env, String};

mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test;
#[cfg(test)]
mod test_events;

pub use events::{FeesCollected, ProjectCreated, ProjectListed, ProjectUnlisted};
pub use types::{Project, ProjectStatus};

use storage::{load_project, load_project_config, load_project_state, save_project_state};
use types::ProjectState;

#[contract]
pub struct ProjectRegistry;

#[contractimpl]
impl ProjectRegistry {
    /// `min_fee` is denominated in `fee_token` base units and must be non-negative.
    pub fn __constructor(env: Env, admin: Address, fee_token: Address, min_fee: i128) {
        if min_fee < 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        storage::init_config(&env, &admin, &fee_token, min_fee);
    }

    // ─────────────────────────────────────────────────────────
    // Registration
    // ─────────────────────────────────────────────────────────

    /// Register a new project owned by `owner`.
    ///
    /// `paid_fee` is pulled from `owner` in the fee token and must be at least
    /// the configured minimum. The project starts `Unlisted`.
    pub fn create(
        env: Env,
        owner: Address,
        name: String,
        description: String,
        estimated_credits: i128,
        paid_fee: i128,
    ) -> Result<u64, Error> {
        owner.require_auth();

        if estimated_credits < 0 {
            return Err(Error::InvalidAmount);
        }
        if paid_fee < storage::get_min_fee(&env) {
            return Err(Error::InsufficientFee);
        }

        if paid_fee > 0 {
            let fee_token = token::Client::new(&env, &storage::get_fee_token(&env));
            match fee_token.try_transfer(&owner, &env.current_contract_address(), &paid_fee) {
                Ok(Ok(())) => {}
                _ => return Err(Error::TransferFailed),
            }
            storage::add_collected_fees(&env, paid_fee)?;
        }

        let id = storage::get_and_increment_project_id(&env)?;
        let project = Project {
            id,
            owner: owner.clone(),
            name: name.clone(),
            description,
            estimated_credits,
            created_at: env.ledger().timestamp(),
            status: ProjectStatus::Unlisted,
        };
        storage::save_project(&env, &project);

        events::emit_project_created(&env, id, owner, name, estimated_credits);
        Ok(id)
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    /// Offer project `id` to the market. Only the owner may list.
    pub fn list(env: Env, caller: Address, id: u64) -> Result<(), Error> {
        caller.require_auth();
        let owner = Self::require_owner(&env, &caller, id)?;

        let mut state = load_project_state(&env, id).ok_or(Error::ProjectNotFound)?;
        if state.status == ProjectStatus::Listed {
            return Err(Error::AlreadyListed);
        }
        state.status = ProjectStatus::Listed;
        save_project_state(&env, id, &state);

        events::emit_project_listed(&env, id, owner);
        Ok(())
    }

    /// Withdraw project `id` from the market. Only the owner may unlist.
    pub fn unlist(env: Env, caller: Address, id: u64) -> Result<(), Error> {
        caller.require_auth();
        let owner = Self::require_owner(&env, &caller, id)?;

        let state = load_project_state(&env, id).ok_or(Error::ProjectNotFound)?;
        if state.status != ProjectStatus::Listed {
            return Err(Error::NotListed);
        }
        save_project_state(
            &env,
            id,
            &ProjectState {
                status: ProjectStatus::Unlisted,
            },
        );

        events::emit_project_unlisted(&env, id, owner);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Fees
    // ─────────────────────────────────────────────────────────

    /// Push every creation fee collected so far to `to`. Admin only.
    pub fn collect_fees(env: Env, caller: Address, to: Address) -> Result<i128, Error> {
        caller.require_auth();
        if caller != storage::get_admin(&env) {
            return Err(Error::NotAdmin);
        }

        let amount = storage::take_collected_fees(&env);
        if amount > 0 {
            let fee_token = token::Client::new(&env, &storage::get_fee_token(&env));
            match fee_token.try_transfer(&env.current_contract_address(), &to, &amount) {
                Ok(Ok(())) => {}
                _ => return Err(Error::TransferFailed),
            }
        }

        events::emit_fees_collected(&env, to, amount);
        Ok(amount)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn get_project(env: Env, id: u64) -> Result<Project, Error> {
        load_project(&env, id).ok_or(Error::ProjectNotFound)
    }

    pub fn is_listed(env: Env, id: u64) -> bool {
        matches!(
            load_project_state(&env, id),
            Some(ProjectState {
                status: ProjectStatus::Listed
            })
        )
    }

    /// `false` for ids that were never assigned.
    pub fn is_unlisted(env: Env, id: u64) -> bool {
        matches!(
            load_project_state(&env, id),
            Some(ProjectState {
                status: ProjectStatus::Unlisted
            })
        )
    }

    /// The id the next `create` will assign.
    pub fn current_id(env: Env) -> u64 {
        storage::peek_project_id(&env)
    }

    pub fn min_fee(env: Env) -> i128 {
        storage::get_min_fee(&env)
    }

    pub fn fee_token(env: Env) -> Address {
        storage::get_fee_token(&env)
    }

    pub fn collected_fees(env: Env) -> i128 {
        storage::get_collected_fees(&env)
    }

    pub fn admin(env: Env) -> Address {
        storage::get_admin(&env)
    }
}

impl ProjectRegistry {
    /// Returns the project owner if `caller` is it.
    fn require_owner(env: &Env, caller: &Address, id: u64) -> Result<Address, Error> {
        let config = load_project_config(env, id).ok_or(Error::ProjectNotFound)?;
        if *caller != config.owner {
            return Err(Error::NotOwner);
        }
        Ok(config.owner)
    }
}
