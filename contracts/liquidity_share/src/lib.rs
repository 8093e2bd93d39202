//! # Liquidity Share Ledger Contract
//!
//! Fungible `LPT` shares representing a provider's claim on the exchange
//! pool's value. Only the pool bound at construction may mint or burn.
//!
//! | Phase     | Entry Point(s)                                   |
//! |-----------|--------------------------------------------------|
//! | Bootstrap | `__constructor(pool)`                            |
//! | Pool only | [`ShareLedger::mint`], [`ShareLedger::burn_from`] |
//! | Transfers | `transfer`, `approve`, `transfer_from`           |
//! | Queries   | `balance`, `total_supply`, `allowance`, `pool`   |

#![no_std]

use carbon_common::fungible;
use carbon_common::{Error, DECIMALS};
use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod events;
mod storage;


pub use events::{ShareApproval, ShareTransfer, SharesBurned, SharesMinted};

const NAME: &str = "Liquidity Provider Token";
const SYMBOL: &str = "LPT";

#[contract]
pub struct ShareLedger;

#[contractimpl]
impl ShareLedger {
    pub fn __constructor(env: Env, pool: Address) {
        storage::set_pool(&env, &pool);
    }

    // ─────────────────────────────────────────────────────────
    // Pool only
    // ─────────────────────────────────────────────────────────

    pub fn mint(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), Error> {
        Self::require_pool(&env, &caller)?;
        if to == env.current_contract_address() {
            return Err(Error::InvalidOwner);
        }
        fungible::mint(&env, &to, amount)?;
        events::emit_minted(&env, to, amount);
        Ok(())
    }

    /// Burn `amount` of `from`'s shares. The pool needs no allowance.
    pub fn burn_from(env: Env, caller: Address, from: Address, amount: i128) -> Result<(), Error> {
        Self::require_pool(&env, &caller)?;
        if from == env.current_contract_address() {
            return Err(Error::InvalidOwner);
        }
        fungible::burn(&env, &from, amount)?;
        events::emit_burned(&env, from, amount);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Transfers
    // ─────────────────────────────────────────────────────────

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        if to == env.current_contract_address() {
            return Err(Error::InvalidOwner);
        }
        fungible::move_balance(&env, &from, &to, amount)?;
        events::emit_transfer(&env, from, to, amount);
        Ok(())
    }

    pub fn approve(env: Env, owner: Address, spender: Address, amount: i128) -> Result<(), Error> {
        owner.require_auth();
        fungible::set_allowance(&env, &owner, &spender, amount)?;
        events::emit_approval(&env, owner, spender, amount);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();
        if to == env.current_contract_address() {
            return Err(Error::InvalidOwner);
        }
        fungible::spend_allowance(&env, &from, &spender, amount)?;
        fungible::move_balance(&env, &from, &to, amount)?;
        events::emit_transfer(&env, from, to, amount);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn balance(env: Env, id: Address) -> i128 {
        fungible::balance_of(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        fungible::total_supply(&env)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        fungible::allowance(&env, &owner, &spender)
    }

    pub fn pool(env: Env) -> Address {
        storage::get_pool(&env)
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }
}

impl ShareLedger {
    fn require_pool(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        if *caller != storage::get_pool(env) {
            return Err(Error::NotPool);
        }
        Ok(())
    }
}
