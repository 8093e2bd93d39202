//! # Carbon Credit Ledger Contract
//!
//! Fungible carbon credits (`CCT`, 18 decimals). Credits come into existence
//! only through the auditor, only for addresses holding a verification
//! certificate, and leave circulation only through retirement.
//!
//! | Phase       | Entry Point(s)                                              |
//! |-------------|-------------------------------------------------------------|
//! | Bootstrap   | `__constructor(auditor, verification)`                      |
//! | Issuance    | [`CreditLedger::issue`], [`CreditLedger::set_reduction_method`] |
//! | Retirement  | [`CreditLedger::retire`]                                    |
//! | Transfers   | `transfer`, `approve`, `transfer_from`                      |
//! | Queries     | `balance`, `total_supply`, `allowance`, `entitlement`, `reduction_method` |
//!
//! Retirement is a burn. There is no operation that reverses it.

#![no_std]

use carbon_common::fungible;
use carbon_common::interfaces::VerificationClient;
use carbon_common::{Error, DECIMALS};
use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod events;
mod storage;
mod types;

#[cfg(test)]
mod test_events;

pub use events::{CreditApproval, CreditTransfer, CreditsIssued, CreditsRetired, ReductionMethodSet};
pub use types::CreditEntitlement;

const NAME: &str = "CarbonCredit";
const SYMBOL: &str = "CCT";

#[contract]
pub struct CreditLedger;

#[contractimpl]
impl CreditLedger {
    /// `verification` is the certificate registry consulted on every issuance.
    pub fn __constructor(env: Env, auditor: Address, verification: Address) {
        storage::init_config(&env, &auditor, &verification);
    }

    // ─────────────────────────────────────────────────────────
    // Issuance
    // ─────────────────────────────────────────────────────────

    /// Mint `amount` credits to `owner`. Auditor only.
    ///
    /// `owner` must hold at least one verification certificate and `expiry`
    /// must lie strictly in the future. The entitlement snapshot is replaced
    /// by `{amount, expiry}`.
    pub fn issue(
        env: Env,
        caller: Address,
        owner: Address,
        amount: i128,
        expiry: u64,
    ) -> Result<(), Error> {
        Self::require_auditor(&env, &caller)?;
        if owner == env.current_contract_address() {
            return Err(Error::InvalidOwner);
        }
        fungible::check_amount(amount)?;

        let verification = VerificationClient::new(&env, &storage::get_verification(&env));
        if verification.balance(&owner) == 0 {
            return Err(Error::NoCertificate);
        }
        if expiry <= env.ledger().timestamp() {
            return Err(Error::ExpiryInPast);
        }

        fungible::mint(&env, &owner, amount)?;
        storage::save_entitlement(&env, &owner, &CreditEntitlement { amount, expiry });

        events::emit_credits_issued(&env, owner, amount, expiry);
        Ok(())
    }

    /// Record the reduction method behind `owner`'s credits. Auditor only.
    pub fn set_reduction_method(
        env: Env,
        caller: Address,
        owner: Address,
        method: String,
    ) -> Result<(), Error> {
        Self::require_auditor(&env, &caller)?;
        if method.is_empty() {
            return Err(Error::EmptyMethod);
        }

        storage::save_method(&env, &owner, &method);
        events::emit_reduction_method_set(&env, owner, method);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Retirement
    // ─────────────────────────────────────────────────────────

    /// Permanently burn `amount` of `holder`'s credits.
    pub fn retire(env: Env, holder: Address, amount: i128) -> Result<(), Error> {
        holder.require_auth();
        fungible::burn(&env, &holder, amount)?;
        events::emit_credits_retired(&env, holder, amount);
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

    /// Set (overwrite) the amount `spender` may move out of `owner`'s balance.
    pub fn approve(env: Env, owner: Address, spender: Address, amount: i128) -> Result<(), Error> {
        owner.require_auth();
        fungible::set_allowance(&env, &owner, &spender, amount)?;
        events::emit_approval(&env, owner, spender, amount);
        Ok(())
    }

    /// Move `amount` from `from` to `to` on behalf of `spender`, consuming allowance.
    ///
    /// The allowance is checked before the balance.
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

    /// Latest issuance to `owner`, if any.
    pub fn entitlement(env: Env, owner: Address) -> Option<CreditEntitlement> {
        storage::load_entitlement(&env, &owner)
    }

    pub fn reduction_method(env: Env, owner: Address) -> Option<String> {
        storage::load_method(&env, &owner)
    }

    pub fn auditor(env: Env) -> Address {
        storage::get_auditor(&env)
    }

    pub fn verification(env: Env) -> Address {
        storage::get_verification(&env)
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

impl CreditLedger {
    fn require_auditor(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        if *caller != storage::get_auditor(env) {
            return Err(Error::NotAuditor);
        }
        Ok(())
    }
}
