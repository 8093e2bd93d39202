//! # Fungible balances
//!
//! Balance, allowance and supply bookkeeping shared by the credit ledger and
//! the liquidity share ledger. Callers perform authorization and emit events;
//! this module only validates amounts and keeps the books consistent:
//!
//! - `total_supply == Σ balances` after every call that returns `Ok`.
//! - No balance or allowance ever goes negative.
//!
//! | Key                       | Tier       | Type   |
//! |---------------------------|------------|--------|
//! | `TotalSupply`             | Instance   | `i128` |
//! | `Balance(id)`             | Persistent | `i128` |
//! | `Allowance(owner, spender)` | Persistent | `i128` |

use soroban_sdk::{contracttype, Address, Env};

use crate::ttl::{bump_instance, bump_persistent};
use crate::Error;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FungibleKey {
    TotalSupply,
    Balance(Address),
    Allowance(Address, Address),
}

/// Reject negative amounts. Zero is a valid no-op amount.
pub fn check_amount(amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

pub fn total_supply(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&FungibleKey::TotalSupply)
        .unwrap_or(0)
}

fn write_total_supply(env: &Env, supply: i128) {
    env.storage()
        .instance()
        .set(&FungibleKey::TotalSupply, &supply);
}

pub fn balance_of(env: &Env, id: &Address) -> i128 {
    let key = FungibleKey::Balance(id.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            bump_persistent(env, &key);
            balance
        }
        None => 0,
    }
}

fn write_balance(env: &Env, id: &Address, balance: i128) {
    let key = FungibleKey::Balance(id.clone());
    env.storage().persistent().set(&key, &balance);
    bump_persistent(env, &key);
}

fn credit(env: &Env, id: &Address, amount: i128) -> Result<(), Error> {
    let balance = balance_of(env, id)
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    write_balance(env, id, balance);
    Ok(())
}

fn debit(env: &Env, id: &Address, amount: i128) -> Result<(), Error> {
    let balance = balance_of(env, id);
    if balance < amount {
        return Err(Error::InsufficientBalance);
    }
    write_balance(env, id, balance - amount);
    Ok(())
}

/// Create `amount` new units owned by `to`.
pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    check_amount(amount)?;
    let supply = total_supply(env)
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    credit(env, to, amount)?;
    write_total_supply(env, supply);
    Ok(())
}

/// Destroy `amount` units held by `from`.
pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    check_amount(amount)?;
    debit(env, from, amount)?;
    write_total_supply(env, total_supply(env) - amount);
    Ok(())
}

/// Move `amount` from `from` to `to`. Supply is unchanged.
pub fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    check_amount(amount)?;
    debit(env, from, amount)?;
    credit(env, to, amount)
}

pub fn allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    let key = FungibleKey::Allowance(owner.clone(), spender.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(amount) => {
            bump_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

/// Overwrite the allowance `owner` grants to `spender`.
pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) -> Result<(), Error> {
    check_amount(amount)?;
    let key = FungibleKey::Allowance(owner.clone(), spender.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
    Ok(())
}

/// Consume `amount` of the allowance `owner` granted to `spender`.
pub fn spend_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) -> Result<(), Error> {
    check_amount(amount)?;
    let current = allowance(env, owner, spender);
    if current < amount {
        return Err(Error::InsufficientAllowance);
    }
    set_allowance(env, owner, spender, current - amount)
}
