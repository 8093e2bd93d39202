//! # Storage
//!
//! Everything the pool tracks is a single scalar, so all of it lives in
//! instance storage and shares the instance TTL.
//!
//! | Key              | Type      | Description                                  |
//! |------------------|-----------|----------------------------------------------|
//! | `Owner`          | `Address` | Binds the share ledger, drains credits       |
//! | `CreditLedger`   | `Address` | Credit ledger contract                       |
//! | `ValueToken`     | `Address` | Token the pool prices credits in             |
//! | `FeeBps`         | `u32`     | Trading fee in basis points                  |
//! | `ShareLedger`    | `Address` | Bound once, absent until then                |
//! | `TotalValueHeld` | `i128`    | Value attributable to liquidity providers    |
//! | `TotalFees`      | `i128`    | Fees accrued inside `TotalValueHeld`         |
//! | `Locked`         | `bool`    | Set for the duration of a mutating call      |

use carbon_common::ttl::bump_instance;
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    CreditLedger,
    ValueToken,
    FeeBps,
    ShareLedger,
    TotalValueHeld,
    TotalFees,
    Locked,
}

pub fn init_config(
    env: &Env,
    owner: &Address,
    credit_ledger: &Address,
    value_token: &Address,
    fee_bps: u32,
) {
    let store = env.storage().instance();
    store.set(&DataKey::Owner, owner);
    store.set(&DataKey::CreditLedger, credit_ledger);
    store.set(&DataKey::ValueToken, value_token);
    store.set(&DataKey::FeeBps, &fee_bps);
    store.set(&DataKey::TotalValueHeld, &0i128);
    store.set(&DataKey::TotalFees, &0i128);
    bump_instance(env);
}

pub fn get_owner(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .expect("owner not set")
}

pub fn get_credit_ledger(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::CreditLedger)
        .expect("credit ledger not set")
}

pub fn get_value_token(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::ValueToken)
        .expect("value token not set")
}

pub fn get_fee_bps(env: &Env) -> u32 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::FeeBps)
        .expect("fee not set")
}

pub fn get_share_ledger(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::ShareLedger)
}

pub fn set_share_ledger(env: &Env, share_ledger: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::ShareLedger, share_ledger);
}

pub fn get_total_value_held(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::TotalValueHeld)
        .unwrap_or(0)
}

pub fn get_total_fees(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::TotalFees)
        .unwrap_or(0)
}

/// Write both accounting figures together so they never drift apart.
pub fn set_totals(env: &Env, total_value_held: i128, total_fees: i128) {
    let store = env.storage().instance();
    store.set(&DataKey::TotalValueHeld, &total_value_held);
    store.set(&DataKey::TotalFees, &total_fees);
    bump_instance(env);
}

pub fn is_locked(env: &Env) -> bool {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

pub fn set_locked(env: &Env, locked: bool) {
    env.storage().instance().set(&DataKey::Locked, &locked);
}
