//! # Storage
//!
//! Balances, allowances and total supply live under
//! [`carbon_common::fungible::FungibleKey`]. This module holds the rest.
//!
//! | Key                | Tier       | Type                | Description                 |
//! |--------------------|------------|---------------------|-----------------------------|
//! | `Auditor`          | Instance   | `Address`           | Only issuer / annotator     |
//! | `Verification`     | Instance   | `Address`           | Certificate registry        |
//! | `Entitlement(id)`  | Persistent | `CreditEntitlement` | Latest issuance snapshot    |
//! | `Method(id)`       | Persistent | `String`            | Reduction method annotation |

use carbon_common::ttl::{bump_instance, bump_persistent};
use soroban_sdk::{contracttype, Address, Env, String};

use crate::types::CreditEntitlement;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Auditor,
    Verification,
    Entitlement(Address),
    Method(Address),
}

pub fn init_config(env: &Env, auditor: &Address, verification: &Address) {
    env.storage().instance().set(&DataKey::Auditor, auditor);
    env.storage()
        .instance()
        .set(&DataKey::Verification, verification);
    bump_instance(env);
}

pub fn get_auditor(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Auditor)
        .expect("auditor not set")
}

pub fn get_verification(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Verification)
        .expect("verification registry not set")
}

pub fn load_entitlement(env: &Env, owner: &Address) -> Option<CreditEntitlement> {
    let key = DataKey::Entitlement(owner.clone());
    let entitlement: CreditEntitlement = env.storage().persistent().get(&key)?;
    bump_persistent(env, &key);
    Some(entitlement)
}

pub fn save_entitlement(env: &Env, owner: &Address, entitlement: &CreditEntitlement) {
    let key = DataKey::Entitlement(owner.clone());
    env.storage().persistent().set(&key, entitlement);
    bump_persistent(env, &key);
}

pub fn load_method(env: &Env, owner: &Address) -> Option<String> {
    let key = DataKey::Method(owner.clone());
    let method: String = env.storage().persistent().get(&key)?;
    bump_persistent(env, &key);
    Some(method)
}

pub fn save_method(env: &Env, owner: &Address, method: &String) {
    let key = DataKey::Method(owner.clone());
    env.storage().persistent().set(&key, method);
    bump_persistent(env, &key);
}
