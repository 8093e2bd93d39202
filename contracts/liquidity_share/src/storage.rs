//! # Storage
//!
//! Share balances, allowances and supply live under
//! [`carbon_common::fungible::FungibleKey`].
//!
//! | Key    | Tier     | Type      | Description                       |
//! |--------|----------|-----------|-----------------------------------|
//! | `Pool` | Instance | `Address` | Sole minter and burner of shares  |

use carbon_common::ttl::bump_instance;
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Pool,
}

pub fn set_pool(env: &Env, pool: &Address) {
    env.storage().instance().set(&DataKey::Pool, pool);
    bump_instance(env);
}

pub fn get_pool(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Pool)
        .expect("pool not set")
}
