//! # Events
//!
//! | Topic            | Data                   |
//! |------------------|------------------------|
//! | `("issued",)`    | [`CreditsIssued`]      |
//! | `("retired",)`   | [`CreditsRetired`]     |
//! | `("method",)`    | [`ReductionMethodSet`] |
//! | `("transfer",)`  | [`CreditTransfer`]     |
//! | `("approve",)`   | [`CreditApproval`]     |

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreditsIssued {
    pub owner: Address,
    pub amount: i128,
    pub expiry: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreditsRetired {
    pub holder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReductionMethodSet {
    pub owner: Address,
    pub method: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreditTransfer {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreditApproval {
    pub owner: Address,
    pub spender: Address,
    pub amount: i128,
}

pub fn emit_credits_issued(env: &Env, owner: Address, amount: i128, expiry: u64) {
    env.events().publish(
        (symbol_short!("issued"),),
        CreditsIssued {
            owner,
            amount,
            expiry,
        },
    );
}

pub fn emit_credits_retired(env: &Env, holder: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("retired"),), CreditsRetired { holder, amount });
}

pub fn emit_reduction_method_set(env: &Env, owner: Address, method: String) {
    env.events().publish(
        (symbol_short!("method"),),
        ReductionMethodSet { owner, method },
    );
}

pub fn emit_transfer(env: &Env, from: Address, to: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("transfer"),),
        CreditTransfer { from, to, amount },
    );
}

pub fn emit_approval(env: &Env, owner: Address, spender: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("approve"),),
        CreditApproval {
            owner,
            spender,
            amount,
        },
    );
}
