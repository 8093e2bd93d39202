use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SharesMinted {
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SharesBurned {
    pub from: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShareTransfer {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShareApproval {
    pub owner: Address,
    pub spender: Address,
    pub amount: i128,
}

pub fn emit_minted(env: &Env, to: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("mint"),), SharesMinted { to, amount });
}

pub fn emit_burned(env: &Env, from: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("burn"),), SharesBurned { from, amount });
}

pub fn emit_transfer(env: &Env, from: Address, to: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("transfer"),),
        ShareTransfer { from, to, amount },
    );
}

pub fn emit_approval(env: &Env, owner: Address, spender: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("approve"),),
        ShareApproval {
            owner,
            spender,
            amount,
        },
    );
}
