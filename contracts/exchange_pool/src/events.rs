//! # Events
//!
//! | Topic            | Data                   |
//! |------------------|------------------------|
//! | `("lp_bound",)`  | [`ShareLedgerBound`]   |
//! | `("liq_add",)`   | [`LiquidityAdded`]     |
//! | `("sold",)`      | [`CreditsSold`]        |
//! | `("bought",)`    | [`CreditsBought`]      |
//! | `("liq_wdraw",)` | [`LiquidityWithdrawn`] |
//! | `("cct_wdraw",)` | [`CreditsWithdrawn`]   |

use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShareLedgerBound {
    pub share_ledger: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityAdded {
    pub provider: Address,
    pub value: i128,
    pub shares: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreditsSold {
    pub seller: Address,
    pub amount: i128,
    pub net_payout: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreditsBought {
    pub buyer: Address,
    pub amount: i128,
    pub cost: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityWithdrawn {
    pub provider: Address,
    pub payout: i128,
    pub shares: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreditsWithdrawn {
    pub to: Address,
    pub amount: i128,
}

pub fn emit_share_ledger_bound(env: &Env, share_ledger: Address) {
    env.events()
        .publish((symbol_short!("lp_bound"),), ShareLedgerBound { share_ledger });
}

pub fn emit_liquidity_added(env: &Env, provider: Address, value: i128, shares: i128) {
    env.events().publish(
        (symbol_short!("liq_add"),),
        LiquidityAdded {
            provider,
            value,
            shares,
        },
    );
}

pub fn emit_credits_sold(env: &Env, seller: Address, amount: i128, net_payout: i128) {
    env.events().publish(
        (symbol_short!("sold"),),
        CreditsSold {
            seller,
            amount,
            net_payout,
        },
    );
}

pub fn emit_credits_bought(env: &Env, buyer: Address, amount: i128, cost: i128) {
    env.events().publish(
        (symbol_short!("bought"),),
        CreditsBought {
            buyer,
            amount,
            cost,
        },
    );
}

pub fn emit_liquidity_withdrawn(env: &Env, provider: Address, payout: i128, shares: i128) {
    env.events().publish(
        (symbol_short!("liq_wdraw"),),
        LiquidityWithdrawn {
            provider,
            payout,
            shares,
        },
    );
}

pub fn emit_credits_withdrawn(env: &Env, to: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("cct_wdraw"),), CreditsWithdrawn { to, amount });
}
