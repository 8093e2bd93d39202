//! # Exchange Pool Contract
//!
//! Fixed-rate market maker between carbon credits and a value token. Credits
//! trade 1:1 against value; every trade pays a flat fee in basis points that
//! accrues to liquidity providers.
//!
//! | Phase       | Entry Point(s)                                                |
//! |-------------|---------------------------------------------------------------|
//! | Bootstrap   | `__constructor(owner, credit_ledger, value_token, fee_bps)`, [`ExchangePool::bind_share_ledger`] |
//! | Liquidity   | [`ExchangePool::add_liquidity`], [`ExchangePool::receive`], [`ExchangePool::withdraw_liquidity`] |
//! | Trading     | [`ExchangePool::sell_credits`], [`ExchangePool::buy_credits`] |
//! | Owner       | [`ExchangePool::withdraw_credits`]                            |
//! | Queries     | `pool_state`, `total_value_held`, `total_fees`, `value_balance`, `credit_balance`, ... |
//!
//! Every mutating entry point holds the `Locked` flag for its whole duration
//! and finishes all accounting writes before pushing value out.

#![no_std]

use carbon_common::interfaces::{propagate, CreditLedgerClient, ShareLedgerClient};
use carbon_common::{fungible::check_amount, Error, BPS_DENOMINATOR};
use soroban_sdk::{contract, contractimpl, panic_with_error, token, Address, Env};

mod events;
mod math;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use events::{
    CreditsBought, CreditsSold, CreditsWithdrawn, LiquidityAdded, LiquidityWithdrawn,
    ShareLedgerBound,
};
pub use types::PoolState;

#[contract]
pub struct ExchangePool;

#[contractimpl]
impl ExchangePool {
    /// Panics with `InvalidFee` if `fee_bps` exceeds 10_000.
    pub fn __constructor(
        env: Env,
        owner: Address,
        credit_ledger: Address,
        value_token: Address,
        fee_bps: u32,
    ) {
        if fee_bps as i128 > BPS_DENOMINATOR {
            panic_with_error!(&env, Error::InvalidFee);
        }
        storage::init_config(&env, &owner, &credit_ledger, &value_token, fee_bps);
    }

    /// Bind the share ledger. Owner only, exactly once.
    pub fn bind_share_ledger(env: Env, caller: Address, share_ledger: Address) -> Result<(), Error> {
        Self::guarded(&env, || {
            Self::require_owner(&env, &caller)?;
            if storage::get_share_ledger(&env).is_some() {
                return Err(Error::ShareLedgerAlreadyBound);
            }
            if share_ledger == env.current_contract_address() {
                return Err(Error::InvalidOwner);
            }

            storage::set_share_ledger(&env, &share_ledger);
            events::emit_share_ledger_bound(&env, share_ledger);
            Ok(())
        })
    }

    // ─────────────────────────────────────────────────────────
    // Liquidity
    // ─────────────────────────────────────────────────────────

    /// Deposit `value` and receive pool shares.
    ///
    /// The first deposit into an empty pool mints shares 1:1. Later deposits
    /// mint `floor(value * supply / total_value_held)`.
    ///
    /// Fails with `ZeroShares` when that rounds down to nothing, and with
    /// `InsufficientPoolValue` while shares are outstanding but the pool
    /// holds no value.
    pub fn add_liquidity(env: Env, provider: Address, value: i128) -> Result<i128, Error> {
        Self::guarded(&env, || Self::deposit(&env, &provider, value))
    }

    /// Plain value receipt with no operation selected. Same as `add_liquidity`.
    pub fn receive(env: Env, from: Address, value: i128) -> Result<i128, Error> {
        Self::guarded(&env, || Self::deposit(&env, &from, value))
    }

    /// Burn `shares` and pay out the matching slice of the pool's value.
    pub fn withdraw_liquidity(env: Env, provider: Address, shares: i128) -> Result<i128, Error> {
        Self::guarded(&env, || {
            provider.require_auth();
            check_amount(shares)?;
            if shares == 0 {
                return Err(Error::ZeroShares);
            }
            let share_ledger = Self::share_client(&env)?;
            if shares > share_ledger.balance(&provider) {
                return Err(Error::InsufficientShares);
            }

            let supply = share_ledger.total_supply();
            let held = storage::get_total_value_held(&env);
            let fees = storage::get_total_fees(&env);
            let payout = math::mul_div_floor(&env, shares, held, supply)?;
            let value = Self::value_client(&env);
            if value.balance(&env.current_contract_address()) < payout {
                return Err(Error::InsufficientContractBalance);
            }

            let pool = env.current_contract_address();
            propagate(share_ledger.try_burn_from(&pool, &provider, &shares))?;
            if supply - shares == 0 {
                storage::set_totals(&env, 0, 0);
            } else {
                let fee_share = math::mul_div_floor(&env, fees, shares, supply)?;
                storage::set_totals(&env, held - payout, fees - fee_share);
            }

            Self::push_value(&env, &provider, payout)?;
            events::emit_liquidity_withdrawn(&env, provider, payout, shares);
            Ok(payout)
        })
    }

    // ─────────────────────────────────────────────────────────
    // Trading
    // ─────────────────────────────────────────────────────────

    /// Sell `amount` credits to the pool. Returns the value paid out after fee.
    ///
    /// The seller must have approved the pool on the credit ledger.
    pub fn sell_credits(env: Env, seller: Address, amount: i128) -> Result<i128, Error> {
        Self::guarded(&env, || {
            seller.require_auth();
            check_amount(amount)?;
            if amount == 0 {
                return Err(Error::ZeroAmount);
            }
            let held = storage::get_total_value_held(&env);
            if amount > held {
                return Err(Error::InsufficientPoolValue);
            }

            let pool = env.current_contract_address();
            let credits = Self::credit_client(&env);
            propagate(credits.try_transfer_from(&pool, &seller, &pool, &amount))?;

            let fee = math::fee_for(amount, storage::get_fee_bps(&env))?;
            let net_payout = amount - fee;
            let fees = storage::get_total_fees(&env)
                .checked_add(fee)
                .ok_or(Error::ArithmeticOverflow)?;
            storage::set_totals(&env, held - net_payout, fees);

            Self::push_value(&env, &seller, net_payout)?;
            events::emit_credits_sold(&env, seller, amount, net_payout);
            Ok(net_payout)
        })
    }

    /// Buy `amount` credits, paying `value_sent`. Returns the refund
    /// `value_sent - amount`.
    ///
    /// A failed refund fails the whole call, credit delivery included.
    pub fn buy_credits(
        env: Env,
        buyer: Address,
        amount: i128,
        value_sent: i128,
    ) -> Result<i128, Error> {
        Self::guarded(&env, || {
            buyer.require_auth();
            check_amount(amount)?;
            check_amount(value_sent)?;
            if amount == 0 {
                return Err(Error::ZeroAmount);
            }
            let cost = amount;
            if value_sent < cost {
                return Err(Error::InsufficientPayment);
            }
            let pool = env.current_contract_address();
            let credits = Self::credit_client(&env);
            if credits.balance(&pool) < amount {
                return Err(Error::InsufficientCreditReserve);
            }

            Self::pull_value(&env, &buyer, value_sent)?;

            let fee = math::fee_for(cost, storage::get_fee_bps(&env))?;
            let held = storage::get_total_value_held(&env)
                .checked_add(cost - fee)
                .ok_or(Error::ArithmeticOverflow)?;
            let fees = storage::get_total_fees(&env)
                .checked_add(fee)
                .ok_or(Error::ArithmeticOverflow)?;
            storage::set_totals(&env, held, fees);

            propagate(credits.try_transfer(&pool, &buyer, &amount))?;
            let refund = value_sent - cost;
            Self::push_value(&env, &buyer, refund)?;

            events::emit_credits_bought(&env, buyer, amount, cost);
            Ok(refund)
        })
    }

    // ─────────────────────────────────────────────────────────
    // Owner
    // ─────────────────────────────────────────────────────────

    /// Move `amount` credits from the pool reserve to the owner.
    pub fn withdraw_credits(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        Self::guarded(&env, || {
            Self::require_owner(&env, &caller)?;
            check_amount(amount)?;
            if amount == 0 {
                return Err(Error::ZeroAmount);
            }

            let pool = env.current_contract_address();
            propagate(Self::credit_client(&env).try_transfer(&pool, &caller, &amount))?;
            events::emit_credits_withdrawn(&env, caller, amount);
            Ok(())
        })
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    pub fn credit_ledger(env: Env) -> Address {
        storage::get_credit_ledger(&env)
    }

    pub fn value_token(env: Env) -> Address {
        storage::get_value_token(&env)
    }

    pub fn share_ledger(env: Env) -> Option<Address> {
        storage::get_share_ledger(&env)
    }

    pub fn fee_bps(env: Env) -> u32 {
        storage::get_fee_bps(&env)
    }

    pub fn total_value_held(env: Env) -> i128 {
        storage::get_total_value_held(&env)
    }

    pub fn total_fees(env: Env) -> i128 {
        storage::get_total_fees(&env)
    }

    pub fn pool_state(env: Env) -> PoolState {
        let share_supply = match storage::get_share_ledger(&env) {
            Some(id) => ShareLedgerClient::new(&env, &id).total_supply(),
            None => 0,
        };
        PoolState {
            total_value_held: storage::get_total_value_held(&env),
            total_fees: storage::get_total_fees(&env),
            share_supply,
        }
    }

    /// Value-token balance actually held by the pool.
    pub fn value_balance(env: Env) -> i128 {
        Self::value_client(&env).balance(&env.current_contract_address())
    }

    /// Credits held in the pool reserve.
    pub fn credit_balance(env: Env) -> i128 {
        Self::credit_client(&env).balance(&env.current_contract_address())
    }
}

impl ExchangePool {
    /// Run `op` with the `Locked` flag held. On `Err` the invocation is rolled
    /// back, flag included.
    fn guarded<T>(env: &Env, op: impl FnOnce() -> Result<T, Error>) -> Result<T, Error> {
        if storage::is_locked(env) {
            return Err(Error::Reentrant);
        }
        storage::set_locked(env, true);
        let out = op()?;
        storage::set_locked(env, false);
        Ok(out)
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        if *caller != storage::get_owner(env) {
            return Err(Error::NotOwner);
        }
        Ok(())
    }

    fn deposit(env: &Env, provider: &Address, value: i128) -> Result<i128, Error> {
        provider.require_auth();
        check_amount(value)?;
        if value == 0 {
            return Err(Error::ZeroValue);
        }
        let share_ledger = Self::share_client(env)?;

        let supply = share_ledger.total_supply();
        let held = storage::get_total_value_held(env);
        // Outstanding shares over zero recorded value have no price.
        let shares = if supply == 0 {
            value
        } else if held == 0 {
            return Err(Error::InsufficientPoolValue);
        } else {
            math::mul_div_floor(env, value, supply, held)?
        };
        if shares == 0 {
            return Err(Error::ZeroShares);
        }

        Self::pull_value(env, provider, value)?;
        let held = held.checked_add(value).ok_or(Error::ArithmeticOverflow)?;
        storage::set_totals(env, held, storage::get_total_fees(env));

        let pool = env.current_contract_address();
        propagate(share_ledger.try_mint(&pool, provider, &shares))?;

        events::emit_liquidity_added(env, provider.clone(), value, shares);
        Ok(shares)
    }

    fn share_client(env: &Env) -> Result<ShareLedgerClient<'_>, Error> {
        let id = storage::get_share_ledger(env).ok_or(Error::ShareLedgerUnbound)?;
        Ok(ShareLedgerClient::new(env, &id))
    }

    fn credit_client(env: &Env) -> CreditLedgerClient<'_> {
        CreditLedgerClient::new(env, &storage::get_credit_ledger(env))
    }

    fn value_client(env: &Env) -> token::Client<'_> {
        token::Client::new(env, &storage::get_value_token(env))
    }

    fn pull_value(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
        let pool = env.current_contract_address();
        match Self::value_client(env).try_transfer(from, &pool, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::TransferFailed),
        }
    }

    fn push_value(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
        if amount == 0 {
            return Ok(());
        }
        let pool = env.current_contract_address();
        match Self::value_client(env).try_transfer(&pool, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::TransferFailed),
        }
    }
}
