//! Pool arithmetic. All operands are non-negative, so truncating division is
//! floor division. Rounding always favors the pool.

use carbon_common::{Error, BPS_DENOMINATOR};
use soroban_sdk::{Env, I256};

/// `floor(a * b / denominator)` with a 256-bit intermediate product.
pub fn mul_div_floor(env: &Env, a: i128, b: i128, denominator: i128) -> Result<i128, Error> {
    if denominator <= 0 {
        return Err(Error::ArithmeticOverflow);
    }
    I256::from_i128(env, a)
        .mul(&I256::from_i128(env, b))
        .div(&I256::from_i128(env, denominator))
        .to_i128()
        .ok_or(Error::ArithmeticOverflow)
}

/// `floor(amount * fee_bps / 10_000)`.
pub fn fee_for(amount: i128, fee_bps: u32) -> Result<i128, Error> {
    amount
        .checked_mul(fee_bps as i128)
        .map(|scaled| scaled / BPS_DENOMINATOR)
        .ok_or(Error::ArithmeticOverflow)
}
