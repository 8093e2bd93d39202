//! # Interfaces
//!
//! Caller-side views of the marketplace contracts. Each trait lists only the
//! entry points another contract needs; `#[contractclient]` turns it into a
//! typed client so the calling crate never links the callee's implementation.
//!
//! | Client               | Used by                    |
//! |----------------------|----------------------------|
//! | `VerificationClient` | `carbon_credit`            |
//! | `CreditLedgerClient` | `exchange_pool`            |
//! | `ShareLedgerClient`  | `exchange_pool`            |

use soroban_sdk::{contractclient, Address, Env, InvokeError};

use crate::Error;

#[contractclient(name = "VerificationClient")]
pub trait VerificationInterface {
    /// Number of certificates currently held by `owner`.
    fn balance(env: Env, owner: Address) -> u32;
}

#[contractclient(name = "CreditLedgerClient")]
pub trait CreditLedgerInterface {
    fn balance(env: Env, id: Address) -> i128;

    fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error>;

    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error>;
}

#[contractclient(name = "ShareLedgerClient")]
pub trait ShareLedgerInterface {
    fn balance(env: Env, id: Address) -> i128;

    fn total_supply(env: Env) -> i128;

    fn mint(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), Error>;

    fn burn_from(env: Env, caller: Address, from: Address, amount: i128) -> Result<(), Error>;
}

/// Collapse the nested result of a `try_*` client call into a plain
/// `Result<T, Error>`.
///
/// A marketplace error raised by the callee is returned unchanged. Anything
/// else (a host abort, an undecodable return value) becomes
/// [`Error::TransferFailed`].
pub fn propagate<T, C>(res: Result<Result<T, C>, Result<Error, InvokeError>>) -> Result<T, Error> {
    match res {
        Ok(Ok(value)) => Ok(value),
        Err(Ok(err)) => Err(err),
        Ok(Err(_)) | Err(Err(_)) => Err(Error::TransferFailed),
    }
}
