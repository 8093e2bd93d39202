//! # Carbon Common
//!
//! Pieces shared by every contract of the carbon credit marketplace:
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`errors`]     | The single [`Error`] enum and its [`ErrorKind`] taxonomy |
//! | [`fungible`]   | Balance / allowance / supply bookkeeping for fungible ledgers |
//! | [`interfaces`] | `#[contractclient]` traits used for cross-contract calls |
//! | [`ttl`]        | Storage TTL constants and bump helpers                |
//!
//! Every contract returns the same [`Error`] type so that an error raised deep
//! inside a nested call (e.g. the credit ledger rejecting a `transfer_from`
//! issued by the exchange pool) reaches the outermost caller with its code
//! unchanged.

#![no_std]

pub mod errors;
pub mod fungible;
pub mod interfaces;
pub mod ttl;

pub use errors::{Error, ErrorKind};

/// Number of decimals used by every fungible amount in the marketplace.
pub const DECIMALS: u32 = 18;

/// Basis-point denominator for fee arithmetic (10_000 bps = 100%).
pub const BPS_DENOMINATOR: i128 = 10_000;
