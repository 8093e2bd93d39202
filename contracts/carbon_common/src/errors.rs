//! # Errors
//!
//! Error codes are grouped in ranges so that the category of a failure can be
//! recovered from the bare `u32` an off-chain client sees:
//!
//! | Range  | Kind                                     |
//! |--------|------------------------------------------|
//! | 1–9    | [`ErrorKind::Authorization`]             |
//! | 10–29  | [`ErrorKind::Validation`]                |
//! | 30–49  | [`ErrorKind::State`]                     |
//! | 50–69  | [`ErrorKind::InsufficientResource`]      |
//! | 70–79  | [`ErrorKind::Transfer`]                  |
//!
//! Codes are part of the public ABI. Never renumber an existing variant.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Authorization
    NotAuditor = 1,
    NotOwner = 2,
    NotPool = 3,
    NotAdmin = 4,

    // Validation
    InvalidOwner = 10,
    ExpiryInPast = 11,
    EmptyMethod = 12,
    ZeroValue = 13,
    ZeroAmount = 14,
    ZeroShares = 15,
    InvalidAmount = 16,
    InsufficientFee = 17,
    InvalidFee = 18,

    // State
    AlreadyListed = 30,
    NotListed = 31,
    ShareLedgerUnbound = 32,
    ShareLedgerAlreadyBound = 33,
    ProjectNotFound = 34,
    CertificateNotFound = 35,
    NoCertificate = 36,
    Reentrant = 37,

    // Insufficient resource
    InsufficientBalance = 50,
    InsufficientAllowance = 51,
    InsufficientPoolValue = 52,
    InsufficientCreditReserve = 53,
    InsufficientShares = 54,
    InsufficientContractBalance = 55,
    InsufficientPayment = 56,

    // Transfer
    TransferFailed = 70,
    ArithmeticOverflow = 71,
}

/// Coarse failure category of an [`Error`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Wrong role or caller.
    Authorization,
    /// Zero, null, empty or out-of-range argument.
    Validation,
    /// Operation not allowed in the current lifecycle state.
    State,
    /// Balance, allowance, reserve, shares or held value too small.
    InsufficientResource,
    /// An outbound push was rejected, or the arithmetic could not be carried out.
    Transfer,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match *self as u32 {
            1..=9 => ErrorKind::Authorization,
            10..=29 => ErrorKind::Validation,
            30..=49 => ErrorKind::State,
            50..=69 => ErrorKind::InsufficientResource,
            _ => ErrorKind::Transfer,
        }
    }
}
