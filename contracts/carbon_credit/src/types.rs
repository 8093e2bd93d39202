use soroban_sdk::contracttype;

/// Snapshot of the most recent issuance to an account.
///
/// Only the latest issuance is kept: a new `issue` overwrites both fields, it
/// does not accumulate. The account balance is the cumulative figure.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreditEntitlement {
    pub amount: i128,
    /// Ledger timestamp after which the issued credits are considered expired.
    pub expiry: u64,
}
