use soroban_sdk::contracttype;

/// Accounting snapshot of the pool.
///
/// `total_fees` is a bookkeeping overlay: the fee portion of every sale stays
/// inside `total_value_held` and is paid out to providers pro rata when they
/// withdraw. The credit reserve is the pool's balance on the credit ledger and
/// is not part of this struct.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    pub total_value_held: i128,
    pub total_fees: i128,
    pub share_supply: i128,
}
