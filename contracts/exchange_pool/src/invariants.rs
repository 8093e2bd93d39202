#![allow(dead_code)]

extern crate std;

use crate::types::PoolState;

/// INV-1: An empty share supply means an empty pool.
pub fn assert_empty_pool_is_zeroed(state: &PoolState) {
    if state.share_supply == 0 {
        assert_eq!(
            (state.total_value_held, state.total_fees),
            (0, 0),
            "INV-1 violated: no shares outstanding but pool reports {:?}",
            state
        );
    }
}

/// INV-2: Accounting figures are never negative.
pub fn assert_non_negative(state: &PoolState) {
    assert!(
        state.total_value_held >= 0 && state.total_fees >= 0 && state.share_supply >= 0,
        "INV-2 violated: negative pool figure in {:?}",
        state
    );
}

/// INV-3: Fees only grow outside of liquidity withdrawals.
pub fn assert_fees_non_decreasing(before: &PoolState, after: &PoolState) {
    assert!(
        after.total_fees >= before.total_fees,
        "INV-3 violated: fees dropped from {} to {}",
        before.total_fees,
        after.total_fees
    );
}

/// INV-4: Providers never take out more than they put in when no trades ran.
pub fn assert_conservation(contributed: i128, paid_out: i128) {
    assert!(
        paid_out <= contributed,
        "INV-4 violated: paid out {} against {} contributed",
        paid_out,
        contributed
    );
}

/// INV-5: The tracked value is backed by the pool's actual token balance.
pub fn assert_value_backed(state: &PoolState, value_balance: i128) {
    assert!(
        value_balance >= state.total_value_held,
        "INV-5 violated: pool holds {} but tracks {}",
        value_balance,
        state.total_value_held
    );
}

pub fn assert_all_pool_invariants(state: &PoolState, value_balance: i128) {
    assert_empty_pool_is_zeroed(state);
    assert_non_negative(state);
    assert_value_backed(state, value_balance);
}
