extern crate std;

use carbon_credit::{CreditLedger, CreditLedgerClient};
use liquidity_share::ShareLedger;
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};
use verification_registry::{CertificateRequest, VerificationRegistry, VerificationRegistryClient};

use crate::events::{CreditsBought, CreditsSold, CreditsWithdrawn, LiquidityAdded, LiquidityWithdrawn};
use crate::{ExchangePool, ExchangePoolClient};

const NOW: u64 = 1_700_000_000;

struct Setup {
    env: Env,
    pool: ExchangePoolClient<'static>,
    credits: CreditLedgerClient<'static>,
    sac: token::StellarAssetClient<'static>,
    owner: Address,
    holder: Address,
}

/// Pool with 100 value of liquidity from `provider` and a certified holder
/// carrying 50 credits approved for the pool.
fn setup() -> (Setup, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(NOW);

    let auditor = Address::generate(&env);
    let owner = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(Address::generate(&env));

    let verification_id = env.register(VerificationRegistry, (auditor.clone(),));
    let credits_id = env.register(CreditLedger, (auditor.clone(), verification_id.clone()));
    let pool_id = env.register(
        ExchangePool,
        (owner.clone(), credits_id.clone(), sac.address(), 50u32),
    );
    let shares_id = env.register(ShareLedger, (pool_id.clone(),));
    let pool = ExchangePoolClient::new(&env, &pool_id);
    pool.bind_share_ledger(&owner, &shares_id);

    let holder = Address::generate(&env);
    VerificationRegistryClient::new(&env, &verification_id).mint_certificate(
        &auditor,
        &CertificateRequest {
            uri: String::from_str(&env, "ipfs://cert"),
            project_name: String::from_str(&env, "Wind Park"),
            owner: holder.clone(),
            credits: 50,
            location: String::from_str(&env, "Patagonia"),
            issued_at: NOW,
            expires_at: NOW + 1_000,
            reduction_method: String::from_str(&env, "Renewable Energy"),
            project_id: 3,
        },
    );
    let credits = CreditLedgerClient::new(&env, &credits_id);
    credits.issue(&auditor, &holder, &50, &(NOW + 1_000));
    credits.approve(&holder, &pool_id, &50);

    let sac = token::StellarAssetClient::new(&env, &sac.address());
    let provider = Address::generate(&env);
    sac.mint(&provider, &100);
    pool.add_liquidity(&provider, &100);

    (
        Setup {
            env,
            pool,
            credits,
            sac,
            owner,
            holder,
        },
        provider,
    )
}

fn last_event(s: &Setup) -> (soroban_sdk::Vec<soroban_sdk::Val>, soroban_sdk::Val) {
    let last = s.env.events().all().last().expect("No events found");
    assert_eq!(last.0, s.pool.address);
    (last.1, last.2)
}

#[test]
fn test_liquidity_added_event() {
    let (s, _) = setup();
    let provider = Address::generate(&s.env);
    s.sac.mint(&provider, &30);

    s.pool.add_liquidity(&provider, &30);

    let (topics, data) = last_event(&s);
    assert_eq!(topics, vec![&s.env, symbol_short!("liq_add").into_val(&s.env)]);
    let data: LiquidityAdded = data.try_into_val(&s.env).unwrap();
    assert_eq!(
        data,
        LiquidityAdded {
            provider,
            value: 30,
            shares: 30,
        }
    );
}

#[test]
fn test_credits_sold_event() {
    let (s, _) = setup();

    s.pool.sell_credits(&s.holder, &40);

    let (topics, data) = last_event(&s);
    assert_eq!(topics, vec![&s.env, symbol_short!("sold").into_val(&s.env)]);
    let data: CreditsSold = data.try_into_val(&s.env).unwrap();
    assert_eq!(
        data,
        CreditsSold {
            seller: s.holder.clone(),
            amount: 40,
            net_payout: 40,
        }
    );
}

#[test]
fn test_credits_bought_event() {
    let (s, _) = setup();
    s.pool.sell_credits(&s.holder, &20);
    let buyer = Address::generate(&s.env);
    s.sac.mint(&buyer, &12);

    s.pool.buy_credits(&buyer, &10, &12);

    let (topics, data) = last_event(&s);
    assert_eq!(topics, vec![&s.env, symbol_short!("bought").into_val(&s.env)]);
    let data: CreditsBought = data.try_into_val(&s.env).unwrap();
    assert_eq!(
        data,
        CreditsBought {
            buyer,
            amount: 10,
            cost: 10,
        }
    );
}

#[test]
fn test_liquidity_withdrawn_event() {
    let (s, provider) = setup();

    s.pool.withdraw_liquidity(&provider, &25);

    let (topics, data) = last_event(&s);
    assert_eq!(
        topics,
        vec![&s.env, symbol_short!("liq_wdraw").into_val(&s.env)]
    );
    let data: LiquidityWithdrawn = data.try_into_val(&s.env).unwrap();
    assert_eq!(
        data,
        LiquidityWithdrawn {
            provider,
            payout: 25,
            shares: 25,
        }
    );
}

#[test]
fn test_credits_withdrawn_event() {
    let (s, _) = setup();
    s.credits.transfer(&s.holder, &s.pool.address, &5);

    s.pool.withdraw_credits(&s.owner, &5);

    let (topics, data) = last_event(&s);
    assert_eq!(
        topics,
        vec![&s.env, symbol_short!("cct_wdraw").into_val(&s.env)]
    );
    let data: CreditsWithdrawn = data.try_into_val(&s.env).unwrap();
    assert_eq!(
        data,
        CreditsWithdrawn {
            to: s.owner.clone(),
            amount: 5,
        }
    );
}
