extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    vec, Address, Env, IntoVal, String, TryIntoVal,
};
use verification_registry::{CertificateRequest, VerificationRegistry, VerificationRegistryClient};

use crate::events::{CreditApproval, CreditTransfer, CreditsIssued, CreditsRetired, ReductionMethodSet};
use crate::{CreditLedger, CreditLedgerClient};

const NOW: u64 = 1_700_000_000;

fn setup() -> (Env, CreditLedgerClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(NOW);

    let auditor = Address::generate(&env);
    let verification_id = env.register(VerificationRegistry, (auditor.clone(),));
    let contract_id = env.register(CreditLedger, (auditor.clone(), verification_id.clone()));
    let client = CreditLedgerClient::new(&env, &contract_id);

    let holder = Address::generate(&env);
    VerificationRegistryClient::new(&env, &verification_id).mint_certificate(
        &auditor,
        &CertificateRequest {
            uri: String::from_str(&env, "ipfs://cert"),
            project_name: String::from_str(&env, "Cookstoves"),
            owner: holder.clone(),
            credits: 500,
            location: String::from_str(&env, "Rwanda"),
            issued_at: NOW,
            expires_at: NOW + 1_000,
            reduction_method: String::from_str(&env, "Efficient Cooking"),
            project_id: 7,
        },
    );

    (env, client, auditor, holder)
}

#[test]
fn test_credits_issued_event() {
    let (env, client, auditor, holder) = setup();

    client.issue(&auditor, &holder, &500, &(NOW + 1_000));

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, client.address);
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("issued").into_val(&env)]
    );
    let data: CreditsIssued = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        data,
        CreditsIssued {
            owner: holder,
            amount: 500,
            expiry: NOW + 1_000,
        }
    );
}

#[test]
fn test_credits_retired_event() {
    let (env, client, auditor, holder) = setup();
    client.issue(&auditor, &holder, &500, &(NOW + 1_000));

    client.retire(&holder, &120);

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("retired").into_val(&env)]
    );
    let data: CreditsRetired = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(data, CreditsRetired { holder, amount: 120 });
}

#[test]
fn test_reduction_method_event() {
    let (env, client, auditor, holder) = setup();
    let method = String::from_str(&env, "Efficient Cooking");

    client.set_reduction_method(&auditor, &holder, &method);

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("method").into_val(&env)]
    );
    let data: ReductionMethodSet = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        data,
        ReductionMethodSet {
            owner: holder,
            method,
        }
    );
}

#[test]
fn test_transfer_and_approval_events() {
    let (env, client, auditor, holder) = setup();
    let spender = Address::generate(&env);
    let receiver = Address::generate(&env);
    client.issue(&auditor, &holder, &500, &(NOW + 1_000));

    client.approve(&holder, &spender, &50);
    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("approve").into_val(&env)]
    );
    let approval: CreditApproval = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        approval,
        CreditApproval {
            owner: holder.clone(),
            spender: spender.clone(),
            amount: 50,
        }
    );

    client.transfer_from(&spender, &holder, &receiver, &50);
    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("transfer").into_val(&env)]
    );
    let transfer: CreditTransfer = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        transfer,
        CreditTransfer {
            from: holder,
            to: receiver,
            amount: 50,
        }
    );
}
