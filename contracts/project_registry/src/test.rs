extern crate std;

use carbon_common::Error;
use soroban_sdk::{testutils::Address as _, token, Address, Env, String};

use crate::invariants::{
    assert_all_project_invariants, assert_project_immutable_fields, assert_sequential_ids,
    assert_valid_status_transition,
};
use crate::{ProjectRegistry, ProjectRegistryClient, ProjectStatus};

/// 0.01 units of an 18-decimal token.
const MIN_FEE: i128 = 10_000_000_000_000_000;

struct Setup {
    env: Env,
    client: ProjectRegistryClient<'static>,
    fee_token: token::Client<'static>,
    admin: Address,
}

fn setup() -> Setup {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(token_admin);
    let fee_token = token::Client::new(&env, &sac.address());

    let contract_id = env.register(ProjectRegistry, (admin.clone(), sac.address(), MIN_FEE));
    let client = ProjectRegistryClient::new(&env, &contract_id);

    Setup {
        env,
        client,
        fee_token,
        admin,
    }
}

fn funded_owner(s: &Setup, amount: i128) -> Address {
    let owner = Address::generate(&s.env);
    token::StellarAssetClient::new(&s.env, &s.fee_token.address).mint(&owner, &amount);
    owner
}

fn create_default(s: &Setup, owner: &Address) -> u64 {
    s.client.create(
        owner,
        &String::from_str(&s.env, "Mangrove Restoration"),
        &String::from_str(&s.env, "Restoring mangroves along the coast"),
        &1_000,
        &MIN_FEE,
    )
}

#[test]
fn test_create_starts_unlisted_with_id_one() {
    let s = setup();
    let owner = funded_owner(&s, MIN_FEE);

    let id = create_default(&s, &owner);
    assert_eq!(id, 1);

    let project = s.client.get_project(&id);
    assert_eq!(project.owner, owner);
    assert_eq!(project.name, String::from_str(&s.env, "Mangrove Restoration"));
    assert_eq!(project.estimated_credits, 1_000);
    assert_eq!(project.status, ProjectStatus::Unlisted);
    assert_all_project_invariants(&project);

    assert!(s.client.is_unlisted(&id));
    assert!(!s.client.is_listed(&id));
    assert_eq!(s.client.current_id(), 2);
}

#[test]
fn test_create_collects_fee() {
    let s = setup();
    let owner = funded_owner(&s, 3 * MIN_FEE);

    s.client.create(
        &owner,
        &String::from_str(&s.env, "Solar Farm"),
        &String::from_str(&s.env, "Rooftop solar"),
        &50,
        &(2 * MIN_FEE),
    );

    assert_eq!(s.fee_token.balance(&owner), MIN_FEE);
    assert_eq!(s.fee_token.balance(&s.client.address), 2 * MIN_FEE);
    assert_eq!(s.client.collected_fees(), 2 * MIN_FEE);
}

#[test]
fn test_create_rejects_fee_below_minimum() {
    let s = setup();
    let owner = funded_owner(&s, MIN_FEE);

    let result = s.client.try_create(
        &owner,
        &String::from_str(&s.env, "Cheap"),
        &String::from_str(&s.env, "Underpaid"),
        &10,
        &(MIN_FEE - 1),
    );
    assert_eq!(result, Err(Ok(Error::InsufficientFee)));

    assert_eq!(s.fee_token.balance(&owner), MIN_FEE);
    assert_eq!(s.client.current_id(), 1);
    assert!(s.client.try_get_project(&1).is_err());
}

#[test]
fn test_create_rejects_negative_estimate() {
    let s = setup();
    let owner = funded_owner(&s, MIN_FEE);

    let result = s.client.try_create(
        &owner,
        &String::from_str(&s.env, "Negative"),
        &String::from_str(&s.env, "Bad estimate"),
        &-1,
        &MIN_FEE,
    );
    assert_eq!(result, Err(Ok(Error::InvalidAmount)));
}

#[test]
fn test_create_fails_when_fee_cannot_be_paid() {
    let s = setup();
    let owner = funded_owner(&s, MIN_FEE - 1);

    let result = s.client.try_create(
        &owner,
        &String::from_str(&s.env, "Broke"),
        &String::from_str(&s.env, "Cannot pay"),
        &10,
        &MIN_FEE,
    );
    assert_eq!(result, Err(Ok(Error::TransferFailed)));
    assert_eq!(s.client.collected_fees(), 0);
    assert_eq!(s.client.current_id(), 1);
}

#[test]
fn test_project_lifecycle() {
    let s = setup();
    let owner = funded_owner(&s, 2 * MIN_FEE);

    let id = create_default(&s, &owner);
    let original = s.client.get_project(&id);

    s.client.list(&owner, &id);
    assert!(s.client.is_listed(&id));
    assert!(!s.client.is_unlisted(&id));
    assert_valid_status_transition(&original.status, &s.client.get_project(&id).status);

    s.client.unlist(&owner, &id);
    assert!(!s.client.is_listed(&id));
    assert!(s.client.is_unlisted(&id));

    let current = s.client.get_project(&id);
    assert_eq!(current.status, ProjectStatus::Unlisted);
    assert_project_immutable_fields(&original, &current);

    // A fresh project never reuses a prior id.
    let next = create_default(&s, &owner);
    assert_eq!(next, 2);
    assert_sequential_ids(&[s.client.get_project(&1), s.client.get_project(&2)]);
}

#[test]
fn test_list_requires_owner() {
    let s = setup();
    let owner = funded_owner(&s, MIN_FEE);
    let stranger = Address::generate(&s.env);
    let id = create_default(&s, &owner);

    assert_eq!(s.client.try_list(&stranger, &id), Err(Ok(Error::NotOwner)));
    assert!(s.client.is_unlisted(&id));
}

#[test]
fn test_unlist_requires_owner() {
    let s = setup();
    let owner = funded_owner(&s, MIN_FEE);
    let stranger = Address::generate(&s.env);
    let id = create_default(&s, &owner);
    s.client.list(&owner, &id);

    assert_eq!(s.client.try_unlist(&stranger, &id), Err(Ok(Error::NotOwner)));
    assert!(s.client.is_listed(&id));
}

#[test]
fn test_double_list_rejected() {
    let s = setup();
    let owner = funded_owner(&s, MIN_FEE);
    let id = create_default(&s, &owner);

    s.client.list(&owner, &id);
    assert_eq!(s.client.try_list(&owner, &id), Err(Ok(Error::AlreadyListed)));
}

#[test]
fn test_unlist_unlisted_rejected() {
    let s = setup();
    let owner = funded_owner(&s, MIN_FEE);
    let id = create_default(&s, &owner);

    assert_eq!(s.client.try_unlist(&owner, &id), Err(Ok(Error::NotListed)));
}

#[test]
fn test_unknown_project() {
    let s = setup();
    let caller = Address::generate(&s.env);

    assert_eq!(s.client.try_get_project(&7), Err(Ok(Error::ProjectNotFound)));
    assert_eq!(s.client.try_list(&caller, &7), Err(Ok(Error::ProjectNotFound)));
    assert!(!s.client.is_listed(&7));
    assert!(!s.client.is_unlisted(&7));
}

#[test]
fn test_collect_fees_admin_only() {
    let s = setup();
    let owner = funded_owner(&s, 2 * MIN_FEE);
    create_default(&s, &owner);
    create_default(&s, &owner);

    let treasury = Address::generate(&s.env);
    assert_eq!(
        s.client.try_collect_fees(&owner, &treasury),
        Err(Ok(Error::NotAdmin))
    );

    let collected = s.client.collect_fees(&s.admin, &treasury);
    assert_eq!(collected, 2 * MIN_FEE);
    assert_eq!(s.fee_token.balance(&treasury), 2 * MIN_FEE);
    assert_eq!(s.fee_token.balance(&s.client.address), 0);
    assert_eq!(s.client.collected_fees(), 0);
}

#[test]
fn test_zero_minimum_fee_skips_payment() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let contract_id = env.register(ProjectRegistry, (admin, sac.address(), 0i128));
    let client = ProjectRegistryClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    let id = client.create(
        &owner,
        &String::from_str(&env, "Free"),
        &String::from_str(&env, "No fee"),
        &1,
        &0,
    );
    assert_eq!(id, 1);
    assert_eq!(client.collected_fees(), 0);
}
