extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{ProjectCreated, ProjectListed, ProjectUnlisted};
use crate::{ProjectRegistry, ProjectRegistryClient};

fn setup() -> (Env, ProjectRegistryClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let contract_id = env.register(ProjectRegistry, (admin, sac.address(), 0i128));
    let client = ProjectRegistryClient::new(&env, &contract_id);
    (env, client)
}

#[test]
fn test_project_created_event() {
    let (env, client) = setup();
    let owner = Address::generate(&env);
    let name = String::from_str(&env, "Wetland Restoration");

    let id = client.create(
        &owner,
        &name,
        &String::from_str(&env, "Peat bog rewetting"),
        &750,
        &0,
    );

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("created").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ProjectCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ProjectCreated {
            project_id: id,
            owner,
            name,
            estimated_credits: 750,
        }
    );
}

#[test]
fn test_project_listed_and_unlisted_events() {
    let (env, client) = setup();
    let owner = Address::generate(&env);
    let id = client.create(
        &owner,
        &String::from_str(&env, "Cookstoves"),
        &String::from_str(&env, "Efficient cookstove distribution"),
        &300,
        &0,
    );

    client.list(&owner, &id);
    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("listed").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let listed: ProjectListed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        listed,
        ProjectListed {
            project_id: id,
            owner: owner.clone(),
        }
    );

    client.unlist(&owner, &id);
    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("unlisted").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let unlisted: ProjectUnlisted = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        unlisted,
        ProjectUnlisted {
            project_id: id,
            owner,
        }
    );
}
