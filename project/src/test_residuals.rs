extern crate std;

use crate::{ProjectContract, ProjectContractClient};
use shared::errors::{Error, ErrorKind};
use shared::events::{ResidualMintedEvent, RESIDUAL_MINTED};
use shared::types::ResidualType;
use shared::NO_RESIDUAL;
use soroban_sdk::{
    testutils::{Address as _, Events},
    vec, Address, Env, String, Symbol, TryFromVal,
};

// 2019-07-12 and 2020-12-12, in milliseconds
const START: u64 = 1_562_889_600_000;
const END: u64 = 1_607_731_200_000;

fn setup_env() -> (Env, ProjectContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register_contract(None, ProjectContract);
    let client = ProjectContractClient::new(&env, &contract_id);
    let manager = Address::generate(&env);
    client.initialize(&manager, &1000, &5);
    (env, client, manager)
}

fn mint(
    env: &Env,
    client: &ProjectContractClient,
    manager: &Address,
    holder: &Address,
    role: &str,
    residual_type: u32,
) -> u64 {
    client.mint_residual(
        manager,
        holder,
        &String::from_str(env, role),
        &residual_type,
        &START,
        &END,
        &None,
        &None,
        &None,
    )
}

fn last_minted(env: &Env) -> Option<ResidualMintedEvent> {
    env.events()
        .all()
        .iter()
        .filter_map(|(_, topics, data)| {
            let topic = Symbol::try_from_val(env, &topics.get(0)?).ok()?;
            if topic == RESIDUAL_MINTED {
                ResidualMintedEvent::try_from_val(env, &data).ok()
            } else {
                None
            }
        })
        .last()
}

#[test]
fn test_mint_backer_residual() {
    let (env, client, manager) = setup_env();
    let user1 = Address::generate(&env);

    let bad = client.try_mint_residual(
        &manager,
        &user1,
        &String::from_str(&env, "backer"),
        &10,
        &START,
        &END,
        &None,
        &None,
        &None,
    );
    assert_eq!(bad, Err(Ok(Error::InvResType)));
    assert_eq!(Error::InvResType.kind(), ErrorKind::InvalidInput);

    let id = mint(&env, &client, &manager, &user1, "backer", 1);
    assert_eq!(id, 0);
    assert_eq!(
        last_minted(&env),
        Some(ResidualMintedEvent {
            residual_id: 0,
            residual_type: 1,
            holder: user1.clone(),
            holder_role: String::from_str(&env, "backer"),
            start: START,
            expiry: END,
            weight: None,
            decimals: None,
            media: None,
        })
    );

    let index = client.balance_of(&user1);
    let residual = client.get_residual(&index);
    assert_eq!(residual.residual_id, 0);
    assert_eq!(residual.residual_type, ResidualType::Backer);
    assert_eq!(residual.holder, user1);
    assert_eq!(residual.holder_role, String::from_str(&env, "backer"));
    assert_eq!(residual.start, START);
    assert_eq!(residual.expiry, END);
}

#[test]
fn test_mint_actor_residuals() {
    let (env, client, manager) = setup_env();
    let user1 = Address::generate(&env);
    let actor1 = Address::generate(&env);
    mint(&env, &client, &manager, &user1, "backer", 1);

    let bad = client.try_mint_residual(
        &manager,
        &actor1,
        &String::from_str(&env, "actor"),
        &20,
        &START,
        &END,
        &None,
        &None,
        &None,
    );
    assert_eq!(bad, Err(Ok(Error::InvResType)));

    assert_eq!(mint(&env, &client, &manager, &actor1, "actor", 0), 1);
    let actor_entry = client.get_residual(&client.balance_of(&actor1));
    assert_eq!(actor_entry.residual_id, 1);
    assert_eq!(actor_entry.residual_type, ResidualType::Actor);
    assert_eq!(actor_entry.holder_role, String::from_str(&env, "actor"));

    let streaming = client.mint_residual(
        &manager,
        &actor1,
        &String::from_str(&env, "actor"),
        &2,
        &START,
        &END,
        &Some(456),
        &Some(10),
        &Some(String::from_str(&env, "Online Streaming")),
    );
    assert_eq!(streaming, 2);
    let event = last_minted(&env).unwrap();
    assert_eq!(event.residual_id, 2);
    assert_eq!(event.residual_type, 2);
    assert_eq!(event.holder, actor1);
    assert_eq!(event.weight, Some(456));
    assert_eq!(event.decimals, Some(10));
    assert_eq!(event.media, Some(String::from_str(&env, "Online Streaming")));

    // The holder index follows the most recent entry
    assert_eq!(client.balance_of(&actor1), 2);
    assert_eq!(client.residuals_of(&actor1), vec![&env, 1u64, 2u64]);
    assert_eq!(client.balance_of(&user1), 0);
    assert_eq!(client.residual_count(), 3);
}

#[test]
fn test_unknown_holder_has_no_residual() {
    let (env, client, _manager) = setup_env();
    let stranger = Address::generate(&env);

    let index = client.balance_of(&stranger);
    assert_eq!(index, NO_RESIDUAL);
    assert_eq!(client.residuals_of(&stranger).len(), 0);
    assert_eq!(client.try_get_residual(&index), Err(Ok(Error::ResidualNF)));
    assert_eq!(Error::ResidualNF.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_mint_requires_manager() {
    let (env, client, _manager) = setup_env();
    let user1 = Address::generate(&env);

    let result = client.try_mint_residual(
        &user1,
        &user1,
        &String::from_str(&env, "backer"),
        &1,
        &START,
        &END,
        &None,
        &None,
        &None,
    );
    assert_eq!(result, Err(Ok(Error::NotManager)));
    assert_eq!(client.residual_count(), 0);
}

#[test]
fn test_mint_rejects_inverted_window() {
    let (env, client, manager) = setup_env();
    let user1 = Address::generate(&env);

    let result = client.try_mint_residual(
        &manager,
        &user1,
        &String::from_str(&env, "backer"),
        &1,
        &END,
        &START,
        &None,
        &None,
        &None,
    );
    assert_eq!(result, Err(Ok(Error::InvInput)));
    assert_eq!(client.balance_of(&user1), NO_RESIDUAL);
}

#[test]
fn test_ids_increase_across_holders_and_types() {
    let (env, client, manager) = setup_env();
    let holders = [
        Address::generate(&env),
        Address::generate(&env),
        Address::generate(&env),
    ];

    let mut expected = 0u64;
    for round in 0..4u32 {
        for (i, holder) in holders.iter().enumerate() {
            let residual_type = (round + i as u32) % 3;
            let id = mint(&env, &client, &manager, holder, "holder", residual_type);
            assert_eq!(id, expected);
            assert_eq!(client.balance_of(holder), expected);
            expected += 1;
        }
    }
    assert_eq!(client.residual_count(), expected);
    for holder in holders.iter() {
        assert_eq!(client.residuals_of(holder).len(), 4);
    }
}

#[test]
fn test_latest_index_tracks_many_mints_to_one_holder() {
    let (env, client, manager) = setup_env();
    env.budget().reset_unlimited();
    let holder = Address::generate(&env);
    let other = Address::generate(&env);

    let mut minted = std::vec::Vec::new();
    for round in 0..60u64 {
        if round % 10 == 0 {
            mint(&env, &client, &manager, &other, "actor", 0);
        }
        let id = mint(&env, &client, &manager, &holder, "backer", 1);
        assert_eq!(client.balance_of(&holder), id);
        minted.push(id);
    }

    let listed = client.residuals_of(&holder);
    assert_eq!(listed.len() as usize, minted.len());
    for (position, id) in minted.iter().enumerate() {
        assert_eq!(listed.get(position as u32), Some(*id));
    }
    // Rounds 0, 10, .. 50 mint to `other` first, so its last id is 50 + 5
    assert_eq!(client.residuals_of(&other).len(), 6);
    assert_eq!(client.balance_of(&other), 55);
    assert_eq!(client.residual_count(), 66);
}
