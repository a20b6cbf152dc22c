//! Generated-input checks of the funding pool and milestone approval rules.
//!
//! `Env` is built inside each case; it is neither `Send` nor `UnwindSafe`.

extern crate std;

use crate::{ProjectContract, ProjectContractClient};
use proptest::prelude::*;
use shared::errors::Error;
use shared::types::MilestoneStatus;
use soroban_sdk::{testutils::Address as _, Address, Env, String, Vec};

const GOAL: i128 = 1000;
const MINIMUM: i128 = 5;

fn setup() -> (Env, ProjectContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let client = ProjectContractClient::new(&env, &env.register_contract(None, ProjectContract));
    let manager = Address::generate(&env);
    client.initialize(&manager, &GOAL, &MINIMUM);
    (env, client, manager)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn funded_amount_is_sum_of_accepted(amounts in prop::collection::vec(0i128..400, 1..10)) {
        let (env, client, _manager) = setup();
        let mut accepted_sum = 0i128;

        for amount in amounts {
            let backer = Address::generate(&env);
            let before = client.funded_amount();
            match client.try_invest(&backer, &amount) {
                Ok(Ok(accepted)) => {
                    prop_assert!(amount >= MINIMUM);
                    prop_assert!(accepted <= amount);
                    accepted_sum += accepted;
                }
                Err(Ok(Error::BelowMin)) => {
                    prop_assert!(amount < MINIMUM);
                    prop_assert_eq!(client.funded_amount(), before);
                }
                Err(Ok(Error::PoolClosed)) => prop_assert!(before >= GOAL),
                other => prop_assert!(false, "unexpected result {:?}", other),
            }
        }

        let funded = client.funded_amount();
        prop_assert_eq!(funded, accepted_sum);
        prop_assert!(funded <= GOAL);
        prop_assert_eq!(client.goal_fund_reached(), accepted_sum >= GOAL);
        prop_assert_eq!(client.is_open(), accepted_sum < GOAL);
    }

    #[test]
    fn completion_happens_only_at_full_approval(
        approver_count in 1usize..6,
        order_seed in any::<u64>(),
    ) {
        let (env, client, manager) = setup();
        client.invest(&Address::generate(&env), &GOAL);

        let mut approvers = Vec::new(&env);
        for _ in 0..approver_count {
            approvers.push_back(Address::generate(&env));
        }
        client.create_mile(
            &manager,
            &Vec::new(&env),
            &String::from_str(&env, "generated"),
            &300,
            &manager,
            &approvers,
        );

        // Deterministic shuffle of the approval order
        let mut order: std::vec::Vec<u32> = (0..approver_count as u32).collect();
        let mut seed = order_seed;
        for i in (1..order.len()).rev() {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            order.swap(i, (seed % (i as u64 + 1)) as usize);
        }

        for (step, index) in order.iter().enumerate() {
            let approver = approvers.get(*index).unwrap();
            let completed = client.approve(&approver, &1);
            prop_assert_eq!(completed, step + 1 == approver_count);
            prop_assert!(client.try_approve(&approver, &1).is_err());
        }

        prop_assert_eq!(client.get_milestone(&1).status, MilestoneStatus::Completed);
        prop_assert_eq!(client.payout_of(&manager), 300);
        prop_assert_eq!(client.available_balance(), GOAL - 300);
    }
}
