use near_sdk::json_types::{Base64VecU8, U128, U64};
use near_sdk::test_utils::VMContextBuilder;
use near_sdk::{testing_env, AccountId, Balance, VMContext};

use crate::Contract;

pub const BASE_FEE: Balance = 25;
pub const FUNDING: Balance = 1_000;
pub const CALLBACK_GAS_LIMIT: u64 = 50_000_000_000_000;

pub fn coordinator() -> AccountId {
    "vrf".parse().unwrap()
}

pub fn owner() -> AccountId {
    "owner".parse().unwrap()
}

pub fn raffle() -> AccountId {
    "raffle".parse().unwrap()
}

pub fn outsider() -> AccountId {
    "mallory".parse().unwrap()
}

pub struct Emulator {
    pub contract: Contract,
    pub context: VMContext,
}

impl Emulator {
    pub fn new() -> Self {
        let context = VMContextBuilder::new()
            .current_account_id(coordinator())
            .predecessor_account_id(owner())
            .build();
        testing_env!(context.clone());

        let contract = Contract::new(U128(BASE_FEE));

        Emulator { contract, context }
    }

    pub fn update_context(&mut self, predecessor: AccountId, deposit: Balance) {
        self.context = VMContextBuilder::new()
            .current_account_id(coordinator())
            .predecessor_account_id(predecessor)
            .attached_deposit(deposit)
            .build();
        testing_env!(self.context.clone());
    }

    pub fn create_subscription(&mut self) -> U64 {
        self.update_context(owner(), 0);
        self.contract.create_subscription()
    }

    /// Subscription owned by `owner`, funded, with the raffle registered.
    pub fn setup_funded_subscription(&mut self) -> U64 {
        let subscription_id = self.create_subscription();
        self.update_context(owner(), 0);
        self.contract.add_consumer(subscription_id, raffle());
        self.update_context(owner(), FUNDING);
        self.contract.fund_subscription(subscription_id);

        subscription_id
    }

    pub fn request_words(&mut self, subscription_id: U64) -> U64 {
        self.contract.request_random_words(
            subscription_id,
            Base64VecU8(vec![7; 32]),
            3,
            U64(CALLBACK_GAS_LIMIT),
            1,
        )
    }
}
