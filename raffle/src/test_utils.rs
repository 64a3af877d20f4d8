use near_sdk::json_types::{Base64VecU8, U128, U64};
use near_sdk::test_utils::VMContextBuilder;
use near_sdk::{testing_env, AccountId, Balance, VMContext};

use crate::Contract;

pub const ENTRANCE_FEE: Balance = 100;
pub const INTERVAL_MS: u64 = 30_000;
pub const SUBSCRIPTION_ID: u64 = 1;
pub const CALLBACK_GAS_LIMIT: u64 = 50_000_000_000_000;

pub fn raffle() -> AccountId {
    "raffle".parse().unwrap()
}

pub fn coordinator() -> AccountId {
    "vrf".parse().unwrap()
}

pub fn alice() -> AccountId {
    "alice".parse().unwrap()
}

pub fn bob() -> AccountId {
    "bob".parse().unwrap()
}

pub fn carol() -> AccountId {
    "carol".parse().unwrap()
}

pub struct Emulator {
    pub contract: Contract,
    pub block_timestamp_ms: u64,
    pub context: VMContext,
}

impl Emulator {
    pub fn new() -> Self {
        Self::new_with(ENTRANCE_FEE, INTERVAL_MS)
    }

    pub fn new_with(entrance_fee: Balance, interval_ms: u64) -> Self {
        let context = VMContextBuilder::new()
            .current_account_id(raffle())
            .predecessor_account_id(alice())
            .build();
        testing_env!(context.clone());

        let contract = Contract::new(
            coordinator(),
            U64(SUBSCRIPTION_ID),
            Base64VecU8(vec![7; 32]),
            U64(interval_ms),
            U128(entrance_fee),
            U64(CALLBACK_GAS_LIMIT),
        );

        Emulator {
            contract,
            block_timestamp_ms: 0,
            context,
        }
    }

    pub fn update_context(&mut self, predecessor: AccountId, deposit: Balance) {
        self.context = VMContextBuilder::new()
            .current_account_id(raffle())
            .predecessor_account_id(predecessor)
            .attached_deposit(deposit)
            .block_timestamp(self.block_timestamp_ms * 1_000_000)
            .build();
        testing_env!(self.context.clone());
    }

    pub fn skip_time(&mut self, ms: u64) {
        self.block_timestamp_ms += ms;
        self.update_context(alice(), 0);
    }

    pub fn enter_as(&mut self, player: AccountId, deposit: Balance) {
        self.update_context(player, deposit);
        self.contract.enter();
    }

    /// Switches the predecessor to the contract itself, the way the
    /// runtime invokes #[private] promise callbacks.
    pub fn as_self(&mut self) {
        self.update_context(raffle(), 0);
    }

    pub fn as_coordinator(&mut self) {
        self.update_context(coordinator(), 0);
    }

    /// Runs the upkeep and feeds the request id back the way the
    /// coordinator's promise result would arrive.
    pub fn run_upkeep(&mut self, request_id: u64) {
        self.update_context(alice(), 0);
        self.contract.perform_upkeep();
        self.as_self();
        self.contract.on_random_words_requested(Ok(U64(request_id)));
    }
}
