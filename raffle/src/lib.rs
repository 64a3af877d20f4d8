use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::Vector;
use near_sdk::json_types::{Base64VecU8, U128, U64};
use near_sdk::{env, log, near_bindgen, AccountId, Balance, PanicOnDefault};

use common::types::SubscriptionId;
use error::RaffleError;
use state::{DrawPhase, RaffleState};
use utils::gas;
use utils::storage_keys::StorageKeys;

pub mod external;
pub use crate::external::*;

mod draw;
mod error;
mod events;
mod state;
mod upkeep;
mod utils;

#[cfg(test)]
mod test_utils;

/// Random words requested per draw; one is enough to pick a winner.
const NUM_WORDS: u32 = 1;
/// Confirmations the coordinator waits for before responding.
const REQUEST_CONFIRMATIONS: u8 = 3;

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct Contract {
    vrf_coordinator: AccountId,
    subscription_id: SubscriptionId,
    gas_lane: Vec<u8>,
    callback_gas_limit: u64,
    entrance_fee: Balance,
    interval_ms: u64,
    players: Vector<AccountId>,
    prize_pool: Balance,
    last_draw_ms: u64,
    phase: DrawPhase,
    recent_winner: Option<AccountId>,
}

#[near_bindgen]
impl Contract {
    /// Initializes the raffle. Argument order mirrors the deployment
    /// bundle: coordinator, subscription, gas lane, interval, fee,
    /// callback gas limit.
    #[init]
    pub fn new(
        vrf_coordinator: AccountId,
        subscription_id: U64,
        gas_lane: Base64VecU8,
        interval_ms: U64,
        entrance_fee: U128,
        callback_gas_limit: U64,
    ) -> Self {
        assert!(!env::state_exists(), "Already initialized");

        Self {
            vrf_coordinator,
            subscription_id: subscription_id.0,
            gas_lane: gas_lane.0,
            callback_gas_limit: callback_gas_limit.0,
            entrance_fee: entrance_fee.0,
            interval_ms: interval_ms.0,
            players: Vector::new(StorageKeys::Players),
            prize_pool: 0,
            last_draw_ms: env::block_timestamp_ms(),
            phase: DrawPhase::Open,
            recent_winner: None,
        }
    }

    /// Joins the raffle. The whole attached deposit goes into the pool,
    /// overpayment included.
    #[payable]
    pub fn enter(&mut self) {
        let deposit = env::attached_deposit();
        if deposit < self.entrance_fee {
            panic!("{}", RaffleError::InsufficientPayment);
        }
        if self.phase != DrawPhase::Open {
            panic!("{}", RaffleError::RaffleNotOpen);
        }

        let player = env::predecessor_account_id();
        self.players.push(&player);
        self.prize_pool += deposit;

        events::raffle_entered(&player, deposit);
    }

    pub fn get_raffle_state(&self) -> RaffleState {
        RaffleState::from(&self.phase)
    }

    pub fn get_entrance_fee(&self) -> U128 {
        U128(self.entrance_fee)
    }

    pub fn get_interval_ms(&self) -> U64 {
        U64(self.interval_ms)
    }

    pub fn get_player(&self, index: u64) -> AccountId {
        self.players
            .get(index)
            .unwrap_or_else(|| panic!("no player at index {}", index))
    }

    pub fn get_players(&self) -> Vec<AccountId> {
        self.players.to_vec()
    }

    pub fn get_number_of_players(&self) -> u64 {
        self.players.len()
    }

    pub fn get_prize_pool(&self) -> U128 {
        U128(self.prize_pool)
    }

    pub fn get_recent_winner(&self) -> Option<AccountId> {
        self.recent_winner.clone()
    }

    pub fn get_last_draw_ms(&self) -> U64 {
        U64(self.last_draw_ms)
    }

    pub fn get_vrf_coordinator(&self) -> AccountId {
        self.vrf_coordinator.clone()
    }

    pub fn get_subscription_id(&self) -> U64 {
        U64(self.subscription_id)
    }

    pub fn get_num_words(&self) -> u32 {
        NUM_WORDS
    }

    pub fn get_request_confirmations(&self) -> u8 {
        REQUEST_CONFIRMATIONS
    }
}

#[cfg(test)]
mod tests {
    use near_sdk::test_utils::get_logs;

    use crate::state::RaffleState;
    use crate::test_utils::*;

    #[test]
    fn initializes_open_with_deployment_config() {
        let emulator = Emulator::new();

        assert_eq!(emulator.contract.get_raffle_state(), RaffleState::Open);
        assert_eq!(emulator.contract.get_entrance_fee().0, ENTRANCE_FEE);
        assert_eq!(emulator.contract.get_interval_ms().0, INTERVAL_MS);
        assert_eq!(emulator.contract.get_subscription_id().0, SUBSCRIPTION_ID);
        assert_eq!(emulator.contract.get_vrf_coordinator(), coordinator());
        assert_eq!(emulator.contract.get_number_of_players(), 0);
        assert_eq!(emulator.contract.get_prize_pool().0, 0);
        assert_eq!(emulator.contract.get_recent_winner(), None);
        assert_eq!(emulator.contract.get_num_words(), 1);
    }

    #[test]
    #[should_panic(expected = "below the entrance fee")]
    fn enter_rejects_underpayment() {
        let mut emulator = Emulator::new();
        emulator.enter_as(alice(), ENTRANCE_FEE - 1);
    }

    #[test]
    fn enter_records_players_in_call_order() {
        let mut emulator = Emulator::new();
        emulator.enter_as(alice(), ENTRANCE_FEE);
        emulator.enter_as(bob(), ENTRANCE_FEE);
        emulator.enter_as(carol(), ENTRANCE_FEE);

        assert_eq!(emulator.contract.get_number_of_players(), 3);
        assert_eq!(emulator.contract.get_player(0), alice());
        assert_eq!(emulator.contract.get_player(1), bob());
        assert_eq!(emulator.contract.get_player(2), carol());
        assert_eq!(emulator.contract.get_prize_pool().0, 3 * ENTRANCE_FEE);
    }

    #[test]
    fn enter_pools_the_whole_deposit_on_overpayment() {
        let mut emulator = Emulator::new();
        emulator.enter_as(alice(), 5 * ENTRANCE_FEE);

        assert_eq!(emulator.contract.get_number_of_players(), 1);
        assert_eq!(emulator.contract.get_prize_pool().0, 5 * ENTRANCE_FEE);
    }

    #[test]
    fn enter_emits_entry_event() {
        let mut emulator = Emulator::new();
        emulator.enter_as(alice(), ENTRANCE_FEE);

        let logs = get_logs();
        assert_eq!(logs.len(), 1);
        assert!(logs[0].starts_with("EVENT_JSON:"));
        assert!(logs[0].contains("raffle_entered"));
        assert!(logs[0].contains("alice"));
    }

    #[test]
    #[should_panic(expected = "raffle is not open")]
    fn enter_rejected_while_calculating() {
        let mut emulator = Emulator::new();
        emulator.enter_as(alice(), ENTRANCE_FEE);
        emulator.skip_time(INTERVAL_MS + 1);
        emulator.contract.perform_upkeep();

        emulator.enter_as(bob(), ENTRANCE_FEE);
    }

    #[test]
    #[should_panic(expected = "no player at index")]
    fn get_player_rejects_out_of_range_index() {
        let emulator = Emulator::new();
        emulator.contract.get_player(0);
    }
}
