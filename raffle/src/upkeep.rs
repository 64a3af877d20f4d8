use near_sdk::PromiseError;

use crate::*;

#[near_bindgen]
impl Contract {
    /// Upkeep eligibility. Read-only, callable by anyone; the keeper is
    /// expected to poll this before committing gas to `perform_upkeep`.
    pub fn check_upkeep(&self) -> bool {
        let is_open = self.phase == DrawPhase::Open;
        let interval_elapsed =
            env::block_timestamp_ms() >= self.last_draw_ms + self.interval_ms;
        let has_players = !self.players.is_empty();
        let has_balance = self.prize_pool > 0;

        return is_open && interval_elapsed && has_players && has_balance;
    }

    /// Starts a draw. Conditions are re-validated here, a stale
    /// `check_upkeep` read from the trigger is never trusted.
    pub fn perform_upkeep(&mut self) {
        if !self.check_upkeep() {
            panic!("{}", RaffleError::UpkeepNotNeeded);
        }

        self.phase = DrawPhase::Requesting;

        ext_vrf::request_random_words(
            U64(self.subscription_id),
            Base64VecU8(self.gas_lane.clone()),
            REQUEST_CONFIRMATIONS,
            U64(self.callback_gas_limit),
            NUM_WORDS,
            self.vrf_coordinator.clone(),
            0,
            gas::REQUEST_RANDOM_WORDS,
        )
        .then(this_contract::on_random_words_requested(
            env::current_account_id(),
            0,
            gas::ON_RANDOM_WORDS_REQUESTED,
        ));
    }

    #[private]
    pub fn on_random_words_requested(
        &mut self,
        #[callback_result] call_result: Result<U64, PromiseError>,
    ) {
        assert_eq!(
            self.phase,
            DrawPhase::Requesting,
            "no randomness request in flight"
        );

        match call_result {
            Ok(request_id) => {
                self.phase = DrawPhase::Drawing {
                    request_id: request_id.0,
                };
                events::randomness_requested(request_id.0);
            }
            Err(err) => {
                // a rejected request must not brick the raffle
                log!("randomness request failed: {:?}", err);
                self.phase = DrawPhase::Open;
            }
        }
    }
}
