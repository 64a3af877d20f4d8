use near_sdk::{Promise, PromiseError};

use common::selection;
use common::types::RandomWord;

use crate::*;

#[near_bindgen]
impl Contract {
    /// Randomness delivery from the coordinator. The winner is selected
    /// here, but pool, timing gate and state commit only once the prize
    /// transfer resolves, so a failed payout leaves the draw retryable.
    pub fn fulfill_random_words(&mut self, request_id: U64, random_words: Vec<RandomWord>) {
        if env::predecessor_account_id() != self.vrf_coordinator {
            panic!("{}", RaffleError::OnlyCoordinator);
        }

        let pending = match &self.phase {
            DrawPhase::Drawing { request_id } => *request_id,
            _ => panic!("{}", RaffleError::UnknownRequest),
        };
        if pending != request_id.0 {
            panic!("{}", RaffleError::UnknownRequest);
        }

        let word = random_words
            .first()
            .unwrap_or_else(|| panic!("{}", RaffleError::NoRandomWords));

        let index = selection::winning_index(word, self.players.len());
        let winner = self.players.get(index).unwrap();
        let prize = self.prize_pool;

        self.phase = DrawPhase::Paying {
            request_id: pending,
            winner: winner.clone(),
            prize,
        };

        Promise::new(winner)
            .transfer(prize)
            .then(this_contract::on_prize_paid(
                env::current_account_id(),
                0,
                gas::ON_PRIZE_PAID,
            ));
    }

    #[private]
    pub fn on_prize_paid(&mut self, #[callback_result] call_result: Result<(), PromiseError>) {
        let (request_id, winner, prize) = match &self.phase {
            DrawPhase::Paying {
                request_id,
                winner,
                prize,
            } => (*request_id, winner.clone(), *prize),
            _ => panic!("no prize transfer in flight"),
        };

        match call_result {
            Ok(()) => {
                self.players.clear();
                self.prize_pool = 0;
                self.last_draw_ms = env::block_timestamp_ms();
                self.recent_winner = Some(winner.clone());
                self.phase = DrawPhase::Open;
                events::winner_picked(&winner, prize);
            }
            Err(err) => {
                // keep the request pending so the same id can be redelivered
                log!("prize transfer failed: {:?}", err);
                self.phase = DrawPhase::Drawing { request_id };
                events::prize_transfer_failed(&winner, prize);
            }
        }
    }
}
