use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::{AccountId, Balance};

use common::types::RequestId;

/// Lifecycle of a single draw cycle.
#[derive(BorshDeserialize, BorshSerialize, Clone, Debug, PartialEq)]
pub enum DrawPhase {
    /// Accepting entries.
    Open,
    /// Randomness request issued, id not yet returned by the coordinator.
    Requesting,
    /// Waiting for the coordinator to deliver random words.
    Drawing { request_id: RequestId },
    /// Prize transfer to the winner is in flight; nothing committed yet.
    Paying {
        request_id: RequestId,
        winner: AccountId,
        prize: Balance,
    },
}

/// Externally visible raffle state.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub enum RaffleState {
    Open,
    Calculating,
}

impl From<&DrawPhase> for RaffleState {
    fn from(phase: &DrawPhase) -> Self {
        match phase {
            DrawPhase::Open => RaffleState::Open,
            _ => RaffleState::Calculating,
        }
    }
}
