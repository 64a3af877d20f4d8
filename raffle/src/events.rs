use near_sdk::json_types::U128;
use near_sdk::serde::{Serialize};
use near_sdk::serde_json::json;
use near_sdk::{log, AccountId, Balance};

use common::types::RequestId;

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct EntryEvent<'a> {
    pub player: &'a AccountId,
    pub amount: U128,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct RequestEvent {
    pub request_id: RequestId,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct WinnerEvent<'a> {
    pub winner: &'a AccountId,
    pub prize: U128,
}

fn log_event<T: Serialize>(event: &str, data: T) {
    let event = json!({
        "standard": "raffle",
        "version": "1.0.0",
        "event": event,
        "data": [data]
    });

    log!("EVENT_JSON:{}", event.to_string());
}

pub fn raffle_entered(player: &AccountId, amount: Balance) {
    log_event(
        "raffle_entered",
        EntryEvent {
            player: &player,
            amount: U128(amount),
        },
    );
}

pub fn randomness_requested(request_id: RequestId) {
    log_event("randomness_requested", RequestEvent { request_id });
}

pub fn winner_picked(winner: &AccountId, prize: Balance) {
    log_event(
        "winner_picked",
        WinnerEvent {
            winner: &winner,
            prize: U128(prize),
        },
    );
}

pub fn prize_transfer_failed(winner: &AccountId, prize: Balance) {
    log_event(
        "prize_transfer_failed",
        WinnerEvent {
            winner: &winner,
            prize: U128(prize),
        },
    );
}
