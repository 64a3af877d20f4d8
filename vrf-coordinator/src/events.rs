use near_sdk::json_types::U128;
use near_sdk::serde::{Serialize};
use near_sdk::serde_json::json;
use near_sdk::{log, AccountId, Balance};

use common::types::{RequestId, SubscriptionId};

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct SubscriptionEvent<'a> {
    pub subscription_id: SubscriptionId,
    pub owner: &'a AccountId,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct FundingEvent {
    pub subscription_id: SubscriptionId,
    pub amount: U128,
    pub balance: U128,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct ConsumerEvent<'a> {
    pub subscription_id: SubscriptionId,
    pub consumer: &'a AccountId,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct RequestEvent<'a> {
    pub request_id: RequestId,
    pub subscription_id: SubscriptionId,
    pub consumer: &'a AccountId,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct FulfillmentEvent {
    pub request_id: RequestId,
    pub success: bool,
}

fn log_event<T: Serialize>(event: &str, data: T) {
    let event = json!({
        "standard": "vrf-coordinator",
        "version": "1.0.0",
        "event": event,
        "data": [data]
    });

    log!("EVENT_JSON:{}", event.to_string());
}

pub fn subscription_created(subscription_id: SubscriptionId, owner: &AccountId) {
    log_event(
        "subscription_created",
        SubscriptionEvent {
            subscription_id,
            owner: &owner,
        },
    );
}

pub fn subscription_funded(subscription_id: SubscriptionId, amount: Balance, balance: Balance) {
    log_event(
        "subscription_funded",
        FundingEvent {
            subscription_id,
            amount: U128(amount),
            balance: U128(balance),
        },
    );
}

pub fn consumer_added(subscription_id: SubscriptionId, consumer: &AccountId) {
    log_event(
        "consumer_added",
        ConsumerEvent {
            subscription_id,
            consumer: &consumer,
        },
    );
}

pub fn random_words_requested(
    request_id: RequestId,
    subscription_id: SubscriptionId,
    consumer: &AccountId,
) {
    log_event(
        "random_words_requested",
        RequestEvent {
            request_id,
            subscription_id,
            consumer: &consumer,
        },
    );
}

pub fn random_words_fulfilled(request_id: RequestId, success: bool) {
    log_event(
        "random_words_fulfilled",
        FulfillmentEvent {
            request_id,
            success,
        },
    );
}
