use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::{LookupMap, UnorderedMap};
use near_sdk::json_types::{Base64VecU8, U128, U64};
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::{env, near_bindgen, AccountId, Balance, Gas, PanicOnDefault};

use common::types::{RandomWord, RequestId, SubscriptionId};
use error::CoordinatorError;
use utils::gas;
use utils::storage_keys::StorageKeys;

pub mod external;
pub use crate::external::*;

mod error;
mod events;
mod utils;

#[cfg(test)]
mod test_utils;

/// Prepaid account that covers fulfillment fees for its consumers.
#[derive(BorshDeserialize, BorshSerialize)]
pub struct Subscription {
    pub owner: AccountId,
    pub balance: Balance,
    pub consumers: Vec<AccountId>,
}

/// An issued, not yet fulfilled randomness request.
#[derive(BorshDeserialize, BorshSerialize)]
pub struct RandomnessRequest {
    pub subscription_id: SubscriptionId,
    pub consumer: AccountId,
    pub gas_lane: Vec<u8>,
    pub request_confirmations: u8,
    pub callback_gas_limit: u64,
    pub num_words: u32,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct SubscriptionView {
    pub owner: AccountId,
    pub balance: U128,
    pub consumers: Vec<AccountId>,
}

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct Contract {
    base_fee: Balance,
    subscriptions: UnorderedMap<SubscriptionId, Subscription>,
    requests: LookupMap<RequestId, RandomnessRequest>,
    next_subscription_id: SubscriptionId,
    next_request_id: RequestId,
}

#[near_bindgen]
impl Contract {
    #[init]
    pub fn new(base_fee: U128) -> Self {
        Self {
            base_fee: base_fee.0,
            subscriptions: UnorderedMap::new(StorageKeys::Subscriptions),
            requests: LookupMap::new(StorageKeys::Requests),
            // ids start at 1 so a valid id is always non-zero
            next_subscription_id: 1,
            next_request_id: 1,
        }
    }

    pub fn create_subscription(&mut self) -> U64 {
        let subscription_id = self.next_subscription_id;
        self.next_subscription_id += 1;

        let owner = env::predecessor_account_id();
        self.subscriptions.insert(
            &subscription_id,
            &Subscription {
                owner: owner.clone(),
                balance: 0,
                consumers: Vec::new(),
            },
        );
        events::subscription_created(subscription_id, &owner);

        return U64(subscription_id);
    }

    #[payable]
    pub fn fund_subscription(&mut self, subscription_id: U64) {
        let mut subscription = self.get_subscription_or_panic(subscription_id.0);
        let amount = env::attached_deposit();
        subscription.balance += amount;
        self.subscriptions.insert(&subscription_id.0, &subscription);

        events::subscription_funded(subscription_id.0, amount, subscription.balance);
    }

    pub fn add_consumer(&mut self, subscription_id: U64, consumer: AccountId) {
        let mut subscription = self.get_subscription_or_panic(subscription_id.0);
        if subscription.owner != env::predecessor_account_id() {
            panic!("{}", CoordinatorError::OnlySubscriptionOwner);
        }

        if !subscription.consumers.contains(&consumer) {
            subscription.consumers.push(consumer.clone());
            self.subscriptions.insert(&subscription_id.0, &subscription);
            events::consumer_added(subscription_id.0, &consumer);
        }
    }

    pub fn remove_consumer(&mut self, subscription_id: U64, consumer: AccountId) {
        let mut subscription = self.get_subscription_or_panic(subscription_id.0);
        if subscription.owner != env::predecessor_account_id() {
            panic!("{}", CoordinatorError::OnlySubscriptionOwner);
        }

        subscription.consumers.retain(|el| el != &consumer);
        self.subscriptions.insert(&subscription_id.0, &subscription);
    }

    /// Issues a request id to a registered consumer. The id is the
    /// synchronous result the consumer's promise callback reads; the
    /// words arrive later through `fulfill_random_words`.
    pub fn request_random_words(
        &mut self,
        subscription_id: U64,
        gas_lane: Base64VecU8,
        request_confirmations: u8,
        callback_gas_limit: U64,
        num_words: u32,
    ) -> U64 {
        let subscription = self.get_subscription_or_panic(subscription_id.0);
        let consumer = env::predecessor_account_id();
        if !subscription.consumers.contains(&consumer) {
            panic!("{}", CoordinatorError::InvalidConsumer);
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;

        self.requests.insert(
            &request_id,
            &RandomnessRequest {
                subscription_id: subscription_id.0,
                consumer: consumer.clone(),
                gas_lane: gas_lane.0,
                request_confirmations,
                callback_gas_limit: callback_gas_limit.0,
                num_words,
            },
        );
        events::random_words_requested(request_id, subscription_id.0, &consumer);

        return U64(request_id);
    }

    /// Fulfills a pending request with words derived from its id.
    /// Anyone may drive this; on a live network it is the keeper that
    /// notices an open request and delivers it.
    pub fn fulfill_random_words(&mut self, request_id: U64, consumer: AccountId) {
        let request = self.take_request_and_charge(request_id.0, &consumer);

        let words = (0..request.num_words)
            .map(|idx| utils::derive_word(request_id.0, idx))
            .collect::<Vec<RandomWord>>();

        self.deliver(request_id.0, &request, words);
    }

    /// Same as `fulfill_random_words` but with caller-chosen words.
    pub fn fulfill_random_words_with_override(
        &mut self,
        request_id: U64,
        consumer: AccountId,
        words: Vec<RandomWord>,
    ) {
        let request = self.take_request_and_charge(request_id.0, &consumer);
        if words.len() != request.num_words as usize {
            panic!("{}", CoordinatorError::WordCountMismatch);
        }

        self.deliver(request_id.0, &request, words);
    }

    #[private]
    pub fn on_random_words_delivered(
        &mut self,
        request_id: U64,
        #[callback_result] call_result: Result<(), near_sdk::PromiseError>,
    ) {
        events::random_words_fulfilled(request_id.0, call_result.is_ok());
    }

    pub fn get_subscription(&self, subscription_id: U64) -> SubscriptionView {
        let subscription = self.get_subscription_or_panic(subscription_id.0);

        SubscriptionView {
            owner: subscription.owner,
            balance: U128(subscription.balance),
            consumers: subscription.consumers,
        }
    }

    pub fn get_base_fee(&self) -> U128 {
        U128(self.base_fee)
    }

    pub fn pending_request_exists(&self, request_id: U64) -> bool {
        self.requests.contains_key(&request_id.0)
    }
}

impl Contract {
    fn get_subscription_or_panic(&self, subscription_id: SubscriptionId) -> Subscription {
        self.subscriptions
            .get(&subscription_id)
            .unwrap_or_else(|| panic!("{}", CoordinatorError::InvalidSubscription))
    }

    fn take_request_and_charge(
        &mut self,
        request_id: RequestId,
        consumer: &AccountId,
    ) -> RandomnessRequest {
        let request = self
            .requests
            .remove(&request_id)
            .unwrap_or_else(|| panic!("{}", CoordinatorError::NonexistentRequest));
        if &request.consumer != consumer {
            panic!("{}", CoordinatorError::InvalidConsumer);
        }

        let mut subscription = self.get_subscription_or_panic(request.subscription_id);
        if subscription.balance < self.base_fee {
            panic!("{}", CoordinatorError::InsufficientSubscriptionBalance);
        }
        subscription.balance -= self.base_fee;
        self.subscriptions.insert(&request.subscription_id, &subscription);

        return request;
    }

    fn deliver(&self, request_id: RequestId, request: &RandomnessRequest, words: Vec<RandomWord>) {
        ext_consumer::fulfill_random_words(
            U64(request_id),
            words,
            request.consumer.clone(),
            0,
            Gas(request.callback_gas_limit),
        )
        .then(this_contract::on_random_words_delivered(
            U64(request_id),
            env::current_account_id(),
            0,
            gas::ON_RANDOM_WORDS_DELIVERED,
        ));
    }
}
