use crate::*;
use near_sdk::{ext_contract, PromiseError};
use common::types::RandomWord;

// Callback
#[ext_contract(this_contract)]
pub trait ExtSelf {
    fn on_random_words_delivered(
        &mut self,
        request_id: U64,
        #[callback_result] call_result: Result<(), PromiseError>,
    );
}

#[ext_contract(ext_consumer)]
pub trait VrfConsumer {
    fn fulfill_random_words(&mut self, request_id: U64, random_words: Vec<RandomWord>);
}
