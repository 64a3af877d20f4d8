use crate::*;
use near_sdk::{ext_contract, PromiseError};

// Callback
#[ext_contract(this_contract)]
pub trait ExtSelf {
    fn on_random_words_requested(&mut self, #[callback_result] call_result: Result<U64, PromiseError>);
    fn on_prize_paid(&mut self, #[callback_result] call_result: Result<(), PromiseError>);
}

#[ext_contract(ext_vrf)]
pub trait ExtVrfCoordinator {
    fn request_random_words(
        &mut self,
        subscription_id: U64,
        gas_lane: Base64VecU8,
        request_confirmations: u8,
        callback_gas_limit: U64,
        num_words: u32,
    ) -> U64;
}
