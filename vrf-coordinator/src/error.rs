use thiserror::Error;

/// Errors that may be raised by the coordinator
#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum CoordinatorError {
    /// Subscription id is not registered
    #[error("invalid subscription")]
    InvalidSubscription,

    /// Caller is not a consumer of the subscription
    #[error("invalid consumer")]
    InvalidConsumer,

    /// Subscription management is restricted to its owner
    #[error("only the subscription owner can do this")]
    OnlySubscriptionOwner,

    /// Request id was never issued or is already fulfilled
    #[error("nonexistent request")]
    NonexistentRequest,

    /// Subscription cannot cover the fulfillment fee
    #[error("insufficient subscription balance")]
    InsufficientSubscriptionBalance,

    /// Overridden word list does not match the requested word count
    #[error("word count does not match the request")]
    WordCountMismatch,
}
