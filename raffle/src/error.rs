use thiserror::Error;

/// Errors that may be raised by the raffle contract
#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum RaffleError {
    /// Attached deposit does not cover the entrance fee
    #[error("attached deposit is below the entrance fee")]
    InsufficientPayment,

    /// A draw is in flight and entries are rejected
    #[error("raffle is not open")]
    RaffleNotOpen,

    /// Upkeep conditions do not hold at call time
    #[error("upkeep is not needed")]
    UpkeepNotNeeded,

    /// Delivered request id does not match the pending request
    #[error("nonexistent request")]
    UnknownRequest,

    /// Randomness may only be delivered by the configured coordinator
    #[error("only the VRF coordinator can fulfill randomness")]
    OnlyCoordinator,

    /// Fulfillment carried an empty word list
    #[error("fulfillment delivered no random words")]
    NoRandomWords,
}
