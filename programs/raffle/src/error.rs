use anchor_lang::prelude::*;

#[error_code]
pub enum RaffleError {
    // Entry
    #[msg("Payment is below the entrance fee")]
    InsufficientPayment,
    #[msg("Raffle is not open for entries")]
    RoundNotOpen,
    #[msg("Raffle has reached its player capacity")]
    RaffleFull,

    // Resolution
    #[msg("Resolution is not due yet")]
    ResolutionNotDue,
    #[msg("Randomness result does not match the pending request")]
    UnknownRequest,
    #[msg("Prize payout could not be completed")]
    PayoutFailed,

    // Oracle
    #[msg("Randomness account is not owned by the configured oracle")]
    InvalidRandomnessAccount,
    #[msg("Randomness account belongs to another oracle queue")]
    InvalidOracleQueue,
    #[msg("Randomness was not committed in the previous slot")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness has not been revealed yet")]
    RandomnessNotResolved,
    #[msg("Randomness account was re-committed after the request")]
    RandomnessRecommitted,

    // Config / queries
    #[msg("Raffle configuration values must be non-zero")]
    InvalidConfig,
    #[msg("No player at that index")]
    PlayerIndexOutOfRange,

    // Math
    #[msg("Math overflow")]
    MathOverflow,
}
