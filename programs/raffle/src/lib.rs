use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use state::{RaffleConfig, RaffleSnapshot, UpkeepStatus};

declare_id!("EhqFDKNKma7h48vd4wN9hbvCB4DiFztvJbSWqxATgUhU");

#[program]
pub mod raffle {
    use super::*;

    pub fn initialize_raffle(ctx: Context<InitializeRaffle>, config: RaffleConfig) -> Result<()> {
        process_initialize_raffle(ctx, config)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        process_enter_raffle(ctx, amount)
    }

    /// Whether `perform_upkeep` would succeed now, with the reasons.
    pub fn check_upkeep(ctx: Context<ReadRaffle>) -> Result<UpkeepStatus> {
        process_check_upkeep(ctx)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
        process_perform_upkeep(ctx)
    }

    /// Settles the pending request once Switchboard has revealed it.
    pub fn fulfill_randomness(ctx: Context<FulfillRandomness>) -> Result<()> {
        process_fulfill_randomness(ctx)
    }

    pub fn get_raffle(ctx: Context<ReadRaffle>) -> Result<RaffleSnapshot> {
        process_get_raffle(ctx)
    }

    pub fn get_player(ctx: Context<ReadRaffle>, index: u64) -> Result<Pubkey> {
        process_get_player(ctx, index)
    }
}
