use anchor_lang::prelude::*;

use crate::constants::RAFFLE_SEED;
use crate::state::{Raffle, RaffleSnapshot, UpkeepStatus};

/// Read-only access to the raffle. Values come back as instruction return data.
#[derive(Accounts)]
pub struct ReadRaffle<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}

pub fn process_check_upkeep(ctx: Context<ReadRaffle>) -> Result<UpkeepStatus> {
    let clock = Clock::get()?;
    Ok(ctx.accounts.raffle.check_upkeep(clock.unix_timestamp))
}

pub fn process_get_raffle(ctx: Context<ReadRaffle>) -> Result<RaffleSnapshot> {
    Ok(ctx.accounts.raffle.snapshot())
}

pub fn process_get_player(ctx: Context<ReadRaffle>, index: u64) -> Result<Pubkey> {
    Ok(ctx.accounts.raffle.player(index)?)
}
