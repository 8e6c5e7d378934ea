use anchor_lang::prelude::*;

use crate::constants::RAFFLE_SEED;
use crate::state::{Raffle, RaffleConfig};

/// Accounts required to create the raffle.
/// The raffle PDA holds the configuration, the round and the prize pot.
#[derive(Accounts)]
pub struct InitializeRaffle<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The Raffle state account.
    #[account(
        init,
        payer = authority,
        space = 8 + Raffle::INIT_SPACE,
        seeds = [RAFFLE_SEED],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Creates the raffle with an immutable configuration and opens the first round.
///
/// # Arguments
/// * `ctx` - Context holding the InitializeRaffle accounts
/// * `config` - Entrance fee, interval and oracle parameters
pub fn process_initialize_raffle(ctx: Context<InitializeRaffle>, config: RaffleConfig) -> Result<()> {
    let clock = Clock::get()?;
    let raffle = Raffle::new(
        config,
        ctx.accounts.authority.key(),
        ctx.bumps.raffle,
        clock.unix_timestamp,
    )?;
    ctx.accounts.raffle.set_inner(raffle);

    msg!(
        "Raffle initialized: fee={} lamports, interval={}s, queue={}",
        config.entrance_fee,
        config.interval,
        config.oracle_queue
    );

    Ok(())
}
