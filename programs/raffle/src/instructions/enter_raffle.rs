use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::RAFFLE_SEED;
use crate::events::RaffleEntered;
use crate::state::Raffle;

/// Accounts required to buy an entry.
#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    /// The account paying for the entry. It is also the entry's owner.
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,

    pub system_program: Program<'info, System>,
}

/// Buys one entry for the signer.
///
/// Steps performed:
/// 1. Record the entry (fee and round state are checked first).
/// 2. Transfer `amount` lamports from the player to the raffle PDA.
///
/// # Arguments
/// * `ctx` - Context containing EnterRaffle accounts
/// * `amount` - Lamports paid, at least the entrance fee
pub fn process_enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    let num_players = ctx.accounts.raffle.enter(player, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.raffle.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!("Player {} entered with {} lamports", player, amount);

    emit!(RaffleEntered {
        round: ctx.accounts.raffle.round,
        player,
        amount,
        num_players,
    });

    Ok(())
}
