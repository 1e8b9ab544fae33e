use anchor_lang::prelude::*;

use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for proposing an ownership handover
 *
 * Two-step transfer: the current owner names a pending owner, who must then
 * accept with their own signature. Prevents handing the registry to a key
 * nobody controls.
 *
 * Access Control: Only the current owner
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ProposeOwner<'info> {
    /// The distributor whose ownership is handed over
    #[account(
        mut,
        constraint = owner.key() == distributor.owner @ PeriodDistributorError::OnlyOwner
    )]
    pub distributor: Account<'info, Distributor>,

    /// The current owner
    pub owner: Signer<'info>,
}

/**
 * Account context for accepting an ownership handover
 *
 * Access Control: Only the pending owner recorded by propose_owner
 */
#[event_cpi]
#[derive(Accounts)]
pub struct AcceptOwner<'info> {
    /// The distributor whose ownership is handed over
    #[account(
        mut,
        constraint = new_owner.key() == distributor.pending_owner @ PeriodDistributorError::OnlyPendingOwner
    )]
    pub distributor: Account<'info, Distributor>,

    /// The pending owner accepting the handover
    pub new_owner: Signer<'info>,
}

/// Records the pending owner of a two-step handover
pub fn handle_propose_owner(ctx: Context<ProposeOwner>, new_owner: Pubkey) -> Result<()> {
    require!(
        new_owner != Pubkey::default(),
        PeriodDistributorError::InvalidOwner
    );

    let distributor = &mut ctx.accounts.distributor;
    distributor.pending_owner = new_owner;

    emit_cpi!(OwnershipTransferStarted {
        distributor: distributor.key(),
        owner: ctx.accounts.owner.key(),
        pending_owner: new_owner,
    });

    Ok(())
}

/// Completes the handover: the pending owner becomes the owner
pub fn handle_accept_owner(ctx: Context<AcceptOwner>) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;

    let previous_owner = distributor.owner;
    distributor.owner = ctx.accounts.new_owner.key();
    distributor.pending_owner = Pubkey::default();

    emit_cpi!(OwnershipTransferred {
        distributor: distributor.key(),
        previous_owner,
        new_owner: ctx.accounts.new_owner.key(),
    });

    Ok(())
}
