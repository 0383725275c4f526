use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{
    constants::{ADDRESS_REGISTRY_SEED, REGISTRY_ENTRY_SEED},
    errors::RegistryError,
    state::{Registry, RegistryEntry},
};

/// Reclaim the rent held by an entry that is no longer in the registry.
///
/// Entries stay allocated after `remove_address` and `remove_all`; anyone may
/// close them, but the lamports always go back to whoever funded the entry.
#[derive(Accounts)]
#[instruction(addr: Pubkey)]
pub struct CloseRegistryEntry<'info> {
    /// Submits the close, needs no relation to the registry
    pub closer: Signer<'info>,

    /// The `Registry` the entry was linked into
    /// # PDA Seeds
    /// - `ADDRESS_REGISTRY_SEED`
    /// - The registry owner's address
    #[account(
        seeds = [ADDRESS_REGISTRY_SEED, registry.owner.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// The dead entry for `addr`
    /// # PDA Seeds
    /// - `REGISTRY_ENTRY_SEED`
    /// - The registry address
    /// - `addr`
    #[account(
        mut,
        close = recipient,
        seeds = [REGISTRY_ENTRY_SEED, registry.key().as_ref(), addr.as_ref()],
        bump = entry.bump,
    )]
    pub entry: Account<'info, RegistryEntry>,

    /// Gets the reclaimed lamports, pinned to `entry.rent_payer`
    ///
    /// CHECK: Compared with the stored rent payer
    #[account(
        mut,
        address = entry.rent_payer @ RegistryError::InvalidRecipient
    )]
    pub recipient: UncheckedAccount<'info>,

    /// The system program
    pub system_program: Program<'info, System>,
}

impl<'info> CloseRegistryEntry<'info> {
    /// Refuse the close while the address is still registered
    /// # Returns
    /// * `Result<()>` - Ok if the entry is dead, Err otherwise
    /// # Errors
    /// * `RegistryError::EntryStillLive` - If the address is still registered
    pub fn close_registry_entry(&mut self) -> Result<()> {
        self.registry.ensure_closable(
            &self.registry.key(),
            &self.entry,
            &self.recipient.key(),
        )?;

        msg!("Registry entry closed: {}", self.entry.key());

        Ok(())
    }
}

/// Reclaim the rent of several dead entries funded by the same payer.
///
/// The entries come in through remaining_accounts, all writable, all from
/// `registry` and all paid for by `recipient`. A single live or foreign entry
/// fails the whole batch.
#[derive(Accounts)]
pub struct BatchCloseRegistryEntries<'info> {
    /// Submits the close, needs no relation to the registry
    pub closer: Signer<'info>,

    /// The `Registry` the entries were linked into
    /// # PDA Seeds
    /// - `ADDRESS_REGISTRY_SEED`
    /// - The registry owner's address
    #[account(
        seeds = [ADDRESS_REGISTRY_SEED, registry.owner.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// The payer that funded every entry in the batch
    #[account(mut)]
    pub recipient: SystemAccount<'info>,

    /// The system program
    pub system_program: Program<'info, System>,
}

impl<'info> BatchCloseRegistryEntries<'info> {
    /// Drain, shrink and hand back each entry account to the system program
    /// # Arguments
    /// * `remaining_accounts` - The dead entry accounts
    /// # Returns
    /// * `Result<()>` - Ok if every entry was closed, Err otherwise
    /// # Errors
    /// * `RegistryError::ProgramMismatch` - If an account is not owned by the program
    /// * `RegistryError::RegistryMismatch` - If an entry was linked into another registry
    /// * `RegistryError::InvalidRecipient` - If `recipient` did not fund an entry
    /// * `RegistryError::EntryStillLive` - If an address is still registered
    pub fn batch_close_registry_entries(
        &mut self,
        remaining_accounts: &'info [AccountInfo<'info>],
    ) -> Result<()> {
        let registry_key = self.registry.key();
        let recipient_key = self.recipient.key();

        for entry_info in remaining_accounts.iter() {
            let entry = RegistryEntry::load_required(entry_info)?;
            self.registry
                .ensure_closable(&registry_key, &entry, &recipient_key)?;

            let reclaimed = self
                .recipient
                .lamports()
                .checked_add(entry_info.lamports())
                .ok_or(RegistryError::MathOverflow)?;
            **self.recipient.to_account_info().lamports.borrow_mut() = reclaimed;
            **entry_info.lamports.borrow_mut() = 0;

            entry_info.resize(0)?;
            entry_info.assign(&system_program::ID);

            msg!("Registry entry closed: {}", entry_info.key());
        }

        Ok(())
    }
}
