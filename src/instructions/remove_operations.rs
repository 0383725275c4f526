use anchor_lang::prelude::*;

use crate::{
    constants::{ADDRESS_REGISTRY_SEED, REGISTRY_ENTRY_SEED},
    events::{AddressRemoved, RegistryCleared},
    state::{Registry, RegistryEntry},
    utils::assert_owner,
};

/// Remove a single address from the registry.
/// Requires the registry owner.
#[derive(Accounts)]
#[instruction(addr: Pubkey)]
pub struct RemoveAddress<'info> {
    /// Must be the registry owner
    pub authority: Signer<'info>,

    /// The `Registry` the address is removed from
    /// # PDA Seeds
    /// - `ADDRESS_REGISTRY_SEED`
    /// - The registry owner's address
    #[account(
        mut,
        seeds = [ADDRESS_REGISTRY_SEED, registry.owner.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// The `RegistryEntry` for `addr`
    /// # PDA Seeds
    /// - `REGISTRY_ENTRY_SEED`
    /// - The registry address
    /// - `addr`
    #[account(
        mut,
        seeds = [REGISTRY_ENTRY_SEED, registry.key().as_ref(), addr.as_ref()],
        bump = entry.bump,
    )]
    pub entry: Account<'info, RegistryEntry>,

    /// The entry before `addr`, required unless `addr` is the head
    #[account(
        mut,
        seeds = [REGISTRY_ENTRY_SEED, registry.key().as_ref(), entry.prev.as_ref()],
        bump
    )]
    pub prev_entry: Option<Account<'info, RegistryEntry>>,

    /// The entry after `addr`, required unless `addr` is the tail
    #[account(
        mut,
        seeds = [REGISTRY_ENTRY_SEED, registry.key().as_ref(), entry.next.as_ref()],
        bump
    )]
    pub next_entry: Option<Account<'info, RegistryEntry>>,
}

impl<'info> RemoveAddress<'info> {
    /// Unlink `addr` from the registry.
    /// The entry account stays allocated as a dead entry.
    /// # Arguments
    /// * `addr` - The address to remove
    /// # Returns
    /// * `Result<()>` - Ok if the address is successfully removed, Err otherwise
    /// # Errors
    /// * `RegistryError::Unauthorized` - If the signer is not the registry owner
    /// * `RegistryError::NotFound` - If `addr` is not registered
    /// * `RegistryError::NeighborEntryNotProvided` - If a required neighbour entry was not passed
    pub fn remove_address(&mut self, addr: Pubkey) -> Result<()> {
        assert_owner(&self.authority.key(), &self.registry.owner)?;

        self.registry.unlink(
            &mut self.entry,
            self.prev_entry.as_deref_mut(),
            self.next_entry.as_deref_mut(),
        )?;

        emit!(AddressRemoved {
            registry: self.registry.key(),
            addr,
            removed_by: self.authority.key(),
        });

        Ok(())
    }
}

/// Remove every address from the registry at once.
/// Requires the registry owner.
#[derive(Accounts)]
pub struct RemoveAll<'info> {
    /// Must be the registry owner
    pub authority: Signer<'info>,

    /// The `Registry` being cleared
    /// # PDA Seeds
    /// - `ADDRESS_REGISTRY_SEED`
    /// - The registry owner's address
    #[account(
        mut,
        seeds = [ADDRESS_REGISTRY_SEED, registry.owner.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}

impl<'info> RemoveAll<'info> {
    /// Clear the registry by starting a new epoch
    /// # Returns
    /// * `Result<()>` - Ok if the registry is cleared, Err otherwise
    /// # Errors
    /// * `RegistryError::Unauthorized` - If the signer is not the registry owner
    /// * `RegistryError::MathOverflow` - If the epoch counter would wrap
    pub fn remove_all(&mut self) -> Result<()> {
        assert_owner(&self.authority.key(), &self.registry.owner)?;

        let removed = self.registry.len;
        self.registry.clear()?;

        msg!(
            "Registry cleared: {} addresses removed, epoch {}",
            removed,
            self.registry.epoch
        );

        emit!(RegistryCleared {
            registry: self.registry.key(),
            epoch: self.registry.epoch,
            cleared_by: self.authority.key(),
        });

        Ok(())
    }
}
