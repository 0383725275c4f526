use anchor_lang::prelude::*;

use crate::{
    constants::{ADDRESS_REGISTRY_SEED, REGISTRY_ENTRY_SEED},
    events::AddressRegistered,
    state::{Registry, RegistryEntry},
};

/// Register an address at the head of the registry.
/// Unpermissioned: any signer may register any address.
#[derive(Accounts)]
#[instruction(addr: Pubkey)]
pub struct RegisterAddress<'info> {
    /// Pays for entry account creation
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The `Registry` the address is added to
    /// # PDA Seeds
    /// - `ADDRESS_REGISTRY_SEED`
    /// - The registry owner's address
    #[account(
        mut,
        seeds = [ADDRESS_REGISTRY_SEED, registry.owner.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// The `RegistryEntry` for `addr`, created on first registration and
    /// reused when a dead entry is registered again
    /// # PDA Seeds
    /// - `REGISTRY_ENTRY_SEED`
    /// - The registry address
    /// - `addr`
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + RegistryEntry::INIT_SPACE,
        seeds = [REGISTRY_ENTRY_SEED, registry.key().as_ref(), addr.as_ref()],
        bump
    )]
    pub entry: Account<'info, RegistryEntry>,

    /// The entry of the current head, required unless the registry is empty
    /// # PDA Seeds
    /// - `REGISTRY_ENTRY_SEED`
    /// - The registry address
    /// - `registry.head`
    #[account(
        mut,
        seeds = [REGISTRY_ENTRY_SEED, registry.key().as_ref(), registry.head.as_ref()],
        bump
    )]
    pub head_entry: Option<Account<'info, RegistryEntry>>,

    /// The system program
    pub system_program: Program<'info, System>,
}

impl<'info> RegisterAddress<'info> {
    /// Register `addr` as the new head of the registry
    /// # Arguments
    /// * `addr` - The address to register
    /// * `bumps` - The PDA bumps for account derivation
    /// # Returns
    /// * `Result<()>` - Ok if the address is successfully registered, Err otherwise
    /// # Errors
    /// * `RegistryError::ZeroAddress` - If `addr` is the zero address
    /// * `RegistryError::DuplicateEntry` - If `addr` is already registered
    /// * `RegistryError::HeadEntryNotProvided` - If the registry is not empty and no head entry was passed
    pub fn register_address(
        &mut self,
        addr: Pubkey,
        bumps: &RegisterAddressBumps,
    ) -> Result<()> {
        let registry_key = self.registry.key();

        self.registry.register_entry(
            registry_key,
            addr,
            self.payer.key(),
            bumps.entry,
            &mut self.entry,
            self.head_entry.as_deref_mut(),
        )?;

        emit!(AddressRegistered {
            registry: registry_key,
            addr,
            registered_by: self.payer.key(),
        });

        Ok(())
    }
}
