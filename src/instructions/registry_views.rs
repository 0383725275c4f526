use anchor_lang::prelude::*;

use crate::{
    constants::{ADDRESS_REGISTRY_SEED, REGISTRY_ENTRY_SEED},
    state::{Registry, RegistryEntry},
};

/// Read-only lookup of a single address
#[derive(Accounts)]
#[instruction(addr: Pubkey)]
pub struct RegistryLookup<'info> {
    /// The `Registry` being queried
    /// # PDA Seeds
    /// - `ADDRESS_REGISTRY_SEED`
    /// - The registry owner's address
    #[account(
        seeds = [ADDRESS_REGISTRY_SEED, registry.owner.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// The entry PDA for `addr`, which may not exist
    /// # PDA Seeds
    /// - `REGISTRY_ENTRY_SEED`
    /// - The registry address
    /// - `addr`
    ///
    /// CHECK: Seeds constraint validates PDA address, contents are checked by `RegistryEntry::load`
    #[account(
        seeds = [REGISTRY_ENTRY_SEED, registry.key().as_ref(), addr.as_ref()],
        bump
    )]
    pub entry: UncheckedAccount<'info>,
}

impl<'info> RegistryLookup<'info> {
    /// Check whether `addr` is registered
    /// # Arguments
    /// * `addr` - The address to look up
    /// # Returns
    /// * `Result<bool>` - True if `addr` is live
    pub fn is_exist(&self, addr: Pubkey) -> Result<bool> {
        let entry = RegistryEntry::load(&self.entry)?;

        Ok(self.registry.contains(&addr, entry.as_ref()))
    }

    /// Get the address registered before `addr`, in iteration order
    /// # Arguments
    /// * `addr` - The current cursor, the zero address to start iterating
    /// # Returns
    /// * `Result<Pubkey>` - The next address, the zero address at the end of the list
    pub fn get_next_address(&self, addr: Pubkey) -> Result<Pubkey> {
        let entry = RegistryEntry::load(&self.entry)?;

        Ok(self.registry.next_after(&addr, entry.as_ref()))
    }
}

/// Read-only listing of every registered address
///
/// Entry accounts are passed via remaining_accounts, in any order.
#[derive(Accounts)]
pub struct ListAddresses<'info> {
    /// The `Registry` being listed
    /// # PDA Seeds
    /// - `ADDRESS_REGISTRY_SEED`
    /// - The registry owner's address
    #[account(
        seeds = [ADDRESS_REGISTRY_SEED, registry.owner.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}

impl<'info> ListAddresses<'info> {
    /// Walk the registry from head to tail
    /// # Arguments
    /// * `remaining_accounts` - The entry accounts of every live address
    /// # Returns
    /// * `Result<Vec<Pubkey>>` - All live addresses, most recently registered first
    /// # Errors
    /// * `RegistryError::TooManyAddresses` - If the result would not fit in return data
    /// * `RegistryError::ProgramMismatch` - If an account is not owned by the program
    /// * `RegistryError::RegistryMismatch` - If an entry belongs to another registry
    /// * `RegistryError::MissingEntryAccount` - If a live entry was not passed
    pub fn get_all_addresses(
        &self,
        remaining_accounts: &'info [AccountInfo<'info>],
    ) -> Result<Vec<Pubkey>> {
        let entries = remaining_accounts
            .iter()
            .map(RegistryEntry::load_required)
            .collect::<Result<Vec<_>>>()?;

        self.registry
            .list_addresses(&self.registry.key(), entries)
    }
}
