#![allow(unexpected_cfgs)]
#![allow(deprecated)]

use anchor_lang::prelude::*;
mod constants;
mod errors;
mod events;
mod instructions;
pub mod security;
mod state;
mod utils;

use instructions::*;

#[cfg(feature = "devnet")]
declare_id!("6RGQrMbigHYfuDTLKzAog4dtjoja8WRnbWGi9UjuUtyj");
#[cfg(feature = "testnet")]
declare_id!("AMv1Pq1MiBAzeSQKRpqtbgUQjnZYU6f7HddczZkudBCg");
#[cfg(feature = "mainnet")]
declare_id!("FePPx6kmUoSzozt8iC2TyYKqnGfUKNPT2rFQZ4DLDCXa");
#[cfg(not(any(feature = "mainnet", feature = "devnet", feature = "testnet")))]
declare_id!("Hpe1aWFYnw871YK1M2D2fpmu4ygUuuMsBNiCSKL4j32K");

#[program]
pub mod address_registry {
    use super::*;

    /// Initialize an empty registry
    ///
    /// The signing owner is the only account allowed to remove addresses,
    /// and cannot be changed afterwards.
    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        ctx.accounts.initialize_registry(&ctx.bumps)
    }

    /// Register an address at the head of the registry
    ///
    /// The current head entry must be passed unless the registry is empty.
    /// Unpermissioned
    pub fn register_address(ctx: Context<RegisterAddress>, addr: Pubkey) -> Result<()> {
        ctx.accounts.register_address(addr, &ctx.bumps)
    }

    /// Remove an address from the registry
    ///
    /// The neighbouring entries must be passed unless the address is the head or tail.
    /// Signer must be the registry owner
    pub fn remove_address(ctx: Context<RemoveAddress>, addr: Pubkey) -> Result<()> {
        ctx.accounts.remove_address(addr)
    }

    /// Remove every address from the registry
    /// Signer must be the registry owner
    pub fn remove_all(ctx: Context<RemoveAll>) -> Result<()> {
        ctx.accounts.remove_all()
    }

    /// Check whether an address is registered
    pub fn is_exist(ctx: Context<RegistryLookup>, addr: Pubkey) -> Result<bool> {
        ctx.accounts.is_exist(addr)
    }

    /// Get the address that follows `addr`
    ///
    /// Pass the zero address to get the head. The zero address is returned
    /// after the last entry and for unregistered addresses.
    pub fn get_next_address(ctx: Context<RegistryLookup>, addr: Pubkey) -> Result<Pubkey> {
        ctx.accounts.get_next_address(addr)
    }

    /// Get every registered address, most recently registered first
    ///
    /// Entry accounts of all registered addresses are passed via remaining_accounts.
    /// Fails once the registry holds more than `MAX_LISTED_ADDRESSES` (31), the most
    /// that fits in return data; larger registries are walked with `get_next_address`.
    pub fn get_all_addresses<'info>(
        ctx: Context<'_, '_, 'info, 'info, ListAddresses<'info>>,
    ) -> Result<Vec<Pubkey>> {
        ctx.accounts.get_all_addresses(ctx.remaining_accounts)
    }

    /// Close a dead entry account
    ///
    /// The rent from the closed account is returned to the payer that funded it.
    /// Unpermissioned
    pub fn close_registry_entry(ctx: Context<CloseRegistryEntry>, _addr: Pubkey) -> Result<()> {
        ctx.accounts.close_registry_entry()
    }

    /// Batch close dead entry accounts
    ///
    /// Accounts to close are passed via remaining_accounts, constraints:
    /// 1. Accounts must be marked writable
    /// 2. No other accounts should present in `remaining_accounts`
    /// 3. Each entry must belong to the registry
    /// 4. Each entry must have been funded by the recipient
    /// 5. Each entry must be dead
    /// Unpermissioned
    pub fn batch_close_registry_entries<'info>(
        ctx: Context<'_, '_, 'info, 'info, BatchCloseRegistryEntries<'info>>,
    ) -> Result<()> {
        ctx.accounts
            .batch_close_registry_entries(ctx.remaining_accounts)
    }
}
