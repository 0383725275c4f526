use anchor_lang::prelude::*;

use crate::{constants::ADDRESS_REGISTRY_SEED, events::RegistryInitialized, state::Registry};

/// Initialize a `Registry` account owned by the signing `owner`
#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    /// Pays for account creation
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The account that becomes the registry owner
    pub owner: Signer<'info>,

    /// The `Registry` account to be initialized
    /// # PDA Seeds
    /// - `ADDRESS_REGISTRY_SEED`
    /// - The owner's address
    #[account(
        init,
        payer = payer,
        space = 8 + Registry::INIT_SPACE,
        seeds = [ADDRESS_REGISTRY_SEED, owner.key().as_ref()],
        bump
    )]
    pub registry: Account<'info, Registry>,

    /// The system program
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeRegistry<'info> {
    /// Initialize an empty registry
    /// # Arguments
    /// * `bumps` - The PDA bumps for account derivation
    /// # Returns
    /// * `Result<()>` - Ok if the registry is successfully initialized, Err otherwise
    pub fn initialize_registry(&mut self, bumps: &InitializeRegistryBumps) -> Result<()> {
        self.registry.set_inner(Registry {
            owner: self.owner.key(),
            head: Pubkey::default(),
            epoch: 0,
            len: 0,
            bump: bumps.registry,
        });

        emit!(RegistryInitialized {
            registry: self.registry.key(),
            owner: self.owner.key(),
        });

        Ok(())
    }
}
