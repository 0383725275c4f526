use anchor_lang::prelude::*;

use crate::errors::RegistryError;

/// Require the caller to be the registry owner
/// # Arguments
/// * `caller` - The signer of the instruction
/// * `owner` - The owner stored in the Registry account
/// # Returns
/// * `Result<()>` - Ok if `caller` is the owner, Err otherwise
/// # Errors
/// * `RegistryError::Unauthorized` - If `caller` is not the owner
#[inline(always)]
pub fn assert_owner(caller: &Pubkey, owner: &Pubkey) -> Result<()> {
    require_keys_eq!(*caller, *owner, RegistryError::Unauthorized);

    Ok(())
}
