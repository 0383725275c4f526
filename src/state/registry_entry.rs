use anchor_lang::prelude::*;

use crate::errors::RegistryError;

/// RegistryEntry account - one node of a registry's linked list.
///
/// The account outlives the membership it records: after a removal or a
/// registry clear it stays allocated as a dead entry until it is registered
/// again or closed.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct RegistryEntry {
    // The registry this entry belongs to
    pub registry: Pubkey,

    // The registered address, zero until the entry is first linked
    pub address: Pubkey,

    // The entry that follows this one, zero for the tail
    pub next: Pubkey,

    // The entry that precedes this one, zero for the head
    pub prev: Pubkey,

    // Registry epoch in which the entry was linked
    pub epoch: u64,

    // False once the entry has been removed individually
    pub linked: bool,

    // Funded the account creation and receives the rent when it is closed
    pub rent_payer: Pubkey,

    // The bump used to derive the PDA for this account
    // Stored so we don't need to recalculate it later
    pub bump: u8,
}

impl RegistryEntry {
    /// Deserialize an entry PDA that may not have been created yet
    /// # Arguments
    /// * `entry_info` - The account at the entry PDA address
    /// # Returns
    /// * `Result<Option<RegistryEntry>>` - `None` if the account is not a program-owned entry
    pub fn load(entry_info: &AccountInfo) -> Result<Option<Self>> {
        if entry_info.owner != &crate::ID || entry_info.data_is_empty() {
            return Ok(None);
        }

        let data = entry_info.try_borrow_data()?;
        Ok(Some(Self::try_deserialize(&mut &data[..])?))
    }

    /// Deserialize an entry account that must exist
    /// # Arguments
    /// * `entry_info` - An entry account passed via remaining_accounts
    /// # Returns
    /// * `Result<RegistryEntry>` - The deserialized entry
    /// # Errors
    /// * `RegistryError::ProgramMismatch` - If the account is not owned by the program
    /// * `RegistryError::MissingEntryAccount` - If the account holds no entry
    pub fn load_required(entry_info: &AccountInfo) -> Result<Self> {
        require_keys_eq!(
            *entry_info.owner,
            crate::ID,
            RegistryError::ProgramMismatch
        );

        Self::load(entry_info)?.ok_or_else(|| RegistryError::MissingEntryAccount.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::system_program;

    fn serialized(entry: &RegistryEntry) -> Vec<u8> {
        let mut data = Vec::new();
        entry.try_serialize(&mut data).unwrap();
        data
    }

    fn sample_entry() -> RegistryEntry {
        RegistryEntry {
            registry: Pubkey::new_from_array([1; 32]),
            address: Pubkey::new_from_array([2; 32]),
            next: Pubkey::new_from_array([3; 32]),
            prev: Pubkey::default(),
            epoch: 4,
            linked: true,
            rent_payer: Pubkey::new_from_array([5; 32]),
            bump: 254,
        }
    }

    #[test]
    fn test_load_program_owned_entry() {
        let key = Pubkey::new_from_array([9; 32]);
        let owner = crate::ID;
        let mut lamports = 1_000_000;
        let mut data = serialized(&sample_entry());
        let info = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut data,
            &owner,
            false,
            0,
        );

        assert_eq!(RegistryEntry::load(&info).unwrap(), Some(sample_entry()));
        assert_eq!(RegistryEntry::load_required(&info).unwrap(), sample_entry());
    }

    #[test]
    fn test_load_uncreated_account_is_none() {
        // A PDA nobody has paid for yet is an empty system account
        let key = Pubkey::new_from_array([9; 32]);
        let owner = system_program::ID;
        let mut lamports = 0;
        let mut data: Vec<u8> = Vec::new();
        let info = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut data,
            &owner,
            false,
            0,
        );

        assert_eq!(RegistryEntry::load(&info).unwrap(), None);
        assert_eq!(
            RegistryEntry::load_required(&info).unwrap_err(),
            anchor_lang::error::Error::from(RegistryError::ProgramMismatch)
        );
    }

    #[test]
    fn test_load_foreign_owned_entry_is_none() {
        // Same bytes under another owner must not count as an entry
        let key = Pubkey::new_from_array([9; 32]);
        let owner = system_program::ID;
        let mut lamports = 1_000_000;
        let mut data = serialized(&sample_entry());
        let info = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut data,
            &owner,
            false,
            0,
        );

        assert_eq!(RegistryEntry::load(&info).unwrap(), None);
        assert_eq!(
            RegistryEntry::load_required(&info).unwrap_err(),
            anchor_lang::error::Error::from(RegistryError::ProgramMismatch)
        );
    }

    #[test]
    fn test_load_empty_program_owned_account() {
        let key = Pubkey::new_from_array([9; 32]);
        let owner = crate::ID;
        let mut lamports = 0;
        let mut data: Vec<u8> = Vec::new();
        let info = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut data,
            &owner,
            false,
            0,
        );

        assert_eq!(RegistryEntry::load(&info).unwrap(), None);
        assert_eq!(
            RegistryEntry::load_required(&info).unwrap_err(),
            anchor_lang::error::Error::from(RegistryError::MissingEntryAccount)
        );
    }

    #[test]
    fn test_load_rejects_wrong_discriminator() {
        let key = Pubkey::new_from_array([9; 32]);
        let owner = crate::ID;
        let mut lamports = 1_000_000;
        let mut data = serialized(&sample_entry());
        data[0] ^= 0xff;
        let info = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut data,
            &owner,
            false,
            0,
        );

        assert!(RegistryEntry::load(&info).is_err());
    }
}
