use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::{constants::MAX_LISTED_ADDRESSES, errors::RegistryError, state::RegistryEntry};

/// Registry state account - head of a deduplicated, iterable set of addresses.
///
/// Members form a doubly linked list threaded through `RegistryEntry` accounts.
/// The zero address is the sentinel: it seeds iteration and terminates the list.
/// An entry is live when it is linked in the current `epoch`, so clearing the
/// whole registry only has to bump the epoch.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct Registry {
    // The only address allowed to remove entries, fixed at initialization
    pub owner: Pubkey,

    // The most recently registered live address, zero when empty
    pub head: Pubkey,

    // Generation counter, entries linked in older epochs are dead
    pub epoch: u64,

    // Number of live entries
    pub len: u64,

    // The bump used to derive the PDA for this account
    // Stored so we don't need to recalculate it later
    pub bump: u8,
}

impl Registry {
    /// Whether `entry` is a current member of this registry
    pub fn is_live(&self, entry: &RegistryEntry) -> bool {
        entry.linked && entry.epoch == self.epoch
    }

    /// Membership test for `addr` given its (possibly uninitialized) entry
    /// # Arguments
    /// * `addr` - The address being looked up
    /// * `entry` - The deserialized entry PDA for `addr`, `None` if it does not exist
    /// # Returns
    /// * `bool` - True if `addr` is live, false for the sentinel and unknown addresses
    pub fn contains(&self, addr: &Pubkey, entry: Option<&RegistryEntry>) -> bool {
        entry.is_some_and(|entry| entry.address == *addr && self.is_live(entry))
    }

    /// Successor of `addr` in iteration order.
    ///
    /// The sentinel maps to the head, a live address to its successor and
    /// anything else to the sentinel.
    pub fn next_after(&self, addr: &Pubkey, entry: Option<&RegistryEntry>) -> Pubkey {
        if *addr == Pubkey::default() {
            return self.head;
        }

        match entry {
            Some(entry) if self.contains(addr, Some(entry)) => entry.next,
            _ => Pubkey::default(),
        }
    }

    /// Prepend `addr` to the list
    /// # Arguments
    /// * `addr` - The address being registered
    /// * `entry` - The entry PDA for `addr`, fresh or dead
    /// * `head_entry` - The entry of the current head, required unless the list is empty
    /// # Returns
    /// * `Result<()>` - Ok if `addr` is now the head, Err otherwise
    /// # Errors
    /// * `RegistryError::ZeroAddress` - If `addr` is the sentinel
    /// * `RegistryError::DuplicateEntry` - If `addr` is already live
    /// * `RegistryError::HeadEntryNotProvided` - If the list is not empty and `head_entry` is `None`
    /// * `RegistryError::LinkMismatch` - If `head_entry` is not the current head
    pub fn push_front(
        &mut self,
        addr: Pubkey,
        entry: &mut RegistryEntry,
        head_entry: Option<&mut RegistryEntry>,
    ) -> Result<()> {
        require_keys_neq!(addr, Pubkey::default(), RegistryError::ZeroAddress);
        require!(
            entry.address == addr || entry.address == Pubkey::default(),
            RegistryError::LinkMismatch
        );
        require!(!self.is_live(entry), RegistryError::DuplicateEntry);

        match head_entry.as_deref() {
            Some(head) => {
                require_keys_eq!(head.address, self.head, RegistryError::LinkMismatch);
                require!(self.is_live(head), RegistryError::LinkMismatch);
            }
            None => {
                require_keys_eq!(
                    self.head,
                    Pubkey::default(),
                    RegistryError::HeadEntryNotProvided
                );
            }
        }

        let len = self.len.checked_add(1).ok_or(RegistryError::MathOverflow)?;

        if let Some(head) = head_entry {
            head.prev = addr;
        }

        entry.address = addr;
        entry.next = self.head;
        entry.prev = Pubkey::default();
        entry.epoch = self.epoch;
        entry.linked = true;

        self.head = addr;
        self.len = len;

        Ok(())
    }

    /// Unlink a live entry, joining its neighbours
    /// # Arguments
    /// * `entry` - The entry being removed
    /// * `prev_entry` - The entry at `entry.prev`, `None` if `entry` is the head
    /// * `next_entry` - The entry at `entry.next`, `None` if `entry` is the tail
    /// # Returns
    /// * `Result<()>` - Ok if the entry was unlinked, Err otherwise
    /// # Errors
    /// * `RegistryError::NotFound` - If `entry` is not live
    /// * `RegistryError::NeighborEntryNotProvided` - If a required neighbour is `None`
    /// * `RegistryError::LinkMismatch` - If a neighbour does not point back at `entry`
    pub fn unlink(
        &mut self,
        entry: &mut RegistryEntry,
        prev_entry: Option<&mut RegistryEntry>,
        next_entry: Option<&mut RegistryEntry>,
    ) -> Result<()> {
        require!(self.is_live(entry), RegistryError::NotFound);

        match prev_entry.as_deref() {
            Some(prev) => {
                require_keys_eq!(prev.address, entry.prev, RegistryError::LinkMismatch);
                require!(
                    self.is_live(prev) && prev.next == entry.address,
                    RegistryError::LinkMismatch
                );
            }
            None => {
                require_keys_eq!(
                    entry.prev,
                    Pubkey::default(),
                    RegistryError::NeighborEntryNotProvided
                );
                require_keys_eq!(self.head, entry.address, RegistryError::LinkMismatch);
            }
        }

        match next_entry.as_deref() {
            Some(next) => {
                require_keys_eq!(next.address, entry.next, RegistryError::LinkMismatch);
                require!(
                    self.is_live(next) && next.prev == entry.address,
                    RegistryError::LinkMismatch
                );
            }
            None => {
                require_keys_eq!(
                    entry.next,
                    Pubkey::default(),
                    RegistryError::NeighborEntryNotProvided
                );
            }
        }

        let len = self.len.checked_sub(1).ok_or(RegistryError::MathOverflow)?;

        match prev_entry {
            Some(prev) => prev.next = entry.next,
            None => self.head = entry.next,
        }
        if let Some(next) = next_entry {
            next.prev = entry.prev;
        }

        entry.next = Pubkey::default();
        entry.prev = Pubkey::default();
        entry.linked = false;

        self.len = len;

        Ok(())
    }

    /// Drop every entry at once by starting a new epoch.
    /// Entry accounts are left untouched, they are dead from now on.
    pub fn clear(&mut self) -> Result<()> {
        self.epoch = self
            .epoch
            .checked_add(1)
            .ok_or(RegistryError::MathOverflow)?;
        self.head = Pubkey::default();
        self.len = 0;

        Ok(())
    }

    /// Walk the list from the head to the sentinel
    /// # Arguments
    /// * `lookup` - Resolves an address to its entry
    /// # Returns
    /// * `Result<Vec<Pubkey>>` - Live addresses, most recently registered first
    /// # Errors
    /// * `RegistryError::MissingEntryAccount` - If a link cannot be resolved to a live entry
    /// * `RegistryError::CorruptedList` - If the walk length disagrees with `len`
    pub fn collect_addresses<'a, F>(&self, mut lookup: F) -> Result<Vec<Pubkey>>
    where
        F: FnMut(&Pubkey) -> Option<&'a RegistryEntry>,
    {
        let mut addresses = Vec::new();
        let mut cursor = self.head;

        while cursor != Pubkey::default() {
            require!(
                (addresses.len() as u64) < self.len,
                RegistryError::CorruptedList
            );

            let entry = lookup(&cursor)
                .filter(|entry| self.contains(&cursor, Some(*entry)))
                .ok_or(RegistryError::MissingEntryAccount)?;

            addresses.push(cursor);
            cursor = entry.next;
        }

        require_eq!(
            addresses.len() as u64,
            self.len,
            RegistryError::CorruptedList
        );

        Ok(addresses)
    }

    /// Register `addr` through its entry account, stamping ownership on first use
    /// # Arguments
    /// * `registry_key` - The address of this Registry account
    /// * `addr` - The address being registered
    /// * `payer` - The signer funding the entry account
    /// * `bump` - The entry PDA bump
    /// * `entry` - The entry PDA for `addr`, zeroed if it was just created
    /// * `head_entry` - The entry of the current head, required unless the list is empty
    /// # Returns
    /// * `Result<()>` - Ok if `addr` is now the head, Err otherwise
    pub fn register_entry(
        &mut self,
        registry_key: Pubkey,
        addr: Pubkey,
        payer: Pubkey,
        bump: u8,
        entry: &mut RegistryEntry,
        head_entry: Option<&mut RegistryEntry>,
    ) -> Result<()> {
        // A zeroed address means init_if_needed just created the account
        let fresh = entry.address == Pubkey::default();

        self.push_front(addr, entry, head_entry)?;

        if fresh {
            entry.registry = registry_key;
            entry.rent_payer = payer;
            entry.bump = bump;
        }

        Ok(())
    }

    /// Check that an entry account can be closed and its rent sent to `recipient`
    /// # Arguments
    /// * `registry_key` - The address of this Registry account
    /// * `entry` - The entry about to be closed
    /// * `recipient` - The account receiving the rent
    /// # Errors
    /// * `RegistryError::RegistryMismatch` - If the entry belongs to another registry
    /// * `RegistryError::InvalidRecipient` - If `recipient` did not fund the entry
    /// * `RegistryError::EntryStillLive` - If the entry is still a member
    pub fn ensure_closable(
        &self,
        registry_key: &Pubkey,
        entry: &RegistryEntry,
        recipient: &Pubkey,
    ) -> Result<()> {
        require_keys_eq!(
            entry.registry,
            *registry_key,
            RegistryError::RegistryMismatch
        );
        require_keys_eq!(
            entry.rent_payer,
            *recipient,
            RegistryError::InvalidRecipient
        );
        require!(!self.is_live(entry), RegistryError::EntryStillLive);

        Ok(())
    }

    /// List every live address from a set of entry accounts
    /// # Arguments
    /// * `registry_key` - The address of this Registry account
    /// * `entries` - Entry accounts in any order, dead ones are ignored by the walk
    /// # Returns
    /// * `Result<Vec<Pubkey>>` - Live addresses, most recently registered first
    /// # Errors
    /// * `RegistryError::TooManyAddresses` - If the result would not fit in return data
    /// * `RegistryError::RegistryMismatch` - If an entry belongs to another registry
    /// * `RegistryError::MissingEntryAccount` - If a live entry is missing
    /// * `RegistryError::CorruptedList` - If the walk length disagrees with `len`
    pub fn list_addresses<I>(&self, registry_key: &Pubkey, entries: I) -> Result<Vec<Pubkey>>
    where
        I: IntoIterator<Item = RegistryEntry>,
    {
        require_gte!(
            MAX_LISTED_ADDRESSES,
            self.len,
            RegistryError::TooManyAddresses
        );

        let mut by_address = BTreeMap::new();
        for entry in entries {
            require_keys_eq!(
                entry.registry,
                *registry_key,
                RegistryError::RegistryMismatch
            );
            by_address.insert(entry.address, entry);
        }

        self.collect_addresses(|addr| by_address.get(addr))
    }
}
