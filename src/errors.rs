use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    #[msg("Address is already registered")]
    DuplicateEntry,
    #[msg("Signer is not the registry owner")]
    Unauthorized,
    #[msg("Address is not registered")]
    NotFound,
    #[msg("The zero address cannot be registered")]
    ZeroAddress,
    #[msg("Head entry account not provided")]
    HeadEntryNotProvided,
    #[msg("Neighbor entry account not provided")]
    NeighborEntryNotProvided,
    #[msg("Entry account does not match the stored links")]
    LinkMismatch,
    #[msg("Entry account missing from the list walk")]
    MissingEntryAccount,
    #[msg("List length does not match the registry length")]
    CorruptedList,
    #[msg("Too many addresses to return, iterate with get_next_address")]
    TooManyAddresses,
    #[msg("Entry is still registered")]
    EntryStillLive,
    #[msg("Entry belongs to a different registry")]
    RegistryMismatch,
    #[msg("Recipient did not fund the entry account")]
    InvalidRecipient,
    #[msg("ProgramMismatch")]
    ProgramMismatch,
    #[msg("Math Overflow")]
    MathOverflow,
}
