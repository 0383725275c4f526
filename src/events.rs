use anchor_lang::prelude::*;

/// Event emitted when a registry is initialized
/// Fields:
/// - registry: The public key of the Registry account
/// - owner: The public key allowed to remove addresses
#[event]
pub struct RegistryInitialized {
    pub registry: Pubkey,
    pub owner: Pubkey,
}

/// Event emitted when an address is added to a registry
/// Fields:
/// - registry: The public key of the Registry account
/// - addr: The registered address
/// - registered_by: The public key of the signer that paid for the registration
#[event]
pub struct AddressRegistered {
    pub registry: Pubkey,
    pub addr: Pubkey,
    pub registered_by: Pubkey,
}

/// Event emitted when an address is removed from a registry
/// Fields:
/// - registry: The public key of the Registry account
/// - addr: The removed address
/// - removed_by: The public key of the owner that removed the address
#[event]
pub struct AddressRemoved {
    pub registry: Pubkey,
    pub addr: Pubkey,
    pub removed_by: Pubkey,
}

/// Event emitted when every address is removed from a registry at once
/// Fields:
/// - registry: The public key of the Registry account
/// - epoch: The registry epoch after the clear
/// - cleared_by: The public key of the owner that cleared the registry
#[event]
pub struct RegistryCleared {
    pub registry: Pubkey,
    pub epoch: u64,
    pub cleared_by: Pubkey,
}
