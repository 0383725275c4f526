// PDA SEEDS

/// Seed for the Registry account PDA
pub const ADDRESS_REGISTRY_SEED: &[u8] = b"address_registry";
/// Seed for RegistryEntry account PDAs
pub const REGISTRY_ENTRY_SEED: &[u8] = b"registry_entry";

/// Maximum number of addresses `get_all_addresses` can return.
/// Return data is capped at 1024 bytes: 4 bytes of length prefix + 31 * 32 bytes.
pub const MAX_LISTED_ADDRESSES: u64 = 31;
