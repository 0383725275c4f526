use solana_security_txt::security_txt;

// Placeholder contact details, replace with the deploying team's before a mainnet release
security_txt! {
    name: "Address Registry program",
    project_url: "https://example.com/address-registry",
    contacts: "email:security@example.com",
    policy: "https://example.com/address-registry/security-policy"
}
