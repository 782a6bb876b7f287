use ethers::{types::Address, utils::to_checksum};

/// Parse a 20-byte hex address, `0x` prefix optional.
///
/// Single-case hex is accepted as-is. Mixed case must match the EIP-55
/// checksum, so a mistyped checksummed address is rejected instead of
/// silently pointing somewhere else.
pub fn parse_address(value: &str) -> Option<Address> {
    let hex = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let bytes = ethers::utils::hex::decode(hex).ok()?;
    let address = Address::from_slice(&bytes);

    let all_lower = !hex.chars().any(|c| c.is_ascii_uppercase());
    let all_upper = !hex.chars().any(|c| c.is_ascii_lowercase());
    if all_lower || all_upper {
        return Some(address);
    }

    let checksummed = to_checksum(&address, None);
    (checksummed[2..] == *hex).then_some(address)
}
