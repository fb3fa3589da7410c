use crate::error::Error;

/// Parse a JSON-RPC hex quantity (e.g. the result of `eth_chainId`) into a `u64`.
///
/// The `0x` / `0X` prefix is optional and surrounding whitespace is ignored.
///
/// ```
/// use abiscan_common::utils::hex::parse_hex_quantity;
///
/// assert_eq!(parse_hex_quantity("0x1").expect("valid quantity"), 1);
/// assert_eq!(parse_hex_quantity("a4b1").expect("valid quantity"), 42161);
/// ```
pub fn parse_hex_quantity(quantity: &str) -> Result<u64, Error> {
    let trimmed = quantity.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(Error::ParseError(format!("'{quantity}' contains no hex digits")));
    }

    // from_str_radix would also accept a leading sign
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::ParseError(format!("'{quantity}' is not a hex quantity")));
    }

    u64::from_str_radix(digits, 16)
        .map_err(|e| Error::ParseError(format!("'{quantity}' does not fit in a u64: {e}")))
}
