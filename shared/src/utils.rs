//! # Shared Utility Functions
//!
//! Public key helpers used by the wallet-connect front-end.
//!
//! ## Address Formatting
//!
//! Functions for formatting Solana wallet addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - Alias for `format_address` with default parameters
//! - [`is_valid_address`] - Check that a string decodes to a 32-byte public key
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
//! let formatted = format_address(address, 4, 4);
//! assert_eq!(formatted, "8W6Q...JKAL");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Arguments
///
/// * `address` - The wallet address to format
/// * `prefix_len` - Number of characters to show at the start (default: 4)
/// * `suffix_len` - Number of characters to show at the end (default: 4)
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
/// assert_eq!(format_address(addr, 4, 4), "8W6Q...JKAL");
/// assert_eq!(format_address(addr, 6, 6), "8W6Qgi...KuJKAL");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();
    
    // Return early if address is too short to truncate meaningfully
    // Also guard against individual lengths exceeding address length to prevent panics
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }
    
    // Lengths are in bytes; input that would be cut inside a character is returned whole
    let suffix_start = address_len - suffix_len;
    if !address.is_char_boundary(prefix_len) || !address.is_char_boundary(suffix_start) {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[suffix_start..];

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with default 4-character prefix and suffix.
///
/// This is a convenience function that calls [`format_address`] with `prefix_len=4` and `suffix_len=4`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
/// assert_eq!(truncate_address(addr), "8W6Q...JKAL");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

/// Check whether `address` is a base58-encoded 32-byte Solana public key.
///
/// Wallets hand back whatever their `publicKey.toString()` produces; this is the
/// only check made before the value is shown to the user.
///
/// ```rust
/// use shared::utils::is_valid_address;
///
/// assert!(is_valid_address("11111111111111111111111111111111"));
/// assert!(!is_valid_address("not-a-key"));
/// ```
pub fn is_valid_address(address: &str) -> bool {
    match bs58::decode(address).into_vec() {
        Ok(bytes) => bytes.len() == 32,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
        assert_eq!(format_address(addr, 4, 4), "8W6Q...JKAL");
        assert_eq!(format_address(addr, 6, 6), "8W6Qgi...KuJKAL");
        assert_eq!(format_address(addr, 2, 2), "8W...AL");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("abc", 4, 4), "abc");
    }

    #[test]
    fn test_format_address_non_ascii() {
        // 'é' is two bytes, so a cut at byte 1 or at len - 1 lands inside it
        assert_eq!(format_address("éabcdefghé", 1, 1), "éabcdefghé");
        assert_eq!(format_address("éabcdefghé", 2, 2), "é...é");
    }

    #[test]
    fn test_truncate_address() {
        let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
        assert_eq!(truncate_address(addr), "8W6Q...JKAL");
    }

    #[test]
    fn test_is_valid_address() {
        assert!(is_valid_address("11111111111111111111111111111111"));
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("0OIl"));
        assert!(!is_valid_address("3yZe7d"));
    }
}

