//! IPv4 network and prefix length utilities.
//!
//! Provides [`Ipv4`] for a network written as `addr/prefix_len`, along with the
//! conversions between address counts, prefix lengths and dotted masks.

use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Largest number of addresses a single IPv4 block can cover.
pub const MAX_BLOCK_SIZE: u64 = 1 << MAX_LENGTH;

/// Why an address count can not be turned into a prefix length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSizeError {
    Zero,
    NotPowerOfTwo,
    TooLarge,
}

/// Convert a prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use chnroutes::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        Ok(mask_bits(len))
    }
}

// Callers guarantee len <= MAX_LENGTH.
fn mask_bits(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Prefix length of a block covering `size` addresses.
///
/// Only exact powers of two in `1..=2^32` describe a single network.
///
/// # Examples
/// ```
/// use chnroutes::models::prefix_len_for_block_size;
/// assert_eq!(prefix_len_for_block_size(256), Ok(24));
/// assert_eq!(prefix_len_for_block_size(1024), Ok(22));
/// ```
pub fn prefix_len_for_block_size(size: u64) -> Result<u8, BlockSizeError> {
    if size == 0 {
        Err(BlockSizeError::Zero)
    } else if size > MAX_BLOCK_SIZE {
        Err(BlockSizeError::TooLarge)
    } else if !size.is_power_of_two() {
        Err(BlockSizeError::NotPowerOfTwo)
    } else {
        Ok(MAX_LENGTH - size.trailing_zeros() as u8)
    }
}

/// IPv4 network in CIDR notation.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    addr: Ipv4Addr,
    prefix_len: u8,
}

impl Ipv4 {
    /// Build a network from its base address and prefix length.
    pub fn from_parts(addr: Ipv4Addr, prefix_len: u8) -> Result<Ipv4, Box<dyn Error>> {
        if prefix_len > MAX_LENGTH {
            return Err("Network length is too long".into());
        }
        Ok(Ipv4 { addr, prefix_len })
    }

    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let (addr, len) = addr_cidr
            .split_once('/')
            .ok_or_else(|| format!("Invalid address/mask {addr_cidr}"))?;
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| format!("Invalid address {addr}"))?;
        let len: u8 = len.parse()?;
        Ipv4::from_parts(addr, len)
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Dotted-decimal subnet mask equal to the prefix length.
    pub fn subnet_mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(mask_bits(self.prefix_len))
    }

    /// True when no host bits are set below the prefix.
    pub fn is_network_aligned(&self) -> bool {
        u32::from(self.addr) & !mask_bits(self.prefix_len) == 0
    }
}

impl FromStr for Ipv4 {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(22).unwrap(), 0xFFFFFC00);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_prefix_len_for_power_of_two_sizes() {
        for bits in 0..=24u32 {
            let size = 1u64 << bits;
            let len = prefix_len_for_block_size(size).unwrap();
            assert_eq!(len as u32, 32 - bits, "size {size}");

            let mask = get_cidr_mask(len).unwrap();
            assert_eq!(mask.leading_ones(), len as u32, "size {size}");
            assert_eq!(mask, 0xFFFFFFFF ^ (size as u32 - 1), "size {size}");
        }
    }

    #[test]
    fn test_prefix_len_extremes() {
        assert_eq!(prefix_len_for_block_size(1), Ok(32));
        assert_eq!(prefix_len_for_block_size(MAX_BLOCK_SIZE), Ok(0));
        assert_eq!(
            prefix_len_for_block_size(MAX_BLOCK_SIZE * 2),
            Err(BlockSizeError::TooLarge)
        );
    }

    #[test]
    fn test_prefix_len_rejects_bad_sizes() {
        assert_eq!(prefix_len_for_block_size(0), Err(BlockSizeError::Zero));
        assert_eq!(
            prefix_len_for_block_size(3),
            Err(BlockSizeError::NotPowerOfTwo)
        );
        assert_eq!(
            prefix_len_for_block_size(768),
            Err(BlockSizeError::NotPowerOfTwo)
        );
    }

    #[test]
    fn test_ipv4_new_and_display() {
        let net = Ipv4::new(" 1.2.4.0/22 ").unwrap();
        assert_eq!(net.addr(), Ipv4Addr::new(1, 2, 4, 0));
        assert_eq!(net.prefix_len(), 22);
        assert_eq!(net.subnet_mask(), Ipv4Addr::new(255, 255, 252, 0));
        assert_eq!(net.to_string(), "1.2.4.0/22");

        assert!(Ipv4::new("1.2.4.0").is_err());
        assert!(Ipv4::new("1.2.4/22").is_err());
        assert!(Ipv4::new("1.2.4.0/33").is_err());
    }

    #[test]
    fn test_alignment() {
        assert!(Ipv4::new("1.2.4.0/22").unwrap().is_network_aligned());
        assert!(!Ipv4::new("1.2.5.0/22").unwrap().is_network_aligned());
        assert!(Ipv4::new("0.0.0.0/0").unwrap().is_network_aligned());
        assert!(Ipv4::new("1.2.3.4/32").unwrap().is_network_aligned());
    }

    #[test]
    fn test_ipv4_ordering() {
        let ip1 = Ipv4::new("10.0.0.0/24").unwrap();
        let ip2 = Ipv4::new("10.0.1.0/24").unwrap();
        assert!(ip1 < ip2);
        assert_eq!(ip1, "10.0.0.0/24".parse::<Ipv4>().unwrap());
    }
}
