//! Wallets excluded from volume for wash trading.
//!
//! Curated from on-chain analysis of Opinion's Gnosis Safe funder
//! addresses. A wallet is listed when its fills are dominated by one or
//! two counterparties, when most of its positions offset each other
//! (buying both YES and NO), or when it sits in a circular trading
//! cluster. The list is data, not a detector: it only changes by editing
//! this file.

use std::collections::HashSet;
use std::sync::LazyLock;

use alloy::primitives::{Address, address};

/// Listed wallets, grouped by the review that confirmed them.
const WASH_TRADERS: &[Address] = &[
    // Hub cluster, October-November 2025.
    address!("d006482147f77970ef07a91cd84b532433d57400"),
    address!("c23395fc42ba0b79c89f2ab942fcd73deeb355f2"),
    address!("b76ba8797850b2cc2aa3ad7299a008573f28cb9d"),
    address!("418a3003b9a3e481e2866336fca3007d9474827c"),
    address!("6c3326f52f5a251b5504099242a9cdbcc3ab87e7"),
    // Confirmed in the January 2026 review.
    address!("72ffa4098788ab41c78da0ed04b4a3eaa4ff9e3d"),
    address!("0a7300dbc3fcef290601793bf4395ea0fd38f35c"),
    address!("44df52c5c8ffb86da6044b81577f0dd537dec07f"),
    address!("015e2b259233ac5c805b14703ef2144dedfc8b01"),
    address!("fe5d02c0dcb5f7ee642713628be52e6f4de9f08e"),
    address!("e9209e46699190d99215f1697381ce637925cac3"),
    address!("b850edbc7dc207f7fe6aecb9be06e0e4d7bc69ac"),
    address!("0f61a1f7717b51fd13cc76de9092e5209808b91c"),
    address!("608601662152b9c37708b610a4be5d1a15567e78"),
    address!("f4852d5bc219c31386e36a836d82439f61160c82"),
    address!("0dcb08000fb624bb64aca0015cbd9b2307dc46fd"),
    address!("c2823f06eb7536f23c4ff9be799058a204ce4add"),
    address!("686fa7c3b7ca92d98a00f58b46066c51d802dafb"),
    address!("0a9e71ecece618a920a883a0858d9d983810758d"),
    address!("d7c2d443a4fde099f9423b5962270bbe333c9558"),
    address!("127ff13f0b5b1070a36fa30b083b4644016ad30f"),
    address!("ec78b801a379daf065b2e946e8aa352a70511153"),
    address!("0b8bb27fd7dac838df100f8270b3c35dd270360c"),
    address!("e225ea7da5d13deacd308c37b7e2d3c5c87e44db"),
    address!("f9085026722167af624c82f4a51190212f1358ec"),
    address!("c1d70151b25b8831d38bc0b2c5717e6d7079e522"),
    address!("fa679b1ec37f5c61711a540a25e43153b1dfda57"),
    address!("6fcc720d5538d848117469ee17011eb25ba3373d"),
    address!("61ea344369771d640f59edc4efcb8f3f238f0078"),
    address!("4a795fb374433d1eea1bc764f3d6a77ac5871905"),
    address!("3af3ad6fec61dab75793f48d5bfd543531dd4432"),
    address!("3b67464f4047282f7c97105d90809e9239ac0cd1"),
    address!("6d894e0752d293de5302f15b138a731b38fce28b"),
    address!("f44c8da59212980c1e51ebdf63e45c34809c94b1"),
    address!("9d8ca07ab45a196209105e202cc9b2eec81abfc0"),
    address!("3350869a9ae8943306fb8ef621ef21a0b2541601"),
    address!("ca6f569a370526287510f3980d40ceea007ebea2"),
    address!("a4d4bdbc8a428ae4908df535d7995d68d40d879b"),
    address!("c4463cd7f6fb920b247d6e02181c2538891ca506"),
    address!("90db6a062fd2033cf4324727f40d8954c0a5c85d"),
    address!("b7867df722f568b318781e6c8b9864580144206f"),
    address!("2f40552c4ea7fc24768126e7b29a40f72d149ce6"),
    address!("a2d935aec3da511ccd0cd9e4e0ce180dcf1fcd48"),
    address!("7c22b543a46dabd507f30ff0cebf4aba6ff56dc7"),
    address!("9a6d5a61bf067eda66f598aa924dedd37c0e48c9"),
    address!("d153be034b84d3abccdae1f92ad8ec0acf6f16bf"),
    address!("5394d945696b2b40c3be84c659f2e25e53d783b9"),
    address!("bb2580c56418e15b62ffe6b509b4b20cb4c46cde"),
    address!("6d8faa933fb1d14a491bbd477085817165b261a2"),
];

static BLACKLIST: LazyLock<HashSet<Address>> =
    LazyLock::new(|| WASH_TRADERS.iter().copied().collect());

/// Whether `address` is a known wash trader.
///
/// Addresses compare by their 20 bytes, so checksummed and lowercase
/// spellings of the same wallet are equivalent.
#[must_use]
pub fn is_blacklisted(address: Address) -> bool {
    BLACKLIST.contains(&address)
}

/// Like [`is_blacklisted`], for a hex string in any letter case.
///
/// Input that is not a valid address is never blacklisted.
#[must_use]
pub fn is_blacklisted_str(address: &str) -> bool {
    address
        .trim()
        .parse::<Address>()
        .is_ok_and(is_blacklisted)
}

/// Whether any of `addresses` is a known wash trader.
#[must_use]
pub fn any_blacklisted(addresses: &[Address]) -> bool {
    addresses.iter().copied().any(is_blacklisted)
}

/// Number of listed wallets.
#[must_use]
pub fn len() -> usize {
    BLACKLIST.len()
}

/// Listed wallets in their curated order.
pub fn iter() -> impl Iterator<Item = Address> {
    WASH_TRADERS.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_unique() {
        assert_eq!(len(), WASH_TRADERS.len(), "duplicate entry in list");
        assert_eq!(len(), 49, "entry count");
    }

    #[test]
    fn lookup_ignores_letter_case() {
        assert!(
            is_blacklisted_str("0xd006482147f77970ef07a91cd84b532433d57400"),
            "lowercase"
        );
        assert!(
            is_blacklisted_str("0xD006482147F77970EF07A91CD84B532433D57400"),
            "uppercase"
        );
        assert!(
            is_blacklisted_str(
                &address!("6d8faa933fb1d14a491bbd477085817165b261a2").to_checksum(None)
            ),
            "checksummed"
        );
    }

    #[test]
    fn unknown_or_malformed_addresses_pass() {
        assert!(!is_blacklisted(Address::ZERO), "zero address");
        assert!(!is_blacklisted_str(""), "empty string");
        assert!(!is_blacklisted_str("not an address"), "garbage");
        assert!(
            !any_blacklisted(&[Address::ZERO, Address::repeat_byte(1)]),
            "no listed counterparty"
        );
        assert!(
            any_blacklisted(&[
                Address::ZERO,
                address!("418a3003b9a3e481e2866336fca3007d9474827c")
            ]),
            "listed taker"
        );
    }
}
