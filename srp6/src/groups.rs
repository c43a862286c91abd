//! Predefined groups.
//!
//! `G_1024` is the 1024-bit group from [RFC 5054](https://tools.ietf.org/html/rfc5054);
//! `G_256` is the 256-bit safe prime of the reference handshake demo. For
//! anything beyond interop testing, prefer the larger group.

use once_cell::sync::Lazy;

use crate::types::SrpGroup;

/// 256-bit safe prime of the reference demo, generator 3.
pub static G_256: Lazy<SrpGroup> = Lazy::new(|| {
    SrpGroup::from_hex(
        "115b8b692e0e045692cf280b436735c77a5a9e8a9e7ed56c965f87db5b2a2ece3",
        3,
    )
    .expect("known-good group")
});

/// 1024-bit group from RFC 5054, generator 2.
pub static G_1024: Lazy<SrpGroup> = Lazy::new(|| {
    SrpGroup::from_hex(
        concat!(
            "EEAF0AB9ADB38DD69C33F80AFA8FC5E86072618775FF3C0B9EA2314C",
            "9C256576D674DF7496EA81D3383B4813D692C6E0E0D5D8E250B98BE4",
            "8E495C1D6089DAD15DC7D7B46154D6B6CE8EF4AD69B15D4982559B29",
            "7BCF1885C529F566660E57EC68EDBC3C05726CC02FD4CBF4976EAA9A",
            "FD5138FE8376435B9FC61D2FC0EB06E3",
        ),
        2,
    )
    .expect("known-good group")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_are_well_formed() {
        assert_eq!(G_256.n.bits(), 257);
        assert_eq!(G_1024.n.bits(), 1024);
        for group in [&*G_256, &*G_1024] {
            assert!(group.g < group.n);
            assert!(group.k < group.n);
        }
    }
}
