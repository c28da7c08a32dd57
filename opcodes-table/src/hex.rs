use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::Error;

/// One encoded byte, written as a two-digit uppercase hex pair (`"FD"`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexByte(pub u8);

impl FromStr for HexByte {
    type Err = Error;

    /// Accepts exactly two ASCII hex digits, in either case.
    fn from_str(s: &str) -> Result<Self, Error> {
        if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHexByte(s.to_string()));
        }
        u8::from_str_radix(s, 16)
            .map(Self)
            .map_err(|_| Error::InvalidHexByte(s.to_string()))
    }
}

impl fmt::Display for HexByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}

impl fmt::Debug for HexByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexByte({self})")
    }
}

impl From<u8> for HexByte {
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}

impl From<HexByte> for u8 {
    fn from(byte: HexByte) -> Self {
        byte.0
    }
}

impl Serialize for HexByte {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexByte {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = HexByte;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a two-digit hex string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<HexByte, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_pairs() {
        assert_eq!("28".parse::<HexByte>().unwrap(), HexByte(0x28));
        assert_eq!("FD".parse::<HexByte>().unwrap(), HexByte(0xFD));
        assert_eq!("fd".parse::<HexByte>().unwrap(), HexByte(0xFD));
        assert_eq!("00".parse::<HexByte>().unwrap(), HexByte(0x00));
    }

    #[test]
    fn reject_malformed() {
        for bad in ["", "F", "FDD", "GG", "+F", " 1", "0x"] {
            assert!(
                matches!(bad.parse::<HexByte>(), Err(Error::InvalidHexByte(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn display_is_uppercase_and_padded() {
        assert_eq!(HexByte(0x0a).to_string(), "0A");
        assert_eq!(HexByte(0xfd).to_string(), "FD");
        assert_eq!(format!("{:?}", HexByte(0x41)), "HexByte(41)");
    }

    #[test]
    fn deserialize_rejects_numbers() {
        assert!(serde_json::from_str::<HexByte>("40").is_err());
        assert_eq!(serde_json::from_str::<HexByte>("\"40\"").unwrap(), HexByte(0x40));
    }
}
