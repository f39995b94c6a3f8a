use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{AddressError, KeyError};

/// Base32 alphabet used by plain addresses (RFC 4648, no padding).
const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Number of characters in a plain (unhyphenated) address.
pub const PLAIN_ADDRESS_LENGTH: usize = 39;

/// Number of bytes in a decoded address.
pub const ADDRESS_BYTES: usize = 24;

/// Number of hex characters in a public or private key.
pub const KEY_HEX_LENGTH: usize = 64;

/// The network an address or transaction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum NetworkType {
    MainNet,
    TestNet,
    Mijin,
    MijinTest,
}

impl NetworkType {
    /// Returns the network identifier byte.
    pub fn identifier(&self) -> u8 {
        match self {
            NetworkType::MainNet => 104,
            NetworkType::TestNet => 152,
            NetworkType::Mijin => 96,
            NetworkType::MijinTest => 144,
        }
    }

    /// Returns the first character of every plain address on this network.
    pub fn address_prefix(&self) -> char {
        match self {
            NetworkType::MainNet => 'N',
            NetworkType::TestNet => 'T',
            NetworkType::Mijin => 'M',
            NetworkType::MijinTest => 'S',
        }
    }

    /// Resolves a network from the first character of a plain address.
    pub fn from_address_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'N' => Some(NetworkType::MainNet),
            'T' => Some(NetworkType::TestNet),
            'M' => Some(NetworkType::Mijin),
            'S' => Some(NetworkType::MijinTest),
            _ => None,
        }
    }
}

impl TryFrom<u8> for NetworkType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            104 => Ok(NetworkType::MainNet),
            152 => Ok(NetworkType::TestNet),
            96 => Ok(NetworkType::Mijin),
            144 => Ok(NetworkType::MijinTest),
            other => Err(format!("Unknown network type: {other}")),
        }
    }
}

impl From<NetworkType> for u8 {
    fn from(value: NetworkType) -> Self {
        value.identifier()
    }
}

impl FromStr for NetworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "main_net" | "104" => Ok(NetworkType::MainNet),
            "testnet" | "test_net" | "152" => Ok(NetworkType::TestNet),
            "mijin" | "96" => Ok(NetworkType::Mijin),
            "mijintest" | "mijin_test" | "144" => Ok(NetworkType::MijinTest),
            other => Err(format!("Unknown network type: {other}")),
        }
    }
}

/// An account address in its plain base32 form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    plain: String,
}

impl Address {
    /// Parses a plain or pretty (hyphenated) address.
    ///
    /// Checks length, alphabet and network prefix. The checksum is not
    /// verified.
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        let plain: String = raw
            .trim()
            .chars()
            .filter(|c| *c != '-')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if plain.len() != PLAIN_ADDRESS_LENGTH {
            return Err(AddressError::InvalidLength {
                expected: PLAIN_ADDRESS_LENGTH,
                actual: plain.len(),
            });
        }

        if let Some(bad) = plain
            .chars()
            .find(|c| !c.is_ascii() || !BASE32_ALPHABET.contains(&(*c as u8)))
        {
            return Err(AddressError::InvalidCharacter(bad));
        }

        let prefix = plain.chars().next().unwrap_or_default();
        if NetworkType::from_address_prefix(prefix).is_none() {
            return Err(AddressError::UnknownNetwork(prefix));
        }

        Ok(Self { plain })
    }

    /// Decodes the 24-byte hex representation used by REST nodes.
    pub fn from_encoded(encoded: &str) -> Result<Self, AddressError> {
        let bytes =
            hex::decode(encoded).map_err(|e| AddressError::InvalidEncoding(e.to_string()))?;
        if bytes.len() != ADDRESS_BYTES {
            return Err(AddressError::InvalidEncoding(format!(
                "expected {ADDRESS_BYTES} bytes, got {}",
                bytes.len()
            )));
        }
        Self::parse(&base32_encode_address(&bytes))
    }

    /// Returns the plain 39-character form.
    pub fn plain(&self) -> &str {
        &self.plain
    }

    /// Returns the hyphenated form, grouped by six characters.
    pub fn pretty(&self) -> String {
        self.plain
            .as_bytes()
            .chunks(6)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Returns the network this address belongs to.
    pub fn network_type(&self) -> NetworkType {
        // parse() guarantees a known prefix
        self.plain
            .chars()
            .next()
            .and_then(NetworkType::from_address_prefix)
            .unwrap_or(NetworkType::MainNet)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.plain
    }
}

/// Encodes address bytes as base32 and trims the padding character.
fn base32_encode_address(bytes: &[u8]) -> String {
    // pad to 25 bytes so the input splits into whole 5-byte blocks
    let mut padded = bytes.to_vec();
    padded.push(0);

    let mut out = String::with_capacity(padded.len() * 8 / 5);
    for block in padded.chunks(5) {
        let mut buffer = [0u8; 5];
        buffer[..block.len()].copy_from_slice(block);
        let bits = buffer.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b));
        for i in (0..8).rev() {
            let index = ((bits >> (i * 5)) & 0x1f) as usize;
            out.push(BASE32_ALPHABET[index] as char);
        }
    }
    out.truncate(PLAIN_ADDRESS_LENGTH);
    out
}

fn parse_key_hex(raw: &str) -> Result<[u8; 32], KeyError> {
    let raw = raw.trim();
    if raw.len() != KEY_HEX_LENGTH {
        return Err(KeyError::InvalidLength {
            expected: KEY_HEX_LENGTH,
            actual: raw.len(),
        });
    }
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(raw, &mut bytes).map_err(|e| KeyError::InvalidHex(e.to_string()))?;
    Ok(bytes)
}

/// A 32-byte account public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    /// Parses a 64-character hex public key.
    pub fn parse(raw: &str) -> Result<Self, KeyError> {
        parse_key_hex(raw).map(Self)
    }

    /// Returns the uppercase hex form.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

/// A 32-byte account private key.
///
/// The key bytes are never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey([u8; 32]);

impl PrivateKey {
    /// Parses a 64-character hex private key.
    pub fn parse(raw: &str) -> Result<Self, KeyError> {
        parse_key_hex(raw).map(Self)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}
