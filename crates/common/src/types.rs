use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of symbols in an order code.
pub const ORDER_CODE_LEN: usize = 4;

/// Symbols an order code is drawn from: `A-Z` followed by `0-9`.
pub const ORDER_CODE_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Returned when a string is not a well-formed order code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid order code '{0}': expected {ORDER_CODE_LEN} characters from A-Z and 0-9")]
pub struct InvalidOrderCode(pub String);

/// Short human-readable identifier handed out for every order.
///
/// Codes are not unique by construction; two orders may share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderCode([u8; ORDER_CODE_LEN]);

impl OrderCode {
    /// Draws a code uniformly at random, with replacement, from the alphabet.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut symbols = [0u8; ORDER_CODE_LEN];
        for symbol in symbols.iter_mut() {
            *symbol = ORDER_CODE_ALPHABET[rng.gen_range(0..ORDER_CODE_ALPHABET.len())];
        }
        Self(symbols)
    }

    /// Parses a code exactly as stored. Case-sensitive.
    pub fn parse(s: &str) -> Result<Self, InvalidOrderCode> {
        let bytes = s.as_bytes();
        if bytes.len() != ORDER_CODE_LEN || !bytes.iter().all(|b| ORDER_CODE_ALPHABET.contains(b)) {
            return Err(InvalidOrderCode(s.to_string()));
        }

        let mut symbols = [0u8; ORDER_CODE_LEN];
        symbols.copy_from_slice(bytes);
        Ok(Self(symbols))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Every byte comes from the ASCII alphabet.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl std::fmt::Display for OrderCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderCode {
    type Err = InvalidOrderCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for OrderCode {
    type Error = InvalidOrderCode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<OrderCode> for String {
    fn from(code: OrderCode) -> Self {
        code.as_str().to_string()
    }
}

impl AsRef<str> for OrderCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
