use crate::{Error, Result};
use core::fmt;
use core::str::FromStr;
use std::borrow::Cow;

/// The default digit set: decimal digits, then uppercase, then lowercase.
pub const BASE_62: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const NO_VALUE: u8 = u8::MAX;

/// Reverse lookup table from byte to digit value.
const fn build_lookup(digits: &[u8]) -> [u8; 256] {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0;
    while i < digits.len() {
        lut[digits[i] as usize] = i as u8;
        i += 1;
    }
    lut
}

const BASE_62_LOOKUP: [u8; 256] = build_lookup(BASE_62.as_bytes());

/// An ordered set of digit symbols.
///
/// The symbol at index `0` is the *zero digit* and the last symbol is the
/// *maximum digit*. Symbols must be ASCII and strictly ascending in byte
/// order, so that comparing two keys as strings agrees with comparing their
/// digit values.
///
/// Every key handed to or produced by the generator is interpreted against
/// one alphabet. Mixing alphabets across comparisons is meaningless.
///
/// # Example
///
/// ```
/// use ordkey::Alphabet;
///
/// let base10 = Alphabet::new("0123456789").unwrap();
/// assert_eq!(base10.radix(), 10);
/// assert_eq!(base10.zero(), b'0');
/// assert_eq!(base10.max_digit(), b'9');
///
/// assert!(Alphabet::new("10").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    digits: Cow<'static, str>,
    lookup: [u8; 256],
}

impl Alphabet {
    /// The default 62-symbol alphabet, see [`BASE_62`].
    pub const fn base62() -> Self {
        Self {
            digits: Cow::Borrowed(BASE_62),
            lookup: BASE_62_LOOKUP,
        }
    }

    /// Builds an alphabet from a string of digit symbols.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAlphabet`] if there are fewer than two symbols,
    /// a symbol is not ASCII, or the symbols are not strictly ascending.
    pub fn new(digits: impl Into<Cow<'static, str>>) -> Result<Self> {
        let digits = digits.into();
        let bytes = digits.as_bytes();
        if bytes.len() < 2 {
            return Err(Error::InvalidAlphabet {
                reason: "at least two digits are required",
            });
        }
        if !bytes.is_ascii() {
            return Err(Error::InvalidAlphabet {
                reason: "digits must be ASCII",
            });
        }
        if bytes.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::InvalidAlphabet {
                reason: "digits must be unique and strictly ascending",
            });
        }
        let lookup = build_lookup(bytes);
        Ok(Self { digits, lookup })
    }

    /// Number of digit symbols.
    pub fn radix(&self) -> usize {
        self.digits.len()
    }

    /// The zero digit.
    pub fn zero(&self) -> u8 {
        self.digits.as_bytes()[0]
    }

    /// The maximum digit.
    pub fn max_digit(&self) -> u8 {
        self.digits.as_bytes()[self.radix() - 1]
    }

    /// Symbol for a digit value.
    ///
    /// # Panics
    ///
    /// Panics if `value >= self.radix()`.
    pub fn digit(&self, value: usize) -> u8 {
        self.digits.as_bytes()[value]
    }

    /// Digit value of a symbol, or `None` if the symbol is not a digit.
    pub fn value_of(&self, symbol: u8) -> Option<usize> {
        match self.lookup[symbol as usize] {
            NO_VALUE => None,
            v => Some(v as usize),
        }
    }

    /// Like [`Alphabet::value_of`], reporting failure against `key`.
    pub(crate) fn value_in(&self, symbol: u8, key: &str) -> Result<usize> {
        self.value_of(symbol).ok_or_else(|| {
            if symbol.is_ascii() {
                Error::InvalidDigit {
                    key: key.to_owned(),
                    symbol: char::from(symbol),
                }
            } else {
                Error::non_ascii(key)
            }
        })
    }

    /// Checks that every byte of `digits` is a digit of this alphabet.
    pub(crate) fn check_digits(&self, digits: &str, key: &str) -> Result<()> {
        digits
            .bytes()
            .try_for_each(|b| self.value_in(b, key).map(|_| ()))
    }

    /// The digit symbols, in ascending order.
    pub fn as_str(&self) -> &str {
        &self.digits
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::base62()
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.to_owned())
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
