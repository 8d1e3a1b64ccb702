use crate::{Alphabet, Error, Result, integer};
use core::borrow::Borrow;
use core::fmt;

/// Checks that `key` is a canonical order key under `alphabet`.
///
/// Malformed input is rejected, never normalised. Checks run in this order:
///
/// 1. [`Error::EmptyKey`]
/// 2. [`Error::ReservedKey`] for `A` followed by 26 zero digits
/// 3. [`Error::InvalidHead`] / [`Error::TruncatedKey`] for the integer part
/// 4. [`Error::InvalidDigit`] for any symbol outside the alphabet
/// 5. [`Error::TrailingZero`] if the fractional part ends in the zero digit
///
/// # Example
///
/// ```
/// use ordkey::{Alphabet, validate};
///
/// let alphabet = Alphabet::base62();
/// assert!(validate("a0", &alphabet).is_ok());
/// assert!(validate("a0V", &alphabet).is_ok());
/// assert!(validate("a00", &alphabet).is_err());
/// assert_eq!(
///     validate("foo", &alphabet).unwrap_err().to_string(),
///     "invalid order key: foo"
/// );
/// ```
pub fn validate(key: &str, alphabet: &Alphabet) -> Result<()> {
    if key.is_empty() {
        return Err(Error::EmptyKey);
    }
    if integer::is_reserved(key, alphabet) {
        return Err(Error::ReservedKey {
            key: key.to_owned(),
        });
    }
    let (integer, fraction) = integer::split_key(key)?;
    alphabet.check_digits(&integer[1..], key)?;
    alphabet.check_digits(fraction, key)?;
    if fraction.as_bytes().last() == Some(&alphabet.zero()) {
        return Err(Error::trailing_zero(key));
    }
    Ok(())
}

/// A validated order key.
///
/// Order keys compare as plain strings; that comparison is the ordering
/// they encode. An `OrderKey` is only obtained from the generator or from
/// [`OrderKey::parse`], so holding one means the key was canonical under the
/// alphabet it was checked against.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OrderKey(String);

impl OrderKey {
    /// Validates `key` against `alphabet` and wraps it.
    ///
    /// # Errors
    ///
    /// Any error of [`validate`].
    pub fn parse(key: impl Into<String>, alphabet: &Alphabet) -> Result<Self> {
        let key = key.into();
        validate(&key, alphabet)?;
        Ok(Self(key))
    }

    /// Wraps a key the generator has just built.
    pub(crate) const fn from_generated(key: String) -> Self {
        Self(key)
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwraps into the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Splits the key into its integer and fractional parts.
    pub fn parts(&self) -> (&str, &str) {
        // Validated keys start with an ASCII letter and hold the whole
        // integer part it declares.
        self.0.split_at(integer::declared_length(self.0.as_bytes()[0]))
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OrderKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for OrderKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<OrderKey> for String {
    fn from(key: OrderKey) -> Self {
        key.0
    }
}

impl PartialEq<str> for OrderKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for OrderKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<OrderKey> for &str {
    fn eq(&self, other: &OrderKey) -> bool {
        *self == other.0
    }
}

/// One side of the open interval a new key is generated in.
///
/// `Unbounded` on the left means "before everything", on the right "after
/// everything". Both endpoints are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint<'a> {
    /// An existing key the result must not equal.
    Key(&'a str),
    /// No bound on this side.
    Unbounded,
}

impl<'a> Endpoint<'a> {
    /// The bounding key, if any.
    pub const fn key(self) -> Option<&'a str> {
        match self {
            Self::Key(key) => Some(key),
            Self::Unbounded => None,
        }
    }
}

impl<'a> From<&'a str> for Endpoint<'a> {
    fn from(key: &'a str) -> Self {
        Self::Key(key)
    }
}

impl<'a> From<&'a String> for Endpoint<'a> {
    fn from(key: &'a String) -> Self {
        Self::Key(key)
    }
}

impl<'a> From<&'a OrderKey> for Endpoint<'a> {
    fn from(key: &'a OrderKey) -> Self {
        Self::Key(key.as_str())
    }
}

impl<'a, T> From<Option<T>> for Endpoint<'a>
where
    T: Into<Endpoint<'a>>,
{
    fn from(key: Option<T>) -> Self {
        key.map_or(Self::Unbounded, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_keys() {
        let b62 = Alphabet::base62();
        for key in ["a0", "a1", "Zz", "a0V", "b125", "Xzzz", "A000000000000000000000000000V"] {
            assert_eq!(validate(key, &b62), Ok(()), "{key}");
        }
    }

    #[test]
    fn rejects_each_broken_rule() {
        let b62 = Alphabet::base62();
        assert_eq!(validate("", &b62), Err(Error::EmptyKey));
        assert_eq!(
            validate("A00000000000000000000000000", &b62),
            Err(Error::ReservedKey {
                key: "A00000000000000000000000000".into()
            })
        );
        assert_eq!(validate("0", &b62), Err(Error::InvalidHead { head: '0' }));
        assert!(matches!(
            validate("b1", &b62),
            Err(Error::TruncatedKey { expected: 3, .. })
        ));
        assert!(matches!(
            validate("a0-", &b62),
            Err(Error::InvalidDigit { symbol: '-', .. })
        ));
        assert!(matches!(
            validate("a_1", &b62),
            Err(Error::InvalidDigit { symbol: '_', .. })
        ));
        assert_eq!(
            validate("a00", &b62),
            Err(Error::TrailingZero { key: "a00".into() })
        );
    }

    #[test]
    fn integer_part_may_end_in_zero() {
        let b62 = Alphabet::base62();
        assert!(validate("b00", &b62).is_ok());
        assert!(validate("b000", &b62).is_err());
    }

    #[test]
    fn non_ascii_tail_is_an_invalid_digit() {
        let b62 = Alphabet::base62();
        assert!(matches!(
            validate("aé", &b62),
            Err(Error::InvalidDigit { symbol: 'é', .. })
        ));
        assert_eq!(
            validate("a0é", &b62),
            Err(Error::InvalidDigit {
                key: "a0é".into(),
                symbol: 'é'
            })
        );
        assert!(matches!(
            validate("bé", &b62),
            Err(Error::InvalidDigit { symbol: 'é', .. })
        ));
    }

    #[test]
    fn parsed_keys_keep_string_order() {
        let b62 = Alphabet::base62();
        let a = OrderKey::parse("a0", &b62).unwrap();
        let b = OrderKey::parse("a0V", &b62).unwrap();
        assert!(a < b);
        assert_eq!(a, "a0");
        assert_eq!(b.parts(), ("a0", "V"));
        assert_eq!(a.parts(), ("a0", ""));
        let negative = OrderKey::parse("Xzzz1", &b62).unwrap();
        assert_eq!(negative.parts(), ("Xzzz", "1"));
        let longest = OrderKey::parse("A000000000000000000000000000V", &b62).unwrap();
        assert_eq!(longest.parts(), ("A00000000000000000000000000", "0V"));
        assert_eq!(b.to_string(), "a0V");
        assert_eq!(String::from(b), "a0V");
        assert!(OrderKey::parse("a00", &b62).is_err());
    }

    #[test]
    fn endpoints_convert_from_options() {
        assert_eq!(Endpoint::from(Some("a0")), Endpoint::Key("a0"));
        assert_eq!(Endpoint::from(None::<&str>), Endpoint::Unbounded);
        assert_eq!(Endpoint::Key("a0").key(), Some("a0"));
        assert_eq!(Endpoint::Unbounded.key(), None);
    }
}
