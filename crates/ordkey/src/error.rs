/// A result type defaulting to the crate-wide [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `ordkey` can produce.
///
/// Every variant corresponds to exactly one broken precondition. Validation
/// happens before any output is built, so an error never leaves a partially
/// generated key behind.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The key was the empty string, which has no head character.
    #[error("invalid order key: empty key")]
    EmptyKey,

    /// The head character is outside `a..=z` and `A..=Z`.
    #[error("invalid order key head: {head}")]
    InvalidHead {
        /// The offending head character.
        head: char,
    },

    /// The key is shorter than the integer-part length its head declares.
    #[error("invalid order key: {key}")]
    TruncatedKey {
        /// The key as supplied.
        key: String,
        /// Length declared by the head character.
        expected: usize,
    },

    /// An integer part whose actual length disagrees with its head.
    #[error("invalid integer part of order key: {integer}")]
    MalformedIntegerPart {
        /// The integer part as supplied.
        integer: String,
    },

    /// A digit position holds a symbol that is not in the alphabet.
    #[error("invalid order key: {key} (symbol {symbol:?} is not a digit)")]
    InvalidDigit {
        /// The key as supplied.
        key: String,
        /// The first symbol that failed the lookup.
        symbol: char,
    },

    /// The fractional part ends in the zero digit.
    #[error("invalid order key: {key}")]
    TrailingZero {
        /// The key (or fractional operand) as supplied.
        key: String,
    },

    /// The key equals the reserved minimum sentinel.
    #[error("invalid order key: {key}")]
    ReservedKey {
        /// The sentinel literal.
        key: String,
    },

    /// Both endpoints were given but `start >= end`.
    #[error("{start} >= {end}")]
    OrderingViolation {
        /// Lower endpoint.
        start: String,
        /// Upper endpoint.
        end: String,
    },

    /// The integer range has no representable value below `key`.
    #[error("cannot decrement anymore: {key}")]
    Exhausted {
        /// The integer part that could not be decremented.
        key: String,
    },

    /// The digit alphabet is unusable.
    #[error("invalid alphabet: {reason}")]
    InvalidAlphabet {
        /// Why the alphabet was rejected.
        reason: &'static str,
    },
}

impl Error {
    pub(crate) fn truncated(key: &str, expected: usize) -> Self {
        Self::TruncatedKey {
            key: key.to_owned(),
            expected,
        }
    }

    /// A key holding a non-ASCII symbol; reports the first such character.
    pub(crate) fn non_ascii(key: &str) -> Self {
        Self::InvalidDigit {
            key: key.to_owned(),
            symbol: key.chars().find(|c| !c.is_ascii()).unwrap_or_default(),
        }
    }

    pub(crate) fn trailing_zero(key: &str) -> Self {
        Self::TrailingZero {
            key: key.to_owned(),
        }
    }

    pub(crate) fn ordering(start: &str, end: &str) -> Self {
        Self::OrderingViolation {
            start: start.to_owned(),
            end: end.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_key() {
        assert_eq!(
            Error::trailing_zero("a00").to_string(),
            "invalid order key: a00"
        );
        assert_eq!(
            Error::InvalidHead { head: '0' }.to_string(),
            "invalid order key head: 0"
        );
        assert_eq!(Error::ordering("a1", "a0").to_string(), "a1 >= a0");
    }
}
