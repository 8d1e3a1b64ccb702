use super::{
    batch::n_between,
    between::{between, seed},
};
use crate::{Alphabet, Endpoint, OrderKey, Result, validate};

/// An order-key generator bound to one digit alphabet.
///
/// This is the same machinery as [`key_between`] and [`n_keys_between`] with
/// the alphabet carried alongside, so call sites that share an ordering space
/// cannot drift onto different alphabets. The generator holds no other state:
/// it is `Send + Sync` and every method takes `&self`.
///
/// # Example
///
/// ```
/// use ordkey::KeyGenerator;
///
/// let keys = KeyGenerator::default();
///
/// let first = keys.first();
/// let last = keys.after(&first).unwrap();
/// let middle = keys.between(&first, &last).unwrap();
/// assert!(first < middle && middle < last);
///
/// let batch = keys.n_between(&first, &middle, 4).unwrap();
/// assert_eq!(batch.len(), 4);
/// assert!(batch.windows(2).all(|w| w[0] < w[1]));
/// ```
///
/// [`key_between`]: crate::key_between
/// [`n_keys_between`]: crate::n_keys_between
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyGenerator {
    alphabet: Alphabet,
}

impl KeyGenerator {
    /// Creates a generator for `alphabet`.
    pub const fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// The alphabet every key is interpreted against.
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The seed key of an empty ordering space.
    pub fn first(&self) -> OrderKey {
        OrderKey::from_generated(seed(&self.alphabet))
    }

    /// A key sorting after `key`.
    pub fn after<'a>(&self, key: impl Into<Endpoint<'a>>) -> Result<OrderKey> {
        between(key.into(), Endpoint::Unbounded, &self.alphabet)
    }

    /// A key sorting before `key`.
    pub fn before<'a>(&self, key: impl Into<Endpoint<'a>>) -> Result<OrderKey> {
        between(Endpoint::Unbounded, key.into(), &self.alphabet)
    }

    /// A key strictly between `start` and `end`.
    ///
    /// See [`key_between`](crate::key_between).
    pub fn between<'a>(
        &self,
        start: impl Into<Endpoint<'a>>,
        end: impl Into<Endpoint<'a>>,
    ) -> Result<OrderKey> {
        between(start.into(), end.into(), &self.alphabet)
    }

    /// `n` increasing keys strictly between `start` and `end`.
    ///
    /// See [`n_keys_between`](crate::n_keys_between).
    pub fn n_between<'a>(
        &self,
        start: impl Into<Endpoint<'a>>,
        end: impl Into<Endpoint<'a>>,
        n: usize,
    ) -> Result<Vec<OrderKey>> {
        n_between(start.into(), end.into(), n, &self.alphabet)
    }

    /// Checks `key` against this generator's alphabet.
    pub fn validate(&self, key: &str) -> Result<()> {
        validate(key, &self.alphabet)
    }

    /// Validates and wraps `key`.
    pub fn parse(&self, key: impl Into<String>) -> Result<OrderKey> {
        OrderKey::parse(key, &self.alphabet)
    }
}

impl From<Alphabet> for KeyGenerator {
    fn from(alphabet: Alphabet) -> Self {
        Self::new(alphabet)
    }
}
