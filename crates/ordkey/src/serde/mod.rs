//! `serde` support for [`OrderKey`].
//!
//! Keys serialize as plain strings. A key is only meaningful against the
//! alphabet it was generated with, so there is no `Deserialize` impl on
//! `OrderKey` itself: deserialize through [`KeySeed`], which carries the
//! alphabet, or through the [`as_base62_key`] field helper.

use crate::{Alphabet, OrderKey};
use serde::de::DeserializeSeed;
use serde::{Deserializer, Serialize, Serializer};

impl Serialize for OrderKey {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(self.as_str())
    }
}

/// Deserializes an [`OrderKey`], validating it against the wrapped alphabet.
///
/// # Example
///
/// ```
/// use ordkey::{Alphabet, KeyGenerator, KeySeed};
/// use serde::de::DeserializeSeed;
///
/// let base10 = Alphabet::new("0123456789").unwrap();
/// let key = KeyGenerator::new(base10.clone()).first();
/// let json = serde_json::to_string(&key).unwrap();
///
/// let mut de = serde_json::Deserializer::from_str(&json);
/// let back = KeySeed::new(&base10).deserialize(&mut de).unwrap();
/// assert_eq!(back, key);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct KeySeed<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> KeySeed<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }
}

impl<'de> DeserializeSeed<'de> for KeySeed<'_> {
    type Value = OrderKey;

    fn deserialize<D>(self, d: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderKeyVisitor<'a>(&'a Alphabet);

        impl serde::de::Visitor<'_> for OrderKeyVisitor<'_> {
            type Value = OrderKey;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(formatter, "an order key over the digits {:?}", self.0.as_str())
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                OrderKey::parse(v, self.0).map_err(serde::de::Error::custom)
            }

            #[inline]
            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                OrderKey::parse(v, self.0).map_err(serde::de::Error::custom)
            }
        }

        d.deserialize_string(OrderKeyVisitor(self.alphabet))
    }
}

/// Field helper for keys generated over [`Alphabet::base62`].
///
/// Use with `#[serde(with = "ordkey::as_base62_key")]`.
pub mod as_base62_key {
    use super::*;

    pub fn serialize<S>(key: &OrderKey, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        key.serialize(s)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<OrderKey, D::Error>
    where
        D: Deserializer<'de>,
    {
        KeySeed::new(&Alphabet::base62()).deserialize(d)
    }
}
