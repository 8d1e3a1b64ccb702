use crate::{
    Alphabet, Endpoint, Error, OrderKey, Result, decrement, increment, is_reserved, midpoint,
    split_key, validate,
};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Generates a key strictly between `start` and `end`.
///
/// Either side may be [`Endpoint::Unbounded`]. With both sides unbounded the
/// result is the seed key: the shortest non-negative integer (`a0` in base
/// 62). Appending and prepending move the integer part so keys stay short;
/// inserting between two keys with the same integer part bisects their
/// fractional parts.
///
/// The output depends only on the arguments.
///
/// # Errors
///
/// - any [`validate`] error for a bounded endpoint
/// - [`Error::OrderingViolation`] if both are bounded and `start >= end`
///
/// There is always room: below the smallest integer the fractional part of
/// the reserved integer is bisected, and above the largest the fractional
/// part is extended.
///
/// # Example
///
/// ```
/// use ordkey::{Alphabet, Endpoint, key_between};
///
/// let alphabet = Alphabet::base62();
/// let first = key_between(Endpoint::Unbounded, Endpoint::Unbounded, &alphabet).unwrap();
/// assert_eq!(first, "a0");
///
/// let second = key_between(&first, Endpoint::Unbounded, &alphabet).unwrap();
/// assert_eq!(second, "a1");
///
/// let zeroth = key_between(Endpoint::Unbounded, &first, &alphabet).unwrap();
/// assert_eq!(zeroth, "Zz");
///
/// let half = key_between(&first, &second, &alphabet).unwrap();
/// assert_eq!(half, "a0V");
/// ```
pub fn key_between<'a>(
    start: impl Into<Endpoint<'a>>,
    end: impl Into<Endpoint<'a>>,
    alphabet: &Alphabet,
) -> Result<OrderKey> {
    between(start.into(), end.into(), alphabet)
}

#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(alphabet)))]
pub(crate) fn between(
    start: Endpoint<'_>,
    end: Endpoint<'_>,
    alphabet: &Alphabet,
) -> Result<OrderKey> {
    if let Endpoint::Key(start) = start {
        validate(start, alphabet)?;
    }
    if let Endpoint::Key(end) = end {
        validate(end, alphabet)?;
    }

    let key = match (start, end) {
        (Endpoint::Key(start), Endpoint::Key(end)) if start >= end => {
            return Err(Error::ordering(start, end));
        }
        (Endpoint::Unbounded, Endpoint::Unbounded) => seed(alphabet),
        (Endpoint::Unbounded, Endpoint::Key(end)) => before(end, alphabet)?,
        (Endpoint::Key(start), Endpoint::Unbounded) => after(start, alphabet)?,
        (Endpoint::Key(start), Endpoint::Key(end)) => within(start, end, alphabet)?,
    };
    Ok(OrderKey::from_generated(key))
}

/// `a` followed by the zero digit.
pub(crate) fn seed(alphabet: &Alphabet) -> String {
    let mut key = String::with_capacity(2);
    key.push('a');
    key.push(char::from(alphabet.zero()));
    key
}

fn before(end: &str, alphabet: &Alphabet) -> Result<String> {
    let (integer, fraction) = split_key(end)?;

    if is_reserved(integer, alphabet) {
        // Nothing below the sentinel integer, bisect towards it instead.
        return Ok(format!("{integer}{}", midpoint("", Some(fraction), alphabet)?));
    }
    if integer < end {
        return Ok(integer.to_owned());
    }

    match decrement(integer, alphabet)? {
        Some(prev) if is_reserved(&prev, alphabet) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(integer, "decremented onto the reserved integer");
            let fraction = midpoint("", None, alphabet)?;
            Ok(prev + &fraction)
        }
        Some(prev) => Ok(prev),
        None => Err(Error::Exhausted {
            key: integer.to_owned(),
        }),
    }
}

fn after(start: &str, alphabet: &Alphabet) -> Result<String> {
    let (integer, fraction) = split_key(start)?;

    match increment(integer, alphabet)? {
        Some(next) => Ok(next),
        None => {
            #[cfg(feature = "tracing")]
            tracing::trace!(integer, "integer range exhausted, extending fraction");
            Ok(format!("{integer}{}", midpoint(fraction, None, alphabet)?))
        }
    }
}

fn within(start: &str, end: &str, alphabet: &Alphabet) -> Result<String> {
    let (start_integer, start_fraction) = split_key(start)?;
    let (end_integer, end_fraction) = split_key(end)?;

    if start_integer == end_integer {
        let fraction = midpoint(start_fraction, Some(end_fraction), alphabet)?;
        return Ok(format!("{start_integer}{fraction}"));
    }

    if let Some(next) = increment(start_integer, alphabet)? {
        if next.as_str() < end {
            return Ok(next);
        }
    }

    let fraction = midpoint(start_fraction, None, alphabet)?;
    Ok(format!("{start_integer}{fraction}"))
}
