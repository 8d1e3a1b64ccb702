use super::validate_integer;
use crate::{Alphabet, Error, Result};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Splits a validated integer part into its head and digit values.
fn decompose(integer: &str, alphabet: &Alphabet) -> Result<(u8, Vec<usize>)> {
    validate_integer(integer)?;
    let (&head, digits) = integer.as_bytes().split_first().ok_or(Error::EmptyKey)?;
    let values = digits
        .iter()
        .map(|&b| alphabet.value_in(b, integer))
        .collect::<Result<Vec<_>>>()?;
    Ok((head, values))
}

fn compose(head: u8, values: &[usize], alphabet: &Alphabet) -> String {
    let mut out = String::with_capacity(values.len() + 1);
    out.push(char::from(head));
    out.extend(values.iter().map(|&v| char::from(alphabet.digit(v))));
    out
}

/// Returns the integer part one step above `integer`.
///
/// `Ok(None)` is the overflow marker: `z` followed by 26 maximum digits has
/// no successor. Crossing from the negative to the non-negative side (`Zz`
/// to `a0` in base 62) resets to the shortest non-negative length.
///
/// # Errors
///
/// Fails if `integer` is not a well-formed integer part: see
/// [`validate_integer`](crate::validate_integer) and
/// [`Error::InvalidDigit`].
///
/// # Example
///
/// ```
/// use ordkey::{Alphabet, increment};
///
/// let alphabet = Alphabet::base62();
/// assert_eq!(increment("a0", &alphabet).unwrap().as_deref(), Some("a1"));
/// assert_eq!(increment("az", &alphabet).unwrap().as_deref(), Some("b00"));
/// assert_eq!(increment("Zz", &alphabet).unwrap().as_deref(), Some("a0"));
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(alphabet)))]
pub fn increment(integer: &str, alphabet: &Alphabet) -> Result<Option<String>> {
    let (head, mut values) = decompose(integer, alphabet)?;
    let radix = alphabet.radix();

    for i in (0..values.len()).rev() {
        if values[i] + 1 == radix {
            values[i] = 0;
        } else {
            values[i] += 1;
            return Ok(Some(compose(head, &values, alphabet)));
        }
    }

    // Every digit carried, the head has to move.
    match head {
        b'Z' => Ok(Some(compose(b'a', &[0], alphabet))),
        b'z' => Ok(None),
        _ => {
            let next = head + 1;
            if next > b'a' {
                values.push(0);
            } else {
                values.pop();
            }
            Ok(Some(compose(next, &values, alphabet)))
        }
    }
}

/// Returns the integer part one step below `integer`.
///
/// The exact mirror of [`increment`]. `Ok(None)` is returned for `A`
/// followed by 26 zero digits, the smallest encodable integer.
///
/// # Errors
///
/// Same as [`increment`].
///
/// # Example
///
/// ```
/// use ordkey::{Alphabet, decrement};
///
/// let alphabet = Alphabet::base62();
/// assert_eq!(decrement("a1", &alphabet).unwrap().as_deref(), Some("a0"));
/// assert_eq!(decrement("a0", &alphabet).unwrap().as_deref(), Some("Zz"));
/// assert_eq!(decrement("Y00", &alphabet).unwrap().as_deref(), Some("Xzzz"));
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(alphabet)))]
pub fn decrement(integer: &str, alphabet: &Alphabet) -> Result<Option<String>> {
    let (head, mut values) = decompose(integer, alphabet)?;
    let max = alphabet.radix() - 1;

    for i in (0..values.len()).rev() {
        if values[i] == 0 {
            values[i] = max;
        } else {
            values[i] -= 1;
            return Ok(Some(compose(head, &values, alphabet)));
        }
    }

    // Every digit borrowed, the head has to move.
    match head {
        b'a' => Ok(Some(compose(b'Z', &[max], alphabet))),
        b'A' => Ok(None),
        _ => {
            let next = head - 1;
            if next < b'Z' {
                values.push(max);
            } else {
                values.pop();
            }
            Ok(Some(compose(next, &values, alphabet)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inc(integer: &str, alphabet: &Alphabet) -> Option<String> {
        increment(integer, alphabet).unwrap()
    }

    fn dec(integer: &str, alphabet: &Alphabet) -> Option<String> {
        decrement(integer, alphabet).unwrap()
    }

    #[test]
    fn increment_carries_and_grows() {
        let b62 = Alphabet::base62();
        assert_eq!(inc("a0", &b62).as_deref(), Some("a1"));
        assert_eq!(inc("a9", &b62).as_deref(), Some("aA"));
        assert_eq!(inc("az", &b62).as_deref(), Some("b00"));
        assert_eq!(inc("bzz", &b62).as_deref(), Some("c000"));
        assert_eq!(inc("b0z", &b62).as_deref(), Some("b10"));
    }

    #[test]
    fn increment_shrinks_on_negative_side() {
        let b62 = Alphabet::base62();
        assert_eq!(inc("Yzz", &b62).as_deref(), Some("Z0"));
        assert_eq!(inc("Zy", &b62).as_deref(), Some("Zz"));
        assert_eq!(inc("Zz", &b62).as_deref(), Some("a0"));
    }

    #[test]
    fn increment_overflows_at_the_top() {
        let b62 = Alphabet::base62();
        let top = format!("z{}", "z".repeat(26));
        assert_eq!(inc(&top, &b62), None);

        let below_top = format!("z{}y", "z".repeat(25));
        assert_eq!(inc(&below_top, &b62), Some(top));
    }

    #[test]
    fn decrement_borrows_and_shrinks() {
        let b62 = Alphabet::base62();
        assert_eq!(dec("a1", &b62).as_deref(), Some("a0"));
        assert_eq!(dec("b00", &b62).as_deref(), Some("az"));
        assert_eq!(dec("a0", &b62).as_deref(), Some("Zz"));
        assert_eq!(dec("Z0", &b62).as_deref(), Some("Yzz"));
        assert_eq!(dec("Y00", &b62).as_deref(), Some("Xzzz"));
    }

    #[test]
    fn decrement_overflows_at_the_bottom() {
        let b62 = Alphabet::base62();
        let bottom = format!("A{}", "0".repeat(26));
        assert_eq!(dec(&bottom, &b62), None);

        let above_bottom = format!("A{}1", "0".repeat(25));
        assert_eq!(dec(&above_bottom, &b62), Some(bottom));
    }

    #[test]
    fn custom_alphabets_use_their_own_extremes() {
        let b10 = Alphabet::new("0123456789").unwrap();
        assert_eq!(inc("a9", &b10).as_deref(), Some("b00"));
        assert_eq!(dec("a0", &b10).as_deref(), Some("Z9"));

        let b95: Alphabet = (b' '..=b'~').map(char::from).collect::<String>().parse().unwrap();
        assert_eq!(inc("a~", &b95).as_deref(), Some("b  "));
        assert_eq!(inc("Z~", &b95).as_deref(), Some("a "));
        assert_eq!(dec("a ", &b95).as_deref(), Some("Z~"));
    }

    #[test]
    fn malformed_operands_are_rejected() {
        let b62 = Alphabet::base62();
        assert!(matches!(
            increment("a00", &b62),
            Err(Error::MalformedIntegerPart { .. })
        ));
        assert!(matches!(
            decrement("a-", &b62),
            Err(Error::InvalidDigit { symbol: '-', .. })
        ));
        assert_eq!(increment("", &b62), Err(Error::EmptyKey));
    }
}
