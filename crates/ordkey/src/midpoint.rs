use crate::{Alphabet, Error, Result};

/// Converts a digit string into digit values.
fn values_of(digits: &str, alphabet: &Alphabet) -> Result<Vec<usize>> {
    digits
        .bytes()
        .map(|b| alphabet.value_in(b, digits))
        .collect()
}

/// Returns a digit string strictly between `start` and `end`.
///
/// Both operands are fractional parts read as digits after a radix point.
/// An empty `start` is the lower limit `0.0…`; `end == None` means there is
/// no upper bound. The result is the shortest candidate the bisection
/// reaches and never ends in the zero digit.
///
/// When the leading digits leave a gap, the result is the single digit at
/// `(a + b + 1) / 2`, rounding ties up. Rounding is part of the output
/// format: changing it changes every generated key.
///
/// # Errors
///
/// - [`Error::OrderingViolation`] if `end` is given and `start >= end`
/// - [`Error::TrailingZero`] if an operand ends in the zero digit
/// - [`Error::InvalidDigit`] if an operand contains a non-digit symbol
///
/// # Example
///
/// ```
/// use ordkey::{Alphabet, midpoint};
///
/// let alphabet = Alphabet::base62();
/// assert_eq!(midpoint("", None, &alphabet).unwrap(), "V");
/// assert_eq!(midpoint("", Some("V"), &alphabet).unwrap(), "G");
/// assert_eq!(midpoint("5", Some("9"), &alphabet).unwrap(), "7");
/// assert_eq!(midpoint("z", None, &alphabet).unwrap(), "zV");
/// ```
pub fn midpoint(start: &str, end: Option<&str>, alphabet: &Alphabet) -> Result<String> {
    let zero = alphabet.zero();
    if let Some(end) = end {
        if start >= end {
            return Err(Error::ordering(start, end));
        }
        if end.as_bytes().last() == Some(&zero) {
            return Err(Error::trailing_zero(end));
        }
    }
    if start.as_bytes().last() == Some(&zero) {
        return Err(Error::trailing_zero(start));
    }

    let start_values = values_of(start, alphabet)?;
    let end_values = end.map(|e| values_of(e, alphabet)).transpose()?;

    let radix = alphabet.radix();
    let mut lo = start_values.as_slice();
    let mut hi = end_values.as_deref();
    let mut out = String::with_capacity(start.len() + 1);
    let push = |out: &mut String, v: usize| out.push(char::from(alphabet.digit(v)));

    loop {
        if let Some(h) = hi {
            // `lo` is compared as if right-padded with zero digits.
            let shared = h
                .iter()
                .enumerate()
                .take_while(|&(i, &d)| lo.get(i).copied().unwrap_or(0) == d)
                .count();
            if shared > 0 {
                h[..shared].iter().for_each(|&d| push(&mut out, d));
                lo = lo.get(shared..).unwrap_or_default();
                hi = Some(&h[shared..]);
            }
        }

        let a = lo.first().copied().unwrap_or(0);
        let b = hi.and_then(|h| h.first().copied()).unwrap_or(radix);

        if b > a + 1 {
            push(&mut out, (a + b + 1) / 2);
            return Ok(out);
        }

        if let Some(h) = hi {
            // A lone leading digit is below any longer `hi` sharing it.
            if h.len() > 1 {
                push(&mut out, h[0]);
                return Ok(out);
            }
        }

        // No room at this position: keep `lo`'s digit and open the top.
        push(&mut out, a);
        lo = lo.get(1..).unwrap_or_default();
        hi = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mid(start: &str, end: Option<&str>) -> String {
        midpoint(start, end, &Alphabet::base62()).unwrap()
    }

    #[test]
    fn open_top_picks_middle_of_remaining_range() {
        assert_eq!(mid("", None), "V");
        assert_eq!(mid("V", None), "l");
        assert_eq!(mid("y", None), "z");
        assert_eq!(mid("z", None), "zV");
        assert_eq!(mid("zz", None), "zzV");
    }

    #[test]
    fn gap_rounds_half_up() {
        assert_eq!(mid("", Some("V")), "G");
        assert_eq!(mid("", Some("G")), "8");
        assert_eq!(mid("5", Some("9")), "7");
        assert_eq!(mid("5", Some("8")), "7");
    }

    #[test]
    fn adjacent_digits_extend_resolution() {
        assert_eq!(mid("", Some("1")), "0V");
        assert_eq!(mid("5", Some("6")), "5V");
        assert_eq!(mid("", Some("1V")), "1");
    }

    #[test]
    fn shared_prefix_is_kept() {
        assert_eq!(mid("abc1", Some("abc3")), "abc2");
        assert_eq!(mid("", Some("01")), "00V");
        assert_eq!(mid("1", Some("1V")), "1G");
    }

    #[test]
    fn long_shared_prefix_does_not_recurse() {
        let prefix = "V".repeat(100_000);
        let start = format!("{prefix}1");
        let end = format!("{prefix}2");
        let out = mid(&start, Some(&end));
        assert!(start < out && out < end);
        assert_eq!(out.len(), prefix.len() + 2);
    }

    #[test]
    fn rejects_broken_preconditions() {
        let b62 = Alphabet::base62();
        assert_eq!(
            midpoint("V", Some("V"), &b62),
            Err(Error::OrderingViolation {
                start: "V".into(),
                end: "V".into()
            })
        );
        assert_eq!(
            midpoint("10", None, &b62),
            Err(Error::TrailingZero { key: "10".into() })
        );
        assert_eq!(
            midpoint("1", Some("20"), &b62),
            Err(Error::TrailingZero { key: "20".into() })
        );
        assert!(matches!(
            midpoint("1", Some("2-"), &b62),
            Err(Error::InvalidDigit { symbol: '-', .. })
        ));
    }

    #[test]
    fn binary_alphabet_still_terminates() {
        let b2 = Alphabet::new("01").unwrap();
        assert_eq!(midpoint("", None, &b2).unwrap(), "1");
        assert_eq!(midpoint("1", None, &b2).unwrap(), "11");
        assert_eq!(midpoint("", Some("1"), &b2).unwrap(), "01");
        assert_eq!(midpoint("01", Some("1"), &b2).unwrap(), "011");
    }
}
