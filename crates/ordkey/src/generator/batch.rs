use super::between::between;
use crate::{Alphabet, Endpoint, OrderKey, Result};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Generates `n` strictly increasing keys, all strictly between `start` and
/// `end`.
///
/// With an open upper end the keys are successive appends, with an open lower
/// end successive prepends (returned in ascending order). With both ends
/// bounded the range is bisected: the middle key first, then each half
/// recursively, so key length grows with `log2(n)` rather than `n`.
///
/// Every adjacent pair in the result still has room for another key.
///
/// # Errors
///
/// Same as [`key_between`](crate::key_between). `n == 0` returns an empty
/// vector without inspecting the endpoints.
///
/// # Example
///
/// ```
/// use ordkey::{Alphabet, Endpoint, n_keys_between};
///
/// let alphabet = Alphabet::base62();
/// let keys = n_keys_between("a1", "a2", 3, &alphabet).unwrap();
/// assert_eq!(keys, ["a1G", "a1V", "a1l"]);
///
/// let keys = n_keys_between(Endpoint::Unbounded, "a0", 3, &alphabet).unwrap();
/// assert_eq!(keys, ["Zx", "Zy", "Zz"]);
/// ```
pub fn n_keys_between<'a>(
    start: impl Into<Endpoint<'a>>,
    end: impl Into<Endpoint<'a>>,
    n: usize,
    alphabet: &Alphabet,
) -> Result<Vec<OrderKey>> {
    n_between(start.into(), end.into(), n, alphabet)
}

#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(alphabet)))]
pub(crate) fn n_between(
    start: Endpoint<'_>,
    end: Endpoint<'_>,
    n: usize,
    alphabet: &Alphabet,
) -> Result<Vec<OrderKey>> {
    match (n, start, end) {
        (0, ..) => Ok(Vec::new()),
        (1, ..) => Ok(vec![between(start, end, alphabet)?]),
        (_, _, Endpoint::Unbounded) => append(start, n, alphabet),
        (_, Endpoint::Unbounded, Endpoint::Key(end)) => prepend(end, n, alphabet),
        (_, Endpoint::Key(_), Endpoint::Key(_)) => bisect(start, end, n, alphabet),
    }
}

fn append(start: Endpoint<'_>, n: usize, alphabet: &Alphabet) -> Result<Vec<OrderKey>> {
    let mut keys = Vec::with_capacity(n);
    let mut current = between(start, Endpoint::Unbounded, alphabet)?;
    for _ in 1..n {
        let next = between(Endpoint::from(&current), Endpoint::Unbounded, alphabet)?;
        keys.push(core::mem::replace(&mut current, next));
    }
    keys.push(current);
    Ok(keys)
}

fn prepend(end: &str, n: usize, alphabet: &Alphabet) -> Result<Vec<OrderKey>> {
    let mut keys = Vec::with_capacity(n);
    let mut current = between(Endpoint::Unbounded, Endpoint::Key(end), alphabet)?;
    for _ in 1..n {
        let prev = between(Endpoint::Unbounded, Endpoint::from(&current), alphabet)?;
        keys.push(core::mem::replace(&mut current, prev));
    }
    keys.push(current);
    keys.reverse();
    Ok(keys)
}

fn bisect(
    start: Endpoint<'_>,
    end: Endpoint<'_>,
    n: usize,
    alphabet: &Alphabet,
) -> Result<Vec<OrderKey>> {
    let left_len = n / 2;
    let middle = between(start, end, alphabet)?;

    let mut keys = n_between(start, Endpoint::from(&middle), left_len, alphabet)?;
    let right = n_between(Endpoint::from(&middle), end, n - left_len - 1, alphabet)?;

    keys.reserve_exact(right.len() + 1);
    keys.push(middle);
    keys.extend(right);
    Ok(keys)
}
