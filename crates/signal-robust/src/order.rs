//! Order statistics by selection
//!
//! Selection (`select_nth_unstable_by`) finds a rank in expected linear
//! time without fully sorting. Keys are ordered totally with NaN above every
//! number, so selection and sorting stay well defined on NaN input.

use signal_core::Real;
use std::cmp::Ordering;

/// Total order on keys: numeric order, NaN after every number
#[inline]
pub fn key_order<R: Real>(a: &R, b: &R) -> Ordering {
    a.partial_cmp(b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Reorder `data` so index `k` holds the k-th smallest key and return that key
///
/// Elements before `k` have keys `<=` it, elements after have keys `>=` it.
/// Returns `None` when `k` is out of bounds.
pub fn select_kth_by_key<T, R, F>(data: &mut [T], k: usize, key: F) -> Option<R>
where
    R: Real,
    F: Fn(&T) -> R,
{
    if k >= data.len() {
        return None;
    }
    let (_, kth, _) = data.select_nth_unstable_by(k, |a, b| key_order(&key(a), &key(b)));
    Some(key(kth))
}

/// Median of the keys, reordering `data`
///
/// Odd length selects the middle rank. Even length selects the upper middle
/// rank; the lower middle is then the largest key of the left partition.
/// Returns `None` for an empty slice.
pub fn median_by_key<T, R, F>(data: &mut [T], key: F) -> Option<R>
where
    R: Real,
    F: Fn(&T) -> R,
{
    let n = data.len();
    let mid = n / 2;
    if n % 2 == 1 {
        return select_kth_by_key(data, mid, key);
    }
    if n == 0 {
        return None;
    }
    let (left, upper, _) = data.select_nth_unstable_by(mid, |a, b| key_order(&key(a), &key(b)));
    let upper = key(upper);

    let lower = left
        .iter()
        .map(&key)
        .fold(None, |best: Option<R>, k| match best {
            Some(b) if key_order(&b, &k) != Ordering::Less => Some(b),
            _ => Some(k),
        })?;
    let two = R::one() + R::one();
    Some(lower + (upper - lower) / two)
}

/// Sort keys ascending in place, NaN last
pub fn sort_ascending<R: Real>(keys: &mut [R]) {
    keys.sort_unstable_by(key_order);
}
