//! The generic ordering engine shared by every content collection.

use std::cmp::Ordering;

use crate::collation::Collation;

/// A piece of site content that can be placed in a deterministic order.
pub trait ContentRecord {
    /// Unique identifying path (e.g. `contents/faqs/solo.mdx`).
    fn path(&self) -> &str;

    /// Explicit position; `None` sorts after every record that has one.
    fn order(&self) -> Option<f64>;

    /// String compared with collation when explicit order does not decide.
    /// Records missing the underlying field report `""`.
    fn fallback_key(&self) -> &str;
}

/// Compare two records by explicit order, then collated fallback key, then path.
///
/// Absent order behaves as +infinity, and `-0.0` sits at the same position as
/// `0.0`. Paths are compared byte-wise, so the result is only `Equal` for
/// records that agree on all three keys.
pub fn compare_records<T, O, F, P>(
    a: &T,
    b: &T,
    order_key: &O,
    fallback_key: &F,
    path_key: &P,
    collation: &Collation,
) -> Ordering
where
    O: Fn(&T) -> Option<f64>,
    F: Fn(&T) -> &str,
    P: Fn(&T) -> &str,
{
    let by_order = match (order_key(a), order_key(b)) {
        // `+ 0.0` folds -0.0 into 0.0 so the two compare equal.
        (Some(x), Some(y)) => (x + 0.0).total_cmp(&(y + 0.0)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_order
        .then_with(|| collation.compare(fallback_key(a), fallback_key(b)))
        .then_with(|| path_key(a).cmp(path_key(b)))
}

/// Return a new, ordered copy of `records`. The input is left untouched.
pub fn order_records<T, O, F, P>(
    records: &[T],
    order_key: O,
    fallback_key: F,
    path_key: P,
    collation: &Collation,
) -> Vec<T>
where
    T: Clone,
    O: Fn(&T) -> Option<f64>,
    F: Fn(&T) -> &str,
    P: Fn(&T) -> &str,
{
    let mut ordered = records.to_vec();
    ordered.sort_by(|a, b| compare_records(a, b, &order_key, &fallback_key, &path_key, collation));
    log::debug!(
        "ordered {} records with {} collation",
        ordered.len(),
        collation.locale()
    );
    ordered
}

/// Order any [`ContentRecord`] collection by its own keys.
pub fn order_content<T>(records: &[T], collation: &Collation) -> Vec<T>
where
    T: ContentRecord + Clone,
{
    order_records(records, T::order, T::fallback_key, T::path, collation)
}
