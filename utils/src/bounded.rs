use std::collections::TryReserveError;

use thiserror::Error;

/// Errors from [`Bounded`].
#[derive(Debug, Error)]
pub enum BoundedError {
    /// A push would have grown the list past its limit.
    #[error("at most {limit} entries allowed")]
    Full {
        /// The limit fixed at construction.
        limit: usize,
    },
    /// Storage for the entries could not be allocated.
    #[error("allocating {limit} entries: {source}")]
    Alloc {
        /// The limit requested at construction.
        limit: usize,
        /// The allocator error.
        #[source]
        source: TryReserveError,
    },
}

/// An append-only list whose maximum length is fixed when it is created.
///
/// All storage is reserved up front, so a successful [`Bounded::with_limit`]
/// guarantees that pushes up to the limit never allocate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounded<T> {
    items: Vec<T>,
    limit: usize,
}

impl<T> Bounded<T> {
    /// Create an empty list that can hold at most `limit` entries.
    pub fn with_limit(limit: usize) -> Result<Self, BoundedError> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(limit)
            .map_err(|source| BoundedError::Alloc { limit, source })?;
        Ok(Self { items, limit })
    }

    /// Append an entry, failing if the list is already full.
    pub fn push(&mut self, item: T) -> Result<(), BoundedError> {
        if self.items.len() >= self.limit {
            return Err(BoundedError::Full { limit: self.limit });
        }
        self.items.push(item);
        Ok(())
    }

    /// Append every entry of `iter` in order, stopping at the first failure.
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), BoundedError> {
        iter.into_iter().try_for_each(|item| self.push(item))
    }

    /// The current entries.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the list, returning the entries.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(Bounded<String>: Send, Sync, Clone);

    #[test]
    fn test_push_to_limit() {
        let mut b = Bounded::with_limit(2).unwrap();
        b.push("a").unwrap();
        b.push("b").unwrap();
        assert!(matches!(b.push("c"), Err(BoundedError::Full { limit: 2 })));
        similar_asserts::assert_eq!(b.as_slice(), &["a", "b"]);
        assert_eq!(b.limit, 2);
    }

    #[test]
    fn test_zero_limit() {
        let mut b = Bounded::with_limit(0).unwrap();
        assert!(b.push(1u8).is_err());
        assert!(b.into_vec().is_empty());
    }

    #[test]
    fn test_try_extend() {
        let mut b = Bounded::with_limit(3).unwrap();
        b.try_extend(["x", "y"]).unwrap();
        assert!(b.try_extend(["z", "overflow"]).is_err());
        // Entries before the overflowing one are kept
        similar_asserts::assert_eq!(b.into_vec(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_alloc_failure() {
        let r = Bounded::<u64>::with_limit(usize::MAX);
        assert!(matches!(r, Err(BoundedError::Alloc { .. })));
    }
}
