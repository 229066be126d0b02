use core::fmt;

type Delegate<'a, V> = std::slice::Iter<'a, (String, V)>;

/// Iterator over the values of every pair matching a key, in original
/// order. Unlike the whole-list iterators this one filters as it goes, so
/// it is not exact-size.
pub struct GetValues<'a, V> {
    key: &'a str,
    delegate: Delegate<'a, V>,
}

impl<'a, V> GetValues<'a, V> {
    pub(super) fn new(key: &'a str, delegate: Delegate<'a, V>) -> Self {
        Self { key, delegate }
    }
}

impl<'a, V> Iterator for GetValues<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.key;
        self.delegate
            .by_ref()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.delegate.len()))
    }
}

impl<'a, V> std::iter::FusedIterator for GetValues<'a, V> {}

impl<'a, V> DoubleEndedIterator for GetValues<'a, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.key;
        self.delegate
            .by_ref()
            .rfind(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

impl<'a, V> fmt::Debug for GetValues<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetValues")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl<'a, V> Clone for GetValues<'a, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            delegate: self.delegate.clone(),
        }
    }
}
