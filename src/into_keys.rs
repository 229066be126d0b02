use core::fmt;

type Delegate<V> = std::vec::IntoIter<(String, V)>;

pub struct IntoKeys<V> {
    delegate: Delegate<V>,
}

impl<V> IntoKeys<V> {
    pub(super) fn from_delegate(delegate: Delegate<V>) -> Self {
        Self { delegate }
    }
}

impl<V> Iterator for IntoKeys<V> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.delegate.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.delegate.size_hint()
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.delegate.count()
    }

    fn last(self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.delegate.last().map(|(k, _)| k)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth(n).map(|(k, _)| k)
    }
}

impl<V> std::iter::FusedIterator for IntoKeys<V> {}

impl<V> ExactSizeIterator for IntoKeys<V> {
    fn len(&self) -> usize {
        self.delegate.len()
    }
}

impl<V> DoubleEndedIterator for IntoKeys<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.delegate.next_back().map(|(k, _)| k)
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth_back(n).map(|(k, _)| k)
    }
}

impl<V: fmt::Debug> fmt::Debug for IntoKeys<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoKeys")
            .field(&self.delegate.as_slice())
            .finish()
    }
}

impl<V: Clone> Clone for IntoKeys<V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate.clone(),
        }
    }
}
