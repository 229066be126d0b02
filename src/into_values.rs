use core::fmt;

type Delegate<V> = std::vec::IntoIter<(String, V)>;

pub struct IntoValues<V> {
    delegate: Delegate<V>,
}

impl<V> IntoValues<V> {
    pub(super) fn from_delegate(delegate: Delegate<V>) -> Self {
        Self { delegate }
    }
}

impl<V> Iterator for IntoValues<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.delegate.next().map(|(_, v)| v)
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
        self.delegate.last().map(|(_, v)| v)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth(n).map(|(_, v)| v)
    }
}

impl<V> std::iter::FusedIterator for IntoValues<V> {}

impl<V> ExactSizeIterator for IntoValues<V> {
    fn len(&self) -> usize {
        self.delegate.len()
    }
}

impl<V> DoubleEndedIterator for IntoValues<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.delegate.next_back().map(|(_, v)| v)
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth_back(n).map(|(_, v)| v)
    }
}

impl<V: fmt::Debug> fmt::Debug for IntoValues<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoValues")
            .field(&self.delegate.as_slice())
            .finish()
    }
}

impl<V: Clone> Clone for IntoValues<V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate.clone(),
        }
    }
}
