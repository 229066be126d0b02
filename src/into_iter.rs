use core::fmt;

type Delegate<V> = std::vec::IntoIter<(String, V)>;

pub struct IntoIter<V> {
    delegate: Delegate<V>,
}

impl<V> IntoIter<V> {
    pub(super) fn from_delegate(delegate: Delegate<V>) -> Self {
        Self { delegate }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.delegate.next()
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
        self.delegate.last()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth(n)
    }
}

impl<V> std::iter::FusedIterator for IntoIter<V> {}

impl<V> ExactSizeIterator for IntoIter<V> {
    fn len(&self) -> usize {
        self.delegate.len()
    }
}

impl<V> DoubleEndedIterator for IntoIter<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.delegate.next_back()
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth_back(n)
    }
}

impl<V: fmt::Debug> fmt::Debug for IntoIter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter")
            .field(&self.delegate.as_slice())
            .finish()
    }
}

impl<V: Clone> Clone for IntoIter<V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate.clone(),
        }
    }
}
