use core::fmt;

type Delegate<'a, V> = std::slice::Iter<'a, (String, V)>;

pub struct Keys<'a, V> {
    delegate: Delegate<'a, V>,
}

impl<'a, V> Keys<'a, V> {
    pub(super) fn from_delegate(delegate: Delegate<'a, V>) -> Self {
        Self { delegate }
    }
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.delegate.next().map(|(k, _)| k.as_str())
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
        self.delegate.last().map(|(k, _)| k.as_str())
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth(n).map(|(k, _)| k.as_str())
    }
}

impl<'a, V> std::iter::FusedIterator for Keys<'a, V> {}

impl<'a, V> ExactSizeIterator for Keys<'a, V> {
    fn len(&self) -> usize {
        self.delegate.len()
    }
}

impl<'a, V> DoubleEndedIterator for Keys<'a, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.delegate.next_back().map(|(k, _)| k.as_str())
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth_back(n).map(|(k, _)| k.as_str())
    }
}

impl<'a, V: fmt::Debug> fmt::Debug for Keys<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Keys")
            .field(&self.delegate.as_slice())
            .finish()
    }
}

impl<'a, V> Clone for Keys<'a, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate.clone(),
        }
    }
}
