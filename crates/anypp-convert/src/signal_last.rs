//! Iterator adapter that flags the final element.

use std::iter::{FusedIterator, Peekable};

/// Yields `(is_last, item)` pairs, looking one element ahead.
///
/// Created by [`SignalLastExt::signal_last`].
pub struct SignalLast<I: Iterator> {
    inner: Peekable<I>,
}

impl<I: Iterator> Iterator for SignalLast<I> {
    type Item = (bool, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        Some((self.inner.peek().is_none(), item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for SignalLast<I> {}

impl<I: FusedIterator> FusedIterator for SignalLast<I> {}

/// Extension trait adding [`signal_last`](SignalLastExt::signal_last) to every iterator.
pub trait SignalLastExt: Iterator + Sized {
    fn signal_last(self) -> SignalLast<Self> {
        SignalLast {
            inner: self.peekable(),
        }
    }
}

impl<I: Iterator> SignalLastExt for I {}
