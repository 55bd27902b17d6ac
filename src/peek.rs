use std::iter::FusedIterator;

/// 预读一个元素的迭代器。
///
/// 与[`std::iter::Peekable`]不同，创建时即从源拉取一个元素，并在每次[`next`](Iterator::next)后立即补充，
/// 因此缓冲区中始终是下一个尚未消费的元素。
#[derive(Debug, Clone)]
pub struct Peekable<I: Iterator> {
    iter: I,
    peeked: Option<I::Item>,
}

impl<I: Iterator> Peekable<I> {
    pub fn new(mut iter: I) -> Peekable<I> {
        let peeked = iter.next();
        Peekable { iter, peeked }
    }

    pub fn peek(&self) -> Option<&I::Item> {
        self.peeked.as_ref()
    }

    pub fn peek_mut(&mut self) -> Option<&mut I::Item> {
        self.peeked.as_mut()
    }

    /// 下一个元素满足`func`时消费并返回它，否则不前进。
    pub fn next_if(&mut self, func: impl FnOnce(&I::Item) -> bool) -> Option<I::Item> {
        if self.peeked.as_ref().is_some_and(func) { self.next() } else { None }
    }

    pub fn next_if_eq<T>(&mut self, expected: &T) -> Option<I::Item>
    where
        T: ?Sized,
        I::Item: PartialEq<T>,
    {
        self.next_if(|next| next == expected)
    }

    /// 拆出已预读的元素和源迭代器。
    pub fn into_inner(self) -> (Option<I::Item>, I) {
        (self.peeked, self.iter)
    }
}

impl<I: Iterator> Iterator for Peekable<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let res = self.peeked.take();
        // 源耗尽后不再拉取
        if res.is_some() {
            self.peeked = self.iter.next();
        }
        res
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.peeked {
            None => (0, Some(0)),
            Some(_) => {
                let (lo, hi) = self.iter.size_hint();
                (lo.saturating_add(1), hi.and_then(|hi| hi.checked_add(1)))
            }
        }
    }
}

impl<I: Iterator> FusedIterator for Peekable<I> {}

pub trait EagerPeekableExt: Iterator + Sized {
    fn eager_peekable(self) -> Peekable<Self>;
}

impl<I: Iterator> EagerPeekableExt for I {
    fn eager_peekable(self) -> Peekable<Self> {
        Peekable::new(self)
    }
}
