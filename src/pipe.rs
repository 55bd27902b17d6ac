use crate::ZipRes;
use crate::input;
use crate::input::Step;
use crate::op;
use crate::op::zip::IntoZipSources;
use std::ops::{Add, ControlFlow};

/// 链式调用的外观：包装一个迭代器，把各组合子暴露为方法。
///
/// 惰性操作（`op_map`、`op_reverse`、`op_smear`、`op_sum_cumulatively`）返回新的`Pipe`，
/// 其余操作消费整个管道并返回结果。
pub struct Pipe<'a, T> {
    pub(crate) iter: Box<dyn Iterator<Item = T> + 'a>,
}

impl<T> Iterator for Pipe<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T: 'a> Pipe<'a, T> {
    pub fn new<I>(iter: I) -> Pipe<'a, T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Pipe { iter: Box::new(iter.into_iter()) }
    }

    pub fn op_map<U: 'a>(self, f: impl FnMut(T) -> U + 'a) -> Pipe<'a, U> {
        Pipe { iter: Box::new(op::map(self, f)) }
    }

    pub fn op_reverse(self) -> Pipe<'a, T> {
        Pipe { iter: Box::new(op::reverse(self)) }
    }

    pub fn op_smear<U: 'a, V: 'a>(self, f: impl FnMut(U, T) -> (U, V) + 'a, init: U) -> Pipe<'a, V> {
        Pipe { iter: Box::new(op::smear(self, f, init)) }
    }

    pub fn op_reduce<U>(self, f: impl FnMut(U, T) -> ControlFlow<U, U>, init: U) -> U {
        op::reduce(self, f, init)
    }

    /// 见[`op::apply_on_each_of`]。
    pub fn op_apply(self, f: impl FnMut(T) -> ControlFlow<()>) -> usize {
        op::apply_on_each_of(self, f)
    }

    pub fn check_all_fulfill(self, pred: impl FnMut(T) -> bool) -> bool {
        op::check_all_fulfill(self, pred)
    }

    pub fn check_any_fulfills(self, pred: impl FnMut(T) -> bool) -> bool {
        op::check_any_fulfills(self, pred)
    }

    pub fn spread(self) -> Vec<T> {
        op::spread(self)
    }
}

impl<'a, T> Pipe<'a, T>
where
    T: Add<Output = T> + Clone + Default + 'a,
{
    pub fn op_sum_cumulatively(self) -> Pipe<'a, T> {
        Pipe { iter: Box::new(op::sum_cumulatively(self)) }
    }

    pub fn sum_cumulatively<I>(iter: I) -> Pipe<'a, T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Pipe { iter: Box::new(op::sum_cumulatively(iter)) }
    }
}

impl<'a, T: Step + 'a> Pipe<'a, T> {
    pub fn range(start: T, stop: T) -> Pipe<'a, T>
    where
        T: From<bool>,
    {
        Pipe { iter: Box::new(input::range(start, stop)) }
    }

    pub fn range_by(start: T, stop: T, step: T, stop_included: bool) -> Pipe<'a, T> {
        Pipe { iter: Box::new(input::range_by(start, stop, step, stop_included)) }
    }
}

impl<'a, T: Clone + 'a> Pipe<'a, T> {
    pub fn repeat(value: T, times: usize) -> Pipe<'a, T> {
        Pipe { iter: Box::new(input::repeat(value, times)) }
    }
}

impl<'a, T: 'a> Pipe<'a, ZipRes<T>> {
    /// 见[`op::zip::zip`]，元素为`Ok(元组)`或长度不一致的错误。
    pub fn zip<S>(sources: S) -> Pipe<'a, ZipRes<T>>
    where
        S: IntoZipSources<Item = T>,
        S::Sources: 'a,
    {
        Pipe { iter: Box::new(op::zip::zip(sources)) }
    }
}
