use itertools::Itertools;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Add, ControlFlow};
use tracing::trace;

pub mod zip;

/// 对每个元素应用`f`，惰性求值。
///
/// `f`中的panic不会被捕获，在拉取对应元素时直接传递给调用方。
pub fn map<I, F, U>(iter: I, f: F) -> std::iter::Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    iter.into_iter().map(f)
}

/// 将全部元素按拉取顺序收集为`Vec`。
///
/// 要求源有限，否则不会返回。
pub fn spread<I: IntoIterator>(iter: I) -> Vec<I::Item> {
    iter.into_iter().collect_vec()
}

/// 逆序输出源中的元素。
///
/// 首次拉取时才会把源全部读入缓冲区（见[`spread`]），之后从缓冲区尾部逐个弹出。
/// 要求源有限，否则首次拉取不会返回。
pub fn reverse<I: IntoIterator>(iter: I) -> Reverse<I::IntoIter> {
    Reverse { state: ReverseState::Pending(iter.into_iter()) }
}

/// 带累计状态的映射。
///
/// 累计值以`init`为初值，对每个元素调用`f(acc, item)`得到`(next_acc, out)`，
/// 更新累计值并输出`out`。累计值在返回的迭代器整个生命周期内保持。
pub fn smear<I, F, U, V>(iter: I, f: F, init: U) -> Smear<I::IntoIter, F, U>
where
    I: IntoIterator,
    F: FnMut(U, I::Item) -> (U, V),
{
    Smear { iter: iter.into_iter(), f, acc: Some(init) }
}

/// 累加和：第n个输出为前n个元素之和，从`T::default()`开始累加。
pub fn sum_cumulatively<I, T>(iter: I) -> Smear<I::IntoIter, fn(T, T) -> (T, T), T>
where
    I: IntoIterator<Item = T>,
    T: Add<Output = T> + Clone + Default,
{
    smear(iter, running_sum as fn(T, T) -> (T, T), T::default())
}

fn running_sum<T: Add<Output = T> + Clone>(sum: T, item: T) -> (T, T) {
    let sum = sum + item;
    (sum.clone(), sum)
}

/// 逐个拉取元素并调用`f`，`f`返回[`ControlFlow::Break`]后立即停止，不再拉取后续元素。
///
/// 返回交给`f`处理的元素个数（包含触发停止的元素）。
/// 传入`&mut iter`时，停止后源中剩余元素仍可继续读取。
pub fn apply_on_each_of<I, F>(iter: I, mut f: F) -> usize
where
    I: IntoIterator,
    F: FnMut(I::Item) -> ControlFlow<()>,
{
    let mut applied = 0usize;
    for item in iter {
        applied += 1;
        if f(item).is_break() {
            trace!(applied, "stop applying on early break");
            break;
        }
    }
    applied
}

/// 以`init`为初值归约全部元素，基于[`apply_on_each_of`]。
///
/// `f`返回[`ControlFlow::Continue`]时继续归约；返回[`ControlFlow::Break`]时立即停止，
/// 其中的值即为最终结果，后续元素不会被拉取。
pub fn reduce<I, F, U>(iter: I, mut f: F, init: U) -> U
where
    I: IntoIterator,
    F: FnMut(U, I::Item) -> ControlFlow<U, U>,
{
    let mut acc = Some(init);
    apply_on_each_of(iter, |item| {
        let Some(current) = acc.take() else {
            return ControlFlow::Break(());
        };
        match f(current, item) {
            ControlFlow::Continue(next) => {
                acc = Some(next);
                ControlFlow::Continue(())
            }
            ControlFlow::Break(last) => {
                acc = Some(last);
                ControlFlow::Break(())
            }
        }
    });
    match acc {
        Some(acc) => acc,
        None => unreachable!("accumulator is put back after every step"),
    }
}

/// 是否全部元素都满足`pred`，遇到第一个不满足的元素即停止。空序列返回`true`。
pub fn check_all_fulfill<I, P>(iter: I, mut pred: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    reduce(iter, |_, item| if pred(item) { ControlFlow::Continue(true) } else { ControlFlow::Break(false) }, true)
}

/// 是否存在满足`pred`的元素，遇到第一个满足的元素即停止。空序列返回`false`。
pub fn check_any_fulfills<I, P>(iter: I, mut pred: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    !check_all_fulfill(iter, |item| !pred(item))
}

#[derive(Debug)]
enum ReverseState<I: Iterator> {
    Pending(I),
    Draining(Vec<I::Item>),
}

pub struct Reverse<I: Iterator> {
    state: ReverseState<I>,
}

impl<I: Iterator> Iterator for Reverse<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.state {
                ReverseState::Draining(buffer) => return buffer.pop(),
                ReverseState::Pending(source) => {
                    let buffer = spread(source.by_ref());
                    trace!(len = buffer.len(), "reverse buffered source");
                    self.state = ReverseState::Draining(buffer);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            ReverseState::Pending(source) => source.size_hint(),
            ReverseState::Draining(buffer) => (buffer.len(), Some(buffer.len())),
        }
    }
}

impl<I: Iterator> FusedIterator for Reverse<I> {}

pub struct Smear<I, F, U> {
    iter: I,
    f: F,
    // 仅在`f`执行期间为None
    acc: Option<U>,
}

impl<I, F, U, V> Iterator for Smear<I, F, U>
where
    I: Iterator,
    F: FnMut(U, I::Item) -> (U, V),
{
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        // `f`曾经panic时不再拉取源
        let acc = self.acc.take()?;
        match self.iter.next() {
            Some(item) => {
                let (acc, out) = (self.f)(acc, item);
                self.acc = Some(acc);
                Some(out)
            }
            None => {
                self.acc = Some(acc);
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I> fmt::Debug for Reverse<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reverse").field("state", &self.state).finish()
    }
}

impl<I: fmt::Debug, F, U: fmt::Debug> fmt::Debug for Smear<I, F, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Smear").field("iter", &self.iter).field("acc", &self.acc).finish()
    }
}
