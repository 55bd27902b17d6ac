use crate::ZipRes;
use crate::err::IterErr;
use std::iter::FusedIterator;
use tracing::debug;

/// 可以被[`zip`]同步拉取的一组迭代器，目前支持1到8元组。
pub trait ZipSources {
    type Item;

    /// 按声明顺序从每个成员各拉取一次。
    ///
    /// 全部有值时返回`Some(Ok(..))`，全部耗尽时返回`None`，
    /// 否则返回`Some(Err(flags))`，`flags[i]`表示第i个成员是否已耗尽。
    fn pull_each(&mut self) -> Option<Result<Self::Item, Vec<bool>>>;
}

/// 可以转换为[`ZipSources`]的元组，元组成员只需实现[`IntoIterator`]。
pub trait IntoZipSources {
    type Item;
    type Sources: ZipSources<Item = Self::Item>;

    fn into_zip_sources(self) -> Self::Sources;
}

macro_rules! impl_zip_sources {
    ($($name:ident $var:ident $idx:tt),+) => {
        impl<$($name: Iterator),+> ZipSources for ($($name,)+) {
            type Item = ($($name::Item,)+);

            fn pull_each(&mut self) -> Option<Result<Self::Item, Vec<bool>>> {
                let pulled = ($(self.$idx.next(),)+);
                let exhausted = [$(pulled.$idx.is_none()),+];
                if exhausted.iter().all(|&e| e) {
                    return None;
                }
                if let ($(Some($var),)+) = pulled {
                    return Some(Ok(($($var,)+)));
                }
                Some(Err(exhausted.to_vec()))
            }
        }

        impl<$($name: IntoIterator),+> IntoZipSources for ($($name,)+) {
            type Item = ($($name::Item,)+);
            type Sources = ($($name::IntoIter,)+);

            fn into_zip_sources(self) -> Self::Sources {
                ($(self.$idx.into_iter(),)+)
            }
        }
    };
}

impl_zip_sources!(A a 0);
impl_zip_sources!(A a 0, B b 1);
impl_zip_sources!(A a 0, B b 1, C c 2);
impl_zip_sources!(A a 0, B b 1, C c 2, D d 3);
impl_zip_sources!(A a 0, B b 1, C c 2, D d 3, E e 4);
impl_zip_sources!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5);
impl_zip_sources!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6);
impl_zip_sources!(A a 0, B b 1, C c 2, D d 3, E e 4, F f 5, G g 6, H h 7);

/// 严格等长的拉链。
///
/// 每一步按声明顺序从每个成员各拉取一次：
/// - 全部有值时输出`Ok(元组)`；
/// - 全部耗尽时正常结束；
/// - 部分耗尽时输出一次[`IterErr::UnequalLength`]，之后结束。
///
/// 例如：
/// ```
/// let pairs = lazy_pipe::zip((vec![1, 2, 3], "abc".chars())).collect::<Result<Vec<_>, _>>();
/// assert_eq!(pairs, Ok(vec![(1, 'a'), (2, 'b'), (3, 'c')]));
/// ```
pub fn zip<S: IntoZipSources>(sources: S) -> Zip<S::Sources> {
    Zip { sources: sources.into_zip_sources(), step: 0, done: false }
}

#[derive(Debug)]
pub struct Zip<S> {
    sources: S,
    step: usize,
    done: bool,
}

impl<S: ZipSources> Iterator for Zip<S> {
    type Item = ZipRes<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let step = self.step;
        self.step += 1;
        match self.sources.pull_each() {
            Some(Ok(item)) => Some(Ok(item)),
            Some(Err(exhausted)) => {
                self.done = true;
                let err = IterErr::unequal_length(step, &exhausted);
                debug!(step, %err, "zip sources disagree on exhaustion");
                Some(Err(err))
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl<S: ZipSources> FusedIterator for Zip<S> {}
