use std::iter::{FusedIterator, RepeatN};

/// 可作为范围步进的数值类型，`T::default()`视为0。
pub trait Step: Copy + PartialOrd + Default {
    /// 前进一步，超出类型表示范围时返回None。
    fn checked_step(self, step: Self) -> Option<Self>;
}

macro_rules! impl_step_int {
    ($($t:ty),+) => {
        $(impl Step for $t {
            fn checked_step(self, step: Self) -> Option<Self> {
                self.checked_add(step)
            }
        })+
    };
}

macro_rules! impl_step_float {
    ($($t:ty),+) => {
        $(impl Step for $t {
            fn checked_step(self, step: Self) -> Option<Self> {
                Some(self + step)
            }
        })+
    };
}

impl_step_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_step_float!(f32, f64);

/// 按步长生成`start`到`stop`之间的值，不包含`stop`，步长为1。
///
/// 例如：`range(0, 5)` 生成 0 1 2 3 4。
pub fn range<T>(start: T, stop: T) -> Range<T>
where
    T: Step + From<bool>,
{
    range_by(start, stop, T::from(true), false)
}

/// 按步长生成值，可选在最后额外生成一次`stop`。
///
/// - 步长为正值时，值严格小于`stop`才生成；
/// - 步长为负值（或0）时，值严格大于`stop`才生成；
/// - `stop_included`为真时，无论是否与步长对齐，最后都会生成一次`stop`。
///
/// 步长为0不做检查：若继续条件成立，将无限生成`start`。
/// 下一步超出类型表示范围时视为已越过`stop`。
///
/// 例如：
/// - `range_by(0, 5, 1, true)` 生成 0 1 2 3 4 5
/// - `range_by(0, 5, 2, true)` 生成 0 2 4 5
/// - `range_by(5, 0, -1, false)` 生成 5 4 3 2 1
pub fn range_by<T: Step>(start: T, stop: T, step: T, stop_included: bool) -> Range<T> {
    Range { next: start, stop, step, ascending: step > T::default(), stop_included, state: RangeState::Stepping }
}

/// 重复`value`恰好`times`次，`times`为0时不生成数据。
///
/// 注意与`range_by(1, times, 1, true)`的区别：后者在`times`为0时仍会生成一次`stop`，
/// 这里不依赖它，`repeat(v, 0)`为空。
pub fn repeat<T: Clone>(value: T, times: usize) -> RepeatN<T> {
    std::iter::repeat_n(value, times)
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum RangeState {
    Stepping,
    /// 下一步已溢出
    Overflowed,
    Done,
}

#[derive(Debug, Clone)]
pub struct Range<T> {
    next: T,
    stop: T,
    step: T,
    ascending: bool,
    stop_included: bool,
    state: RangeState,
}

impl<T: Step> Range<T> {
    fn in_range(&self) -> bool {
        if self.ascending { self.next < self.stop } else { self.next > self.stop }
    }
}

impl<T: Step> Iterator for Range<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            RangeState::Stepping if self.in_range() => {
                let res = self.next;
                match res.checked_step(self.step) {
                    Some(next) => self.next = next,
                    None => self.state = RangeState::Overflowed,
                }
                Some(res)
            }
            RangeState::Stepping | RangeState::Overflowed => {
                self.state = RangeState::Done;
                self.stop_included.then_some(self.stop)
            }
            RangeState::Done => None,
        }
    }
}

impl<T: Step> FusedIterator for Range<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_exclusive() {
        assert_eq!(range(0, 5).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_range_inclusive() {
        assert_eq!(range_by(0, 5, 1, true).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_range_descending() {
        assert_eq!(range_by(5, 0, -1, false).collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
        assert_eq!(range_by(5, 0, -1, true).collect::<Vec<_>>(), vec![5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_range_unaligned_stop() {
        assert_eq!(range_by(0, 5, 2, false).collect::<Vec<_>>(), vec![0, 2, 4]);
        assert_eq!(range_by(0, 5, 2, true).collect::<Vec<_>>(), vec![0, 2, 4, 5]);
        assert_eq!(range_by(10, 1, -4, true).collect::<Vec<_>>(), vec![10, 6, 2, 1]);
    }

    #[test]
    fn test_range_empty() {
        assert_eq!(range(3, 3).count(), 0);
        assert_eq!(range(5, 0).count(), 0);
        // 不满足继续条件时仍会生成stop
        assert_eq!(range_by(5, 0, 1, true).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_range_float() {
        assert_eq!(range_by(0.0, 1.0, 0.25, true).collect::<Vec<_>>(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(range(0.5, 3.0).collect::<Vec<_>>(), vec![0.5, 1.5, 2.5]);
    }

    #[test]
    fn test_range_zero_step() {
        assert_eq!(range_by(1, 0, 0, false).take(5).collect::<Vec<_>>(), vec![1; 5]);
        // 步长为0按逆序判断，start不大于stop时直接结束
        assert_eq!(range_by(0, 0, 0, true).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_range_step_past_type_max() {
        assert_eq!(range_by(250u8, 255, 10, false).collect::<Vec<_>>(), vec![250]);
        assert_eq!(range_by(250u8, 255, 10, true).collect::<Vec<_>>(), vec![250, 255]);
        assert_eq!(range_by(i32::MAX - 1, i32::MAX, 1, true).collect::<Vec<_>>(), vec![i32::MAX - 1, i32::MAX]);
        assert_eq!(range(254u8, 255).collect::<Vec<_>>(), vec![254]);
    }

    #[test]
    fn test_range_step_past_type_min() {
        assert_eq!(range_by(-120i8, -128, -10, true).collect::<Vec<_>>(), vec![-120, -128]);
        assert_eq!(range_by(5u8, 0, 0, false).take(3).collect::<Vec<_>>(), vec![5, 5, 5]);
    }

    #[test]
    fn test_range_fused() {
        let mut iter = range_by(0, 2, 1, true);
        assert_eq!(iter.by_ref().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_repeat() {
        assert_eq!(repeat("x", 3).collect::<Vec<_>>(), vec!["x", "x", "x"]);
        assert_eq!(repeat('a', 1).collect::<Vec<_>>(), vec!['a']);
        assert_eq!(repeat(7, 0).count(), 0);
    }
}
