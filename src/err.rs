use itertools::Itertools;
use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum IterErr {
    /// 多个迭代器在同一步中耗尽状态不一致。
    #[error(
        "[Zip] Unequal length: at step `{step}` iterators [{}] are exhausted while [{}] still have values",
        .exhausted.iter().join(", "),
        .remaining.iter().join(", ")
    )]
    UnequalLength { step: usize, exhausted: Vec<usize>, remaining: Vec<usize> },
}

impl IterErr {
    pub(crate) fn unequal_length(step: usize, exhausted_flags: &[bool]) -> IterErr {
        let (exhausted, remaining): (Vec<_>, Vec<_>) = (0..exhausted_flags.len()).partition(|&i| exhausted_flags[i]);
        IterErr::UnequalLength { step, exhausted, remaining }
    }
}
