//! 惰性、单次遍历的序列组合子，以及把它们串联起来的[`Pipe`]。
//!
//! 任何实现了[`Iterator`]的对象都可以作为输入，组合子的输出同样是迭代器，因此可以相互嵌套。
//!
//! ```
//! use lazy_pipe::Pipe;
//!
//! let res = Pipe::range(1, 5).op_map(|x| x * x).op_sum_cumulatively().op_reverse().spread();
//! assert_eq!(res, vec![30, 14, 5, 1]);
//! ```

use crate::err::IterErr;

pub mod err;
pub mod input;
pub mod op;
pub mod peek;
pub mod pipe;

pub use input::{Step, range, range_by, repeat};
pub use op::zip::zip;
pub use op::{
    apply_on_each_of, check_all_fulfill, check_any_fulfills, map, reduce, reverse, smear, spread, sum_cumulatively,
};
pub use peek::{EagerPeekableExt, Peekable};
pub use pipe::Pipe;

/// 拉链的每一步结果
pub type ZipRes<T> = Result<T, IterErr>;
