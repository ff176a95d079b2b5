use crate::error::Result;

/// Runs `first`, then feeds its output to `second`.
///
/// The composed step stops at the first error: `second` is never called
/// when `first` fails. Since the result is a step itself, longer pipelines
/// are built by nesting.
///
/// # Examples
///
/// ```
/// use seqops::pipe;
///
/// let evens_sum = pipe::then(
///     pipe::filter(|&x: &i32| x % 2 == 0),
///     pipe::sum::<i32>(),
/// );
///
/// assert_eq!(evens_sum(&[1, 2, 3, 4]), Ok(6));
/// assert!(evens_sum(&[1, 3]).is_err());
/// ```
pub fn then<T, U, W, F, G>(first: F, second: G) -> impl Fn(&[T]) -> Result<W>
where
    F: Fn(&[T]) -> Result<Vec<U>>,
    G: Fn(&[U]) -> Result<W>,
{
    move |input: &[T]| first(input).and_then(|mid| second(&mid))
}

/// Threads a value through a list of steps, stopping at the first error.
///
/// Each step is called with a reference to the previous step's output, so
/// every step except the last one must produce a `Vec`. The macro evaluates
/// to the last step's `Result`. With no steps at all it is `Ok(value)`.
///
/// # Examples
///
/// ```
/// use seqops::{SeqError, pipe, try_pipe};
///
/// let result = try_pipe!(
///     vec![3, 1, 2],
///     pipe::sort(|a: &i32, b: &i32| a < b),
///     pipe::map(|&x: &i32| x * 10),
///     pipe::join::<i32>(","),
/// );
/// assert_eq!(result, Ok("10,20,30".to_string()));
///
/// // The sort step rejects the empty input and `join` is never reached.
/// let result = try_pipe!(
///     Vec::<i32>::new(),
///     pipe::sort(|a: &i32, b: &i32| a < b),
///     pipe::join::<i32>(","),
/// );
/// assert_eq!(result, Err(SeqError::Empty { op: "sort" }));
/// ```
#[macro_export]
macro_rules! try_pipe {
    ($value:expr $(,)?) => {
        ::core::result::Result::<_, $crate::SeqError>::Ok($value)
    };
    ($value:expr, $step:expr $(,)?) => {
        ($step)(&$value)
    };
    ($value:expr, $step:expr, $($rest:expr),+ $(,)?) => {
        match ($step)(&$value) {
            ::core::result::Result::Ok(next) => $crate::try_pipe!(next, $($rest),+),
            ::core::result::Result::Err(error) => ::core::result::Result::Err(error),
        }
    };
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::{SeqError, pipe};

    use super::*;

    #[test]
    fn then_composes_steps() {
        let doubled_max = then(pipe::map(|&x: &i32| x * 2), pipe::max::<i32>());
        assert_eq!(doubled_max(&[4, 9, 1]), Ok(18));
        assert_eq!(doubled_max(&[]), Err(SeqError::empty("max")));

        let three = then(
            then(pipe::reverse::<i32>(), pipe::push(vec![0])),
            pipe::join::<i32>(" "),
        );
        assert_eq!(three(&[1, 2]), Ok("2 1 0".to_string()));
    }

    #[test]
    fn then_skips_second_after_failure() {
        let calls = Cell::new(0);
        let counted = |input: &[i32]| {
            calls.set(calls.get() + 1);
            Ok::<_, SeqError>(input.len())
        };

        let step = then(pipe::sort(|a: &i32, b: &i32| a < b), counted);
        assert_eq!(step(&[2, 1]), Ok(2));
        assert_eq!(step(&[]), Err(SeqError::empty("sort")));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn try_pipe_short_circuits() {
        let calls = Cell::new(0);
        let counted = |input: &[i32]| {
            calls.set(calls.get() + 1);
            Ok::<_, SeqError>(input.to_vec())
        };

        let ok = try_pipe!(vec![5, 6], &counted, pipe::shift::<i32>());
        assert_eq!(ok, Ok((5, vec![6])));

        let failed = try_pipe!(
            vec![1, 3, 5],
            pipe::filter(|&x: &i32| x % 2 == 0),
            pipe::reduce(|a: i32, b| a + b),
        );
        assert_eq!(failed, Err(SeqError::empty("reduce")));

        let skipped = try_pipe!(
            Vec::<i32>::new(),
            pipe::sort(|a: &i32, b: &i32| a < b),
            &counted,
        );
        assert_eq!(skipped, Err(SeqError::empty("sort")));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn try_pipe_without_steps() {
        assert_eq!(try_pipe!(7), Ok(7));
        assert_eq!(try_pipe!(vec![1], pipe::sum::<i32>()), Ok(1));
    }
}
