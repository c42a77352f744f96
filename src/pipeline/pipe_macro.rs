//! The `pipe!` macro for left-to-right stage application.

/// Applies pipeline stages to a carrier from left to right.
///
/// `pipe!(x, s1, s2)` is `s2.apply(s1.apply(x))`, the same as `x | s1 | s2`
/// but without requiring the carrier to implement `|`.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, stage)` - Applies one stage
/// - `pipe!(x, stage, stage, ...)` - Applies each stage to the previous result
///
/// `x` may be a reference; the first stage then takes the borrowing entry
/// point and later stages receive the owned result.
///
/// # Examples
///
/// ```rust
/// use retrofit::pipe;
/// use retrofit::pipeline::{as_, filter, map};
/// use std::collections::BTreeSet;
///
/// let source = vec![5, 3, 5, 8];
/// let result = pipe!(
///     &source,
///     map(|value: &i32| value * 2),
///     filter(|value: &i32| *value > 6),
///     as_::<BTreeSet<_>>()
/// );
/// assert_eq!(result, BTreeSet::from([10, 16]));
/// assert_eq!(source.len(), 4);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $stage:expr $(,)?) => {
        $crate::pipeline::Stage::apply($stage, $value)
    };

    ($value:expr, $stage:expr, $($remaining_stages:expr),+ $(,)?) => {
        $crate::pipe!($crate::pipeline::Stage::apply($stage, $value), $($remaining_stages),+)
    };
}

#[cfg(test)]
mod tests {
    use crate::pipeline::{append, filter, flat_map, fold_left, map};
    use std::collections::VecDeque;

    #[test]
    fn value_only_is_identity() {
        assert_eq!(pipe!(vec![1, 2]), vec![1, 2]);
    }

    #[test]
    fn stages_apply_left_to_right() {
        let result = pipe!(
            VecDeque::from([1, 2, 3]),
            flat_map(|value: i32| VecDeque::from([value, value * 10])),
            filter(|value: &i32| *value != 2),
            append(VecDeque::from([0])),
            fold_left(0, |total: i32, value: i32| total + value),
        );
        assert_eq!(result, 1 + 10 + 20 + 3 + 30);
    }

    #[test]
    fn matches_operator_form() {
        let source = vec![1, 2, 3];
        let piped = pipe!(&source, map(|value: &i32| value + 1));
        let operated = &source | map(|value: &i32| value + 1);
        assert_eq!(piped, operated);
    }
}
