/// Builds a [`Value`](crate::Value) from a literal, nesting arrays.
///
/// Array elements may be any expression with a `From` conversion into
/// `Value`, negative numbers included.
///
/// # Examples
///
/// ```rust
/// use toto::{value, Value};
///
/// let data = value!([1, [2, -3], "x", true]);
/// assert_eq!(
///     data,
///     Value::Array(vec![
///         Value::Integer(1),
///         Value::Array(vec![Value::Integer(2), Value::Integer(-3)]),
///         Value::String("x".to_string()),
///         Value::Boolean(true),
///     ])
/// );
/// ```
#[macro_export]
macro_rules! value {
    // Done munching array elements
    (@array [$($done:expr,)*]) => {
        $crate::Value::Array(vec![$($done,)*])
    };

    // Next element is a nested array
    (@array [$($done:expr,)*] [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $crate::value!(@array [$($done,)* $crate::value!([$($inner)*]),] $($($rest)*)?)
    };

    // Next element is any other expression
    (@array [$($done:expr,)*] $next:expr $(, $($rest:tt)*)?) => {
        $crate::value!(@array [$($done,)* $crate::value!($next),] $($($rest)*)?)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elems:tt)+ ]) => {
        $crate::value!(@array [] $($elems)+)
    };

    // Anything with a `From` conversion
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::Value;

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(true), Value::Boolean(true));
        assert_eq!(value!(42), Value::Integer(42));
        assert_eq!(value!(-42), Value::Integer(-42));
        assert_eq!(value!(3.5), Value::Float(3.5));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_arrays() {
        assert_eq!(value!([]), Value::Array(vec![]));
        assert_eq!(
            value!([[], [1], "a",]),
            Value::Array(vec![
                Value::Array(vec![]),
                Value::Array(vec![Value::Integer(1)]),
                Value::String("a".to_string()),
            ])
        );
    }

    #[test]
    fn test_value_macro_negative_elements() {
        assert_eq!(
            value!([-1, 2]),
            Value::Array(vec![Value::Integer(-1), Value::Integer(2)])
        );
        assert_eq!(
            value!([[-1], -2.5]),
            Value::Array(vec![
                Value::Array(vec![Value::Integer(-1)]),
                Value::Float(-2.5),
            ])
        );
    }
}
