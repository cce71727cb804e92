use toto::{from_str, value, Value};

#[test]
fn test_value_macro_scalars() {
    assert_eq!(value!(true), Value::Boolean(true));
    assert_eq!(value!(false), Value::Boolean(false));
    assert_eq!(value!(42), Value::Integer(42));
    assert_eq!(value!(0.25), Value::Float(0.25));
    assert_eq!(value!(""), Value::String(String::new()));
}

#[test]
fn test_value_macro_arrays() {
    let arr = value!([1, 2, 3]);
    match arr {
        Value::Array(vec) => {
            assert_eq!(vec.len(), 3);
            assert_eq!(vec[0], Value::Integer(1));
            assert_eq!(vec[2], Value::Integer(3));
        }
        _ => panic!("Expected array"),
    }
}

#[test]
fn test_value_macro_matches_parser() {
    let tree = from_str("a = [1, [2, 3], \"x\"]\nb = [true, false]\nc = [[], [[1]]]\n").unwrap();
    assert_eq!(tree.get("a"), Some(&value!([1, [2, 3], "x"])));
    assert_eq!(tree.get("b"), Some(&value!([true, false])));
    assert_eq!(tree.get("c"), Some(&value!([[], [[1]]])));
}
