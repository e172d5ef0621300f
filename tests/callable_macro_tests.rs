#![cfg(feature = "derive")]
//! Tests for the `callable!` macro.

use fpkit::callable;
use fpkit::error::Error;
use fpkit::value::Value;
use rstest::rstest;

fn area(width: Value, height: Value) -> f64 {
    width.to_number() * height.to_number()
}

fn shout(text: Value) -> Result<String, Error> {
    text.as_str()
        .map(str::to_uppercase)
        .ok_or_else(|| Error::raise("not a string"))
}

#[rstest]
#[case(callable!(|| ()), 0)]
#[case(callable!(|x| x), 1)]
#[case(callable!(|x, y, z| Value::sequence([x, y, z])), 3)]
#[case(callable!(area, 2), 2)]
fn test_arity_is_declared(#[case] callable: fpkit::Callable, #[case] expected: usize) {
    assert_eq!(callable.arity(), expected);
}

#[test]
fn test_closure_receives_positional_arguments() {
    let subtract = callable!(|x, y| x.to_number() - y.to_number());
    assert_eq!(subtract.call(&[Value::from(10), Value::from(4)]), Ok(Value::from(6)));
}

#[test]
fn test_missing_arguments_are_undefined() {
    let pair = callable!(|x, y| Value::sequence([x, y]));
    assert_eq!(
        pair.call(&[Value::from(1)]),
        Ok(Value::sequence([Value::from(1), Value::Undefined]))
    );
}

#[test]
fn test_function_path_form() {
    let computed = callable!(area, 2);
    assert_eq!(computed.call(&[Value::from(3), Value::from(5)]), Ok(Value::from(15)));
}

#[test]
fn test_result_return_values_propagate() {
    let loud = callable!(shout, 1);
    assert_eq!(loud.call(&[Value::from("hey")]), Ok(Value::from("HEY")));
    assert_eq!(loud.call(&[Value::from(1)]), Err(Error::raise("not a string")));
}

#[test]
fn test_typed_parameters_are_kept() {
    let describe = callable!(|value: Value| format!("<{value}>"));
    assert_eq!(describe.call(&[Value::from(7)]), Ok(Value::from("<7>")));
}

#[test]
fn test_move_closures_capture() {
    let offset = 100.0;
    let shift = callable!(move |x| x.to_number() + offset);
    assert_eq!(shift.call(&[Value::from(1)]), Ok(Value::from(101)));
}
