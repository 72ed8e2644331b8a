use std::rc::Rc;

use ember_core::runtime::binding::bind_arguments;
use ember_core::runtime::closure::Closure;
use ember_core::runtime::error::RuntimeError;
use ember_core::runtime::static_data::StaticData;
use ember_core::runtime::value::Value;

fn closure(param_count: usize, min: usize, max: usize, variadic: Option<usize>) -> Closure {
    let mut closure = Closure::new(Rc::new(StaticData::new()));
    closure.set_parameter_counts(param_count, min, max);
    closure.set_variadic_slot(variadic);
    closure
}

fn args(count: usize) -> Vec<Value> {
    (0..count).map(|i| Value::Number(i as f64)).collect()
}

#[test]
fn fixed_arity_window_binds_and_discards() {
    // fn(a, b = default) accepting one or two arguments.
    let closure = closure(2, 1, 2, None);

    let err = bind_arguments(&closure, args(0)).unwrap_err();
    assert_eq!(err, RuntimeError::Arity { min: 1, got: 0 });
    assert_eq!(err.error_code(), "E2001");
    assert_eq!(
        err.to_string(),
        "wrong number of arguments: want at least 1, got 0"
    );

    let one = bind_arguments(&closure, args(1)).unwrap();
    assert_eq!(one, vec![Some(Value::Number(0.0)), None]);

    let two = bind_arguments(&closure, args(2)).unwrap();
    assert_eq!(two, vec![Some(Value::Number(0.0)), Some(Value::Number(1.0))]);

    let three = bind_arguments(&closure, args(3)).unwrap();
    assert_eq!(
        three,
        vec![Some(Value::Number(0.0)), Some(Value::Number(1.0))],
        "arguments past the maximum are dropped, not an error"
    );
}

#[test]
fn trailing_rest_parameter_collects_everything_past_the_prefix() {
    // fn(a, b, rest...) with no effective upper bound.
    let closure = closure(3, 2, 3, Some(2));

    let exact = bind_arguments(&closure, args(2)).unwrap();
    assert_eq!(exact[0], Some(Value::Number(0.0)));
    assert_eq!(exact[1], Some(Value::Number(1.0)));
    assert_eq!(exact[2], Some(Value::array(vec![])));

    let overflow = bind_arguments(&closure, args(6)).unwrap();
    assert_eq!(
        overflow[2],
        Some(Value::array(args(6).split_off(2))),
        "rest slot takes arguments 2..6"
    );

    let err = bind_arguments(&closure, args(1)).unwrap_err();
    assert_eq!(err, RuntimeError::Arity { min: 2, got: 1 });
}

#[test]
fn rest_slot_at_param_count_means_no_rest_parameter() {
    // fn(a, b = x, c = y) whose declared rest index equals the parameter count.
    let closure = closure(3, 1, 3, Some(3));

    let err = bind_arguments(&closure, args(0)).unwrap_err();
    assert_eq!(err, RuntimeError::Arity { min: 1, got: 0 });

    let bound = bind_arguments(&closure, args(5)).unwrap();
    assert_eq!(
        bound,
        vec![
            Some(Value::Number(0.0)),
            Some(Value::Number(1.0)),
            Some(Value::Number(2.0)),
        ],
        "an out-of-range rest slot falls back to positional binding"
    );
}

#[test]
fn binding_moves_argument_handles_instead_of_copying() {
    let closure = closure(1, 1, 1, None);
    let payload: Rc<str> = Rc::from("payload");
    let argument = Value::String(Rc::clone(&payload));

    let bound = bind_arguments(&closure, vec![argument]).unwrap();
    match &bound[0] {
        Some(Value::String(stored)) => {
            assert!(Rc::ptr_eq(stored, &payload));
            assert_eq!(Rc::strong_count(&payload), 2);
        }
        other => panic!("expected the bound string handle, got {:?}", other),
    }
}

#[test]
fn zero_parameter_closure_accepts_and_ignores_everything_up_to_max() {
    let closure = closure(0, 0, 0, None);
    assert_eq!(bind_arguments(&closure, args(0)).unwrap(), vec![]);
    assert_eq!(bind_arguments(&closure, args(5)).unwrap(), vec![]);
}
