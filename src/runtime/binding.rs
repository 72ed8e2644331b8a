use crate::runtime::{closure::Closure, error::RuntimeError, value::Value};

/// Maps call arguments onto a closure's parameter slots.
///
/// The returned vector always holds exactly `param_count` entries; `None`
/// marks a parameter the call left unbound, which the evaluator later fills
/// from the parameter's default expression.
///
/// Binding follows three cases, checked in order:
/// 1. Fewer arguments than `min_param_count` is a recoverable
///    [`RuntimeError::Arity`].
/// 2. With a rest parameter inside `0..param_count`, the parameters before
///    it bind positionally and the rest parameter collects every remaining
///    argument into a fresh array, empty when nothing remains. No upper
///    arity bound applies.
/// 3. Otherwise arguments bind positionally and anything past
///    `max_param_count` is dropped without error.
pub fn bind_arguments(
    closure: &Closure,
    arguments: Vec<Value>,
) -> Result<Vec<Option<Value>>, RuntimeError> {
    let supplied = arguments.len();
    let min = closure.min_param_count();
    if supplied < min {
        return Err(RuntimeError::Arity { min, got: supplied });
    }

    let param_count = closure.param_count();
    let mut bound: Vec<Option<Value>> = Vec::with_capacity(param_count);
    match closure.variadic_slot() {
        Some(rest_slot) if rest_slot < param_count => {
            let mut take = arguments.into_iter();
            for _ in 0..rest_slot {
                bound.push(take.next());
            }
            let rest: Vec<Value> = take.collect();
            bound.push(Some(Value::array(rest)));
            // Parameters after the rest slot can never bind positionally.
            for _ in rest_slot + 1..param_count {
                bound.push(None);
            }
        }
        _ => {
            let mut take = arguments.into_iter().take(closure.max_param_count());
            for _ in 0..param_count {
                bound.push(take.next());
            }
        }
    }
    Ok(bound)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::runtime::static_data::StaticData;

    fn closure_with(param_count: usize, min: usize, max: usize) -> Closure {
        let mut closure = Closure::new(Rc::new(StaticData::new()));
        closure.set_parameter_counts(param_count, min, max);
        closure
    }

    fn numbers(values: &[f64]) -> Vec<Value> {
        values.iter().map(|v| Value::Number(*v)).collect()
    }

    #[test]
    fn too_few_arguments_is_recoverable() {
        let closure = closure_with(3, 2, 3);
        let result = bind_arguments(&closure, numbers(&[1.0]));
        assert_eq!(result, Err(RuntimeError::Arity { min: 2, got: 1 }));
    }

    #[test]
    fn exact_fit_binds_positionally() {
        let closure = closure_with(2, 2, 2);
        let bound = bind_arguments(&closure, numbers(&[1.0, 2.0])).unwrap();
        assert_eq!(
            bound,
            vec![Some(Value::Number(1.0)), Some(Value::Number(2.0))]
        );
    }

    #[test]
    fn missing_optionals_stay_unbound() {
        let closure = closure_with(3, 1, 3);
        let bound = bind_arguments(&closure, numbers(&[7.0])).unwrap();
        assert_eq!(bound, vec![Some(Value::Number(7.0)), None, None]);
    }

    #[test]
    fn surplus_arguments_are_dropped_silently() {
        let closure = closure_with(2, 0, 2);
        let bound = bind_arguments(&closure, numbers(&[1.0, 2.0, 3.0, 4.0])).unwrap();
        assert_eq!(
            bound,
            vec![Some(Value::Number(1.0)), Some(Value::Number(2.0))]
        );
    }

    #[test]
    fn rest_parameter_collects_the_tail() {
        let mut closure = closure_with(3, 1, 3);
        closure.set_variadic_slot(Some(2));

        let bound = bind_arguments(&closure, numbers(&[1.0, 2.0, 3.0, 4.0, 5.0])).unwrap();
        assert_eq!(bound.len(), 3);
        assert_eq!(bound[0], Some(Value::Number(1.0)));
        assert_eq!(bound[1], Some(Value::Number(2.0)));
        assert_eq!(
            bound[2],
            Some(Value::array(numbers(&[3.0, 4.0, 5.0])))
        );
    }

    #[test]
    fn rest_parameter_gets_an_empty_array_when_nothing_remains() {
        let mut closure = closure_with(2, 0, 2);
        closure.set_variadic_slot(Some(1));

        let bound = bind_arguments(&closure, numbers(&[9.0])).unwrap();
        assert_eq!(bound[0], Some(Value::Number(9.0)));
        assert_eq!(bound[1], Some(Value::array(vec![])));
    }

    #[test]
    fn rest_parameter_ignores_the_upper_bound() {
        let mut closure = closure_with(1, 0, 1);
        closure.set_variadic_slot(Some(0));

        let bound = bind_arguments(&closure, numbers(&[1.0, 2.0, 3.0])).unwrap();
        assert_eq!(bound, vec![Some(Value::array(numbers(&[1.0, 2.0, 3.0])))]);
    }

    #[test]
    fn out_of_range_rest_slot_means_positional_binding() {
        let mut closure = closure_with(2, 0, 2);
        closure.set_variadic_slot(Some(5));

        let bound = bind_arguments(&closure, numbers(&[1.0, 2.0, 3.0])).unwrap();
        assert_eq!(
            bound,
            vec![Some(Value::Number(1.0)), Some(Value::Number(2.0))]
        );
    }

    #[test]
    fn parameters_after_the_rest_slot_stay_unbound() {
        let mut closure = closure_with(3, 0, 3);
        closure.set_variadic_slot(Some(1));

        let bound = bind_arguments(&closure, numbers(&[1.0, 2.0, 3.0])).unwrap();
        assert_eq!(bound[0], Some(Value::Number(1.0)));
        assert_eq!(bound[1], Some(Value::array(numbers(&[2.0, 3.0]))));
        assert_eq!(bound[2], None);
    }

    #[test]
    fn max_below_param_count_leaves_the_tail_unbound() {
        let closure = closure_with(3, 0, 2);
        let bound = bind_arguments(&closure, numbers(&[1.0, 2.0, 3.0])).unwrap();
        assert_eq!(
            bound,
            vec![Some(Value::Number(1.0)), Some(Value::Number(2.0)), None]
        );
    }
}
