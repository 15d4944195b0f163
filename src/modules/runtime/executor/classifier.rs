//! Request body classification

use bfhl_core::{BfhlError, Operation, OperationKind};
use serde_json::Value;

/// Longest array accepted by `prime`, `lcm` and `hcf`
pub const MAX_ARRAY_LEN: usize = 1000;

/// Fibonacci term counts accepted by the endpoint
pub const FIBONACCI_RANGE: std::ops::RangeInclusive<i64> = 1..=50;

/// Turns an untyped JSON body into a typed [`Operation`]
pub struct RequestClassifier;

impl RequestClassifier {
    /// Classify a decoded request body
    ///
    /// Exactly one recognized key must be present; unrecognized keys are ignored
    /// and non-object bodies have no recognized keys at all.
    pub fn classify(body: &Value) -> Result<Operation, BfhlError> {
        let (kind, value) = Self::single_key(body)?;

        match kind {
            OperationKind::Fibonacci => Self::fibonacci(value),
            OperationKind::Prime => Self::integer_array(kind, value).map(Operation::Prime),
            OperationKind::Lcm => Self::integer_array(kind, value).map(Operation::Lcm),
            OperationKind::Hcf => Self::integer_array(kind, value).map(Operation::Hcf),
            OperationKind::Ai => Self::question(value),
        }
    }

    fn single_key(body: &Value) -> Result<(OperationKind, &Value), BfhlError> {
        let Some(object) = body.as_object() else {
            return Err(Self::exactly_one_error());
        };

        let mut present = OperationKind::all()
            .iter()
            .filter_map(|kind| object.get(kind.key()).map(|value| (*kind, value)));

        match (present.next(), present.next()) {
            (Some(found), None) => Ok(found),
            _ => Err(Self::exactly_one_error()),
        }
    }

    fn exactly_one_error() -> BfhlError {
        BfhlError::Validation(format!(
            "Request body must contain exactly one of: {}",
            OperationKind::all()
                .iter()
                .map(|k| k.key())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    }

    fn fibonacci(value: &Value) -> Result<Operation, BfhlError> {
        if !value.as_f64().is_some_and(is_integral) {
            return Err(BfhlError::Validation(
                "fibonacci must be an integer".to_string(),
            ));
        }

        match as_integer(value) {
            Some(count) if FIBONACCI_RANGE.contains(&count) => Ok(Operation::Fibonacci(count)),
            _ => Err(BfhlError::Validation(format!(
                "fibonacci must be between {} and {}",
                FIBONACCI_RANGE.start(),
                FIBONACCI_RANGE.end()
            ))),
        }
    }

    fn integer_array(kind: OperationKind, value: &Value) -> Result<Vec<i64>, BfhlError> {
        let items = value
            .as_array()
            .filter(|items| !items.is_empty())
            .ok_or_else(|| {
                BfhlError::Validation(format!("{} must be a non-empty array of integers", kind))
            })?;

        let numbers = items
            .iter()
            .map(as_integer)
            .collect::<Option<Vec<i64>>>()
            .ok_or_else(|| {
                BfhlError::Validation(format!("{} array must contain only integers", kind))
            })?;

        if numbers.len() > MAX_ARRAY_LEN {
            return Err(BfhlError::Validation(format!("{} array is too large", kind)));
        }

        Ok(numbers)
    }

    fn question(value: &Value) -> Result<Operation, BfhlError> {
        value
            .as_str()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(|q| Operation::Ai(q.to_string()))
            .ok_or_else(|| {
                BfhlError::Validation("AI must be a non-empty string question".to_string())
            })
    }
}

fn is_integral(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

/// JSON number with no fractional part that fits in an `i64`
fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    if value.is_u64() {
        return None;
    }

    // 2^63 is exactly representable; anything at or above it overflows
    const UPPER: f64 = 9_223_372_036_854_775_808.0;
    value
        .as_f64()
        .filter(|n| is_integral(*n) && *n >= i64::MIN as f64 && *n < UPPER)
        .map(|n| n as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(body: Value) -> String {
        RequestClassifier::classify(&body).unwrap_err().to_string()
    }

    const EXACTLY_ONE: &str = "Request body must contain exactly one of: fibonacci, prime, lcm, hcf, AI";

    #[test]
    fn test_classifies_each_kind() {
        assert_eq!(
            RequestClassifier::classify(&json!({ "fibonacci": 7 })).unwrap(),
            Operation::Fibonacci(7)
        );
        assert_eq!(
            RequestClassifier::classify(&json!({ "prime": [2, 4, 7] })).unwrap(),
            Operation::Prime(vec![2, 4, 7])
        );
        assert_eq!(
            RequestClassifier::classify(&json!({ "lcm": [4, 6] })).unwrap(),
            Operation::Lcm(vec![4, 6])
        );
        assert_eq!(
            RequestClassifier::classify(&json!({ "hcf": [-12, 18] })).unwrap(),
            Operation::Hcf(vec![-12, 18])
        );
        assert_eq!(
            RequestClassifier::classify(&json!({ "AI": "  Capital of France?  " })).unwrap(),
            Operation::Ai("Capital of France?".to_string())
        );
    }

    #[test]
    fn test_exactly_one_key() {
        assert_eq!(message(json!({})), EXACTLY_ONE);
        assert_eq!(message(json!({ "fibonacci": 3, "prime": [2] })), EXACTLY_ONE);
        assert_eq!(message(json!({ "Fibonacci": 3 })), EXACTLY_ONE);
        assert_eq!(message(json!({ "ai": "why?" })), EXACTLY_ONE);
        assert_eq!(message(json!([1, 2, 3])), EXACTLY_ONE);
        assert_eq!(message(json!("fibonacci")), EXACTLY_ONE);
        assert_eq!(message(Value::Null), EXACTLY_ONE);
    }

    #[test]
    fn test_non_object_bodies_have_no_keys() {
        for body in [json!(7), json!(true), json!([{ "fibonacci": 3 }])] {
            assert_eq!(message(body), EXACTLY_ONE);
        }
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        assert_eq!(
            RequestClassifier::classify(&json!({ "fibonacci": 3, "extra": 1 })).unwrap(),
            Operation::Fibonacci(3)
        );
    }

    #[test]
    fn test_fibonacci_bounds() {
        assert_eq!(
            RequestClassifier::classify(&json!({ "fibonacci": 1 })).unwrap(),
            Operation::Fibonacci(1)
        );
        assert_eq!(
            RequestClassifier::classify(&json!({ "fibonacci": 50 })).unwrap(),
            Operation::Fibonacci(50)
        );
        assert_eq!(
            RequestClassifier::classify(&json!({ "fibonacci": 5.0 })).unwrap(),
            Operation::Fibonacci(5)
        );

        for bad in [json!(0), json!(51), json!(-3), json!(1e30), json!(u64::MAX)] {
            assert_eq!(
                message(json!({ "fibonacci": bad })),
                "fibonacci must be between 1 and 50"
            );
        }
    }

    #[test]
    fn test_fibonacci_type() {
        for bad in [json!("5"), json!(2.5), json!(null), json!(true), json!([5])] {
            assert_eq!(
                message(json!({ "fibonacci": bad })),
                "fibonacci must be an integer"
            );
        }
    }

    #[test]
    fn test_array_shape() {
        for key in ["prime", "lcm", "hcf"] {
            let expected = format!("{} must be a non-empty array of integers", key);
            assert_eq!(message(json!({ key: [] })), expected);
            assert_eq!(message(json!({ key: 5 })), expected);
            assert_eq!(message(json!({ key: "1,2" })), expected);
        }
    }

    #[test]
    fn test_array_contents() {
        for key in ["prime", "lcm", "hcf"] {
            let expected = format!("{} array must contain only integers", key);
            assert_eq!(message(json!({ key: [1, "2"] })), expected);
            assert_eq!(message(json!({ key: [1.5] })), expected);
            assert_eq!(message(json!({ key: [null] })), expected);
            assert_eq!(message(json!({ key: [true] })), expected);
            assert_eq!(message(json!({ key: [u64::MAX] })), expected);
        }
    }

    #[test]
    fn test_integral_floats_are_integers() {
        assert_eq!(
            RequestClassifier::classify(&json!({ "prime": [4.0, 5] })).unwrap(),
            Operation::Prime(vec![4, 5])
        );
    }

    #[test]
    fn test_array_length_checked_after_contents() {
        let ok: Vec<i64> = (0..1000).collect();
        assert!(RequestClassifier::classify(&json!({ "lcm": ok })).is_ok());

        let too_many: Vec<i64> = (0..1001).collect();
        assert_eq!(message(json!({ "lcm": too_many })), "lcm array is too large");

        let mut mixed: Vec<Value> = (0..1001).map(|n| json!(n)).collect();
        mixed[500] = json!("x");
        assert_eq!(
            message(json!({ "lcm": mixed })),
            "lcm array must contain only integers"
        );
    }

    #[test]
    fn test_ai_question() {
        for bad in [json!(""), json!("   \n"), json!(42), json!(null), json!(["why"])] {
            assert_eq!(
                message(json!({ "AI": bad })),
                "AI must be a non-empty string question"
            );
        }
    }

    #[test]
    fn test_validation_is_client_error() {
        let err = RequestClassifier::classify(&json!({})).unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(err.status_code(), 400);
    }
}
