use approx::assert_abs_diff_eq;
use mathematics::numeric::EPSILON_F;
use mathematics::{MathError, NumberFormat, Vector2F};
use std::f32::consts::FRAC_PI_2;

fn samples() -> Vec<Vector2F> {
    vec![
        Vector2F::new(1.0, 2.0),
        Vector2F::new(-3.5, 0.25),
        Vector2F::new(1.0e-3, -7.0e-4),
        Vector2F::new(12_345.0, -6_789.5),
        Vector2F::new(0.1, 0.2),
        Vector2F::new(-1.0e6, 1.0e-6),
    ]
}

#[test]
fn normalized_vectors_have_unit_length() {
    for v in samples() {
        let n = v.normalized().unwrap();
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = EPSILON_F);
        assert!(n.is_numerically_normalized(), "{v} -> {n}");
    }
}

#[test]
fn zero_vector_cannot_be_normalized() {
    let mut v = Vector2F::ZERO;
    assert_eq!(v.normalized(), Err(MathError::DivideByZero));
    assert!(!v.try_normalize());
    assert_eq!(v, Vector2F::ZERO);
}

#[test]
fn scaling_then_dividing_is_identity() {
    for v in samples() {
        for s in [2.0, -0.5, 3.0, 1.0e-3, 1.0e4] {
            let round_trip = (v * s) / s;
            assert!(
                Vector2F::are_numerically_equal(round_trip, v),
                "({v} * {s}) / {s} = {round_trip}"
            );
        }
    }
}

#[test]
fn unit_axes_are_orthonormal() {
    assert_eq!(Vector2F::UNIT_X.dot(Vector2F::UNIT_Y), 0.0);
    assert_eq!(Vector2F::UNIT_X.dot(Vector2F::UNIT_X), 1.0);
    assert_eq!(
        Vector2F::angle_between(Vector2F::UNIT_X, Vector2F::UNIT_X).unwrap(),
        0.0
    );
    assert_abs_diff_eq!(
        Vector2F::angle_between(Vector2F::UNIT_X, Vector2F::UNIT_Y).unwrap(),
        FRAC_PI_2,
        epsilon = EPSILON_F
    );
}

#[test]
fn angle_between_parallel_vectors_never_fails() {
    for v in samples() {
        for s in [1.0, 3.0, 1.0e3, 0.7] {
            let angle = Vector2F::angle_between(v, v * s).unwrap();
            assert!(angle.is_finite(), "{v}: {angle}");
            assert!(angle < 2.0e-3, "{v}: {angle}");
        }
        let opposite = Vector2F::angle_between(v, -v).unwrap();
        assert!(opposite.is_finite());
    }
}

#[test]
fn text_round_trips() {
    for v in samples() {
        assert_eq!(Vector2F::parse(&v.to_string()), Ok(v));
    }
    let comma = NumberFormat::new(',').unwrap();
    for v in samples() {
        assert_eq!(Vector2F::parse_with(&v.to_string_with(&comma), &comma), Ok(v));
    }
}

#[test]
fn arithmetic_examples() {
    assert_eq!(
        Vector2F::new(1.0, 2.0) + Vector2F::new(3.0, 4.0),
        Vector2F::new(4.0, 6.0)
    );
    assert_eq!(
        Vector2F::new(4.0, 6.0) - Vector2F::new(1.0, 2.0),
        Vector2F::new(3.0, 4.0)
    );
    let a = Vector2F::new(1.0, 5.0);
    let b = Vector2F::new(3.0, 2.0);
    assert_eq!(Vector2F::min(a, b), Vector2F::new(1.0, 2.0));
    assert_eq!(Vector2F::max(a, b), Vector2F::new(3.0, 5.0));
}

#[test]
fn indexing_matches_fields() {
    let v = Vector2F::new(8.0, 9.0);
    assert_eq!(v[0], v.x);
    assert_eq!(v[1], v.y);
    assert_eq!(v.component(2), Err(MathError::IndexOutOfRange { index: 2 }));
}

#[test]
fn relational_predicates_are_a_partial_order() {
    assert!(Vector2F::new(1.0, 1.0).all_gt(Vector2F::new(0.0, 0.0)));
    assert!(!Vector2F::new(1.0, 0.0).all_gt(Vector2F::new(0.0, 1.0)));
    assert!(!Vector2F::new(1.0, 0.0).all_lt(Vector2F::new(0.0, 1.0)));
}

#[test]
fn largest_component_ties_pick_x() {
    assert_eq!(Vector2F::new(5.0, 5.0).index_of_largest_component(), 0);
}

#[test]
fn projecting_onto_zero_propagates_non_finite_values() {
    let p = Vector2F::new(3.0, -2.0).projected_to(Vector2F::ZERO);
    assert!(!p.x.is_finite());
    assert!(!p.y.is_finite());
}

#[test]
fn serde_keeps_field_order() {
    let v = Vector2F::new(1.5, -2.0);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
    let back: Vector2F = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}
