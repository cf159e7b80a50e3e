// tests/vec3_properties.rs
//
// Algebraic properties of Vec3 through the public API. Values are
// small integers where exactness matters, so rounding can't blur the
// comparisons.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use vrmath::{Vec2, Vec3, X_AXIS, Y_AXIS, Z_AXIS};

fn samples() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(-4.0, 5.0, -6.0),
        Vec3::new(7.0, -8.0, 9.0),
        Vec3::new(100.0, 0.0, -100.0),
        X_AXIS,
        Y_AXIS,
        Z_AXIS,
    ]
}

#[test]
fn addition_is_associative_and_commutative() {
    let vs = samples();
    for a in vs.iter() {
        for b in vs.iter() {
            assert_eq!(*a + *b, *b + *a);
            for c in vs.iter() {
                assert_eq!(*a + (*b + *c), (*a + *b) + *c);
            }
        }
    }
}

#[test]
fn scale_then_divide_recovers_vector() {
    for a in samples() {
        for s in [0.5, 3.0, -7.0, 1.0e3] {
            let r = (a * s) / s;
            for i in 0..3 {
                assert_relative_eq!(r[i], a[i], max_relative = 1e-6);
            }
        }
    }
}

#[test]
fn cross_is_anticommutative() {
    let vs = samples();
    for a in vs.iter() {
        for b in vs.iter() {
            assert_eq!(*a ^ *b, -(*b ^ *a));
        }
        assert_eq!(*a ^ *a, Vec3::new(0.0, 0.0, 0.0));
    }
}

#[test]
fn cross_of_parallel_vectors_is_zero() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(a ^ (a * 2.0), Vec3::zero());
    assert_eq!(a ^ -a, Vec3::zero());
}

#[test]
fn axes_are_orthonormal() {
    let axes = [X_AXIS, Y_AXIS, Z_AXIS];
    for (i, a) in axes.iter().enumerate() {
        for (j, b) in axes.iter().enumerate() {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_eq!(*a * *b, expected);
        }
    }
    assert_eq!(Vec3::X_AXIS, X_AXIS);
    assert_eq!(Vec3::Y_AXIS, Y_AXIS);
    assert_eq!(Vec3::Z_AXIS, Z_AXIS);
}

#[test]
fn length2_is_self_dot() {
    for a in samples() {
        assert_eq!(a.length2(), a * a);
        assert_relative_eq!(a.length() * a.length(), a.length2(), max_relative = 1e-6);
    }
}

#[test]
fn normalizing_unit_vector_is_a_no_op() {
    let units = [
        X_AXIS,
        -Y_AXIS,
        Z_AXIS,
        Vec3::new(0.6, 0.8, 0.0),
        Vec3::new(1.0, 1.0, 1.0).normalized(),
    ];
    for u in units {
        let mut v = u;
        assert_abs_diff_eq!(v.normalize(), 1.0, epsilon = 1e-6);
        for i in 0..3 {
            assert_abs_diff_eq!(v[i], u[i], epsilon = 1e-6);
        }
    }
}

#[test]
fn normalizing_zero_vector() {
    let mut v = Vec3::zero();
    assert_eq!(v.normalize(), 0.0);
    assert_eq!(v, Vec3::new(0.0, 0.0, 0.0));

    let n = Vec3::zero().normalized();
    assert_eq!(n.as_array(), &[0.0, 0.0, 0.0]);
}

#[test]
fn normalized_has_unit_length() {
    for a in samples().into_iter().filter(|a| a.length2() > 0.0) {
        let n = a.normalized();
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-6);
        // Same direction.
        assert_relative_eq!(n * a, a.length(), max_relative = 1e-5);
    }
}

#[test]
fn equality_is_reflexive_symmetric_exact() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(1.0, 2.0, 3.0);
    let c = Vec3::new(1.0, 2.0, 3.0001);
    assert!(a == a);
    assert!(a == b && b == a);
    assert!(a != c && c != a);
    assert!(!(a == c));
}

#[test]
fn ordering_tie_breaks_x_then_y_then_z() {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(0.0, 0.0, 1.0);
    let c = Vec3::new(0.0, 1.0, 0.0);
    assert!(a < b);
    assert!(b < c);
    assert!(a < c);
    assert!(!(b < a) && !(c < b) && !(c < a));

    let mut vs = vec![c, Vec3::new(-1.0, 9.0, 9.0), b, a];
    vs.sort_by(|l, r| l.partial_cmp(r).unwrap());
    assert_eq!(vs, vec![Vec3::new(-1.0, 9.0, 9.0), a, b, c]);
}

#[test]
fn construct_from_vec2_and_scalar() {
    assert_eq!(
        Vec3::from_vec2(Vec2::new(2.0, 3.0), 4.0),
        Vec3::new(2.0, 3.0, 4.0)
    );
}

#[test]
fn text_output() {
    assert_eq!(X_AXIS.to_string(), "1 0 0");
    assert_eq!(format!("{}", Vec3::new(-1.5, 2.0, 0.25)), "-1.5 2 0.25");
}

#[test]
fn slice_view_is_contiguous() {
    let mut v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(v.as_slice().len(), 3);
    v.as_mut_slice().copy_from_slice(&[4.0, 5.0, 6.0]);
    assert_eq!(v, Vec3::new(4.0, 5.0, 6.0));
    assert_eq!(std::mem::size_of::<Vec3>(), 3 * std::mem::size_of::<f32>());
}
