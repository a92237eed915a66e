use boxfeas::{
    project_direction, project_gradient, project_gradient_inplace, Bound, Orientation,
};
use boxfeas_testfunctions::{random_direction, random_open_box, random_point_in};
use ndarray::Array1;

#[test]
fn test_blocked_and_allowed_moves_at_a_tight_bound() {
    let x = Array1::from(vec![1.0]);
    let lower = Bound::Scalar(0.0);
    let upper = Bound::Scalar(1.0);
    let mut dst = Array1::zeros(1);

    project_direction(
        &mut dst,
        &x,
        &lower,
        &upper,
        Orientation::Forward,
        &Array1::from(vec![5.0]),
    )
    .unwrap();
    assert_eq!(dst[0], 0.0, "outward move at the upper bound must be blocked");

    project_direction(
        &mut dst,
        &x,
        &lower,
        &upper,
        Orientation::Forward,
        &Array1::from(vec![-5.0]),
    )
    .unwrap();
    assert_eq!(dst[0], -5.0, "inward move must pass through");
}

#[test]
fn test_strictly_interior_points_never_lose_components() {
    let (lower, upper) = random_open_box(32, 40);
    // nudge the sample strictly inside: random_point_in may land on a face
    let mut x = random_point_in(&lower, &upper, 41);
    for i in 0..32 {
        if lower[i].is_finite() && upper[i].is_finite() {
            x[i] = 0.5 * (lower[i] + upper[i]);
        }
    }
    let d = random_direction(32, 42);
    let mut dst = Array1::zeros(32);
    project_direction(
        &mut dst,
        &x,
        &Bound::PerElement(&lower),
        &Bound::PerElement(&upper),
        Orientation::Forward,
        &d,
    )
    .unwrap();
    assert_eq!(dst, d);
}

#[test]
fn test_gradient_projection_at_the_box_corner() {
    // x pinned at [lo, hi]; the descent direction is -g
    let x = Array1::from(vec![0.0, 1.0]);
    let lower = Bound::Scalar(0.0);
    let upper = Bound::Scalar(1.0);

    // -g pushes below lo at i0 and above hi at i1: both dropped
    let g = Array1::from(vec![2.0, -2.0]);
    let mut gp = Array1::zeros(2);
    project_gradient(&mut gp, &x, &lower, &upper, &g).unwrap();
    assert_eq!(gp, Array1::from(vec![0.0, 0.0]));

    // -g pulls back inside at both: kept verbatim
    let g = Array1::from(vec![-2.0, 2.0]);
    project_gradient(&mut gp, &x, &lower, &upper, &g).unwrap();
    assert_eq!(gp, Array1::from(vec![-2.0, 2.0]));
}

#[test]
fn test_gradient_inplace_agrees() {
    let x = Array1::from(vec![0.0, 0.5, 1.0, 1.0]);
    let g = Array1::from(vec![0.5, -0.5, -0.5, 0.5]);
    let lower = Bound::Scalar(0.0);
    let upper = Bound::Scalar(1.0);

    let mut dst = Array1::zeros(4);
    project_gradient(&mut dst, &x, &lower, &upper, &g).unwrap();

    let mut inplace = g.clone();
    project_gradient_inplace(&mut inplace, &x, &lower, &upper).unwrap();
    assert_eq!(dst, inplace);
}

#[test]
fn test_orientation_from_sign_matches_the_enum() {
    let x = Array1::from(vec![1.0]);
    let d = Array1::from(vec![5.0]);
    let lower = Bound::Scalar(0.0);
    let upper = Bound::Scalar(1.0);

    let mut via_enum = Array1::zeros(1);
    project_direction(&mut via_enum, &x, &lower, &upper, Orientation::Forward, &d).unwrap();

    let mut via_sign = Array1::zeros(1);
    project_direction(
        &mut via_sign,
        &x,
        &lower,
        &upper,
        Orientation::from_sign(42.0).unwrap(),
        &d,
    )
    .unwrap();
    assert_eq!(via_enum, via_sign);
}

#[test]
fn test_scalar_infinite_bound_behaves_like_unbounded() {
    let x = Array1::from(vec![3.0]);
    let d = Array1::from(vec![1.0]);
    let mut a = Array1::zeros(1);
    let mut b = Array1::zeros(1);
    project_direction(
        &mut a,
        &x,
        &Bound::Scalar(3.0),
        &Bound::Scalar(f64::INFINITY),
        Orientation::Forward,
        &d,
    )
    .unwrap();
    project_direction(
        &mut b,
        &x,
        &Bound::Scalar(3.0),
        &Bound::Unbounded,
        Orientation::Forward,
        &d,
    )
    .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_zeroed_entries_are_exact_zeros() {
    let x = Array1::from(vec![1.0, 1.0]);
    let d = Array1::from(vec![1e-300, 5.0]);
    let mut dst = Array1::zeros(2);
    project_direction(
        &mut dst,
        &x,
        &Bound::Scalar(0.0),
        &Bound::Scalar(1.0),
        Orientation::Forward,
        &d,
    )
    .unwrap();
    assert_eq!(dst[0].to_bits(), 0.0_f64.to_bits());
    assert_eq!(dst[1].to_bits(), 0.0_f64.to_bits());
}
