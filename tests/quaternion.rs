//a Imports
use approx::assert_abs_diff_eq;
use gimbal::{Quaternion, RotationMatrix3x3, TransformationMatrix4x3, Vec3, Vec4};

//a Helpers
type Quat = Quaternion<f64>;

/// Quaternions q and -q are the same rotation
fn quat_eq(q: &Quat, q2: &Quat) -> bool {
    (*q - *q2).length_sq() < 1e-9 || (*q + *q2).length_sq() < 1e-9
}

const RSQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;
const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;

//a Tests
#[test]
fn identity_and_components() {
    let q = Quat::identity();
    assert_eq!(q.length(), 1.);
    assert_eq!(q.to_array(), [0., 0., 0., 1.]);
    assert_eq!(Quat::default(), q);

    let q = Quat::new(1., 1., 1., 1.);
    assert_eq!(q.length_sq(), 4.);
    assert_eq!(q.length(), 2.);
}

#[test]
fn conjugate_and_inverse() {
    let q = Quat::new(1., -2., 3., 4.);
    assert_eq!(q.conjugate().conjugate(), q);
    assert_eq!(q.conjugate(), Quat::new(-1., 2., -3., 4.));

    // q * q^-1 is the identity for any non-null quaternion
    let p = q * q.invert();
    assert!(quat_eq(&p, &Quat::identity()));
    assert_abs_diff_eq!(p, Quat::identity(), epsilon = 1e-12);

    // For unit quaternions the cheap inverse is the conjugate
    let u = q.normalize();
    assert_abs_diff_eq!(u.invert(), u.unit_invert(), epsilon = 1e-12);
}

#[test]
fn normalization() {
    let q = Quat::new(1., 2., 3., 4.).normalize();
    assert_abs_diff_eq!(q.length(), 1.0, epsilon = 1e-12);
}

#[test]
fn axis_angle_construction() {
    let x = Vec3::unit_x();
    let q = Quat::from_axis_angle(&x, HALF_PI);
    assert_abs_diff_eq!(q, Quat::new(RSQRT2, 0., 0., RSQRT2), epsilon = 1e-12);

    assert_eq!(Quat::from_axis_angle(&x, 0.), Quat::identity());

    // A Vec4 axis uses its xyz only
    let q4 = Quat::from_axis_angle4(&Vec4::direction(1., 0., 0.), HALF_PI);
    assert_abs_diff_eq!(q, q4, epsilon = 1e-12);
}

#[test]
fn axis_angle_round_trip() {
    let axis = Vec3::new(1., 2., -0.5).normalize();
    let angle = 1.234;
    let (axis2, angle2) = Quat::from_axis_angle(&axis, angle).to_axis_angle();
    assert_abs_diff_eq!(axis, axis2, epsilon = 1e-9);
    assert_abs_diff_eq!(angle, angle2, epsilon = 1e-9);
}

#[test]
fn hamilton_product() {
    let x90 = Quat::from_axis_angle(&Vec3::unit_x(), HALF_PI);
    let y90 = Quat::from_axis_angle(&Vec3::unit_y(), HALF_PI);
    let z90 = Quat::from_axis_angle(&Vec3::unit_z(), HALF_PI);

    assert!(quat_eq(&(x90 * y90), &Quat::new(0.5, 0.5, 0.5, 0.5)));
    assert!(quat_eq(&(y90 * x90), &Quat::new(0.5, 0.5, -0.5, 0.5)));

    // Division undoes multiplication
    let q = (x90 * y90) / y90;
    assert!(quat_eq(&q, &x90));

    // Twelve 30-degree steps about any axis come back to identity
    for axis in [Vec3::unit_x(), Vec3::unit_y(), z90.to_axis_angle().0] {
        let step = Quat::from_axis_angle(&axis, HALF_PI / 3.);
        let mut total = Quat::identity();
        for _ in 0..12 {
            total = total * step;
        }
        assert!(quat_eq(&total, &Quat::identity()));
    }
}

#[test]
fn product_applies_left_operand_first() {
    let x90 = Quat::from_axis_angle(&Vec3::unit_x(), HALF_PI);
    let y90 = Quat::from_axis_angle(&Vec3::unit_y(), HALF_PI);
    let z = Vec3::unit_z();

    let one_by_one = z.rotate(&x90).rotate(&y90);
    let composed = z.rotate(&(x90 * y90));
    assert_abs_diff_eq!(one_by_one, composed, epsilon = 1e-12);
}

#[test]
fn vector_rotation_keeps_w() {
    let z90 = Quat::from_axis_angle(&Vec3::unit_z(), HALF_PI);
    let d = Vec4::direction(1., 0., 0.).rotate(&z90);
    assert_abs_diff_eq!(d, Vec4::direction(0., -1., 0.), epsilon = 1e-12);
    let p = Vec4::position(1., 0., 0.).rotate(&z90);
    assert_abs_diff_eq!(p, Vec4::position(0., -1., 0.), epsilon = 1e-12);
}

#[test]
fn euler_quaternion_is_the_yaw_pitch_roll_product() {
    let (rx, ry, rz) = (0.3, -0.8, 2.0);
    let q = Quat::from_euler(rx, ry, rz);
    let by_steps = Quat::from_axis_angle(&Vec3::unit_y(), ry)
        * Quat::from_axis_angle(&Vec3::unit_x(), rx)
        * Quat::from_axis_angle(&Vec3::unit_z(), rz);
    assert!(quat_eq(&q, &by_steps));
    assert_abs_diff_eq!(q.length(), 1.0, epsilon = 1e-12);
}

#[test]
fn euler_round_trip() {
    let (rx, ry, rz) = (0.3, -0.8, 2.0);
    let q = Quat::from_euler(rx, ry, rz);
    let (ex, ey, ez) = q.to_euler();
    assert_abs_diff_eq!(ex, rx, epsilon = 1e-9);
    assert_abs_diff_eq!(ey, ry, epsilon = 1e-9);
    assert_abs_diff_eq!(ez, rz, epsilon = 1e-9);
}

#[test]
fn euler_pole_recomposes() {
    // At the +-half-pi pole the Y/Z split is reported as (0, z), but
    // the recomposed rotation is the same
    for rx in [HALF_PI, -HALF_PI] {
        let q = Quat::from_euler(rx, 0.7, 0.4);
        let (ex, ey, ez) = q.to_euler();
        assert_abs_diff_eq!(ex, rx, epsilon = 1e-6);
        assert_eq!(ey, 0.);
        let q2 = Quat::from_euler(ex, ey, ez);
        assert!(quat_eq(&q, &q2));
    }
}

#[test]
fn slerp_endpoints_and_midpoint() {
    let q1 = Quat::from_axis_angle(&Vec3::unit_z(), 0.2);
    let q2 = Quat::from_axis_angle(&Vec3::unit_z(), 1.0);

    assert_abs_diff_eq!(q1.slerp(0., &q2), q1, epsilon = 1e-12);
    assert_abs_diff_eq!(q1.slerp(1., &q2), q2, epsilon = 1e-9);

    let mid = q1.slerp(0.5, &q2);
    assert_abs_diff_eq!(mid, Quat::from_axis_angle(&Vec3::unit_z(), 0.6), epsilon = 1e-9);
    assert_abs_diff_eq!(q1.unit_slerp(0.5, &q2), mid, epsilon = 1e-12);

    // Interpolating a quaternion with itself has no great-circle path
    // and returns the operand
    assert_eq!(q1.slerp(0.5, &q1), q1);
}

#[test]
fn lerp_is_renormalized() {
    let q1 = Quat::from_axis_angle(&Vec3::unit_x(), 0.4);
    let q2 = Quat::from_axis_angle(&Vec3::unit_x(), 1.4);
    let l = q1.lerp(0.3, &q2);
    assert_abs_diff_eq!(l.length(), 1.0, epsilon = 1e-12);
}

#[test]
fn angle_between_rotations() {
    let q1 = Quat::from_axis_angle(&Vec3::unit_y(), 0.25);
    let q2 = Quat::from_axis_angle(&Vec3::unit_y(), 1.0);
    assert_abs_diff_eq!(q1.angle_between(&q2), 0.75, epsilon = 1e-9);
    assert_abs_diff_eq!(q1.angle_between(&q1), 0.0, epsilon = 1e-9);
}

#[test]
fn rotation_matrix_round_trip() {
    let q = Quat::from_euler(0.3, -0.8, 2.0);
    let m = RotationMatrix3x3::from_quaternion(&q);
    let q2 = Quat::from_rotation(&m);
    assert!(quat_eq(&q, &q2));

    // The matrix and the quaternion rotate vectors identically
    let v = Vec3::new(0.3, -2., 1.5);
    assert_abs_diff_eq!(m.transform(&v), v.rotate(&q), epsilon = 1e-12);
}

#[test]
fn transformation_extraction() {
    let t = Vec3::new(5., -3., 2.);
    let r = Quat::from_euler(0.4, 0.9, -0.2);
    let s = Vec3::new(2., 3., 4.);
    let m = TransformationMatrix4x3::from_trs(&t, &r, &s);
    let extracted = Quaternion::from_transformation(&m);
    assert!(quat_eq(&r, &extracted));
}

#[test]
fn display_form() {
    assert_eq!(format!("{}", Quat::new(1., 2., 3., 4.)), "(1,2,3,4)");
}
