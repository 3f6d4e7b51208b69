//a Imports
use approx::assert_abs_diff_eq;
use gimbal::{Matrix3x3, Matrix4x3, Matrix4x4, Vec2, Vec3, Vec4};

//a Helpers
fn v3(x: f64, y: f64, z: f64) -> Vec3<f64> {
    Vec3::new(x, y, z)
}

//a Tests
#[test]
fn componentwise_arithmetic() {
    let a = v3(1., 2., 3.);
    let b = v3(4., -5., 6.);

    assert_eq!(a + b, v3(5., -3., 9.));
    assert_eq!(a - b, v3(-3., 7., -3.));
    assert_eq!(a * b, v3(4., -10., 18.));
    assert_eq!(a * 2., v3(2., 4., 6.));
    assert_eq!(a / 2., v3(0.5, 1., 1.5));
    assert_eq!(-a, v3(-1., -2., -3.));

    let mut c = a;
    c += b;
    assert_eq!(c, a + b);
    c -= b;
    assert_eq!(c, a);
}

#[test]
fn dot_and_cross() {
    let x = Vec3::<f64>::unit_x();
    let y = Vec3::unit_y();
    let z = Vec3::unit_z();

    assert_eq!(x.dot(&y), 0.);
    assert_eq!(v3(1., -1., 2.).dot(&v3(3., 1., 1.)), 4.);

    // Right-handed cross product
    assert_eq!(x.cross(&y), z);
    assert_eq!(y.cross(&z), x);
    assert_eq!(z.cross(&x), y);
    assert_eq!(y.cross(&x), -z);
}

#[test]
fn length_and_normalization() {
    let a = v3(3., 4., 0.);
    assert_eq!(a.length_sq(), 25.);
    assert_eq!(a.length(), 5.);
    assert_abs_diff_eq!(a.normalize().length(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(a.normalize(), v3(0.6, 0.8, 0.), epsilon = 1e-12);

    assert_eq!(a.distance(&v3(3., 4., 12.)), 12.);
}

#[test]
fn lerp_endpoints_and_midpoint() {
    let a = v3(3., 1., -2.);
    let b = v3(2., 3., 4.);
    assert_eq!(a.lerp(&b, 0.), a);
    assert_eq!(a.lerp(&b, 1.), b);
    assert_eq!(a.lerp(&b, 0.5), v3(2.5, 2., 1.));
}

#[test]
fn angle_between_axes() {
    let x = Vec3::<f64>::unit_x();
    let y = Vec3::unit_y();
    assert_abs_diff_eq!(x.angle_between(&y), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    assert_abs_diff_eq!(x.angle_between(&-x), std::f64::consts::PI, epsilon = 1e-12);
}

#[test]
fn vec2_rotation() {
    let x = Vec2::<f64>::unit_x();
    let quarter = std::f64::consts::FRAC_PI_2;
    assert_abs_diff_eq!(x.rotated(quarter), Vec2::unit_y(), epsilon = 1e-12);
    assert_abs_diff_eq!(x.rotated(4. * quarter), x, epsilon = 1e-12);
}

#[test]
fn vec3_position_picks_up_translation() {
    let m = Matrix4x3::from_blocks(&Matrix3x3::identity(), &v3(10., 20., 30.));
    let p = v3(1., 2., 3.).transform_4x3(&m);
    assert_eq!(p, v3(11., 22., 33.));
}

#[test]
fn vec4_w_contract_under_4x3() {
    let m = Matrix4x3::from_blocks(&Matrix3x3::identity(), &v3(10., 20., 30.));

    // A direction (w = 0) ignores the translation row
    let d = Vec4::direction(1., 2., 3.).transform_4x3(&m);
    assert_eq!(d, Vec4::direction(1., 2., 3.));

    // A position (w = 1) picks it up, and w survives
    let p = Vec4::position(1., 2., 3.).transform_4x3(&m);
    assert_eq!(p, Vec4::position(11., 22., 33.));

    // Any other w scales the translation and passes through
    let h = Vec4::new(1., 2., 3., 2.).transform_4x3(&m);
    assert_eq!(h, Vec4::new(21., 42., 63., 2.));
}

#[test]
fn vec3_homogeneous_transform_divides() {
    // A matrix that doubles w forces the divide
    let mut m = Matrix4x4::<f64>::identity();
    m.set(3, 3, 2.);
    let p = v3(2., 4., 6.).transform_4x4(&m);
    assert_abs_diff_eq!(p, v3(1., 2., 3.), epsilon = 1e-12);
}

#[test]
fn display_forms() {
    assert_eq!(format!("{}", v3(1., 2., 3.)), "(1,2,3)");
    assert_eq!(format!("{}", Vec4::<f64>::position(1., 2., 3.)), "(1,2,3,1)");
    assert_eq!(format!("{}", Vec2::<f64>::new(0.5, -1.)), "(0.5,-1)");
}
