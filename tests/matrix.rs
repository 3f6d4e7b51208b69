//a Imports
use approx::assert_abs_diff_eq;
use gimbal::{
    Matrix3x3, Matrix4x3, Matrix4x4, Quaternion, RotationMatrix3x3, ScalingMatrix3x3,
    SpaceConversionMatrix, TransformationMatrix4x3, TransformationMatrix4x4,
    TranslationMatrix4x3, TranslationMatrix4x4, Vec3,
};

//a Helpers
const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;

fn v3(x: f64, y: f64, z: f64) -> Vec3<f64> {
    Vec3::new(x, y, z)
}

//a Generic matrix tests
#[test]
fn identity_and_null() {
    let i = Matrix3x3::<f64>::identity();
    let m = Matrix3x3::from_rows([1., 3., 2.], [0., 2., 3.], [-1., 2., 3.]);
    assert_eq!(i * m, m);
    assert_eq!(m * i, m);
    assert!(Matrix3x3::<f64>::null().is_null());
    assert_eq!(i.determinant(), 1.);
}

#[test]
fn arithmetic_3x3() {
    let a = Matrix3x3::from_rows([1., 2., 3.], [4., 5., 6.], [7., 8., 9.]);
    let b = Matrix3x3::from_rows([9., 8., 7.], [6., 5., 4.], [3., 2., 1.]);
    let sum = a + b;
    assert_eq!(sum.at(0, 0), 10.);
    assert_eq!((sum - b), a);
    assert_eq!((a * 2.).at(2, 2), 18.);

    assert_eq!(a.transpose().at(0, 1), 4.);
    assert_eq!(a.transpose().transpose(), a);
    assert_eq!(a.row(1), v3(4., 5., 6.));
    assert_eq!(a.column(1), v3(2., 5., 8.));
}

#[test]
fn inverse_3x3() {
    let m = Matrix3x3::from_rows([1., 3., 2.], [0., 2., 3.], [-1., 2., 3.]);
    assert_abs_diff_eq!(m * m.inverse(), Matrix3x3::identity(), epsilon = 1e-12);
    assert_abs_diff_eq!(m.inverse() * m, Matrix3x3::identity(), epsilon = 1e-12);

    // A singular matrix has no inverse; the result is the null matrix
    let s = Matrix3x3::from_rows([1., 2., 3.], [2., 4., 6.], [0., 1., 0.]);
    assert_eq!(s.determinant(), 0.);
    assert!(s.inverse().is_null());
}

#[test]
fn inverse_4x4() {
    let m = Matrix4x4::from_array([
        1., 3., 2., 1., 0., 2., 3., 3., -1., 2., 3., 2., 0., 0., 2., 1.,
    ]);
    assert_abs_diff_eq!(m * m.inverse(), Matrix4x4::identity(), epsilon = 1e-9);
    assert_abs_diff_eq!(m.inverse() * m, Matrix4x4::identity(), epsilon = 1e-9);
}

#[test]
fn determinant_4x4_of_diagonal() {
    let mut m = Matrix4x4::<f64>::identity();
    m.set(0, 0, 2.);
    m.set(1, 1, 3.);
    m.set(2, 2, 4.);
    assert_eq!(m.determinant(), 24.);
}

#[test]
fn affine_4x3_compose_and_invert() {
    let rot = RotationMatrix3x3::from_axis_angle(&Vec3::unit_z(), 0.7);
    let m = Matrix4x3::from_blocks(rot.matrix(), &v3(1., -2., 3.));
    assert_eq!(m.translation(), v3(1., -2., 3.));
    assert_abs_diff_eq!(m * m.inverse(), Matrix4x3::identity(), epsilon = 1e-12);
    assert_abs_diff_eq!(m.inverse() * m, Matrix4x3::identity(), epsilon = 1e-12);
    assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-12);
}

#[test]
fn product_applies_left_operand_first() {
    // Translate by +x then rotate a quarter turn about Z is not the
    // same as the other way around
    let t = Matrix4x3::from_blocks(&Matrix3x3::identity(), &v3(1., 0., 0.));
    let r = Matrix4x3::from_blocks(
        RotationMatrix3x3::from_axis_angle(&Vec3::unit_z(), HALF_PI).matrix(),
        &Vec3::zero(),
    );

    let p = v3(0., 0., 0.);
    // (0,0,0) -> (1,0,0) -> rotated to (0,-1,0)
    assert_abs_diff_eq!(p.transform_4x3(&(t * r)), v3(0., -1., 0.), epsilon = 1e-12);
    // (0,0,0) -> rotated in place -> (1,0,0)
    assert_abs_diff_eq!(p.transform_4x3(&(r * t)), v3(1., 0., 0.), epsilon = 1e-12);
}

//a Specialized matrix tests
#[test]
fn rotation_matrix_is_orthonormal() {
    let r = RotationMatrix3x3::from_euler(0.3, -0.8, 2.0);
    let m = *r.matrix();
    assert_abs_diff_eq!(m * m.transpose(), Matrix3x3::identity(), epsilon = 1e-12);
    assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-12);

    // The inverse of a rotation is its transpose
    assert_eq!(r.invert().matrix(), &m.transpose());

    // Composition stays a rotation
    let r2 = r * RotationMatrix3x3::from_axis_angle(&Vec3::unit_x(), 0.5);
    let m2 = *r2.matrix();
    assert_abs_diff_eq!(m2 * m2.transpose(), Matrix3x3::identity(), epsilon = 1e-12);
}

#[test]
fn rotation_matrix_matches_quaternion() {
    let q = Quaternion::from_axis_angle(&Vec3::unit_z(), HALF_PI);
    let r = RotationMatrix3x3::from_quaternion(&q);
    let v = v3(1., 0., 0.);
    assert_abs_diff_eq!(r.transform(&v), v.rotate(&q), epsilon = 1e-12);

    let (axis, angle) = r.to_axis_angle();
    assert_abs_diff_eq!(axis, Vec3::unit_z(), epsilon = 1e-9);
    assert_abs_diff_eq!(angle, HALF_PI, epsilon = 1e-9);
}

#[test]
fn scaling_matrix() {
    let s = ScalingMatrix3x3::from_factors(2., 3., 4.);
    assert_eq!(s.scale_factors(), v3(2., 3., 4.));
    assert_eq!(s.transform(&v3(1., 1., 1.)), v3(2., 3., 4.));

    let inv = s.invert();
    assert_abs_diff_eq!(
        (s * inv).to_matrix(),
        Matrix3x3::identity(),
        epsilon = 1e-12
    );

    let twice = s * s;
    assert_eq!(twice.scale_factors(), v3(4., 9., 16.));
}

#[test]
fn translation_matrix() {
    let a = TranslationMatrix4x3::from_vec3(&v3(1., 2., 3.));
    let b = TranslationMatrix4x3::from_factors(10., 20., 30.);
    assert_eq!((a * b).translation(), v3(11., 22., 33.));
    assert_eq!(a.invert().translation(), v3(-1., -2., -3.));
    assert_eq!(a.transform(&v3(1., 1., 1.)), v3(2., 3., 4.));

    let c = TranslationMatrix4x4::from_vec3(&v3(1., 2., 3.));
    assert_eq!(c.translation(), v3(1., 2., 3.));
}

#[test]
fn transformation_composes_scale_rotate_translate() {
    let t = v3(10., 20., 30.);
    let q = Quaternion::from_axis_angle(&Vec3::unit_z(), HALF_PI);
    let s = v3(2., 2., 2.);
    let m = TransformationMatrix4x3::from_trs(&t, &q, &s);

    // Scale first, then rotate, then translate
    let p = v3(1., 0., 0.);
    let expected = (p * 2.).rotate(&q) + t;
    assert_abs_diff_eq!(m.transform(&p), expected, epsilon = 1e-12);
}

#[test]
fn transformation_decomposes() {
    let t = v3(5., -3., 2.);
    let q = Quaternion::from_euler(0.4, 0.9, -0.2);
    let s = v3(2., 3., 4.);
    let m = TransformationMatrix4x4::from_trs(&t, &q, &s);

    let (t2, q2, s2) = m.decompose();
    assert_abs_diff_eq!(t2, t, epsilon = 1e-12);
    assert_abs_diff_eq!(s2, s, epsilon = 1e-12);
    assert!(q2.dot(&q).abs() > 1. - 1e-9);

    // Rebuilding from the decomposition yields the same matrix
    let m2 = TransformationMatrix4x4::from_trs(&t2, &q2, &s2);
    assert_abs_diff_eq!(*m.storage(), *m2.storage(), epsilon = 1e-9);
}

#[test]
fn transformation_inverse_undoes_transform() {
    let m = TransformationMatrix4x3::from_trs(
        &v3(1., 2., 3.),
        &Quaternion::from_euler(0.1, 0.2, 0.3),
        &v3(2., 4., 5.),
    );
    let p = v3(-3., 7., 0.5);
    let there_and_back = m.invert().transform(&m.transform(&p));
    assert_abs_diff_eq!(there_and_back, p, epsilon = 1e-9);
}

#[test]
fn transformation_storage_widening() {
    let m = TransformationMatrix4x3::from_trs(
        &v3(1., 2., 3.),
        &Quaternion::from_euler(0.1, 0.2, 0.3),
        &v3(1., 1., 1.),
    );
    let wide = m.to_4x4();
    let p = v3(0.5, -1., 2.);
    assert_abs_diff_eq!(wide.transform(&p), m.transform(&p), epsilon = 1e-12);
    assert_abs_diff_eq!(*wide.to_4x3().storage(), *m.storage(), epsilon = 1e-12);
}

//a Space conversion tests
#[test]
fn view_space_of_canonical_camera_is_identity() {
    let view = SpaceConversionMatrix::view_space(&Vec3::zero(), &v3(0., 0., 1.), &Vec3::unit_y());
    assert_abs_diff_eq!(*view.matrix(), Matrix4x4::identity(), epsilon = 1e-12);
}

#[test]
fn view_space_recenters_the_eye() {
    let eye = v3(1., 2., 3.);
    let view = SpaceConversionMatrix::view_space(&eye, &v3(1., 2., 10.), &Vec3::unit_y());
    assert_abs_diff_eq!(eye.transform_4x4(view.matrix()), Vec3::zero(), epsilon = 1e-12);
}

#[test]
fn projection_space_maps_the_clip_range() {
    let near = 1.0;
    let far = 101.0;
    let proj = SpaceConversionMatrix::projection_space(near, far, 1.0, HALF_PI);

    let at_near = v3(0., 0., near).transform_4x4(proj.matrix());
    assert_abs_diff_eq!(at_near.z, 0.0, epsilon = 1e-12);
    let at_far = v3(0., 0., far).transform_4x4(proj.matrix());
    assert_abs_diff_eq!(at_far.z, 1.0, epsilon = 1e-12);
}

#[test]
fn world_view_projection_chain() {
    let world = SpaceConversionMatrix::world_space(
        &v3(0., 0., 10.),
        &Quaternion::identity(),
        &v3(1., 1., 1.),
    );
    let view = SpaceConversionMatrix::view_space(&Vec3::zero(), &v3(0., 0., 1.), &Vec3::unit_y());
    let proj = SpaceConversionMatrix::projection_space(1., 100., 1., HALF_PI);
    let chain = world * view * proj;

    // The object-space origin lands 10 units down the view axis
    let clip = Vec3::zero().transform_4x4(chain.matrix());
    assert!(clip.z > 0. && clip.z < 1.);
}
