//a Imports
use approx::assert_abs_diff_eq;
use gimbal::{
    Intersection, Plane, Quaternion, RotationMatrix3x3, SpaceRelation, TransformationMatrix4x3,
    Vec3, Vec4,
};

//a Helpers
fn v3(x: f64, y: f64, z: f64) -> Vec3<f64> {
    Vec3::new(x, y, z)
}

fn pl(a: f64, b: f64, c: f64, d: f64) -> Plane<f64> {
    Plane::new(a, b, c, d)
}

//a Construction tests
#[test]
fn from_points_contains_its_points() {
    let p1 = v3(1., 0., 0.);
    let p2 = v3(0., 2., 0.);
    let p3 = v3(0., 0., 3.);
    let plane = Plane::from_points(&p1, &p2, &p3);

    assert!(plane.contains(&p1));
    assert!(plane.contains(&p2));
    assert!(plane.contains(&p3));
    assert_abs_diff_eq!(plane.length(), 1.0, epsilon = 1e-12);
}

#[test]
fn from_normal_point() {
    let plane = Plane::from_normal_point(&Vec3::unit_z(), &v3(4., 5., 7.));
    assert_eq!(plane, pl(0., 0., 1., -7.));
    assert!(plane.contains(&v3(-10., 3., 7.)));
}

#[test]
fn normalization() {
    let plane = pl(0., 3., 4., 10.).normalize();
    assert_abs_diff_eq!(plane, pl(0., 0.6, 0.8, 2.), epsilon = 1e-12);
    assert_abs_diff_eq!(plane.length(), 1.0, epsilon = 1e-12);
    assert_eq!(plane.normal(), v3(0., 0.6, 0.8));
}

//a Metric tests
#[test]
fn point_distance_and_projection() {
    let plane = pl(0., 0., 1., -2.); // z = 2
    let p = v3(7., -3., 10.);

    assert_eq!(plane.point_distance(&p), 8.);
    let proj = plane.point_projection(&p);
    assert_eq!(proj, v3(7., -3., 2.));
    assert!(plane.contains(&proj));

    // Projection is idempotent
    assert_eq!(plane.point_projection(&proj), proj);

    // Walking the distance back along the normal restores the distance
    let back = proj + plane.normal() * plane.point_distance(&p);
    assert_abs_diff_eq!(
        plane.point_distance(&p),
        plane.point_distance(&back),
        epsilon = 1e-12
    );
}

#[test]
fn projection_preserves_w() {
    let plane = pl(1., 0., 0., -1.).normalize(); // x = 1
    let p = Vec4::new(5., 2., 3., 0.25);
    let proj = plane.point_projection(&p);
    assert_eq!(proj, Vec4::new(1., 2., 3., 0.25));
}

#[test]
fn dot_products_and_angles() {
    let plane = pl(1., 0., 0., -5.);
    assert_eq!(plane.dot(&v3(2., 3., 4.)), 2.);
    // A Vec4's w never participates
    assert_eq!(plane.dot(&Vec4::new(2., 3., 4., 9.)), 2.);
    assert_eq!(plane.dot_plane(&pl(0., 1., 0., 3.)), 0.);

    let half_pi = std::f64::consts::FRAC_PI_2;
    assert_abs_diff_eq!(plane.angle_between(&Vec3::unit_y()), half_pi, epsilon = 1e-12);
    assert_abs_diff_eq!(
        plane.angle_between_plane(&pl(0., 0., 1., 7.)),
        half_pi,
        epsilon = 1e-12
    );
}

//a Space relation tests
#[test]
fn space_relation_classifies() {
    let base = pl(1., 0., 0., 0.); // x = 0

    assert_eq!(base.space_relation(&pl(1., 0., 0., -1.)), SpaceRelation::PositiveSide);
    assert_eq!(base.space_relation(&pl(1., 0., 0., 1.)), SpaceRelation::NegativeSide);
    assert_eq!(base.space_relation(&pl(2., 0., 0., 0.)), SpaceRelation::Contained);
    // Proportional coefficients with flipped sign still coincide
    assert_eq!(base.space_relation(&pl(-3., 0., 0., 0.)), SpaceRelation::Contained);
    assert_eq!(base.space_relation(&pl(0., 1., 0., 0.)), SpaceRelation::BothSides);
}

//a Three-plane intersection scenarios
#[test]
fn intersection_coordinate_planes_meet_in_origin() {
    let mut p = Vec3::zero();
    let r = pl(1., 0., 0., 0.).intersection_point(&pl(0., 1., 0., 0.), &pl(0., 0., 1., 0.), &mut p);
    assert_eq!(r, Intersection::One);
    assert_abs_diff_eq!(p, Vec3::zero(), epsilon = 1e-12);
}

#[test]
fn intersection_general_position() {
    // x+y+z=1, x+2y+3z=3, x+2y+5z=9 meet in (2,-4,3)
    let mut p = Vec3::zero();
    let r = pl(1., 1., 1., -1.).intersection_point(
        &pl(1., 2., 3., -3.),
        &pl(1., 2., 5., -9.),
        &mut p,
    );
    assert_eq!(r, Intersection::One);
    assert_abs_diff_eq!(p, v3(2., -4., 3.), epsilon = 1e-9);
}

#[test]
fn intersection_parallel_distinct_is_none() {
    // x=0, x=1, y=0
    let mut p = v3(9., 9., 9.);
    let r = pl(1., 0., 0., 0.).intersection_point(&pl(1., 0., 0., -1.), &pl(0., 1., 0., 0.), &mut p);
    assert_eq!(r, Intersection::None);
    // The out point is untouched on any non-One result
    assert_eq!(p, v3(9., 9., 9.));
}

#[test]
fn intersection_two_coincident_is_infinite() {
    // x=0, x=0, y=0
    let mut p = Vec3::zero();
    let r = pl(1., 0., 0., 0.).intersection_point(&pl(1., 0., 0., 0.), &pl(0., 1., 0., 0.), &mut p);
    assert_eq!(r, Intersection::Infinite);
}

#[test]
fn intersection_shared_line_is_infinite() {
    // x=0, y=0 and x+y=0 all contain the Z axis
    let mut p = Vec3::zero();
    let r = pl(1., 0., 0., 0.).intersection_point(&pl(0., 1., 0., 0.), &pl(1., 1., 0., 0.), &mut p);
    assert_eq!(r, Intersection::Infinite);
}

#[test]
fn intersection_third_plane_slices() {
    // x=0, y=0, x+y+z=1 meet in (0,0,1)
    let mut p = Vec3::zero();
    let r = pl(1., 0., 0., 0.).intersection_point(&pl(0., 1., 0., 0.), &pl(1., 1., 1., -1.), &mut p);
    assert_eq!(r, Intersection::One);
    assert_abs_diff_eq!(p, v3(0., 0., 1.), epsilon = 1e-12);
}

#[test]
fn intersection_parallel_lines_is_none() {
    // Three planes through parallel lines: x=0, y=0, x+y=1
    let mut p = Vec3::zero();
    let r =
        pl(1., 0., 0., 0.).intersection_point(&pl(0., 1., 0., 0.), &pl(1., 1., 0., -1.), &mut p);
    assert_eq!(r, Intersection::None);
}

#[test]
fn intersection_keeps_vec4_w() {
    let mut p = Vec4::new(0., 0., 0., 0.25);
    let r = pl(1., 0., 0., 0.).intersection_point(&pl(0., 1., 0., 0.), &pl(0., 0., 1., -4.), &mut p);
    assert_eq!(r, Intersection::One);
    assert_eq!(p, Vec4::new(0., 0., 4., 0.25));
}

//a Transformation tests
#[test]
fn translation_shifts_the_offset() {
    let plane = pl(0., 0., 1., -2.); // z = 2
    let moved = plane.translate(&v3(7., -3., 5.));
    assert_eq!(moved, pl(0., 0., 1., -7.)); // z = 7
    assert!(moved.contains(&v3(0., 0., 7.)));

    // A translation orthogonal to the normal changes nothing
    assert_eq!(plane.translate(&v3(4., 5., 0.)), plane);
}

#[test]
fn rotation_carries_the_plane() {
    let plane = pl(1., 2., 4., 5.).normalize();
    let q = Quaternion::from_euler(0.3, -0.8, 2.0);
    let rotated = plane.rotate_q(&q);

    // A rigid transform keeps the offset and the normal's length
    assert_abs_diff_eq!(rotated.d, plane.d, epsilon = 1e-12);
    assert_abs_diff_eq!(rotated.length(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(
        rotated.normal(),
        plane.normal().rotate(&q),
        epsilon = 1e-12
    );

    // The matrix and quaternion forms agree
    let m = RotationMatrix3x3::from_quaternion(&q);
    assert_abs_diff_eq!(plane.rotate(&m), rotated, epsilon = 1e-12);
}

#[test]
fn rotation_commutes_with_projection() {
    let plane = pl(1., 2., 4., 5.).normalize();
    let q = Quaternion::from_euler(0.3, -0.8, 2.0);
    let p = v3(3., -1., 2.);

    let project_then_rotate = plane.point_projection(&p).rotate(&q);
    let rotate_then_project = plane.rotate_q(&q).point_projection(&p.rotate(&q));
    assert_abs_diff_eq!(project_then_rotate, rotate_then_project, epsilon = 1e-9);
}

#[test]
fn scaling_rebuilds_the_plane() {
    let plane = pl(1., 0., 0., -1.); // x = 1
    let scaled = plane.scale(&v3(2., 5., 5.));
    // Points move to x = 2
    assert!(scaled.contains(&v3(2., 1., 1.)));
    assert_abs_diff_eq!(scaled.length(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(scaled, pl(1., 0., 0., -2.), epsilon = 1e-12);
}

#[test]
fn transform_moves_contained_points_with_the_plane() {
    let plane = Plane::from_points(&v3(1., 0., 0.), &v3(0., 2., 0.), &v3(0., 0., 3.));
    let m = TransformationMatrix4x3::from_trs(
        &v3(1., 2., 3.),
        &Quaternion::from_euler(0.4, 0.9, -0.2),
        &v3(2., 3., 4.),
    );
    let moved = plane.transform(&m);
    for p in [v3(1., 0., 0.), v3(0., 2., 0.), v3(0., 0., 3.)] {
        assert!(moved.contains(&m.transform(&p)));
    }
}

#[test]
fn pivoted_forms_match_the_translate_sandwich() {
    let plane = pl(1., 2., 4., 5.).normalize();
    let q = Quaternion::from_euler(0.3, -0.8, 2.0);
    let pivot = v3(1., -2., 0.5);

    let direct = plane
        .translate(&-pivot)
        .rotate_q(&q)
        .translate(&pivot);
    assert_abs_diff_eq!(plane.rotate_q_with_pivot(&q, &pivot), direct, epsilon = 1e-12);

    // A zero pivot is the plain form, and a Vec4 pivot's w is ignored
    assert_abs_diff_eq!(
        plane.rotate_q_with_pivot(&q, &Vec3::zero()),
        plane.rotate_q(&q),
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        plane.rotate_q_with_pivot(&q, &Vec4::new(1., -2., 0.5, 42.)),
        direct,
        epsilon = 1e-12
    );
}

#[test]
fn negation_flips_normal_but_keeps_the_point_set() {
    let plane = pl(1., 2., 3., 4.);
    let neg = -plane;
    assert_eq!(neg, pl(-1., -2., -3., -4.));

    let x1 = pl(1., 0., 0., -1.); // x = 1
    let flipped = -x1;
    // Same points satisfy the equation, but the orientation swaps:
    // the origin moves from the negative to the positive side
    assert!(flipped.contains(&v3(1., 0., 0.)));
    assert_eq!(flipped.normal(), -x1.normal());
    assert_ne!(flipped, x1);
    assert!(x1.dot(&Vec3::zero()) + x1.d < 0.);
    assert!(flipped.dot(&Vec3::zero()) + flipped.d > 0.);
}

#[test]
fn scalar_products() {
    let plane = pl(1., 2., 3., 4.);
    assert_eq!(plane * 2., pl(2., 4., 6., 8.));
    assert_eq!(plane / 2., pl(0.5, 1., 1.5, 2.));
}

#[test]
fn display_form() {
    assert_eq!(format!("{}", pl(1., 2., 3., 4.)), "PL(1,2,3,4)");
}
