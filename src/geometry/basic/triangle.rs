use crate::geometry::Ray;
use ultraviolet::{Mat3, Vec3};

/// Slack allowed on the sum of the area-ratio barycentric weights.
pub const BARYCENTRIC_TOLERANCE: f32 = 1e-3;

/// Represents a triangle of a mesh, stored in object space
///        p3
///         *
///         |\
///         | \
///         |  \
///         |   \
///      e2 |    \
///         |     \
///         |      \
///         *-------*
///        p1   e1  p2
///
/// Each vertex carries its own normal so hits can be smooth shaded.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TriangleData {
    pub p1: Vec3,
    pub p2: Vec3,
    pub p3: Vec3,

    pub n1: Vec3,
    pub n2: Vec3,
    pub n3: Vec3,
}

/// Parametric hit on a single triangle, in the triangle's own space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TriangleHit {
    pub t: f32,
    /// Weights of `p1`, `p2` and `p3`.
    pub barycentric: Vec3,
    /// Interpolated vertex normal, normalized.
    pub normal: Vec3,
}

impl TriangleData {
    pub fn new(positions: [Vec3; 3], normals: [Vec3; 3]) -> Self {
        let [p1, p2, p3] = positions;
        let [n1, n2, n3] = normals;

        Self {
            p1,
            p2,
            p3,
            n1,
            n2,
            n3,
        }
    }

    /// Triangle whose three vertex normals are the face normal.
    pub fn flat(p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        let normal = (p2 - p1).cross(p3 - p1).normalized();
        Self::new([p1, p2, p3], [normal; 3])
    }

    #[inline(always)]
    pub fn edges(&self) -> (Vec3, Vec3) {
        (self.p2 - self.p1, self.p3 - self.p1)
    }

    /// Blend of the vertex normals with the given weights; not normalized.
    #[inline(always)]
    pub fn interpolate_normal(&self, barycentric: Vec3) -> Vec3 {
        self.n1 * barycentric.x + self.n2 * barycentric.y + self.n3 * barycentric.z
    }

    fn area(a: Vec3, b: Vec3, c: Vec3) -> f32 {
        0.5 * (a - b).cross(a - c).mag()
    }
}

/// Ray/plane intersection followed by an area-ratio inside test.
///
/// The plane is spanned through `p1` with `n1` as its normal. The hit is kept
/// when every weight lies in `[0, 1]` and the weights sum to one within
/// [`BARYCENTRIC_TOLERANCE`]; a point outside the triangle makes the sub-areas
/// add up to more than the whole.
pub fn intersect_triangle(ray: &Ray, triangle: &TriangleData) -> Option<TriangleHit> {
    let t = triangle.n1.dot(triangle.p1 - ray.origin) / triangle.n1.dot(ray.direction);
    if !t.is_finite() || t < 0.0 {
        return None;
    }

    let p = ray.origin + t * ray.direction;

    let total = TriangleData::area(triangle.p1, triangle.p2, triangle.p3);
    let barycentric = Vec3::new(
        TriangleData::area(p, triangle.p2, triangle.p3) / total,
        TriangleData::area(p, triangle.p3, triangle.p1) / total,
        TriangleData::area(p, triangle.p1, triangle.p2) / total,
    );

    let in_unit_range = barycentric
        .as_array()
        .iter()
        .all(|w| (0.0..=1.0).contains(w));
    let sum = barycentric.x + barycentric.y + barycentric.z;

    if !in_unit_range || !approx::abs_diff_eq!(sum, 1.0, epsilon = BARYCENTRIC_TOLERANCE) {
        return None;
    }

    Some(TriangleHit {
        t,
        barycentric,
        normal: triangle.interpolate_normal(barycentric).normalized(),
    })
}

/// Solves `origin + t * direction = p1 + u * e1 + v * e2` for `(t, u, v)`.
///
/// Accepts `u, v >= 0` with `u + v <= 1` and any `t` in front of the origin;
/// the reported weights are `(1 - u - v, u, v)`. Rays parallel to the
/// triangle's plane make the system singular and miss.
pub fn intersect_triangle_parametric(ray: &Ray, triangle: &TriangleData) -> Option<TriangleHit> {
    let (edge1, edge2) = triangle.edges();
    let b = triangle.p1 - ray.origin;

    let mat = Mat3::new(ray.direction, -edge1, -edge2);
    if mat.determinant().abs() < f32::EPSILON {
        return None;
    }

    // [t, u, v]^T
    let tuv = mat.inversed() * b;
    let (t, u, v) = (tuv.x, tuv.y, tuv.z);

    if t.is_nan() || t <= 0.0 || u < 0.0 || v < 0.0 || u + v > 1.0 {
        return None;
    }

    let barycentric = Vec3::new(1.0 - u - v, u, v);

    Some(TriangleHit {
        t,
        barycentric,
        normal: triangle.interpolate_normal(barycentric).normalized(),
    })
}

#[cfg(test)]
mod test_triangle_intersection {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    fn unit_triangle() -> TriangleData {
        TriangleData::flat(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_flat_normal_follows_winding() {
        assert_eq!(unit_triangle().n1, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(unit_triangle().n3, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_hit_inside_triangle() {
        let ray = Ray::new(Vec3::new(0.25, 0.25, -1.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = intersect_triangle(&ray, &unit_triangle()).unwrap();

        assert_float_absolute_eq!(hit.t, 1.0, 1e-6);
        assert_float_absolute_eq!(hit.barycentric.x, 0.5, 1e-5);
        assert_float_absolute_eq!(hit.barycentric.y, 0.25, 1e-5);
        assert_float_absolute_eq!(hit.barycentric.z, 0.25, 1e-5);
        assert_float_absolute_eq!(hit.normal.z, 1.0, 1e-6);
    }

    #[test]
    fn test_barycentric_weights_are_valid() {
        let ray = Ray::new(Vec3::new(0.1, 0.7, 2.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = intersect_triangle(&ray, &unit_triangle()).unwrap();

        for w in hit.barycentric.as_array() {
            assert!((0.0..=1.0).contains(w));
        }
        let sum = hit.barycentric.x + hit.barycentric.y + hit.barycentric.z;
        assert_float_absolute_eq!(sum, 1.0, BARYCENTRIC_TOLERANCE);
    }

    #[test]
    fn test_miss_outside_triangle() {
        let ray = Ray::new(Vec3::new(2.0, 2.0, -1.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(intersect_triangle(&ray, &unit_triangle()).is_none());
        assert!(intersect_triangle_parametric(&ray, &unit_triangle()).is_none());
    }

    #[test]
    fn test_miss_behind_origin() {
        let ray = Ray::new(Vec3::new(0.25, 0.25, 1.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(intersect_triangle(&ray, &unit_triangle()).is_none());
        assert!(intersect_triangle_parametric(&ray, &unit_triangle()).is_none());
    }

    #[test]
    fn test_miss_parallel_ray() {
        let ray = Ray::new(Vec3::new(0.25, 0.25, -1.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(intersect_triangle(&ray, &unit_triangle()).is_none());
        assert!(intersect_triangle_parametric(&ray, &unit_triangle()).is_none());
    }

    #[test]
    fn test_parametric_matches_area_test() {
        let ray = Ray::new(Vec3::new(0.2, 0.3, 3.0), Vec3::new(0.0, 0.0, -1.0));
        let by_area = intersect_triangle(&ray, &unit_triangle()).unwrap();
        let by_parameter = intersect_triangle_parametric(&ray, &unit_triangle()).unwrap();

        assert_float_absolute_eq!(by_area.t, by_parameter.t, 1e-5);
        assert_float_absolute_eq!(by_area.barycentric.x, by_parameter.barycentric.x, 1e-4);
        assert_float_absolute_eq!(by_area.barycentric.y, by_parameter.barycentric.y, 1e-4);
        assert_float_absolute_eq!(by_area.barycentric.z, by_parameter.barycentric.z, 1e-4);
    }

    #[test]
    fn test_smooth_normal_is_interpolated() {
        let triangle = TriangleData::new(
            [
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            [
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
            ],
        );

        // at p2 the normal is n2
        let ray = Ray::new(Vec3::new(0.999, 0.0005, -1.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = intersect_triangle_parametric(&ray, &triangle).unwrap();
        assert!(hit.normal.x > 0.99);
        assert_float_absolute_eq!(hit.normal.mag(), 1.0, 1e-6);
    }
}
