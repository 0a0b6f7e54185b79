use crate::error::GeometryError;
use ultraviolet::{Mat4, Vec3, Vec4};

/// Multiplies `m` with the homogeneous vector `v` and drops `w`.
///
/// Points are passed with `w = 1`, directions and normals with `w = 0`.
#[inline(always)]
pub fn apply_transform(m: &Mat4, v: Vec4) -> Vec3 {
    let r = *m * v;
    Vec3::new(r.x, r.y, r.z)
}

#[inline(always)]
fn homogeneous_point(p: Vec3) -> Vec4 {
    Vec4::new(p.x, p.y, p.z, 1.0)
}

#[inline(always)]
fn homogeneous_vector(v: Vec3) -> Vec4 {
    Vec4::new(v.x, v.y, v.z, 0.0)
}

/// Local-to-world matrix of a geometry instance together with the inverse and
/// the inverse-transpose used for normals. The three are only ever computed
/// together.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InstanceTransform {
    transform: Mat4,
    inverse: Mat4,
    inverse_transpose: Mat4,
}

impl InstanceTransform {
    pub fn new(transform: Mat4) -> Result<Self, GeometryError> {
        let determinant = transform.determinant();
        if determinant == 0.0 || !determinant.is_finite() {
            return Err(GeometryError::SingularTransform { determinant });
        }

        let inverse = transform.inversed();

        Ok(Self {
            transform,
            inverse,
            inverse_transpose: inverse.transposed(),
        })
    }

    pub fn identity() -> Self {
        Self {
            transform: Mat4::identity(),
            inverse: Mat4::identity(),
            inverse_transpose: Mat4::identity(),
        }
    }

    /// `T * Rx * Ry * Rz * S`, rotation given in degrees.
    pub fn from_trs(
        translation: Vec3,
        rotation_degrees: Vec3,
        scale: Vec3,
    ) -> Result<Self, GeometryError> {
        let rotation = rotation_x(rotation_degrees.x.to_radians())
            * rotation_y(rotation_degrees.y.to_radians())
            * rotation_z(rotation_degrees.z.to_radians());

        Self::new(Mat4::from_translation(translation) * rotation * nonuniform_scale(scale))
    }

    pub fn from_translation(translation: Vec3) -> Self {
        let mut inverse = Mat4::identity();
        inverse.cols[3] = Vec4::new(-translation.x, -translation.y, -translation.z, 1.0);

        Self {
            transform: Mat4::from_translation(translation),
            inverse,
            inverse_transpose: inverse.transposed(),
        }
    }

    #[inline]
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    #[inline]
    pub fn inverse(&self) -> &Mat4 {
        &self.inverse
    }

    #[inline]
    pub fn inverse_transpose(&self) -> &Mat4 {
        &self.inverse_transpose
    }

    #[inline(always)]
    pub fn point_to_local(&self, p: Vec3) -> Vec3 {
        apply_transform(&self.inverse, homogeneous_point(p))
    }

    #[inline(always)]
    pub fn direction_to_local(&self, d: Vec3) -> Vec3 {
        apply_transform(&self.inverse, homogeneous_vector(d))
    }

    #[inline(always)]
    pub fn point_to_world(&self, p: Vec3) -> Vec3 {
        apply_transform(&self.transform, homogeneous_point(p))
    }

    /// Maps a local normal to world space and normalizes it.
    #[inline(always)]
    pub fn normal_to_world(&self, n: Vec3) -> Vec3 {
        apply_transform(&self.inverse_transpose, homogeneous_vector(n)).normalized()
    }
}

impl Default for InstanceTransform {
    fn default() -> Self {
        Self::identity()
    }
}

fn rotation_x(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    Mat4::new(
        Vec4::new(1.0, 0.0, 0.0, 0.0),
        Vec4::new(0.0, c, s, 0.0),
        Vec4::new(0.0, -s, c, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    )
}

fn rotation_y(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    Mat4::new(
        Vec4::new(c, 0.0, -s, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(s, 0.0, c, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    )
}

fn rotation_z(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    Mat4::new(
        Vec4::new(c, s, 0.0, 0.0),
        Vec4::new(-s, c, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    )
}

fn nonuniform_scale(scale: Vec3) -> Mat4 {
    Mat4::new(
        Vec4::new(scale.x, 0.0, 0.0, 0.0),
        Vec4::new(0.0, scale.y, 0.0, 0.0),
        Vec4::new(0.0, 0.0, scale.z, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    )
}

#[cfg(test)]
mod test_transform {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    fn assert_vec3_near(a: Vec3, b: Vec3) {
        assert_float_absolute_eq!(a.x, b.x, 1e-5);
        assert_float_absolute_eq!(a.y, b.y, 1e-5);
        assert_float_absolute_eq!(a.z, b.z, 1e-5);
    }

    #[test]
    fn test_apply_transform_points_and_directions() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));

        assert_vec3_near(
            apply_transform(&m, Vec4::new(0.0, 0.0, 0.0, 1.0)),
            Vec3::new(1.0, 2.0, 3.0),
        );
        // directions ignore translation
        assert_vec3_near(
            apply_transform(&m, Vec4::new(0.0, 1.0, 0.0, 0.0)),
            Vec3::new(0.0, 1.0, 0.0),
        );
    }

    #[test]
    fn test_round_trip_through_local_space() {
        let t = InstanceTransform::from_trs(
            Vec3::new(1.0, -2.0, 0.5),
            Vec3::new(30.0, 45.0, 10.0),
            Vec3::new(2.0, 1.0, 0.5),
        )
        .unwrap();

        let p = Vec3::new(0.3, 0.7, -1.1);
        assert_vec3_near(t.point_to_world(t.point_to_local(p)), p);
    }

    #[test]
    fn test_from_translation_matches_general_constructor() {
        let translation = Vec3::new(-4.0, 0.25, 9.0);
        let fast = InstanceTransform::from_translation(translation);
        let general = InstanceTransform::new(Mat4::from_translation(translation)).unwrap();

        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_vec3_near(fast.point_to_local(p), general.point_to_local(p));
        assert_vec3_near(
            fast.normal_to_world(Vec3::unit_y()),
            general.normal_to_world(Vec3::unit_y()),
        );
    }

    #[test]
    fn test_normals_stay_perpendicular_under_nonuniform_scale() {
        let t = InstanceTransform::from_trs(Vec3::zero(), Vec3::zero(), Vec3::new(4.0, 1.0, 1.0))
            .unwrap();

        // plane x + y = 0 in local space, tangent (1, -1, 0)
        let tangent = apply_transform(t.transform(), Vec4::new(1.0, -1.0, 0.0, 0.0));
        let normal = t.normal_to_world(Vec3::new(1.0, 1.0, 0.0));

        assert_float_absolute_eq!(normal.dot(tangent), 0.0, 1e-5);
        assert_float_absolute_eq!(normal.mag(), 1.0, 1e-6);
    }

    #[test]
    fn test_singular_transform_is_rejected() {
        let err = InstanceTransform::from_trs(Vec3::zero(), Vec3::zero(), Vec3::new(1.0, 0.0, 1.0))
            .unwrap_err();
        assert!(matches!(err, GeometryError::SingularTransform { .. }));
    }
}
