use crate::geometry::basic::TriangleData;
use crate::geometry::Ray;
use ultraviolet::Vec3;

/// Initial slab interval; stands in for an unbounded ray.
pub(crate) const SLAB_INFINITY: f32 = 1e38;

/// Axis-aligned box given by its two extreme corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingBox {
    pub left_bottom: Vec3,
    pub right_top: Vec3,
}

impl BoundingBox {
    pub fn new(left_bottom: Vec3, right_top: Vec3) -> Self {
        Self {
            left_bottom,
            right_top,
        }
    }

    /// Smallest box enclosing every vertex, `None` for an empty slice.
    pub fn from_triangles(triangles: &[TriangleData]) -> Option<Self> {
        let mut vertices = triangles.iter().flat_map(|t| [t.p1, t.p2, t.p3]);
        let first = vertices.next()?;

        Some(vertices.fold(Self::new(first, first), |b, v| Self {
            left_bottom: b.left_bottom.min_by_component(v),
            right_top: b.right_top.max_by_component(v),
        }))
    }

    #[inline(always)]
    pub fn intersects(&self, ray: &Ray) -> bool {
        intersect_bounding_box(ray, self.left_bottom, self.right_top)
    }
}

/// Slab test of `ray` against the box spanned by `left_bottom` and `right_top`.
///
/// The entry bound only moves for slabs entered in front of the origin, so a
/// ray starting inside the box still reports a hit. Axes the ray is parallel
/// to produce infinite or NaN slab values, which fail the comparisons and drop
/// out of the interval. The slab ends are picked with plain comparisons so a
/// NaN from a ray lying on the low face plane reaches both ends; `f32::min`
/// and `f32::max` would discard it.
pub fn intersect_bounding_box(ray: &Ray, left_bottom: Vec3, right_top: Vec3) -> bool {
    let origin = ray.origin.as_array();
    let direction = ray.direction.as_array();
    let low = left_bottom.as_array();
    let high = right_top.as_array();

    let mut tmin = -SLAB_INFINITY;
    let mut tmax = SLAB_INFINITY;

    for axis in 0..3 {
        let t1 = (low[axis] - origin[axis]) / direction[axis];
        let t2 = (high[axis] - origin[axis]) / direction[axis];
        let ta = slab_near(t1, t2);
        let tb = slab_far(t1, t2);

        if ta > 0.0 && ta > tmin {
            tmin = ta;
        }
        if tb < tmax {
            tmax = tb;
        }
    }

    tmax >= tmin && tmax > 0.0
}

/// Nearer end of a slab, `t1` when the two are unordered.
#[inline(always)]
pub(crate) fn slab_near(t1: f32, t2: f32) -> f32 {
    if t2 < t1 { t2 } else { t1 }
}

/// Farther end of a slab, `t1` when the two are unordered.
#[inline(always)]
pub(crate) fn slab_far(t1: f32, t2: f32) -> f32 {
    if t1 < t2 { t2 } else { t1 }
}
