use ultraviolet::Vec3;

/// Distance reported for a miss by callers that want a plain scalar.
pub const MISS_DISTANCE: f32 = -1.0;

/// World-space result of a ray hitting a surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceInteraction {
    /// Distance from the ray origin to `point`, always positive
    pub distance: f32,

    /// The point of intersection in world space
    pub point: Vec3,

    /// Unit surface normal at `point`
    pub normal: Vec3,

    /// `false` when the ray started inside the surface
    pub outside: bool,
}

impl SurfaceInteraction {
    pub fn new(distance: f32, point: Vec3, normal: Vec3, outside: bool) -> Self {
        Self {
            distance,
            point,
            normal,
            outside,
        }
    }

    /// Hit distance, or [`MISS_DISTANCE`] when there is no hit.
    #[inline]
    pub fn distance_or_miss(hit: Option<&Self>) -> f32 {
        hit.map_or(MISS_DISTANCE, |h| h.distance)
    }
}
