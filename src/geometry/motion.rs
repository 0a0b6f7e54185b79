use ultraviolet::Vec3;

/// Linear motion of an instance over the shutter interval.
///
/// The instance transform places the geometry at `translation`; at ray time
/// `t` it has moved by `t * (target - translation)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Motion {
    pub translation: Vec3,
    pub target: Vec3,
}

impl Motion {
    pub fn new(translation: Vec3, target: Vec3) -> Self {
        Self {
            translation,
            target,
        }
    }

    #[inline(always)]
    pub fn displacement(&self, time: f32) -> Vec3 {
        time * (self.target - self.translation)
    }
}

#[inline(always)]
pub(crate) fn displacement(motion: Option<&Motion>, time: f32) -> Vec3 {
    motion.map_or_else(Vec3::zero, |m| m.displacement(time))
}
