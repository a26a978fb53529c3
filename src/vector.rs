pub use glam::Vec2;

/// Steering helpers `glam::Vec2` does not provide
pub trait Steering {
    /// Unit vector from `self` towards `target`, zero if they coincide
    fn direction_to(self, target: Vec2) -> Vec2;

    fn is_zero(self) -> bool;

    /// Angle of the vector in radians, in `(-PI, PI]`
    fn heading_angle(self) -> f32;

    /// Signed angle that rotates `self` onto `other`, in `[-PI, PI]`
    fn bearing_to(self, other: Vec2) -> f32;
}

impl Steering for Vec2 {
    #[inline]
    fn direction_to(self, target: Vec2) -> Vec2 {
        (target - self).normalize_or_zero()
    }

    #[inline]
    fn is_zero(self) -> bool {
        self == Vec2::ZERO
    }

    #[inline]
    fn heading_angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    #[inline]
    fn bearing_to(self, other: Vec2) -> f32 {
        self.perp_dot(other).atan2(self.dot(other))
    }
}
