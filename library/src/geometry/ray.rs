use crate::formatting::vector_formatting::format_ray;
use crate::geometry::alias::Vec3F;
use cgmath::AbsDiffEq;
use std::fmt::{Display, Formatter};

/// Origin point plus direction vector. Neither component is normalized or
/// validated: the ray is a plain value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray3F {
    origin: Vec3F,
    direction: Vec3F,
}

impl Ray3F {
    #[must_use]
    pub const fn new(origin: Vec3F, direction: Vec3F) -> Self {
        Self { origin, direction }
    }

    #[must_use]
    pub const fn origin(&self) -> Vec3F {
        self.origin
    }

    #[must_use]
    pub const fn direction(&self) -> Vec3F {
        self.direction
    }
}

impl AbsDiffEq for Ray3F {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        Vec3F::abs_diff_eq(&self.origin, &other.origin, epsilon) && Vec3F::abs_diff_eq(&self.direction, &other.direction, epsilon)
    }
}

/// Renders with the general specifier under the calling thread's current locale.
impl Display for Ray3F {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let text = format_ray(self, None, None).map_err(|_| std::fmt::Error)?;
        formatter.write_str(text.as_str())
    }
}
