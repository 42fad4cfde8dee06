//! Support for the Glam library. Adds [Lerp] trait implementations for the vector types a 2D
//! scene positions and colors with.

use crate::interpolation::Lerp;
use glam::{Vec2, Vec3, Vec4};

macro_rules! impl_lerp2 {
    ($($t:ty),*) => {
        $( impl Lerp for $t {
            fn lerp(&self, b: &Self, t: f32) -> Self {
                Self::new(self.x.lerp(&b.x, t), self.y.lerp(&b.y, t))
            }
        }) *
    }
}

macro_rules! impl_lerp3 {
    ($($t:ty),*) => {
        $( impl Lerp for $t {
            fn lerp(&self, b: &Self, t: f32) -> Self {
                Self::new(self.x.lerp(&b.x, t), self.y.lerp(&b.y, t), self.z.lerp(&b.z, t))
            }
        }) *
    }
}

macro_rules! impl_lerp4 {
    ($($t:ty),*) => {
        $( impl Lerp for $t {
            fn lerp(&self, b: &Self, t: f32) -> Self {
                Self::new(self.x.lerp(&b.x, t), self.y.lerp(&b.y, t), self.z.lerp(&b.z, t), self.w.lerp(&b.w, t))
            }
        }) *
    }
}

impl_lerp2! { Vec2 }
impl_lerp3! { Vec3 }
impl_lerp4! { Vec4 }
