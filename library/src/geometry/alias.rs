use cgmath::Vector3;

pub type Vec3F = Vector3<f32>;
