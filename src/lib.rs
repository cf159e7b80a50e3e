//
// Small vector maths for the scene graph: a float triple for vertices,
// directions and normals, the planar pair it can be lifted from, and
// an explicit-surface sampler built on top of them.
//

pub mod math;
pub mod surface;
pub mod vec2;
pub mod vec3;

pub use crate::math::ValueType;
pub use crate::vec2::Vec2;
pub use crate::vec3::{Vec3, X_AXIS, Y_AXIS, Z_AXIS};
