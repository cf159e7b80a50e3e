//
// math.rs: Scalar type and helpers shared by the vector types.
//

/// The scalar used for every vector component. Single precision
/// throughout, matching what the graphics APIs consume.
pub type ValueType = f32;

#[inline]
pub fn is_nan(v: ValueType) -> bool {
    v.is_nan()
}
