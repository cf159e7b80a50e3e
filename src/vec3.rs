//
// vec3.rs: The inevitable 3D vector class. Single-precision triple used
// for vertices, directions and normals, with the usual operators from
// addition through to cross products.
//

use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign, BitXor, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use anyhow::*;

use crate::math::{self, ValueType};
use crate::vec2::Vec2;

/// General purpose float triple. Components may hold any value,
/// including NaN and infinity; use `valid` to check after the fact.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Vec3 {
    v: [ValueType; 3],
}

pub const X_AXIS: Vec3 = Vec3::new(1.0, 0.0, 0.0);
pub const Y_AXIS: Vec3 = Vec3::new(0.0, 1.0, 0.0);
pub const Z_AXIS: Vec3 = Vec3::new(0.0, 0.0, 1.0);

impl Vec3 {
    pub const X_AXIS: Vec3 = X_AXIS;
    pub const Y_AXIS: Vec3 = Y_AXIS;
    pub const Z_AXIS: Vec3 = Z_AXIS;

    #[inline]
    pub const fn new(x: ValueType, y: ValueType, z: ValueType) -> Vec3 {
        Vec3 { v: [x, y, z] }
    }

    #[inline]
    pub const fn zero() -> Vec3 {
        Vec3::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn from_array(v: &[ValueType; 3]) -> Vec3 {
        Vec3 { v: *v }
    }

    /// Lift a planar point into 3-space, with `z` as the third coordinate.
    #[inline]
    pub fn from_vec2(v2: Vec2, z: ValueType) -> Vec3 {
        Vec3::new(v2[0], v2[1], z)
    }

    ////////////////////////////////////////////////////////////////////
    // Accessors.
    //

    #[inline]
    pub fn x(&self) -> ValueType {
        self.v[0]
    }

    #[inline]
    pub fn y(&self) -> ValueType {
        self.v[1]
    }

    #[inline]
    pub fn z(&self) -> ValueType {
        self.v[2]
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut ValueType {
        &mut self.v[0]
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut ValueType {
        &mut self.v[1]
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut ValueType {
        &mut self.v[2]
    }

    /// The three components as one contiguous block, for APIs that
    /// want a flat coordinate buffer.
    #[inline]
    pub fn as_slice(&self) -> &[ValueType] {
        &self.v
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [ValueType] {
        &mut self.v
    }

    #[inline]
    pub fn as_array(&self) -> &[ValueType; 3] {
        &self.v
    }

    #[inline]
    pub fn set(&mut self, x: ValueType, y: ValueType, z: ValueType) {
        self.v = [x, y, z];
    }

    #[inline]
    pub fn set_vec(&mut self, rhs: &Vec3) {
        self.v = rhs.v;
    }

    // Add the vector to a Vec<f32> to be used by OpenGL.
    pub fn push_to(&self, v: &mut Vec<ValueType>) {
        v.extend_from_slice(&self.v);
    }

    ////////////////////////////////////////////////////////////////////
    // Validity.
    //

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.v.iter().any(|c| math::is_nan(*c))
    }

    /// Not NaN. Infinite components still count as valid.
    #[inline]
    pub fn valid(&self) -> bool {
        !self.is_nan()
    }

    ////////////////////////////////////////////////////////////////////
    // Arithmetic. The operators below forward to these.
    //

    #[inline]
    pub fn dot(&self, rhs: &Vec3) -> ValueType {
        self.v[0] * rhs.v[0] + self.v[1] * rhs.v[1] + self.v[2] * rhs.v[2]
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(&self, rhs: &Vec3) -> Vec3 {
        Vec3::new(
            self.v[1] * rhs.v[2] - self.v[2] * rhs.v[1],
            self.v[2] * rhs.v[0] - self.v[0] * rhs.v[2],
            self.v[0] * rhs.v[1] - self.v[1] * rhs.v[0],
        )
    }

    #[inline]
    pub fn scale(&self, m: ValueType) -> Vec3 {
        Vec3::new(self.v[0] * m, self.v[1] * m, self.v[2] * m)
    }

    /// Length of the vector = sqrt(vec . vec)
    #[inline]
    pub fn length(&self) -> ValueType {
        self.length2().sqrt()
    }

    /// Length squared of the vector = vec . vec
    #[inline]
    pub fn length2(&self) -> ValueType {
        self.dot(self)
    }

    /// Normalize the vector so that it has length unity, returning the
    /// previous length. A zero-length vector is left as it is.
    pub fn normalize(&mut self) -> ValueType {
        let norm = self.length();
        if norm > 0.0 {
            *self *= norm.recip();
        }
        norm
    }

    /// Unit-length copy of the vector. Unlike `normalize`, an input whose
    /// length isn't positive (zero, or NaN) gives back exactly (0, 0, 0)
    /// rather than a copy of itself.
    pub fn normalized(&self) -> Vec3 {
        let norm = self.length();
        if norm > 0.0 {
            *self * norm.recip()
        } else {
            Vec3::zero()
        }
    }

    /// Lexicographic comparison that also orders NaNs, for sorting
    /// slices of vectors that may not be valid.
    pub fn total_cmp(&self, rhs: &Vec3) -> Ordering {
        self.v
            .iter()
            .zip(rhs.v.iter())
            .map(|(a, b)| a.total_cmp(b))
            .find(|o| *o != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

////////////////////////////////////////////////////////////////////////
// Flat buffers.
//

pub fn flatten(vs: &[Vec3]) -> Vec<ValueType> {
    let mut v = Vec::with_capacity(vs.len() * 3);
    for p in vs.iter() {
        p.push_to(&mut v);
    }
    v
}

pub fn unflatten(data: &[ValueType]) -> Result<Vec<Vec3>> {
    if data.len() % 3 != 0 {
        bail!(
            "Flat buffer of {} values doesn't hold a whole number of Vec3s",
            data.len()
        );
    }
    Ok(data
        .chunks_exact(3)
        .map(|c| Vec3::new(c[0], c[1], c[2]))
        .collect())
}

////////////////////////////////////////////////////////////////////////
// Conversions.
//

impl From<[ValueType; 3]> for Vec3 {
    #[inline]
    fn from(v: [ValueType; 3]) -> Vec3 {
        Vec3 { v }
    }
}

impl From<Vec3> for [ValueType; 3] {
    #[inline]
    fn from(v: Vec3) -> [ValueType; 3] {
        v.v
    }
}

impl From<(Vec2, ValueType)> for Vec3 {
    #[inline]
    fn from((v2, z): (Vec2, ValueType)) -> Vec3 {
        Vec3::from_vec2(v2, z)
    }
}

////////////////////////////////////////////////////////////////////////
// Ordering and indexing.
//

// Lexicographic on x, then y, then z. A component pair that is neither
// less nor greater (equal, or involving NaN) defers to the next one.
impl PartialOrd for Vec3 {
    fn partial_cmp(&self, rhs: &Vec3) -> Option<Ordering> {
        for (a, b) in self.v.iter().zip(rhs.v.iter()) {
            if a < b {
                return Some(Ordering::Less);
            }
            if a > b {
                return Some(Ordering::Greater);
            }
        }
        if self == rhs {
            Some(Ordering::Equal)
        } else {
            None
        }
    }
}

impl Index<usize> for Vec3 {
    type Output = ValueType;

    #[inline]
    fn index(&self, i: usize) -> &ValueType {
        &self.v[i]
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut ValueType {
        &mut self.v[i]
    }
}

////////////////////////////////////////////////////////////////////////
// Operators.
//

/// Dot product.
impl Mul<Vec3> for Vec3 {
    type Output = ValueType;

    #[inline]
    fn mul(self, rhs: Vec3) -> ValueType {
        self.dot(&rhs)
    }
}

/// Cross product.
impl BitXor<Vec3> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn bitxor(self, rhs: Vec3) -> Vec3 {
        self.cross(&rhs)
    }
}

impl Mul<ValueType> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: ValueType) -> Vec3 {
        self.scale(rhs)
    }
}

impl MulAssign<ValueType> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: ValueType) {
        for c in self.v.iter_mut() {
            *c *= rhs;
        }
    }
}

// No zero check: dividing by zero gives IEEE infinities/NaNs.
impl Div<ValueType> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn div(self, rhs: ValueType) -> Vec3 {
        Vec3::new(self.v[0] / rhs, self.v[1] / rhs, self.v[2] / rhs)
    }
}

impl DivAssign<ValueType> for Vec3 {
    #[inline]
    fn div_assign(&mut self, rhs: ValueType) {
        for c in self.v.iter_mut() {
            *c /= rhs;
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(
            self.v[0] + rhs.v[0],
            self.v[1] + rhs.v[1],
            self.v[2] + rhs.v[2],
        )
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        self.v[0] += rhs.v[0];
        self.v[1] += rhs.v[1];
        self.v[2] += rhs.v[2];
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(
            self.v[0] - rhs.v[0],
            self.v[1] - rhs.v[1],
            self.v[2] - rhs.v[2],
        )
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec3) {
        self.v[0] -= rhs.v[0];
        self.v[1] -= rhs.v[1];
        self.v[2] -= rhs.v[2];
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.v[0], -self.v[1], -self.v[2])
    }
}

////////////////////////////////////////////////////////////////////////
// Text output: "x y z", nothing else. There's no matching parser.
//

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.v[0], self.v[1], self.v[2])
    }
}
