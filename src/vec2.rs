//
// vec2.rs: A planar point or direction. Only as much as is needed to
// lift 2D coordinates into 3-space.
//

use std::fmt;
use std::ops::Index;

use crate::math::ValueType;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: ValueType,
    pub y: ValueType,
}

impl Vec2 {
    #[inline]
    pub fn new(x: ValueType, y: ValueType) -> Vec2 {
        Vec2 { x, y }
    }
}

impl From<[ValueType; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [ValueType; 2]) -> Vec2 {
        Vec2 { x, y }
    }
}

impl Index<usize> for Vec2 {
    type Output = ValueType;

    fn index(&self, i: usize) -> &ValueType {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of range: {}", i),
        }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
