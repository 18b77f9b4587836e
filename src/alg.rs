use std;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Vec2 {
        Vec2 { x, y }
    }
}

// Overflow wraps at 32 bits, never panics
impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(
            self.x.wrapping_add(other.x),
            self.y.wrapping_add(other.y),
        )
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(out, "( {}, {} )", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Vec3 {
        Vec3 { x, y, z }
    }

    #[inline]
    pub fn one() -> Vec3 {
        Vec3::new(1., 1., 1.)
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            out,
            "( {}, {}, {} )",
            self.x, self.y, self.z,
        )
    }
}

/// 3x3 matrix stored as three row vectors.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    pub x: Vec3,
    pub y: Vec3,
    pub z: Vec3,
}

impl Mat3 {
    // Arguments are given in row-major order
    pub const fn new(
        x0: f64, x1: f64, x2: f64,
        y0: f64, y1: f64, y2: f64,
        z0: f64, z1: f64, z2: f64,
    ) -> Mat3 {
        Mat3 {
            x: Vec3::new(x0, x1, x2),
            y: Vec3::new(y0, y1, y2),
            z: Vec3::new(z0, z1, z2),
        }
    }

    #[inline]
    pub fn rows(self) -> [Vec3; 3] {
        [self.x, self.y, self.z]
    }
}

impl std::ops::Mul<Vec3> for Mat3 {
    type Output = Vec3;

    fn mul(self, vec: Vec3) -> Vec3 {
        ::matrix::mul_mat_vec(self, vec)
    }
}

impl std::fmt::Display for Mat3 {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            out,
            "[ {}, {}, {} ]\n[ {}, {}, {} ]\n[ {}, {}, {} ]",
            self.x.x, self.x.y, self.x.z,
            self.y.x, self.y.y, self.y.z,
            self.z.x, self.z.y, self.z.z,
        )
    }
}
