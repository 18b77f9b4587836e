//! Fixed-pattern 3x3 transforms and the "rest matrix" composition.
//!
//! Note that `rotation` and `scale` do not build a true rotation or scaling
//! matrix; the patterns below are reproduced exactly as named.

use alg::{Mat3, Vec2, Vec3};

/// Constant passed to `rotation` by the rest transforms.
pub const REST_ROTATION: f64 = 0.123;

/// Constant passed to `scale` by `rest_matrix`.
pub const REST_SCALE: f64 = 2.0;

/// Literal expansion of `scale(2.0)`.
pub const SCALE2: Mat3 = Mat3::new(
    2.0, 1.0, 1.0,
    1.0, 2.0, 1.0,
    1.0, 1.0, 2.0,
);

/// Componentwise sum of the pair, wrapping at 32 bits.
pub fn sum_vec(v: (Vec2, Vec2)) -> Vec2 {
    let (first, second) = v;
    first + second
}

pub fn rotation(a: f64) -> Mat3 {
    Mat3::new(
        0.0, -1.0 * a, 0.0,
          a,      0.0, 0.0,
        0.0,      0.0,   a,
    )
}

/// Dot product, summed left to right.
pub fn mul_vec_vec(v1: Vec3, v2: Vec3) -> f64 {
    let x = v1.x * v2.x;
    let y = v1.y * v2.y;
    let z = v1.z * v2.z;

    x + y + z
}

// Rows are reduced in order: x, then y, then z
pub fn mul_mat_vec(m: Mat3, v: Vec3) -> Vec3 {
    let [x, y, z] = m.rows();

    Vec3::new(
        mul_vec_vec(x, v),
        mul_vec_vec(y, v),
        mul_vec_vec(z, v),
    )
}

// Off-diagonal entries are one, not zero
pub fn scale(s: f64) -> Mat3 {
    Mat3::new(
          s, 1.0, 1.0,
        1.0,   s, 1.0,
        1.0, 1.0,   s,
    )
}

/// Scale by `scale(2.0)`, then apply `rotation(0.123)`.
pub fn rest_matrix(v: Vec3) -> Vec3 {
    mul_mat_vec(rotation(REST_ROTATION), mul_mat_vec(scale(REST_SCALE), v))
}

/// Same as `rest_matrix`, but through the precomputed `SCALE2`.
pub fn rest_matrix2(v: Vec3) -> Vec3 {
    mul_mat_vec(rotation(REST_ROTATION), mul_mat_vec(SCALE2, v))
}
