//! Fixed-size vector and matrix primitives, plus the "rest matrix"
//! transforms built from them.

extern crate ini;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;

#[cfg(test)] extern crate rand;
#[cfg(test)] #[macro_use] extern crate approx;

pub mod alg;
pub mod config;
pub mod matrix;

pub use alg::{Mat3, Vec2, Vec3};
pub use matrix::{
    mul_mat_vec,
    mul_vec_vec,
    rest_matrix,
    rest_matrix2,
    rotation,
    scale,
    sum_vec,
    SCALE2,
};
