//! Pinhole ray tracer
//!
//! Casts one primary ray per pixel into a small scene of spheres and planes,
//! colors it flat on a hit or with a sky gradient on a miss, and writes an
//! RGB8 image.

pub mod algebra;
pub mod camera;
pub mod config;
pub mod logger;
pub mod object;
pub mod output;
pub mod plane;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod shader;
pub mod sphere;
