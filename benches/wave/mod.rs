//! Benchmarks for generators and the renderer.

mod generator;
mod render;

pub use generator::bench_generate;
pub use render::bench_render;
