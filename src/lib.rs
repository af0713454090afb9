pub mod astro;
pub mod catalog;
pub mod config;
pub mod consts;
pub mod math;
