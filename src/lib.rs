pub mod camera;
pub mod cell;
pub mod config;
pub mod events;
pub mod grid;
pub mod io;
pub mod life106;
pub mod patterns;
pub mod render;
pub mod rule_set;
pub mod world;

mod parse_util;

pub type WorldOffset = i64;
pub type ScreenSize = u16;
