//! CLI command implementations.
//!
//! - `render` - build pentaflakes and write SVG, optionally PNG
//! - `stats` - report tile counts and sizes without rendering

pub mod common;
pub mod png;
pub mod render;
pub mod scene;
pub mod stats;

pub use render::{RenderArgs, cmd_render};
pub use stats::{StatsArgs, cmd_stats};
