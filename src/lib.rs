pub mod canvas;
pub mod manifest;
pub mod output;
pub mod palette;
pub mod png;
pub mod sprites;

/// Default root of the generated sprite tree, relative to the project root.
pub const DEFAULT_OUT_ROOT: &str = "assets/sprites";
