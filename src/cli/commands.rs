pub mod render;
pub mod serve;

pub use render::render;
pub use serve::serve;
