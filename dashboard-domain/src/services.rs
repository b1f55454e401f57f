pub mod catalog;
pub mod filter;
pub mod map_figure;
pub mod timeline_figure;

pub use catalog::*;
pub use filter::*;
pub use map_figure::*;
pub use timeline_figure::*;
