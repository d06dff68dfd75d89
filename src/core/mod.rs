pub mod constants;
pub mod keyframes;
pub mod mapper;
pub mod progress;
pub mod theme;

pub use constants::*;
pub use keyframes::*;
pub use mapper::*;
pub use progress::*;
pub use theme::*;
