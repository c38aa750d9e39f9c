pub mod coalesce;
pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod input;
pub mod layout;
pub mod navigator;
pub mod reveal;

pub use coalesce::*;
pub use config::*;
pub use easing::*;
pub use error::*;
pub use input::*;
pub use layout::*;
pub use navigator::*;
pub use reveal::*;
