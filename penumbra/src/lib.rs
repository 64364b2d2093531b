//! Area light visibility for shaded surface points: which lights a point sees, how much of
//! them and through what kind of filtering media.

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod lights;
pub mod logging;
pub mod math;
pub mod shadows;
pub mod world;

#[doc(hidden)]
pub use log as __log;

pub use config::Settings;
pub use error::SetupError;
