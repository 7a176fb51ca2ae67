//! Configuration module for the block clock.

// Can all be private now because we have a public re-export.
mod api;
mod clock;
mod debug;
mod persistence;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use api::{API, ApiConfig, ApiSettings};
pub use clock::CLOCK;
pub use debug::DF;
pub use persistence::PERSISTENCE;
pub use plot::PLOT_CONFIG;
