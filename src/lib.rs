pub mod backends;
pub mod brand;
pub mod cli;
pub mod color;
pub mod error;
pub mod generation;
pub mod pipeline;
pub mod preview;
pub mod tui;
