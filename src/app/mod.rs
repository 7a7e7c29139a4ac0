//! Terminal application runtime: terminal setup, background workers, and the event loop.

pub mod runtime;
mod terminal;

pub use runtime::run;
