//! Background workers owned by the runtime.

pub mod fetch;
