//! Domain layer: beverages, sizes, prices and payment methods.
//!
//! Nothing in here knows where its output goes; lines are emitted through the
//! `OutputSink` port defined in `ports`.

pub mod amount;
pub mod beverage;
pub mod payment;
pub mod ports;
pub mod size;
