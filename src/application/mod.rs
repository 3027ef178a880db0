//! Application layer containing the order orchestration.
//!
//! This module defines the `OrderService` which binds a shop to one payment
//! method and walks each beverage through pricing, preparation and payment.

pub mod order_service;
