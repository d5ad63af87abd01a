//! Business services
//!
//! Handlers stay thin; anything that spans several repository calls or
//! applies domain rules lives here.

pub mod booking;
