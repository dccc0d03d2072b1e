#![warn(clippy::pedantic)]

pub mod calculator;
pub mod input;
pub mod inventory;
pub mod load_plan;
pub mod plate;
pub mod plate_error;
pub mod settings;
pub mod unit;
