//! Event system: drawer input events and crossterm conversion.

pub mod input;

pub use input::{DrawerEvent, Key};
