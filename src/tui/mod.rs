//! Terminal UI: a screen state machine over the game engine.

mod controller;
mod input;
mod screen;
mod screens;
mod ui;

pub use controller::run;
