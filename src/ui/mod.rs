//! Terminal UI: the board view with falling pieces, and keyboard/mouse input.

mod app;
mod game_view;

pub use app::{board_pixel_x, App};
