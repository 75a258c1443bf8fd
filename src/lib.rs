//! # Connect Four
//!
//! A two-player Connect Four game: a pure game-state engine, a tick-driven
//! drop animation, and a terminal front end built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, win/draw evaluation, engine
//! - [`animation`]: Falling-piece animation advanced by explicit ticks
//! - [`session`]: Engine and animation composed into one game table
//! - [`ui`]: Terminal UI: board view, keyboard and mouse input
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod animation;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod ui;
