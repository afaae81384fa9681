//! Configuration module.
//!
//! - `loader`: TOML config file plus environment and CLI precedence
//! - `keybindings`: crossterm key events to [`KeyAction`](crate::model::KeyAction)

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{resolve, CliOverrides, ConfigError, ResolvedConfig};
