pub mod config;
pub mod content;
pub mod dates;
pub mod logging;
pub mod player;
pub mod script;
pub mod tui;
