pub mod app;
pub mod event_handler;
pub mod ui;
pub mod views;

pub use app::{App, DemoView};
pub use event_handler::{DemoEvent, EventHandler};
pub use ui::Tui;
