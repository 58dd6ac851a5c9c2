//! Terminal front-end: the menu controller, the per-entity operation
//! handlers, and the console they prompt through.

mod app;
mod console;
pub mod handlers;
mod helpers;
mod input;
pub mod menu;
mod tables;

pub use app::App;
pub use console::{Console, StatusKind, TerminalConsole};
pub use handlers::{Handler, Outcome};
pub use input::{is_input_closed, InputClosed};
pub use tables::TableView;
