//! Application state module

mod app_state;
mod forms;
mod notification;
mod page;
mod splash_state;

pub use app_state::*;
pub use forms::*;
pub use notification::*;
pub use page::*;
pub use splash_state::*;
