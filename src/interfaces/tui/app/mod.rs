mod navigation;
mod option_operations;
mod state;

pub use state::{App, CurrentScreen, EditorState};
