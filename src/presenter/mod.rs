//! Client side of the results page: turns `/results` responses into what a
//! split-bar display should show, including the placeholder state used when
//! the server cannot be reached or answers with something unexpected.

pub mod payload;
pub mod source;
pub mod terminal;
pub mod view;

use crate::error::FetchError;

pub use source::{HttpResultsSource, ResultsSource};
pub use terminal::TerminalRenderer;
pub use view::{PanelView, ResultsView};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load results. Retrying...";
pub const BAD_DATA_MESSAGE: &str = "Error receiving data from server.";

/// Anything that can display a refreshed view.
pub trait Render: Send {
    fn render(&mut self, view: &ResultsView);
}

pub fn error_message(error: &FetchError) -> &'static str {
    match error {
        FetchError::Malformed(_) => BAD_DATA_MESSAGE,
        FetchError::Transport(_) | FetchError::Status(_) => LOAD_FAILED_MESSAGE,
    }
}
