//! Terminal presentation of session state.

mod terminal;

pub use terminal::{render_catalog, render_log, render_status, renderer_for, Renderer, StatusStyle};
