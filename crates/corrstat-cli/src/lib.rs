//! # corrstat-cli
//!
//! Terminal output for corrstat: formatting, text and JSON presenters, and
//! shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{CorrelationReport, JsonPresenter, ResultPresenter, TextPresenter};
