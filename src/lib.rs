//! Terminal ride search with live place suggestions

pub mod app;
pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod geocode;
pub mod history;
pub mod layout;
pub mod suggest;
pub mod theme;
pub mod view;
pub mod widgets;

#[cfg(test)]
mod test_utils;
