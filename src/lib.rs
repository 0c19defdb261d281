//! Palmer penguins dashboard: a species / body-mass filter feeding value
//! boxes, a scatter plot and a data grid.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod state;
pub mod ui;
