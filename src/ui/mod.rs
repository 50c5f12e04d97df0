//! UI layer: top bar, table panel, and chart panel.

pub mod panels;
pub mod plot;
pub mod table;
