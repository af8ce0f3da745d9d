//! Terminal front end: a menu to configure the table and a table view that
//! drives [`crate::engine::GameEngine`] one stage at a time.

pub mod app;
pub mod controller;
pub mod ui;
