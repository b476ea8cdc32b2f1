//! A static chessboard: the fixed checkerboard layout, the initial piece
//! placement, and a GPUI view that renders them with vector piece icons.

pub mod app;
pub mod domain;
pub mod icons;
pub mod models;
pub mod ui;
