//! World implementations for the scenario runner.

pub mod bangladesh;
pub mod number_line;
pub mod route_graphs;
pub mod tic_tac_toe;
