//! Shared components: the coin table, its rows, and the Pico wrappers they are built from.
pub mod coin_row;
pub mod coin_table;
pub mod pico;
