//! Command-line commands built on the catalog

pub mod check;
pub mod index;
pub mod list;
pub mod show;
pub mod tags;
