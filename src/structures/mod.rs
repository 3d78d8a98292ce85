mod booking;
mod config;
mod edge;
mod graph;
mod ledger;
mod station;

pub use booking::*;
pub use config::*;
pub use edge::*;
pub use graph::*;
pub use ledger::*;
pub use station::*;
