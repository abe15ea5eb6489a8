pub mod catalog;
pub mod cli;
pub mod compare;
pub mod ctx;
pub mod io;
pub mod panel;
pub mod params;
pub mod pipeline;
pub mod qc;
pub mod schema;
pub mod scores;
pub mod store;
