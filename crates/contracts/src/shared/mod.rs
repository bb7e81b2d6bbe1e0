pub mod config;
pub mod route;
pub mod tracker;
pub mod wizard;
