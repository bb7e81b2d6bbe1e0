pub mod entity;
pub mod results;

pub use entity::TrackerEntityPage;
pub use results::TrackerResultsPage;
