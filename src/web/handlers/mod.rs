// JSON API handlers. Each one reads the store fresh and renders a Report.

pub mod charts;
pub mod impacts;
pub mod responses;
pub mod status;
