pub mod calendar;
pub mod dataset;
pub mod day;
pub mod layout;
pub mod metric;
pub mod station;
