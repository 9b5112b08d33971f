pub mod color;
pub mod hours_chart;
pub mod listings;
pub mod popup;
