pub mod help;
pub mod region_select;
pub mod timetable;
