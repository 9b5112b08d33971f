pub mod region_select;
pub mod timetable;
