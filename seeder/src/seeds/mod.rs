pub mod course;
pub mod event;
pub mod lecturer;
pub mod student;
