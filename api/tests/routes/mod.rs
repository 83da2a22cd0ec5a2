mod attendance_test;
mod calendar_test;
mod chat_test;
mod content_test;
mod courses_test;
mod groups_test;
mod health_test;
mod lecturers_test;
mod reports_test;
mod students_test;
