pub mod m202406010001_create_id_sequences;
pub mod m202406010002_create_lecturers;
pub mod m202406010003_create_courses;
pub mod m202406010004_create_students;
pub mod m202406010005_create_groups;
pub mod m202406010006_create_assignments;
pub mod m202406010007_create_events;
pub mod m202406010008_create_notifications;
pub mod m202406010009_create_feedback;
pub mod m202406010010_create_chat;
pub mod m202406010011_create_attendance;
pub mod m202406010012_create_attendance_logs;
