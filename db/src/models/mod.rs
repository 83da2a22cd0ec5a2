pub mod assignment;
pub mod attendance_instance;
pub mod attendance_log;
pub mod attendance_record;
pub mod conversation;
pub mod conversation_participant;
pub mod course;
pub mod event;
pub mod feedback;
pub mod group;
pub mod group_member;
pub mod id_sequence;
pub mod lecturer;
pub mod message;
pub mod notification;
pub mod security_log;
pub mod student;

pub use assignment::Entity as Assignment;
pub use attendance_instance::Entity as AttendanceInstance;
pub use attendance_log::Entity as AttendanceLog;
pub use attendance_record::Entity as AttendanceRecord;
pub use conversation::Entity as Conversation;
pub use conversation_participant::Entity as ConversationParticipant;
pub use course::Entity as Course;
pub use event::Entity as Event;
pub use feedback::Entity as Feedback;
pub use group::Entity as Group;
pub use group_member::Entity as GroupMember;
pub use id_sequence::Entity as IdSequence;
pub use lecturer::Entity as Lecturer;
pub use message::Entity as Message;
pub use notification::Entity as Notification;
pub use security_log::Entity as SecurityLog;
pub use student::Entity as Student;
