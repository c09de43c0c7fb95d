//! Repository implementations.
//!
//! Repositories own the SQL for one table each; the payment repository
//! additionally owns the two multi-table transactions (submission and
//! adjudication).

pub mod batch;
pub mod comment;
pub mod course;
pub mod enrollment;
pub mod exam_result;
pub mod lesson;
pub mod notification;
pub mod payment;
pub mod student;

pub use batch::BatchRepository;
pub use comment::CommentRepository;
pub use course::CourseRepository;
pub use enrollment::{EnrollmentRepository, NotificationContext};
pub use exam_result::ExamResultRepository;
pub use lesson::LessonRepository;
pub use notification::NotificationRepository;
pub use payment::{AdjudicationOutcome, PaymentRepository};
pub use student::StudentRepository;
