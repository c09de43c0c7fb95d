//! Domain models and DTOs.

pub mod batch;
pub mod comment;
pub mod course;
pub mod enrollment;
pub mod exam_result;
pub mod lesson;
pub mod notification;
pub mod payment;
pub mod student;

pub use batch::{Batch, BatchCatalogEntry, BatchStatus, CreateBatchRequest, OpenBatch, UpdateBatchRequest};
pub use comment::{Comment, CommentRole, PostCommentRequest};
pub use course::{Course, CreateCourseRequest};
pub use enrollment::{
    EnrollRequest, Enrollment, EnrollmentStatus, EnrollmentSummary, ACCESS_PERIOD_DAYS,
};
pub use exam_result::{ExamResult, ExamResultRow, RecordExamResultRequest};
pub use lesson::{CreateLessonRequest, Lesson};
pub use notification::{
    Notification, NotificationKind, NotificationTemplate, MAX_NOTIFICATIONS_PER_PAGE,
};
pub use payment::{
    AdjudicatePaymentRequest, AdminPaymentRow, Payment, PaymentDecision, PaymentStatus,
    StudentPaymentRow, SubmitPaymentRequest,
};
pub use student::{
    LoginRequest, RegisterStudentRequest, Student, StudentProfile, UpdateProfileRequest,
    UpdateStudentRequest,
};
