//! Database entity definitions.
//!
//! Entities are direct mappings to database rows; joined projections used
//! by list endpoints live alongside the base row types.

pub mod batch;
pub mod comment;
pub mod course;
pub mod enrollment;
pub mod exam_result;
pub mod lesson;
pub mod notification;
pub mod payment;
pub mod student;

pub use batch::{BatchCatalogEntity, BatchEntity, BatchStatusDb, OpenBatchEntity};
pub use comment::{CommentEntity, CommentRoleDb};
pub use course::CourseEntity;
pub use enrollment::{EnrollmentEntity, EnrollmentStatusDb, EnrollmentSummaryEntity};
pub use exam_result::{ExamResultEntity, ExamResultRowEntity};
pub use lesson::LessonEntity;
pub use notification::{NotificationEntity, NotificationKindDb};
pub use payment::{AdminPaymentRowEntity, PaymentEntity, PaymentStatusDb, StudentPaymentRowEntity};
pub use student::StudentEntity;
