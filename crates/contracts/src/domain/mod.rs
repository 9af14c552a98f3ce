pub mod common;

pub mod a001_guard;
pub mod a002_guard_type;
pub mod a003_client;
pub mod a004_site;
pub mod a005_site_location;
pub mod a006_duty_time_type;
pub mod a007_duty;
pub mod a008_guard_assignment;
pub mod a009_duty_attendance;
pub mod a010_duty_status_report;
pub mod a011_leave;
pub mod a012_expense_category;
pub mod a013_expense;
pub mod a014_expense_review;
pub mod a015_incident;
pub mod a016_complainant;
pub mod a017_complaint;
pub mod a018_contact;
pub mod a019_note;

pub use a001_guard::Guard;
pub use a002_guard_type::GuardType;
pub use a003_client::Client;
pub use a004_site::Site;
pub use a005_site_location::SiteLocation;
pub use a006_duty_time_type::DutyTimeType;
pub use a007_duty::Duty;
pub use a008_guard_assignment::GuardAssignment;
pub use a009_duty_attendance::DutyAttendance;
pub use a010_duty_status_report::DutyStatusReport;
pub use a011_leave::Leave;
pub use a012_expense_category::ExpenseCategory;
pub use a013_expense::Expense;
pub use a014_expense_review::ExpenseReview;
pub use a015_incident::Incident;
pub use a016_complainant::Complainant;
pub use a017_complaint::Complaint;
pub use a018_contact::Contact;
pub use a019_note::Note;

crate::impl_entity!(
    Guard,
    GuardType,
    Client,
    Site,
    SiteLocation,
    DutyTimeType,
    Duty,
    GuardAssignment,
    DutyAttendance,
    DutyStatusReport,
    Leave,
    ExpenseCategory,
    Expense,
    ExpenseReview,
    Incident,
    Complainant,
    Complaint,
    Contact,
    Note,
);
