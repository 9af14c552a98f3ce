//! Status-like enumerations shared by the entity contracts
//!
//! Every status is serialized by its wire code and exposes the same helpers:
//! `code()`, `display_name()`, `all()` and `from_code()`.

macro_rules! define_status {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($code:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            /// Wire code
            pub fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            /// Human readable label
            pub fn display_name(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn all() -> Vec<$name> {
                vec![$($name::$variant),+]
            }

            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.display_name())
            }
        }
    };
}

pub mod assignment_status;
pub mod statuses;

pub use assignment_status::AssignmentStatus;
pub use statuses::{
    AttendanceStatus, ComplaintStatus, DutyStatus, ExpenseStatus, IncidentSeverity,
    IncidentStatus, LeaveStatus,
};
