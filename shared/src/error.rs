//! Error taxonomy shared by the gateway, the controllers and the form logic.

use std::fmt;

/// Name of a gateway operation, carried by every remote failure so the page
/// can say which call went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListStudents,
    AddStudent,
    DeleteStudent,
    GetTimetable,
    SetDaySubject,
    GetAttendance,
    GetBlacklist,
    MarkAttendance,
    GetTodayRoster,
}

impl Operation {
    /// Message used when the backend gives us nothing better
    pub fn default_failure_message(&self) -> &'static str {
        match self {
            Operation::ListStudents => "Failed to fetch students",
            Operation::AddStudent => "Registration failed",
            Operation::DeleteStudent => "Failed to delete student",
            Operation::GetTimetable => "Failed to fetch timetable",
            Operation::SetDaySubject => "Failed to update subject",
            Operation::GetAttendance => "Failed to fetch attendance data",
            Operation::GetBlacklist => "Failed to fetch blacklist",
            Operation::MarkAttendance => "Failed to mark attendance",
            Operation::GetTodayRoster => "Failed to fetch today's students",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::ListStudents => "list students",
            Operation::AddStudent => "add student",
            Operation::DeleteStudent => "delete student",
            Operation::GetTimetable => "get timetable",
            Operation::SetDaySubject => "set day subject",
            Operation::GetAttendance => "get attendance",
            Operation::GetBlacklist => "get blacklist",
            Operation::MarkAttendance => "mark attendance",
            Operation::GetTodayRoster => "get today's roster",
        };
        f.write_str(name)
    }
}

/// Local input rejected before any network call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Both week and subject number must be provided, or leave both empty to clear")]
    IncompleteSubject,
    #[error("Week and subject number must be valid numbers")]
    NotANumber,
    #[error("Week must be between 1 and 4")]
    WeekOutOfRange(i64),
    #[error("Subject number must be between 1 and 6")]
    NumberOutOfRange(i64),
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Phone number must be exactly 10 digits")]
    InvalidPhone,
    #[error("Joining date must be a valid YYYY-MM-DD date")]
    InvalidJoiningDate,
    #[error("Invalid password")]
    InvalidPassword,
}

/// Every failure a page can surface
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    /// The request never completed
    #[error("Network error during {operation}: {message}")]
    Network {
        operation: Operation,
        message: String,
    },

    /// The backend answered with a non-success status
    #[error("{message}")]
    Remote {
        operation: Operation,
        status: u16,
        message: String,
    },

    /// The backend answered 2xx but the body did not match the expected shape
    #[error("Unexpected response during {operation}: {message}")]
    Decode {
        operation: Operation,
        message: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DashboardError {
    /// Build a remote failure, falling back to the operation's default message
    /// when the backend body carried nothing usable.
    pub fn remote(operation: Operation, status: u16, message: Option<String>) -> Self {
        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| operation.default_failure_message().to_string());
        DashboardError::Remote {
            operation,
            status,
            message,
        }
    }

    pub fn operation(&self) -> Option<Operation> {
        match self {
            DashboardError::Network { operation, .. }
            | DashboardError::Remote { operation, .. }
            | DashboardError::Decode { operation, .. } => Some(*operation),
            DashboardError::Validation(_) => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DashboardError::Validation(_))
    }
}

/// Pull a human readable message out of an error body.
///
/// The backend sends `{ "error": "..." }` for most failures, sometimes
/// `{ "message": "..." }`, and occasionally plain text.
pub fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        for key in ["error", "message"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return Some(text.to_string());
            }
        }
        return None;
    }
    Some(trimmed.to_string())
}
