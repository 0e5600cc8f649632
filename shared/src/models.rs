//! Wire models exchanged with the classroom backend.
//!
//! Field names follow the backend's JSON (`_id`, `booked_students`, ...); the
//! Rust names describe what the values mean.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::calendar::parse_date_key;
use crate::error::ValidationError;

/// Lowest and highest week of the rotating catalog
pub const WEEK_RANGE: std::ops::RangeInclusive<u32> = 1..=4;
/// Lowest and highest subject slot within a week
pub const NUMBER_RANGE: std::ops::RangeInclusive<u32> = 1..=6;

/// Records that sit on a single calendar date
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// `(week, number)` identifying one lesson in the 4×6 catalog.
///
/// Sent and received as a two-element JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct SubjectPair {
    pub week: u32,
    pub number: u32,
}

impl SubjectPair {
    /// Checked constructor used for anything typed in by a user
    pub fn new(week: i64, number: i64) -> Result<Self, ValidationError> {
        let week = u32::try_from(week)
            .ok()
            .filter(|w| WEEK_RANGE.contains(w))
            .ok_or(ValidationError::WeekOutOfRange(week))?;
        let number = u32::try_from(number)
            .ok()
            .filter(|n| NUMBER_RANGE.contains(n))
            .ok_or(ValidationError::NumberOutOfRange(number))?;
        Ok(Self { week, number })
    }
}

impl From<(u32, u32)> for SubjectPair {
    fn from((week, number): (u32, u32)) -> Self {
        Self { week, number }
    }
}

impl From<SubjectPair> for (u32, u32) {
    fn from(pair: SubjectPair) -> Self {
        (pair.week, pair.number)
    }
}

/// One timetable day as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(with = "date_key")]
    pub date: NaiveDate,
    /// `None` means unassigned. Anything but a two-number array reads as
    /// unassigned.
    #[serde(default, deserialize_with = "lenient_subject")]
    pub subject: Option<SubjectPair>,
}

impl Dated for DayRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Subject details attached to an attendance day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectInfo {
    pub subject_name: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Attendance statistics for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(with = "date_key")]
    pub date: NaiveDate,
    #[serde(rename = "booked_students", default)]
    pub booked_count: u32,
    #[serde(rename = "present_students", default)]
    pub present_count: u32,
    #[serde(rename = "subject_data", default)]
    pub subject_info: Option<SubjectInfo>,
}

impl Dated for AttendanceRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// A registered student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub last_qualification: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub profile_img: Option<String>,
    #[serde(default)]
    pub joining_date: String,
    #[serde(default)]
    pub ending_date: Option<String>,
}

impl StudentRecord {
    /// Course end date, when the backend sent a parseable one
    pub fn ending(&self) -> Option<NaiveDate> {
        self.ending_date.as_deref().and_then(leading_date)
    }

    /// A course is expired once its ending date is strictly before `today`
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.ending().is_some_and(|end| end < today)
    }
}

/// Payload for registering a student
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub gender: String,
    pub last_qualification: String,
    pub location: String,
    pub joining_date: String,
}

/// Which students `GET /students` should return.
///
/// The flag is forwarded verbatim; the backend decides what "expired" means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StudentFilter {
    /// `expired=true`: students on an active course
    #[default]
    ActiveCourses,
    /// `expired=false`
    AllStudents,
}

impl StudentFilter {
    pub fn expired_flag(&self) -> bool {
        matches!(self, StudentFilter::ActiveCourses)
    }

    pub fn label(&self) -> &'static str {
        match self {
            StudentFilter::ActiveCourses => "Active Courses",
            StudentFilter::AllStudents => "All Students",
        }
    }
}

/// A student who keeps missing or cancelling lessons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlacklistEntry {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub missed_count: u32,
    #[serde(default)]
    pub cancelled_count: u32,
}

impl BlacklistEntry {
    pub fn display_name(&self) -> &str {
        non_empty(self.name.as_deref()).unwrap_or("Unknown")
    }

    pub fn display_email(&self) -> &str {
        non_empty(self.email.as_deref()).unwrap_or("N/A")
    }

    pub fn display_phone(&self) -> &str {
        non_empty(self.phone.as_deref()).unwrap_or("N/A")
    }
}

/// `GET /blacklist` has been seen both bare and wrapped in `{ students }`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BlacklistResponse {
    Bare(Vec<BlacklistEntry>),
    Wrapped {
        #[serde(default)]
        students: Vec<BlacklistEntry>,
    },
}

impl BlacklistResponse {
    pub fn into_entries(self) -> Vec<BlacklistEntry> {
        match self {
            BlacklistResponse::Bare(entries) => entries,
            BlacklistResponse::Wrapped { students } => students,
        }
    }
}

/// A student booked for today, with whether they were already marked present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterStudent {
    #[serde(flatten)]
    pub student: StudentRecord,
    #[serde(default)]
    pub present: bool,
}

/// Today's lesson and the students booked on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayRoster {
    pub day_id: String,
    #[serde(default)]
    pub students: Vec<RosterStudent>,
}

/// Body of `PUT /timetable/{dayId}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSubjectRequest {
    pub subject: Option<SubjectPair>,
}

/// Body of `POST /attendance/mark`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkAttendanceRequest {
    pub student_id: String,
    pub day_id: String,
}

/// Find the id of a freshly created record in whatever shape the backend used
pub fn created_id(body: &serde_json::Value) -> Option<String> {
    ["id", "_id", "insertedId"]
        .iter()
        .find_map(|key| body.get(*key))
        .and_then(|value| match value {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn lenient_subject<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<SubjectPair>, D::Error> {
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|value| serde_json::from_value::<(u32, u32)>(value).ok())
        .map(SubjectPair::from))
}

/// Accepts `2024-03-05` as well as full timestamps like `2024-03-05T00:00:00Z`
fn leading_date(raw: &str) -> Option<NaiveDate> {
    raw.get(..10).and_then(parse_date_key)
}

/// Serde adapter writing dates as the canonical key and reading either a key
/// or a timestamp whose first ten characters are one.
mod date_key {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::calendar::format_date_key;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date_key(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::leading_date(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
    }
}
