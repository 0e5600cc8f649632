use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::error::extract_error_message;
use shared::gateway::paths;
use shared::{
    created_id, AttendanceRecord, BlacklistEntry, BlacklistResponse, DashboardError, DashboardGateway, DayRecord,
    MarkAttendanceRequest, NewStudent, Operation, StudentFilter, StudentRecord, SubjectPair, TodayRoster,
    UpdateSubjectRequest,
};

/// API client for communicating with the classroom backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self::with_base_url(shared::config::DEFAULT_API_BASE_URL.to_string())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        paths::join(&self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, operation: Operation, path: &str) -> Result<T, DashboardError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| network_error(operation, e))?;
        read_json(operation, response).await
    }

    /// Send `body` with `method`, returning the raw response once it is known
    /// to be a success
    async fn send_json<B: Serialize>(
        &self,
        operation: Operation,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Response, DashboardError> {
        let url = self.url(path);
        let builder = match method {
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
        };
        let response = builder
            .json(body)
            .map_err(|e| DashboardError::Decode {
                operation,
                message: format!("Failed to serialize request: {}", e),
            })?
            .send()
            .await
            .map_err(|e| network_error(operation, e))?;
        ensure_success(operation, response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
enum Method {
    Post,
    Put,
}

fn network_error(operation: Operation, error: gloo::net::Error) -> DashboardError {
    log::error!("🌐 {} failed before reaching the backend: {}", operation, error);
    DashboardError::Network {
        operation,
        message: error.to_string(),
    }
}

/// Turn a non-2xx response into a remote error carrying the backend's message
async fn ensure_success(operation: Operation, response: Response) -> Result<Response, DashboardError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("⚠️ {} answered {}: {}", operation, status, body);
    Err(DashboardError::remote(operation, status, extract_error_message(&body)))
}

async fn read_json<T: DeserializeOwned>(operation: Operation, response: Response) -> Result<T, DashboardError> {
    let response = ensure_success(operation, response).await?;
    response.json::<T>().await.map_err(|e| DashboardError::Decode {
        operation,
        message: e.to_string(),
    })
}

#[async_trait(?Send)]
impl DashboardGateway for ApiClient {
    async fn list_students(&self, filter: StudentFilter) -> Result<Vec<StudentRecord>, DashboardError> {
        self.get_json(Operation::ListStudents, &paths::students(filter)).await
    }

    async fn add_student(&self, student: &NewStudent) -> Result<Option<String>, DashboardError> {
        let response = self
            .send_json(Operation::AddStudent, Method::Post, paths::ADD_STUDENT, student)
            .await?;
        // the body is optional; an id is reported when present
        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| created_id(&value)))
    }

    async fn delete_student(&self, student_id: &str) -> Result<(), DashboardError> {
        let operation = Operation::DeleteStudent;
        let response = Request::delete(&self.url(&paths::student(student_id)))
            .send()
            .await
            .map_err(|e| network_error(operation, e))?;
        ensure_success(operation, response).await.map(|_| ())
    }

    async fn get_timetable(&self) -> Result<Vec<DayRecord>, DashboardError> {
        self.get_json(Operation::GetTimetable, paths::TIMETABLE).await
    }

    async fn set_day_subject(&self, day_id: &str, subject: Option<SubjectPair>) -> Result<(), DashboardError> {
        let body = UpdateSubjectRequest { subject };
        self.send_json(Operation::SetDaySubject, Method::Put, &paths::timetable_day(day_id), &body)
            .await
            .map(|_| ())
    }

    async fn get_attendance(&self) -> Result<Vec<AttendanceRecord>, DashboardError> {
        self.get_json(Operation::GetAttendance, paths::ATTENDANCE).await
    }

    async fn get_blacklist(&self) -> Result<Vec<BlacklistEntry>, DashboardError> {
        self.get_json::<BlacklistResponse>(Operation::GetBlacklist, paths::BLACKLIST)
            .await
            .map(BlacklistResponse::into_entries)
    }

    async fn mark_attendance(&self, student_id: &str, day_id: &str) -> Result<(), DashboardError> {
        let body = MarkAttendanceRequest {
            student_id: student_id.to_string(),
            day_id: day_id.to_string(),
        };
        self.send_json(Operation::MarkAttendance, Method::Post, paths::MARK_ATTENDANCE, &body)
            .await
            .map(|_| ())
    }

    async fn get_today_roster(&self) -> Result<TodayRoster, DashboardError> {
        self.get_json(Operation::GetTodayRoster, paths::TODAY_ROSTER).await
    }
}
