//! Platform independent core of the classroom dashboard: date grids, wire
//! models, the gateway contract, page state machines and the auth gate.
//!
//! Nothing in here touches the browser, so the whole crate is tested natively.

pub mod attendance;
pub mod auth;
pub mod calendar;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod edit;
pub mod error;
pub mod gateway;
pub mod models;
pub mod pages;
pub mod registration;
pub mod render;

pub use attendance::{AttendanceBand, MonthSummary};
pub use auth::{GuardDecision, Route, SessionFlag};
pub use calendar::{format_date_key, parse_date_key, CalendarMonth, WeekStart};
pub use config::DashboardConfig;
pub use controller::{FetchOutcome, MutationRun, Phase, ViewController};
pub use edit::{DragSession, EditSession, SubjectCommit, TimetableInteraction};
pub use error::{DashboardError, Operation, ValidationError};
pub use gateway::DashboardGateway;
pub use models::*;
pub use registration::RegistrationForm;
