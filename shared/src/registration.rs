//! Student registration form.
//!
//! Input is normalised as it is typed, validated on submit, then held in a
//! confirmation step showing the email before anything is sent.

use std::cell::RefCell;

use crate::calendar::parse_date_key;
use crate::error::{DashboardError, ValidationError};
use crate::gateway::DashboardGateway;
use crate::models::NewStudent;

pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];
pub const PHONE_DIGITS: usize = 10;

pub const REGISTERED_MESSAGE: &str = "Student registered successfully";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed. Please try again";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Gender,
    LastQualification,
    Location,
    JoiningDate,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Phone,
        Field::Email,
        Field::Gender,
        Field::LastQualification,
        Field::Location,
        Field::JoiningDate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Phone => "Phone Number",
            Field::Email => "Email Address",
            Field::Gender => "Gender",
            Field::LastQualification => "Last Qualification",
            Field::Location => "Location",
            Field::JoiningDate => "Joining Date",
        }
    }

    pub fn value<'a>(&self, draft: &'a NewStudent) -> &'a str {
        match self {
            Field::Name => &draft.name,
            Field::Phone => &draft.phone,
            Field::Email => &draft.email,
            Field::Gender => &draft.gender,
            Field::LastQualification => &draft.last_qualification,
            Field::Location => &draft.location,
            Field::JoiningDate => &draft.joining_date,
        }
    }

    fn slot<'a>(&self, draft: &'a mut NewStudent) -> &'a mut String {
        match self {
            Field::Name => &mut draft.name,
            Field::Phone => &mut draft.phone,
            Field::Email => &mut draft.email,
            Field::Gender => &mut draft.gender,
            Field::LastQualification => &mut draft.last_qualification,
            Field::Location => &mut draft.location,
            Field::JoiningDate => &mut draft.joining_date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Editing,
    /// Validated, waiting for the email to be confirmed
    Confirming,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Failure(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Success(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    draft: NewStudent,
    stage: Stage,
    notice: Option<Notice>,
}

impl RegistrationForm {
    pub fn draft(&self) -> &NewStudent {
        &self.draft
    }

    pub fn value(&self, field: Field) -> &str {
        field.value(&self.draft)
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Store typed input, lowercasing emails and keeping at most ten phone digits
    pub fn set_field(&mut self, field: Field, input: &str) {
        let normalised = match field {
            Field::Email => input.to_lowercase(),
            Field::Phone => input.chars().filter(char::is_ascii_digit).take(PHONE_DIGITS).collect(),
            _ => input.to_string(),
        };
        *field.slot(&mut self.draft) = normalised;
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(missing) = Field::ALL.iter().find(|f| f.value(&self.draft).trim().is_empty()) {
            return Err(ValidationError::MissingField(missing.label()));
        }
        if !self.draft.email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        if self.draft.phone.len() != PHONE_DIGITS || !self.draft.phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone);
        }
        if parse_date_key(self.draft.joining_date.trim()).is_none() {
            return Err(ValidationError::InvalidJoiningDate);
        }
        Ok(())
    }

    /// Submit pressed: validate and move to the confirmation step
    pub fn request_submit(&mut self) -> Result<(), ValidationError> {
        if self.stage != Stage::Editing {
            return Ok(());
        }
        match self.validate() {
            Ok(()) => {
                self.notice = None;
                self.stage = Stage::Confirming;
                Ok(())
            }
            Err(err) => {
                self.notice = Some(Notice::Failure(err.to_string()));
                Err(err)
            }
        }
    }

    /// Back to editing from the confirmation step
    pub fn cancel_confirmation(&mut self) {
        if self.stage == Stage::Confirming {
            self.stage = Stage::Editing;
        }
    }

    /// Confirmed: hand out the payload to send. Only once per confirmation.
    pub fn begin_submit(&mut self) -> Option<NewStudent> {
        if self.stage != Stage::Confirming {
            return None;
        }
        self.stage = Stage::Submitting;
        Some(self.draft.clone())
    }

    pub fn finish_submit<T>(&mut self, result: Result<T, DashboardError>) {
        self.stage = Stage::Editing;
        match result {
            Ok(_) => {
                self.draft = NewStudent::default();
                self.notice = Some(Notice::Success(REGISTERED_MESSAGE.to_string()));
            }
            Err(err) => {
                log::warn!("⚠️ Registration failed: {}", err);
                self.notice = Some(Notice::Failure(REGISTRATION_FAILED_MESSAGE.to_string()));
            }
        }
    }
}

/// Send the confirmed registration. Returns whether the backend accepted it.
pub async fn submit<G>(gateway: &G, form: &RefCell<RegistrationForm>, notify: &dyn Fn()) -> bool
where
    G: DashboardGateway + ?Sized,
{
    let Some(student) = form.borrow_mut().begin_submit() else {
        return false;
    };
    notify();

    let result = gateway.add_student(&student).await;
    let accepted = result.is_ok();
    if let Ok(Some(id)) = &result {
        log::info!("🎓 Registered student {}", id);
    }

    form.borrow_mut().finish_submit(result);
    notify();
    accepted
}
