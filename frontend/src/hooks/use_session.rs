use chrono::Utc;
use shared::auth::{self, GuardDecision, Route};
use shared::{DashboardConfig, SessionFlag};
use yew::prelude::*;

use crate::services::session;

#[derive(Clone, PartialEq)]
pub struct SessionState {
    pub flag: Option<SessionFlag>,
    pub login_error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UseSessionActions {
    /// Takes the typed password
    pub login: Callback<String>,
    pub logout: Callback<()>,
}

pub struct UseSessionResult {
    pub state: SessionState,
    pub actions: UseSessionActions,
}

impl UseSessionResult {
    /// Where `route` should actually go given the current session
    pub fn guard(&self, config: &DashboardConfig, route: Route) -> Route {
        match auth::guard(route, self.state.flag.as_ref(), &config.admin_password, Utc::now()) {
            GuardDecision::Allow => route,
            GuardDecision::Redirect(target) => target,
        }
    }
}

#[hook]
pub fn use_session(config: &DashboardConfig) -> UseSessionResult {
    let flag = use_state(session::load);
    let login_error = use_state(|| Option::<String>::None);

    let login = {
        let config = config.clone();
        let flag = flag.clone();
        let login_error = login_error.clone();
        use_callback((), move |password: String, _| match auth::login(&config, &password, Utc::now()) {
            Ok(issued) => {
                session::store(&issued);
                login_error.set(None);
                flag.set(Some(issued));
            }
            Err(e) => login_error.set(Some(e.to_string())),
        })
    };

    let logout = {
        let flag = flag.clone();
        use_callback((), move |_: (), _| {
            log::info!("🔒 Logged out");
            session::clear();
            flag.set(None);
        })
    };

    UseSessionResult {
        state: SessionState {
            flag: (*flag).clone(),
            login_error: (*login_error).clone(),
        },
        actions: UseSessionActions { login, logout },
    }
}
