use yew::prelude::*;

use crate::booking::{AuthState, BookingRecord, BookingSession, LoginCheck, UsersList};

/// Bundle of state handles shared by the bootstrap, the handlers, and
/// the views.
#[derive(Clone)]
pub struct AppState {
    /// `None` until the catalog load resolves.
    pub session: UseStateHandle<Option<BookingSession>>,
    pub users: UseStateHandle<UsersList>,
    pub login: UseStateHandle<LoginCheck>,
    pub auth: UseStateHandle<AuthState>,
    /// Fatal catalog-load notice; the form never initializes behind it.
    pub load_error: UseStateHandle<Option<String>>,
    pub boot_ready: UseStateHandle<bool>,
    /// Last confirmed booking, rendered as the confirmation notice.
    pub confirmation: UseStateHandle<Option<BookingRecord>>,
    /// Blocking message from a refused submit attempt.
    pub submit_notice: UseStateHandle<Option<String>>,
    /// Post-login notice (pending guest booking claimed).
    pub login_notice: UseStateHandle<Option<String>>,
}

fn initial_auth() -> AuthState {
    #[cfg(target_arch = "wasm32")]
    {
        crate::booking::load_auth()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        AuthState::default()
    }
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        session: use_state(|| None::<BookingSession>),
        users: use_state(UsersList::empty),
        login: use_state(LoginCheck::default),
        auth: use_state(initial_auth),
        load_error: use_state(|| None::<String>),
        boot_ready: use_state(|| false),
        confirmation: use_state(|| None::<BookingRecord>),
        submit_notice: use_state(|| None::<String>),
        login_notice: use_state(|| None::<String>),
    }
}

impl AppState {
    /// The form renders only once the catalog is in and no fatal error
    /// occurred.
    #[must_use]
    pub fn form_ready(&self) -> bool {
        *self.boot_ready && self.load_error.is_none() && self.session.is_some()
    }
}
