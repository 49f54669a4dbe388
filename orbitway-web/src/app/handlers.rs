//! Callback builders: the only code that mutates session state.
//!
//! Each builder clones the handles it needs and returns a `Callback`
//! for the views to attach. Every mutation goes through a
//! `BookingSession` method; nothing here touches prices or validity
//! directly.

use chrono::{Local, Utc};
use yew::prelude::*;

use crate::app::state::AppState;
use crate::booking::{AuthState, BookingRecord, BookingSession, PassengerBand, PassengerField};

fn mutate_session(
    session: &UseStateHandle<Option<BookingSession>>,
    apply: impl FnOnce(&mut BookingSession),
) {
    if let Some(mut current) = (**session).clone() {
        apply(&mut current);
        session.set(Some(current));
    }
}

pub fn build_destination_change(state: &AppState) -> Callback<String> {
    let session = state.session.clone();
    let notice = state.submit_notice.clone();
    Callback::from(move |id: String| {
        notice.set(None);
        mutate_session(&session, |s| s.select_destination(&id));
    })
}

pub fn build_accommodation_change(state: &AppState) -> Callback<String> {
    let session = state.session.clone();
    let notice = state.submit_notice.clone();
    Callback::from(move |id: String| {
        notice.set(None);
        mutate_session(&session, |s| s.select_accommodation(&id));
    })
}

pub fn build_band_change(state: &AppState) -> Callback<PassengerBand> {
    let session = state.session.clone();
    let notice = state.submit_notice.clone();
    Callback::from(move |band: PassengerBand| {
        notice.set(None);
        mutate_session(&session, |s| s.select_band(band));
    })
}

pub fn build_port_change(state: &AppState) -> Callback<String> {
    let session = state.session.clone();
    Callback::from(move |id: String| {
        mutate_session(&session, |s| s.select_port(&id));
    })
}

pub fn build_departure_change(state: &AppState) -> Callback<String> {
    let session = state.session.clone();
    let notice = state.submit_notice.clone();
    Callback::from(move |raw: String| {
        notice.set(None);
        mutate_session(&session, |s| s.set_departure_date(&raw));
    })
}

pub fn build_insurance_toggle(state: &AppState) -> Callback<bool> {
    let session = state.session.clone();
    Callback::from(move |enabled: bool| {
        mutate_session(&session, |s| s.set_insurance(enabled));
    })
}

pub fn build_field_edit(state: &AppState) -> Callback<(usize, PassengerField, String)> {
    let session = state.session.clone();
    Callback::from(move |(seat, field, value): (usize, PassengerField, String)| {
        mutate_session(&session, |s| s.edit_field(seat, field, &value));
    })
}

/// Submit: re-validates through the session, persists the record (the
/// booking log when signed in, the pending slot otherwise), and keeps
/// the quote that priced it as the stored total.
pub fn build_submit(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    let auth_handle = state.auth.clone();
    let confirmation = state.confirmation.clone();
    let notice = state.submit_notice.clone();
    Callback::from(move |()| {
        let Some(session) = (*session_handle).clone() else {
            return;
        };
        let today = Local::now().date_naive();
        match session.submit(today, Utc::now(), crate::dom::entropy_seed()) {
            Ok(mut record) => {
                record.guest = !auth_handle.logged_in;
                persist_record(&record);
                log::info!("booking {} confirmed", record.id);
                notice.set(None);
                confirmation.set(Some(record));
            }
            Err(err) => notice.set(Some(err.to_string())),
        }
    })
}

fn persist_record(record: &BookingRecord) {
    #[cfg(target_arch = "wasm32")]
    {
        use crate::booking::{BookingStore, WebBookingStore};
        let result = if record.guest {
            WebBookingStore.save_pending(record)
        } else {
            WebBookingStore.append_booking(record)
        };
        if let Err(err) = result {
            log::error!("failed to persist booking {}: {err}", record.id);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = record;
    }
}

pub fn build_login_email(state: &AppState) -> Callback<String> {
    let login = state.login.clone();
    Callback::from(move |typed: String| {
        let mut check = (*login).clone();
        check.edit_email(&typed);
        login.set(check);
    })
}

pub fn build_login_password(state: &AppState) -> Callback<String> {
    let login = state.login.clone();
    Callback::from(move |typed: String| {
        let mut check = (*login).clone();
        check.edit_password(&typed);
        login.set(check);
    })
}

/// Successful login: persist the signed-in snapshot and claim any
/// guest booking parked before it.
pub fn build_login_submit(state: &AppState) -> Callback<()> {
    let login = state.login.clone();
    let auth = state.auth.clone();
    let login_notice = state.login_notice.clone();
    Callback::from(move |()| {
        if !login.can_login() {
            return;
        }
        let signed_in = AuthState::logged_in(login.username());
        persist_auth(Some(&signed_in));
        if claim_pending_booking() {
            login_notice.set(Some("Your pending booking has been saved!".to_string()));
        }
        auth.set(signed_in);
    })
}

pub fn build_logout(state: &AppState) -> Callback<()> {
    let auth = state.auth.clone();
    Callback::from(move |()| {
        persist_auth(None);
        auth.set(AuthState::default());
    })
}

fn persist_auth(auth: Option<&AuthState>) {
    #[cfg(target_arch = "wasm32")]
    {
        match auth {
            Some(state) => crate::booking::store_auth(state),
            None => crate::booking::clear_auth(),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = auth;
    }
}

fn claim_pending_booking() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        match crate::booking::create_web_booking_engine().claim_pending() {
            Ok(Some(record)) => {
                log::info!("pending booking {} saved after login", record.id);
                true
            }
            Ok(None) => false,
            Err(err) => {
                log::error!("failed to claim pending booking: {err}");
                false
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}
