//! Initial catalog load: the one asynchronous boundary in the app.
//!
//! Form initialization is suspended until the reference documents
//! resolve; any failure is fatal for the session and surfaces a single
//! blocking notice with no automatic retry.

#[cfg(any(target_arch = "wasm32", test))]
use crate::app::state::AppState;
#[cfg(any(target_arch = "wasm32", test))]
use crate::booking::{BookingSession, Catalog, LoginCheck, UsersList};
#[cfg(target_arch = "wasm32")]
use crate::booking::WebDataError;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Blocking notice shown when the load fails.
pub const LOAD_FAILURE_NOTICE: &str = "Unable to load booking data. Please check JSON files.";

#[cfg(any(target_arch = "wasm32", test))]
fn apply_loaded(state: &AppState, catalog: Catalog, users: UsersList) {
    state.login.set(LoginCheck::new(&users));
    state.users.set(users);
    state.session.set(Some(BookingSession::new(catalog)));
    state.load_error.set(None);
    state.boot_ready.set(true);
}

#[cfg(any(target_arch = "wasm32", test))]
fn apply_failure(state: &AppState, message: &str) {
    state.load_error.set(Some(message.to_string()));
    state.boot_ready.set(true);
}

#[cfg(target_arch = "wasm32")]
async fn fetch_document(url: &str) -> Result<String, WebDataError> {
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| WebDataError::Network(e.to_string()))?;
    if response.status() != 200 {
        return Err(WebDataError::Status(response.status()));
    }
    response
        .text()
        .await
        .map_err(|e| WebDataError::Network(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
async fn fetch_reference_data() -> Result<(Catalog, UsersList), WebDataError> {
    let destinations =
        fetch_document(&crate::paths::asset_path("static/assets/data/destinations.json")).await?;
    let accommodations =
        fetch_document(&crate::paths::asset_path("static/assets/data/accommodations.json")).await?;
    let ports = fetch_document(&crate::paths::asset_path("static/assets/data/ports.json")).await?;
    let users = fetch_document(&crate::paths::asset_path("static/assets/data/user.json")).await?;

    let catalog = Catalog::from_json(&destinations, &accommodations, Some(&ports))?;
    let users = UsersList::from_json(&users)?;
    Ok((catalog, users))
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let state = app_state.clone();
    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_reference_data().await {
                Ok((catalog, users)) => {
                    log::info!(
                        "catalog loaded: {} destinations, {} accommodations",
                        catalog.destinations.len(),
                        catalog.accommodations.len(),
                    );
                    apply_loaded(&state, catalog, users);
                }
                Err(err) => {
                    crate::dom::console_error(&format!("Error loading booking data: {err}"));
                    apply_failure(&state, LOAD_FAILURE_NOTICE);
                }
            }
        });
        || {}
    });
}
