//! Route rendering over the current app state.

use chrono::Local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{handlers, state::AppState};
use crate::components::LoadErrorNotice;
use crate::pages::{BookingPage, LoginPage, NotFoundPage};
use crate::router::Route;

/// Render the page for a route. A fatal load error blankets every
/// route; until the catalog resolves only the boot screen shows.
pub fn render_route(state: &AppState, route: &Route, navigator: Option<Navigator>) -> Html {
    if let Some(message) = (*state.load_error).clone() {
        return html! { <LoadErrorNotice message={message} /> };
    }
    if !state.form_ready() {
        return html! {
            <div class="boot-screen" data-testid="boot">
                <p>{ "Loading booking data..." }</p>
            </div>
        };
    }
    match route {
        Route::Home => render_booking(state),
        Route::Login => render_login(state, navigator),
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

fn render_booking(state: &AppState) -> Html {
    let Some(session) = (*state.session).clone() else {
        return html! {};
    };
    html! {
        <BookingPage
            session={session}
            auth={(*state.auth).clone()}
            today={Local::now().date_naive()}
            confirmation={(*state.confirmation).clone()}
            submit_notice={(*state.submit_notice).clone()}
            on_destination={handlers::build_destination_change(state)}
            on_accommodation={handlers::build_accommodation_change(state)}
            on_band={handlers::build_band_change(state)}
            on_port={handlers::build_port_change(state)}
            on_departure={handlers::build_departure_change(state)}
            on_insurance={handlers::build_insurance_toggle(state)}
            on_field={handlers::build_field_edit(state)}
            on_submit={handlers::build_submit(state)}
            on_logout={handlers::build_logout(state)}
        />
    }
}

fn render_login(state: &AppState, navigator: Option<Navigator>) -> Html {
    let on_submit = {
        let base = handlers::build_login_submit(state);
        let login = state.login.clone();
        Callback::from(move |()| {
            if login.can_login() {
                base.emit(());
                if let Some(nav) = &navigator {
                    nav.push(&Route::Home);
                }
            }
        })
    };
    html! {
        <LoginPage
            check={(*state.login).clone()}
            notice={(*state.login_notice).clone()}
            on_email={handlers::build_login_email(state)}
            on_password={handlers::build_login_password(state)}
            on_submit={on_submit}
        />
    }
}
