use chrono::NaiveDate;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::booking::{
    AuthState, BookingRecord, BookingSession, PassengerBand, PassengerField,
};
use crate::components::{Header, PassengerCard, PriceSummary};
use crate::format::format_price;

#[derive(Properties, PartialEq, Clone)]
pub struct BookingPageProps {
    pub session: BookingSession,
    pub auth: AuthState,
    /// Injected so the departure-date feedback is testable.
    pub today: NaiveDate,
    pub confirmation: Option<BookingRecord>,
    pub submit_notice: Option<String>,
    pub on_destination: Callback<String>,
    pub on_accommodation: Callback<String>,
    pub on_band: Callback<PassengerBand>,
    pub on_port: Callback<String>,
    pub on_departure: Callback<String>,
    pub on_insurance: Callback<bool>,
    pub on_field: Callback<(usize, PassengerField, String)>,
    pub on_submit: Callback<()>,
    pub on_logout: Callback<()>,
}

const fn band_label(band: PassengerBand) -> &'static str {
    match band {
        PassengerBand::Solo => "1 passenger",
        PassengerBand::Pair => "2 passengers",
        PassengerBand::Group => "3-6 passengers",
    }
}

/// The booking form. Every control funnels into a session mutator via
/// the callbacks; nothing here re-derives prices or validity.
#[function_component(BookingPage)]
pub fn booking_page(props: &BookingPageProps) -> Html {
    let session = &props.session;
    let onsubmit = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };
    html! {
        <div class="booking-screen">
            <Header auth={props.auth.clone()} on_logout={props.on_logout.clone()} />
            <main id="main">
                <h1>{ "Book Your Journey" }</h1>
                <form id="booking-form" onsubmit={onsubmit}>
                    { destination_section(props) }
                    { departure_section(props) }
                    { band_section(props) }
                    { passenger_section(props) }
                    { accommodation_section(props) }
                    { insurance_section(props) }
                    <PriceSummary quote={session.quote().quote()} />
                    {
                        if let Some(notice) = &props.submit_notice {
                            html! { <p class="submit-notice red" role="alert">{ notice.clone() }</p> }
                        } else {
                            html! {}
                        }
                    }
                    <button
                        type="submit"
                        id="confirm-booking"
                        disabled={!session.readiness().enabled()}
                    >
                        { "Confirm Booking" }
                    </button>
                </form>
                { confirmation_section(props) }
            </main>
        </div>
    }
}

fn destination_section(props: &BookingPageProps) -> Html {
    let session = &props.session;
    let selected = session.selection().destination_id.clone().unwrap_or_default();
    let onchange = {
        let cb = props.on_destination.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                cb.emit(select.value());
            }
        })
    };
    html! {
        <div class="form-field">
            <label for="destination">{ "Destination" }</label>
            <select id="destination" class="form-input" onchange={onchange}>
                <option value="" selected={selected.is_empty()}>{ "Select a destination" }</option>
                { for session.catalog().destinations.iter().map(|dest| {
                    let label = format!(
                        "{} - {} - {}",
                        dest.name,
                        format_price(dest.price),
                        dest.travel_duration,
                    );
                    html! {
                        <option value={dest.id.clone()} selected={dest.id == selected}>
                            { label }
                        </option>
                    }
                }) }
            </select>
        </div>
    }
}

fn departure_section(props: &BookingPageProps) -> Html {
    let session = &props.session;
    let date_error = if session.departure_entered() {
        session.departure_status(props.today).err()
    } else {
        None
    };
    let onchange = {
        let cb = props.on_departure.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let on_port = {
        let cb = props.on_port.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                cb.emit(select.value());
            }
        })
    };
    let selected_port = session.departure_port_id().unwrap_or_default().to_string();
    html! {
        <div class="form-field">
            <label for="departure-date">{ "Departure Date" }</label>
            <input
                type="date"
                id="departure-date"
                class="form-input"
                value={session.departure_input().to_string()}
                onchange={onchange}
            />
            {
                if let Some(err) = date_error {
                    html! { <p id="departure-date-error" class="feedback show red">{ err.to_string() }</p> }
                } else {
                    html! { <p id="departure-date-error" class="feedback"></p> }
                }
            }
            {
                if session.catalog().ports.is_empty() {
                    html! {}
                } else {
                    html! {
                        <>
                            <label for="departure-port">{ "Departure Location" }</label>
                            <select id="departure-port" class="form-input" onchange={on_port}>
                                <option value="" selected={selected_port.is_empty()}>
                                    { "Select a departure location" }
                                </option>
                                { for session.catalog().ports.iter().map(|port| html! {
                                    <option value={port.id.clone()} selected={port.id == selected_port}>
                                        { port.name.clone() }
                                    </option>
                                }) }
                            </select>
                        </>
                    }
                }
            }
        </div>
    }
}

fn band_section(props: &BookingPageProps) -> Html {
    let current = props.session.selection().band;
    html! {
        <fieldset class="form-field">
            <legend>{ "Passengers" }</legend>
            { for PassengerBand::ALL.iter().map(|&band| {
                let onchange = {
                    let cb = props.on_band.clone();
                    Callback::from(move |_: Event| cb.emit(band))
                };
                html! {
                    <label class="band-option">
                        <input
                            type="radio"
                            name="passengers"
                            value={band.as_str()}
                            checked={current == Some(band)}
                            onchange={onchange}
                        />
                        { band_label(band) }
                    </label>
                }
            }) }
        </fieldset>
    }
}

fn passenger_section(props: &BookingPageProps) -> Html {
    let session = &props.session;
    html! {
        <div id="passengers-container">
            { for session.roster().iter().enumerate().map(|(seat, passenger)| html! {
                <PassengerCard
                    key={seat.to_string()}
                    seat={seat}
                    passenger={passenger.clone()}
                    statuses={session.field_statuses(seat)}
                    on_field={props.on_field.clone()}
                />
            }) }
        </div>
    }
}

fn accommodation_section(props: &BookingPageProps) -> Html {
    let session = &props.session;
    if !session.accommodation_applicable() {
        return html! {};
    }
    let selected = session
        .selection()
        .accommodation_id
        .clone()
        .unwrap_or_default();
    html! {
        <div id="accommodation-section" class="form-field">
            <h2>{ "Accommodation" }</h2>
            <div id="accommodation-options">
                { for session.available_accommodations().iter().map(|acc| {
                    let onclick = {
                        let cb = props.on_accommodation.clone();
                        let id = acc.id.clone();
                        Callback::from(move |_| cb.emit(id.clone()))
                    };
                    let class = if acc.id == selected {
                        "accommodation-card content-card selected"
                    } else {
                        "accommodation-card content-card"
                    };
                    html! {
                        <div class={class} onclick={onclick} data-testid={format!("acc-{}", acc.id)}>
                            <h4>{ acc.name.clone() }</h4>
                            <p class="blurb">{ acc.blurb().to_string() }</p>
                            <p class="rate">{ format!("{}/day", format_price(acc.price_per_day)) }</p>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

fn insurance_section(props: &BookingPageProps) -> Html {
    let session = &props.session;
    if !session.insurance_applicable() {
        return html! {};
    }
    let onchange = {
        let cb = props.on_insurance.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.checked());
            }
        })
    };
    html! {
        <div id="conditional-fields" class="form-field">
            <label class="insurance-option">
                <input
                    type="checkbox"
                    class="insurance-checkbox"
                    checked={session.selection().insurance_enabled}
                    onchange={onchange}
                />
                { format!(
                    "Enhanced radiation protection insurance (+{})",
                    format_price(crate::booking::INSURANCE_SURCHARGE),
                ) }
            </label>
        </div>
    }
}

fn confirmation_section(props: &BookingPageProps) -> Html {
    let Some(record) = &props.confirmation else {
        return html! {};
    };
    let catalog = props.session.catalog();
    let destination = catalog
        .destination(&record.destination)
        .map_or(record.destination.clone(), |d| d.name.clone());
    let accommodation = catalog
        .accommodation(&record.accommodation)
        .map_or(record.accommodation.clone(), |a| a.name.clone());
    html! {
        <div class="confirmation content-card" role="status" data-testid="confirmation">
            <h2>{ "Booking Confirmed!" }</h2>
            <p>{ format!("Reference: {}", record.id) }</p>
            <p>{ format!("Destination: {destination}") }</p>
            <p>{ format!("Departure: {}", record.departure_date) }</p>
            <p>{ format!("Passengers: {}", record.total_passengers) }</p>
            <p>{ format!("Accommodation: {accommodation}") }</p>
            <p>{ format!("Total: {}", format_price(record.total_price)) }</p>
            <p>{ "You are going to space!" }</p>
        </div>
    }
}
