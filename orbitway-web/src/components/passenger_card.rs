use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::booking::{CardStatuses, FieldStatus, Passenger, PassengerField};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub seat: usize,
    pub passenger: Passenger,
    pub statuses: CardStatuses,
    pub on_field: Callback<(usize, PassengerField, String)>,
}

/// One passenger's contact fields with live tri-state feedback under
/// each input: nothing, "Looks good", or the field-specific error.
#[function_component(PassengerCard)]
pub fn passenger_card(props: &Props) -> Html {
    html! {
        <div class="passenger-card content-card" data-testid={format!("passenger-{}", props.seat)}>
            <h3>{ format!("Passenger {}", props.seat + 1) }</h3>
            <div class="passenger-grid">
                { for PassengerField::ALL.iter().map(|&field| field_input(props, field)) }
            </div>
        </div>
    }
}

fn field_input(props: &Props, field: PassengerField) -> Html {
    let oninput = {
        let cb = props.on_field.clone();
        let seat = props.seat;
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit((seat, field, input.value()));
            }
        })
    };
    let input_type = match field {
        PassengerField::Email => "email",
        PassengerField::Phone => "tel",
        _ => "text",
    };
    let feedback = match props.statuses.get(field) {
        FieldStatus::Empty => html! { <p class="feedback"></p> },
        FieldStatus::Valid => {
            html! { <p class="feedback show green">{ field.ok_message() }</p> }
        }
        FieldStatus::Invalid(err) => {
            html! { <p class="feedback show red">{ err.to_string() }</p> }
        }
    };
    html! {
        <div class="form-field">
            <label>{ field.label() }</label>
            <input
                type={input_type}
                class="form-input"
                data-field={field.as_str()}
                value={props.passenger.field(field).to_string()}
                placeholder={format!("Enter {}", field.label().to_lowercase())}
                required={field.is_required()}
                oninput={oninput}
            />
            { feedback }
        </div>
    }
}
