use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::booking::{CredentialStatus, LoginCheck};

#[derive(Properties, PartialEq, Clone)]
pub struct LoginPageProps {
    pub check: LoginCheck,
    pub notice: Option<String>,
    pub on_email: Callback<String>,
    pub on_password: Callback<String>,
    pub on_submit: Callback<()>,
}

fn credential_feedback(status: CredentialStatus, id: &'static str) -> Html {
    match status {
        CredentialStatus::Empty => html! { <p id={id} class="feedback"></p> },
        CredentialStatus::Correct => {
            html! { <p id={id} class="feedback show green">{ "Correct" }</p> }
        }
        CredentialStatus::Incorrect => {
            html! { <p id={id} class="feedback show red">{ "Incorrect" }</p> }
        }
    }
}

/// Login screen with live per-field feedback against the static user
/// record. The login control stays disabled until both fields match.
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let on_email = {
        let cb = props.on_email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let on_password = {
        let cb = props.on_password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let onsubmit = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };
    html! {
        <div class="login-screen">
            <main id="main">
                <h1>{ "Crew Login" }</h1>
                <form onsubmit={onsubmit}>
                    <div class="form-field">
                        <label for="email-input">{ "Email" }</label>
                        <input
                            type="email"
                            id="email-input"
                            class="form-input"
                            placeholder="Enter email"
                            oninput={on_email}
                        />
                        { credential_feedback(props.check.email, "email-feedback") }
                    </div>
                    <div class="form-field">
                        <label for="password-input">{ "Password" }</label>
                        <input
                            type="password"
                            id="password-input"
                            class="form-input"
                            placeholder="Enter password"
                            oninput={on_password}
                        />
                        { credential_feedback(props.check.password, "password-feedback") }
                    </div>
                    <button type="submit" id="login-btn" disabled={!props.check.can_login()}>
                        { "Log in" }
                    </button>
                </form>
                {
                    if let Some(notice) = &props.notice {
                        html! { <p class="login-notice" role="status">{ notice.clone() }</p> }
                    } else {
                        html! {}
                    }
                }
            </main>
        </div>
    }
}
