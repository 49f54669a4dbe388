use yew::prelude::*;

use crate::booking::AuthState;
use crate::paths::asset_path;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub auth: AuthState,
    pub on_logout: Callback<()>,
}

/// Site header with the login-state toggle: a login link for guests,
/// the username and a logout control once signed in.
#[function_component(Header)]
pub fn header(props: &Props) -> Html {
    let on_logout = {
        let cb = props.on_logout.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <header role="banner" class="site-header">
            <nav class="header-content" aria-label="Account">
                <a class="brand" href={asset_path("/")}>{ "Orbitway" }</a>
                {
                    if props.auth.logged_in {
                        html! {
                            <div class="account-controls">
                                <span id="username-display">{ props.auth.username.clone() }</span>
                                <button type="button" id="logout-btn" onclick={on_logout}>
                                    { "Log out" }
                                </button>
                            </div>
                        }
                    } else {
                        html! {
                            <a class="login-link" href={asset_path("/login")}>{ "Log in" }</a>
                        }
                    }
                }
            </nav>
        </header>
    }
}
