use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub message: AttrValue,
}

/// Blocking notice shown when the catalog load fails. The form never
/// initializes behind it and there is no retry control.
#[function_component(LoadErrorNotice)]
pub fn load_error_notice(props: &Props) -> Html {
    html! {
        <div class="load-error" role="alert" data-testid="load-error">
            <h2>{ "Something went wrong" }</h2>
            <p>{ props.message.clone() }</p>
        </div>
    }
}
