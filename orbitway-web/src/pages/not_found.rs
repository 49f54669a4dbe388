use yew::prelude::*;

use crate::paths::asset_path;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="not-found-screen">
            <main id="main">
                <h1>{ "Lost in space" }</h1>
                <p>{ "That page does not exist." }</p>
                <a href={asset_path("/")}>{ "Back to booking" }</a>
            </main>
        </div>
    }
}
