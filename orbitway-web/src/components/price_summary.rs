use yew::prelude::*;

use crate::booking::Quote;
use crate::format::format_price;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// `None` while the selection is incomplete: nothing is rendered.
    pub quote: Option<Quote>,
}

/// Rendered price breakdown for a complete selection.
#[function_component(PriceSummary)]
pub fn price_summary(props: &Props) -> Html {
    let Some(quote) = props.quote else {
        return html! {};
    };
    html! {
        <div class="price-summary content-card" data-testid="price-summary">
            <h3>{ "Total Price" }</h3>
            <p class="total">{ format_price(quote.total_price) }</p>
            <p class="breakdown">
                { format!(
                    "{} × ({} travel + {} stay)",
                    quote.passenger_count,
                    format_price(quote.travel_price),
                    format_price(quote.stay_price),
                ) }
            </p>
            {
                if quote.insurance_surcharge > 0 {
                    html! {
                        <p class="breakdown">
                            { format!("+ {} insurance", format_price(quote.insurance_surcharge)) }
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
