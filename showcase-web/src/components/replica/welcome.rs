use crate::hooks::use_entrance;
use showcase_core::{EntranceTarget, HeadlineSwap};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub headline: AttrValue,
    #[prop_or_default]
    pub dimmed: bool,
}

#[function_component(WelcomeMessage)]
pub fn welcome_message(p: &Props) -> Html {
    let entrance = EntranceTarget::WelcomeMessage.entrance();
    let entered = use_entrance(entrance.delay_ms);
    let opacity = if p.dimmed {
        HeadlineSwap::DIMMED_OPACITY
    } else {
        HeadlineSwap::RESTORED_OPACITY
    };
    html! {
        <div class="welcome-message" style={entrance.style(entered)}>
            <h2 style={format!("opacity: {opacity};")} aria-live="polite">{ p.headline.clone() }</h2>
        </div>
    }
}
