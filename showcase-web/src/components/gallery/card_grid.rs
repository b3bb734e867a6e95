use showcase_core::Card;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CardTileProps {
    pub card: Card,
    pub visible: bool,
}

/// One card. Hidden cards stay in the DOM with `hidden` and `display: none`
/// so the grid keeps its order.
#[function_component(CardTile)]
pub fn card_tile(p: &CardTileProps) -> Html {
    let card = &p.card;
    let hidden = !p.visible;
    html! {
        <article
            class={classes!("card", hidden.then_some("hidden"))}
            style={hidden.then_some("display: none;")}
            data-category={card.category.clone()}
            data-technologies={card.technologies.clone()}
            aria-hidden={hidden.then_some("true")}
        >
            <h2>{ card.title.clone() }</h2>
            <p class="card-body">{ card.body_text.clone() }</p>
            <ul class="tech-tags">
                { for card.technology_tags().map(|tag| html! { <li class="tech-tag">{ tag.to_string() }</li> }) }
            </ul>
            {
                card.link.as_ref().map_or_else(Html::default, |href| html! {
                    <a class="card-link" href={href.clone()} target="_blank" rel="noopener noreferrer">{ "View project" }</a>
                })
            }
        </article>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cards: Rc<Vec<Card>>,
    pub visibility: Rc<Vec<bool>>,
}

#[function_component(CardGrid)]
pub fn card_grid(p: &Props) -> Html {
    html! {
        <section class="cards-grid" aria-label="Projects">
            { for p.cards.iter().enumerate().map(|(idx, card)| {
                let visible = p.visibility.get(idx).copied().unwrap_or(true);
                html! { <CardTile key={idx} card={card.clone()} {visible} /> }
            }) }
        </section>
    }
}
