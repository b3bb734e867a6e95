use crate::components::replica::TooltipTarget;
use crate::hooks::use_entrance;
use showcase_core::{Entrance, EntranceTarget, SidebarState};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RecentItemProps {
    pub index: usize,
    pub title: AttrValue,
    pub active: bool,
    pub on_select: Callback<usize>,
}

#[function_component(RecentItem)]
pub fn recent_item(p: &RecentItemProps) -> Html {
    let entrance = Entrance::list_item(p.index);
    let entered = use_entrance(entrance.delay_ms);
    let hovered = use_state(|| false);

    let onclick = {
        let cb = p.on_select.clone();
        let index = p.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(index);
        })
    };
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let nudge = if *hovered {
        "transform: translateX(4px);"
    } else {
        "transform: translateX(0);"
    };
    html! {
        <li style={entrance.style(entered)}>
            <a
                href="#"
                class={classes!(p.active.then_some("active"))}
                aria-current={p.active.then_some("true")}
                style={nudge}
                {onclick}
                {onmouseenter}
                {onmouseleave}
            >
                { p.title.clone() }
            </a>
        </li>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: SidebarState,
    pub titles: Vec<AttrValue>,
    pub active: Option<usize>,
    pub on_select: Callback<usize>,
    #[prop_or_default]
    pub node_ref: NodeRef,
}

#[function_component(Sidebar)]
pub fn sidebar(p: &Props) -> Html {
    let entrance = EntranceTarget::Sidebar.entrance();
    let entered = use_entrance(entrance.delay_ms);
    html! {
        <aside class={p.state.sidebar_class()} ref={p.node_ref.clone()} style={entrance.style(entered)} aria-label="Conversations">
            <TooltipTarget text="New chat">
                <button type="button" class="new-chat-btn">
                    <span class="material-icons" aria-hidden="true">{ "add" }</span>
                    <span class="text">{ "New chat" }</span>
                </button>
            </TooltipTarget>
            <nav class="recent" aria-labelledby="recent-heading">
                <h3 id="recent-heading">{ "Recent" }</h3>
                <ul class="recent-list">
                    { for p.titles.iter().enumerate().map(|(index, title)| html! {
                        <RecentItem
                            key={index}
                            {index}
                            title={title.clone()}
                            active={p.active == Some(index)}
                            on_select={p.on_select.clone()}
                        />
                    }) }
                </ul>
            </nav>
            <TooltipTarget text="Settings and help" class={classes!("sidebar-footer")}>
                <button type="button" class="settings-btn">
                    <span class="material-icons" aria-hidden="true">{ "settings" }</span>
                </button>
            </TooltipTarget>
        </aside>
    }
}
