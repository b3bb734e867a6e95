//! Chat interface replica: sidebar, version picker, tooltips and the
//! simulated input behaviours.
use crate::app::state::{
    DropdownAction, DropdownModel, SidebarAction, SidebarModel, TooltipAction, TooltipModel,
};
use crate::components::replica::{
    ChatInput, FloatingTooltip, Sidebar, TooltipContext, TopBar, WelcomeMessage,
};
use crate::dom;
use crate::hooks::use_theme;
use crate::timers::BrowserTimers;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use showcase_core::constants::{RESIZE_DEBOUNCE_MS, TOOLTIP_THROTTLE_MS};
use showcase_core::{
    ConversationHistory, DropdownState, InputBoxState, ReplicaConfig, ThemeBinding, TimerHost,
    debounce, throttle,
};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ReplicaPageProps {
    pub config: Rc<ReplicaConfig>,
}

#[derive(Clone, PartialEq, Eq)]
struct Headline {
    text: String,
    dimmed: bool,
}

#[function_component(ReplicaPage)]
pub fn replica_page(props: &ReplicaPageProps) -> Html {
    let config = props.config.clone();
    let (theme, toggle_theme) = use_theme(ThemeBinding::REPLICA, dom::apply_replica_theme);
    use_effect_with((), |_| dom::clear_replica_theme);

    let sidebar = use_reducer(SidebarModel::default);
    let dropdown = {
        let selected = config.default_version.clone();
        use_reducer(move || DropdownModel(DropdownState::new(selected)))
    };
    let tooltip = use_reducer(TooltipModel::default);
    let history = {
        let titles = config.recent.clone();
        use_state(move || ConversationHistory::new(titles))
    };
    let headline = {
        let text = config.headline.clone();
        use_state(move || Headline {
            text,
            dimmed: false,
        })
    };
    let input = use_state(InputBoxState::default);

    let sidebar_ref = use_node_ref();
    let menu_ref = use_node_ref();
    let selector_ref = use_node_ref();
    let textarea_ref = use_node_ref();
    let restore_timer = use_mut_ref(|| None::<Timeout>);
    let scroll_timer = use_mut_ref(|| None::<Timeout>);

    // Outside-click dismissal for the mobile drawer and the version menu.
    {
        let sidebar = sidebar.dispatcher();
        let dropdown = dropdown.dispatcher();
        let sidebar_ref = sidebar_ref.clone();
        let menu_ref = menu_ref.clone();
        let selector_ref = selector_ref.clone();
        use_effect_with((), move |_| {
            let listener = dom::document().map(|doc| {
                EventListener::new(&doc, "click", move |event| {
                    sidebar.dispatch(SidebarAction::DocumentClick {
                        viewport_width: dom::viewport_width(),
                        inside: dom::event_within(event, &[&sidebar_ref, &menu_ref]),
                    });
                    dropdown.dispatch(DropdownAction::DocumentClick {
                        inside: dom::event_within(event, &[&selector_ref]),
                    });
                })
            });
            move || drop(listener)
        });
    }

    // Growing past the breakpoint closes the drawer.
    {
        let sidebar = sidebar.dispatcher();
        use_effect_with((), move |_| {
            let on_resize = Rc::new(debounce(
                BrowserTimers,
                RESIZE_DEBOUNCE_MS,
                move |width: f64| {
                    sidebar.dispatch(SidebarAction::Resize {
                        viewport_width: width,
                    });
                },
            ));
            let listener = dom::window().map(|win| {
                let on_resize = Rc::clone(&on_resize);
                EventListener::new(&win, "resize", move |_| on_resize.call(dom::viewport_width()))
            });
            move || {
                drop(listener);
                on_resize.cancel();
            }
        });
    }

    let tooltip_ctx = {
        let mover = {
            let dispatcher = tooltip.dispatcher();
            use_memo((), move |_| {
                throttle(BrowserTimers, TOOLTIP_THROTTLE_MS, move |(x, y): (i32, i32)| {
                    dispatcher.dispatch(TooltipAction::Move { x, y });
                })
            })
        };
        let show = {
            let dispatcher = tooltip.dispatcher();
            Callback::from(move |(text, x, y): (AttrValue, i32, i32)| {
                dispatcher.dispatch(TooltipAction::Show { text, x, y });
            })
        };
        let move_to = Callback::from(move |pos: (i32, i32)| {
            mover.call(pos);
        });
        let hide = {
            let dispatcher = tooltip.dispatcher();
            Callback::from(move |()| dispatcher.dispatch(TooltipAction::Hide))
        };
        TooltipContext {
            show,
            move_to,
            hide,
        }
    };

    let on_menu = {
        let sidebar = sidebar.dispatcher();
        Callback::from(move |()| sidebar.dispatch(SidebarAction::Toggle))
    };
    let on_overlay = {
        let sidebar = sidebar.dispatcher();
        Callback::from(move |_: MouseEvent| sidebar.dispatch(SidebarAction::Close))
    };
    let on_toggle_dropdown = {
        let dropdown = dropdown.dispatcher();
        Callback::from(move |()| dropdown.dispatch(DropdownAction::Toggle))
    };
    let on_select_version = {
        let dropdown = dropdown.dispatcher();
        Callback::from(move |version: AttrValue| dropdown.dispatch(DropdownAction::Select(version)))
    };

    // Fire-once headline swap; a newer pick replaces the pending restore.
    let on_select_conversation = {
        let history = history.clone();
        let headline = headline.clone();
        let restore_timer = restore_timer.clone();
        let base = config.headline.clone();
        Callback::from(move |index: usize| {
            let mut next = (*history).clone();
            let Some(swap) = next.select(index, &base) else {
                log::debug!("ignoring conversation index {index}");
                return;
            };
            history.set(next);
            headline.set(Headline {
                text: swap.shown,
                dimmed: true,
            });
            let headline = headline.clone();
            let restore = swap.restore;
            *restore_timer.borrow_mut() = Some(BrowserTimers.schedule(
                swap.restore_after_ms,
                Box::new(move || {
                    headline.set(Headline {
                        text: restore,
                        dimmed: false,
                    });
                }),
            ));
        })
    };

    let on_input_focus = {
        let input = input.clone();
        let textarea_ref = textarea_ref.clone();
        let scroll_timer = scroll_timer.clone();
        Callback::from(move |()| {
            let outcome = input.on_focus(dom::viewport_width());
            input.set(outcome.state);
            if let Some(delay) = outcome.scroll_after_ms {
                let target = textarea_ref.clone();
                *scroll_timer.borrow_mut() = Some(BrowserTimers.schedule(
                    delay,
                    Box::new(move || dom::scroll_into_view_end(&target)),
                ));
            }
        })
    };
    let on_input_blur = {
        let input = input.clone();
        Callback::from(move |value: String| input.set(input.on_blur(&value)))
    };

    let titles: Vec<AttrValue> = history
        .titles
        .iter()
        .map(|t| AttrValue::from(t.clone()))
        .collect();
    let chat_style = history
        .active
        .map(|_| "animation: fadeIn 0.3s ease;");

    html! {
        <ContextProvider<TooltipContext> context={tooltip_ctx}>
            <div class="app-container">
                <Sidebar
                    state={sidebar.0}
                    {titles}
                    active={history.active}
                    on_select={on_select_conversation}
                    node_ref={sidebar_ref}
                />
                <div id="sidebarOverlay" class={sidebar.0.overlay_class()} onclick={on_overlay}></div>
                <main class="main-content">
                    <TopBar
                        {theme}
                        on_toggle_theme={toggle_theme}
                        {on_menu}
                        versions={config.versions.clone()}
                        dropdown={dropdown.0.clone()}
                        {on_toggle_dropdown}
                        {on_select_version}
                        {menu_ref}
                        {selector_ref}
                    />
                    <div class={input.chat_area_class()} style={chat_style}>
                        <WelcomeMessage
                            headline={AttrValue::from(headline.text.clone())}
                            dimmed={headline.dimmed}
                        />
                    </div>
                    <ChatInput
                        state={*input}
                        placeholder={AttrValue::from(config.input_placeholder.clone())}
                        on_focus={on_input_focus}
                        on_blur={on_input_blur}
                        node_ref={textarea_ref}
                    />
                </main>
                <FloatingTooltip state={tooltip.0.clone()} />
            </div>
        </ContextProvider<TooltipContext>>
    }
}
