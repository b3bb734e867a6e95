use showcase_core::TooltipState;
use yew::prelude::*;

/// Handlers shared by every tooltip-bearing element on the page.
#[derive(Clone, PartialEq)]
pub struct TooltipContext {
    pub show: Callback<(AttrValue, i32, i32)>,
    pub move_to: Callback<(i32, i32)>,
    pub hide: Callback<()>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct TooltipTargetProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps children so hovering them drives the page's floating tooltip.
/// Without a [`TooltipContext`] provider the wrapper is inert.
#[function_component(TooltipTarget)]
pub fn tooltip_target(p: &TooltipTargetProps) -> Html {
    let ctx = use_context::<TooltipContext>();
    let (onmouseenter, onmousemove, onmouseleave) = ctx.map_or_else(
        || (None, None, None),
        |ctx| {
            let text = p.text.clone();
            let show = ctx.show.clone();
            let enter = Callback::from(move |e: MouseEvent| {
                show.emit((text.clone(), e.client_x(), e.client_y()));
            });
            let move_to = ctx.move_to.clone();
            let mv = Callback::from(move |e: MouseEvent| move_to.emit((e.client_x(), e.client_y())));
            let hide = ctx.hide.clone();
            let leave = Callback::from(move |_: MouseEvent| hide.emit(()));
            (Some(enter), Some(mv), Some(leave))
        },
    );
    html! {
        <span
            class={classes!("tooltip-target", p.class.clone())}
            data-tooltip={p.text.clone()}
            {onmouseenter}
            {onmousemove}
            {onmouseleave}
        >
            { for p.children.iter() }
        </span>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct FloatingTooltipProps {
    pub state: TooltipState,
}

#[function_component(FloatingTooltip)]
pub fn floating_tooltip(p: &FloatingTooltipProps) -> Html {
    html! {
        <div
            id="tooltip"
            class={classes!("tooltip", p.state.visible.then_some("visible"))}
            role="tooltip"
            style={p.state.style()}
        >
            { p.state.text.clone() }
        </div>
    }
}
