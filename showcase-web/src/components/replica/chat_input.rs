use crate::hooks::use_entrance;
use showcase_core::{EntranceTarget, InputBoxState, auto_height};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: InputBoxState,
    pub placeholder: AttrValue,
    pub on_focus: Callback<()>,
    pub on_blur: Callback<String>,
    #[prop_or_default]
    pub node_ref: NodeRef,
}

fn px(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

#[function_component(ChatInput)]
pub fn chat_input(p: &Props) -> Html {
    let entrance = EntranceTarget::InputContainer.entrance();
    let entered = use_entrance(entrance.delay_ms);

    let onfocus = {
        let cb = p.on_focus.clone();
        Callback::from(move |_: FocusEvent| cb.emit(()))
    };
    let onblur = {
        let cb = p.on_blur.clone();
        Callback::from(move |e: FocusEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    let oninput = Callback::from(|e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        if let Some(height) = auto_height(px(input.scroll_height()), px(input.client_height())) {
            let style = input.style();
            let _ = style.set_property("height", "auto");
            let _ = style.set_property("height", &format!("{height}px"));
        }
    });
    html! {
        <div class="input-container" style={entrance.style(entered)}>
            <div class={p.state.box_class()} style={p.state.box_style()}>
                <label for="chat-input" class="sr-only">{ "Message" }</label>
                <textarea
                    id="chat-input"
                    class="chat-input"
                    rows="1"
                    placeholder={p.placeholder.clone()}
                    ref={p.node_ref.clone()}
                    {onfocus}
                    {onblur}
                    {oninput}
                />
                <button type="button" class="send-btn" aria-label="Send message">
                    <span class="material-icons" aria-hidden="true">{ "send" }</span>
                </button>
            </div>
        </div>
    }
}
