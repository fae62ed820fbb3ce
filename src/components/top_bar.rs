use crate::model::DemoKind;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TopBarProps {
    pub current: DemoKind,
    pub on_select: Callback<DemoKind>,
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn TopBar(props: &TopBarProps) -> Html {
    let buttons = DemoKind::ALL.into_iter().map(|kind| {
        let cb = props.on_select.clone();
        let onclick = Callback::from(move |_| cb.emit(kind));
        let style = if kind == props.current {
            "background:#1f6feb; border:1px solid #388bfd; color:#fff;"
        } else {
            ""
        };
        html! { <button {onclick} {style}>{ kind.label() }</button> }
    });
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let hint = if props.current.uses_drag() {
        "Drag to rotate; release to snap back."
    } else {
        "Rotates on its own."
    };

    html! {<div id="top-bar" style="display:flex; gap:6px; align-items:center; padding:8px 12px; background:rgba(22,27,34,0.9); border-bottom:1px solid #30363d;">
        { for buttons }
        <span style="flex:1; font-size:11px; opacity:0.7; padding-left:8px;">{ hint }</span>
        <button onclick={reset_cb}>{"Reset settings"}</button>
    </div>}
}
