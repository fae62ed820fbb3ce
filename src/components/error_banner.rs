use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorBannerProps {
    pub message: Option<String>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let Some(msg) = &props.message else {
        return html! {};
    };
    html! {
        <div style="position:absolute; left:50%; top:64px; transform:translateX(-50%); background:#3d1214; border:1px solid #f85149; border-radius:8px; padding:10px 14px; max-width:560px; font-size:13px; line-height:1.4;">
            { msg.clone() }
        </div>
    }
}
