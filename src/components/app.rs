use super::{error_banner::ErrorBanner, gl_view::GlView, top_bar::TopBar};
use crate::model::{DemoKind, Settings, SettingsAction};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_reducer(Settings::load);
    let error = use_state(|| None::<String>);

    // Persist settings changes
    {
        let settings = settings.clone();
        use_effect_with((*settings).clone(), move |_| {
            settings.save();
            || ()
        });
    }

    let select = {
        let settings = settings.clone();
        let error = error.clone();
        Callback::from(move |kind: DemoKind| {
            error.set(None);
            settings.dispatch(SettingsAction::SelectDemo(kind));
        })
    };
    let reset = {
        let settings = settings.clone();
        let error = error.clone();
        Callback::from(move |_| {
            error.set(None);
            settings.dispatch(SettingsAction::Reset);
        })
    };
    let on_error = {
        let error = error.clone();
        Callback::from(move |msg: String| error.set(Some(msg)))
    };

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; background:#0e1116; color:#c9d1d9;">
            <TopBar current={settings.demo} on_select={select} on_reset={reset} />
            <GlView settings={(*settings).clone()} on_error={on_error} />
            <ErrorBanner message={(*error).clone()} />
        </div>
    }
}
