//! Page settings and the demo catalogue.
//! Settings are persisted as JSON in local storage and may be overridden by
//! the `?demo=` query parameter.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::state::drag::DEFAULT_STEP;

pub const SETTINGS_KEY: &str = "wd_settings";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoKind {
    /// Flat colored square spinning about the vertical axis.
    Square,
    /// Vertex-colored cube spinning about (0, 1, 1).
    Cube,
    /// Textured cube rotated by dragging.
    Texture,
    /// Textured, lit cube with a scrolling texture, rotated by dragging.
    Light,
}

impl DemoKind {
    pub const ALL: [DemoKind; 4] = [
        DemoKind::Square,
        DemoKind::Cube,
        DemoKind::Texture,
        DemoKind::Light,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DemoKind::Square => "Square",
            DemoKind::Cube => "Cube",
            DemoKind::Texture => "Texture",
            DemoKind::Light => "Light",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            DemoKind::Square => "square",
            DemoKind::Cube => "cube",
            DemoKind::Texture => "texture",
            DemoKind::Light => "light",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.slug().eq_ignore_ascii_case(s))
    }

    /// Whether the demo reads its orientation from the drag tracker.
    pub fn uses_drag(self) -> bool {
        matches!(self, DemoKind::Texture | DemoKind::Light)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub demo: DemoKind,
    /// Rotation applied per pointer move while dragging.
    pub drag_step: f32,
    /// Rotation applied per frame by the self-spinning demos.
    pub spin_step: f32,
    pub texture_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            demo: DemoKind::Cube,
            drag_step: DEFAULT_STEP,
            spin_step: 0.01,
            texture_url: "assets/texture01.png".to_string(),
        }
    }
}

impl Settings {
    /// Parses stored JSON, falling back to defaults when it is unusable.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(s) => s,
            Err(err) => {
                tracing::warn!("ignoring stored settings: {err}");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Applies a `?demo=` override from a location search string.
    pub fn with_query(mut self, search: &str) -> Self {
        if let Some(kind) = demo_from_query(search) {
            self.demo = kind;
        }
        self
    }

    pub fn load() -> Self {
        let mut settings = Self::default();
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(SETTINGS_KEY) {
                    settings = Self::from_json(&raw);
                }
            }
            if let Ok(search) = win.location().search() {
                settings = settings.with_query(&search);
            }
        }
        settings
    }

    pub fn save(&self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                let _ = store.set_item(SETTINGS_KEY, &self.to_json());
            }
        }
    }
}

fn demo_from_query(search: &str) -> Option<DemoKind> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == "demo")
        .and_then(|(_, v)| DemoKind::from_slug(v))
}

pub enum SettingsAction {
    SelectDemo(DemoKind),
    Reset,
}

impl Reducible for Settings {
    type Action = SettingsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SettingsAction::SelectDemo(kind) => {
                if self.demo == kind {
                    return self;
                }
                let mut new = (*self).clone();
                new.demo = kind;
                Rc::new(new)
            }
            SettingsAction::Reset => Rc::new(Settings::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let s = Settings::from_json(r#"{"demo":"light"}"#);
        assert_eq!(s.demo, DemoKind::Light);
        assert_eq!(s.drag_step, DEFAULT_STEP);
        assert_eq!(s.texture_url, Settings::default().texture_url);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        assert_eq!(Settings::from_json("not json"), Settings::default());
        assert_eq!(Settings::from_json(r#"{"demo":"teapot"}"#), Settings::default());
    }

    #[test]
    fn stored_json_survives_reload() {
        let s = Settings {
            demo: DemoKind::Texture,
            drag_step: 0.05,
            spin_step: 0.02,
            texture_url: "crate.png".into(),
        };
        assert_eq!(Settings::from_json(&s.to_json()), s);
        assert!(s.to_json().contains(r#""demo":"texture""#));
    }

    #[test]
    fn query_overrides_demo() {
        let s = Settings::default().with_query("?foo=1&demo=Square");
        assert_eq!(s.demo, DemoKind::Square);
        let s = Settings::default().with_query("?demo=nope");
        assert_eq!(s.demo, DemoKind::Cube);
        let s = Settings::default().with_query("");
        assert_eq!(s.demo, DemoKind::Cube);
    }

    #[test]
    fn slugs_round_trip() {
        for k in DemoKind::ALL {
            assert_eq!(DemoKind::from_slug(k.slug()), Some(k));
        }
        assert!(DemoKind::Light.uses_drag());
        assert!(!DemoKind::Square.uses_drag());
    }

    #[test]
    fn reducer_selects_and_resets() {
        let s = Rc::new(Settings::default());
        let same = s.clone().reduce(SettingsAction::SelectDemo(DemoKind::Cube));
        assert!(Rc::ptr_eq(&s, &same));
        let s = s.reduce(SettingsAction::SelectDemo(DemoKind::Light));
        assert_eq!(s.demo, DemoKind::Light);
        let s = s.reduce(SettingsAction::Reset);
        assert_eq!(*s, Settings::default());
    }
}
