use std::fmt;

use wasm_bindgen::JsValue;

/// Shader stage, used to label compile failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Vertex => f.write_str("vertex"),
            Stage::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GlError {
    /// The browser did not hand out a WebGL context.
    NoContext,
    /// `create*` returned null, usually after a lost context.
    Create(&'static str),
    Compile { stage: Stage, log: String },
    Link(String),
    Js(String),
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlError::NoContext => f.write_str(
                "unable to initialise WebGL; the browser, OS or GPU may not support it",
            ),
            GlError::Create(what) => write!(f, "failed to create {what}"),
            GlError::Compile { stage, log } => write!(f, "{stage} shader compile error: {log}"),
            GlError::Link(log) => write!(f, "unable to link shader program: {log}"),
            GlError::Js(msg) => write!(f, "javascript error: {msg}"),
        }
    }
}

impl std::error::Error for GlError {}

impl From<JsValue> for GlError {
    fn from(v: JsValue) -> Self {
        GlError::Js(v.as_string().unwrap_or_else(|| format!("{v:?}")))
    }
}

impl From<GlError> for JsValue {
    fn from(e: GlError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let e = GlError::Compile {
            stage: Stage::Fragment,
            log: "ERROR: 0:3: 'x' : undeclared identifier".into(),
        };
        assert_eq!(
            e.to_string(),
            "fragment shader compile error: ERROR: 0:3: 'x' : undeclared identifier"
        );
        assert_eq!(GlError::Create("buffer").to_string(), "failed to create buffer");
        assert!(GlError::Link("bad".into()).to_string().ends_with("bad"));
    }
}
