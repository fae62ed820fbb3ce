use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, HtmlCanvasElement, HtmlElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::gl::{self, GlError};
use crate::model::Settings;
use crate::render::{self, Demo, Frame};
use crate::state::DragRotation;
use crate::util::fit_below;

#[derive(Properties, PartialEq, Clone)]
pub struct GlViewProps {
    pub settings: Settings,
    pub on_error: Callback<String>,
}

#[function_component(GlView)]
pub fn gl_view(props: &GlViewProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let on_error = props.on_error.clone();
        use_effect_with(props.settings.clone(), move |settings| {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                tracing::warn!("canvas not attached, nothing to draw on");
                return Box::new(|| ()) as Box<dyn FnOnce()>;
            };
            match mount(canvas, settings) {
                Ok(teardown) => teardown,
                Err(e) => {
                    tracing::error!("{e}");
                    on_error.emit(e.to_string());
                    Box::new(|| ())
                }
            }
        });
    }

    html! {
        <canvas id="glcanvas" ref={canvas_ref} style="display:block; touch-action:none;" />
    }
}

/// DOM listener that unregisters itself when dropped.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    cb: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn new(
        target: &EventTarget,
        kind: &'static str,
        f: impl FnMut(Event) + 'static,
    ) -> Result<Self, GlError> {
        let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            cb,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.cb.as_ref().unchecked_ref());
    }
}

/// Builds the selected demo on `canvas`, wires pointer input into the drag
/// tracker and starts the frame loop. The returned closure undoes all of it.
fn mount(canvas: HtmlCanvasElement, settings: &Settings) -> Result<Box<dyn FnOnce()>, GlError> {
    let window = web_sys::window().ok_or_else(|| GlError::Js("no global `window`".into()))?;
    let document = window
        .document()
        .ok_or_else(|| GlError::Js("window has no document".into()))?;

    let fit_canvas = {
        let canvas = canvas.clone();
        let window = window.clone();
        move || {
            let bar_h = document
                .get_element_by_id("top-bar")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .map(|el| el.client_height() as f64)
                .unwrap_or(0.0);
            let w = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(800.0);
            let h = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(600.0);
            let (cw, ch) = fit_below(w, h, bar_h);
            canvas.set_width(cw);
            canvas.set_height(ch);
        }
    };
    fit_canvas();

    let gl = gl::context(&canvas)?;
    let drag = Rc::new(RefCell::new(DragRotation::new(settings.drag_step)));
    let demo: Rc<RefCell<Box<dyn Demo>>> = Rc::new(RefCell::new(render::build(
        settings.demo,
        &gl,
        settings,
        drag.clone(),
    )?));

    let mut listeners = Vec::new();
    {
        let drag = drag.clone();
        listeners.push(Listener::new(&canvas, "mousedown", move |e| {
            let e: MouseEvent = e.unchecked_into();
            drag.borrow_mut()
                .on_pointer_down(e.client_x() as f64, e.client_y() as f64);
        })?);
    }
    {
        let drag = drag.clone();
        listeners.push(Listener::new(&canvas, "mousemove", move |e| {
            let e: MouseEvent = e.unchecked_into();
            let (x, y) = (e.client_x() as f64, e.client_y() as f64);
            tracing::trace!("pointer move {x},{y}");
            drag.borrow_mut().on_pointer_move(x, y);
        })?);
    }
    // Released anywhere on the page, not just over the canvas.
    {
        let drag = drag.clone();
        listeners.push(Listener::new(&window, "mouseup", move |_| {
            let mut drag = drag.borrow_mut();
            if drag.is_dragging() {
                tracing::trace!("drag released at {:?}", drag.current_rotation());
            }
            drag.on_pointer_up();
        })?);
    }
    // Touch
    {
        let drag = drag.clone();
        listeners.push(Listener::new(&canvas, "touchstart", move |e| {
            let e: TouchEvent = e.unchecked_into();
            if let Some(t) = e.touches().item(0) {
                drag.borrow_mut()
                    .on_pointer_down(t.client_x() as f64, t.client_y() as f64);
            }
        })?);
    }
    {
        let drag = drag.clone();
        listeners.push(Listener::new(&canvas, "touchmove", move |e| {
            let e: TouchEvent = e.unchecked_into();
            e.prevent_default();
            if let Some(t) = e.touches().item(0) {
                drag.borrow_mut()
                    .on_pointer_move(t.client_x() as f64, t.client_y() as f64);
            }
        })?);
    }
    for kind in ["touchend", "touchcancel"] {
        let drag = drag.clone();
        listeners.push(Listener::new(&canvas, kind, move |_| {
            drag.borrow_mut().on_pointer_up();
        })?);
    }
    listeners.push(Listener::new(&window, "resize", move |_| fit_canvas())?);

    // RAF loop
    let raf_id = Rc::new(RefCell::new(None));
    let frame_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let raf_id = raf_id.clone();
        let frame_cb_loop = frame_cb.clone();
        let window_loop = window.clone();
        let canvas = canvas.clone();
        *frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !canvas.is_connected() {
                return;
            }
            let frame = Frame {
                width: canvas.width(),
                height: canvas.height(),
                now_ms: js_sys::Date::now(),
            };
            demo.borrow_mut().render_frame(&frame);
            if let Some(cb) = frame_cb_loop.borrow().as_ref() {
                if let Ok(id) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    *raf_id.borrow_mut() = Some(id);
                }
            }
        }) as Box<dyn FnMut()>));
    }
    if let Some(cb) = frame_cb.borrow().as_ref() {
        *raf_id.borrow_mut() = Some(window.request_animation_frame(cb.as_ref().unchecked_ref())?);
    }
    tracing::info!(
        "{} demo running on {}x{} canvas",
        settings.demo.label(),
        canvas.width(),
        canvas.height()
    );

    Ok(Box::new(move || {
        if let Some(id) = raf_id.borrow_mut().take() {
            let _ = window.cancel_animation_frame(id);
        }
        // breaks the loop's self reference and drops the demo's GL objects
        frame_cb.borrow_mut().take();
        drop(listeners);
    }))
}
