//! Browser implementation of the host seam.
//!
//! Listeners become `wasm-bindgen` closures owned by their registration
//! token, so a closure lives exactly as long as its subscription and is
//! dropped right after `removeEventListener`. Requires a browser environment;
//! nothing here is exercised by native unit tests.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, HtmlElement, MouseEvent, TouchEvent, Window};

use crate::config::BoardConfig;
use crate::consts::RESIZE_EVENT;
use crate::controller::BoardInput;
use crate::dispatcher::Redraw;
use crate::error::Error;
use crate::event::{HostEvent, PointerInput};
use crate::geom::Bounds;
use crate::gesture::Gestures;
use crate::host::Host;
use crate::state::BoardState;
use crate::style::{self, Capabilities};
use crate::subscription::{EventTarget, Listener, ListenerOptions};
use crate::util::Memo;

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

// =============================================================
// Events
// =============================================================

impl HostEvent for web_sys::Event {
    fn pointer(&self) -> PointerInput {
        if let Some(mouse) = self.dyn_ref::<MouseEvent>() {
            return PointerInput {
                client: Some((f64::from(mouse.client_x()), f64::from(mouse.client_y()))),
                touches: Vec::new(),
                button: Some(mouse.button()),
                buttons: mouse.buttons(),
                shift: mouse.shift_key(),
            };
        }
        if let Some(touch) = self.dyn_ref::<TouchEvent>() {
            let list = touch.target_touches();
            let touches = (0..list.length())
                .filter_map(|i| list.get(i))
                .map(|t| (f64::from(t.client_x()), f64::from(t.client_y())))
                .collect();
            return PointerInput { touches, shift: touch.shift_key(), ..PointerInput::default() };
        }
        PointerInput::default()
    }

    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }

    fn stop_propagation(&self) {
        web_sys::Event::stop_propagation(self);
    }
}

// =============================================================
// Targets
// =============================================================

/// A DOM event target.
#[derive(Clone, Debug)]
pub struct DomTarget(web_sys::EventTarget);

impl DomTarget {
    pub fn new(target: impl Into<web_sys::EventTarget>) -> Self {
        Self(target.into())
    }
}

impl EventTarget for DomTarget {
    type Event = web_sys::Event;
    type Registration = Closure<dyn FnMut(web_sys::Event)>;

    fn add_listener(
        &self,
        name: &'static str,
        listener: Listener<web_sys::Event>,
        options: ListenerOptions,
    ) -> Result<Self::Registration, Error> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| listener(&ev));
        let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
        let result = match options.passive {
            Some(passive) => {
                let opts = AddEventListenerOptions::new();
                opts.set_passive(passive);
                self.0.add_event_listener_with_callback_and_add_event_listener_options(name, callback, &opts)
            }
            None => self.0.add_event_listener_with_callback(name, callback),
        };
        result.map_err(|err| Error::Bind { event: name, reason: describe(&err) })?;
        Ok(closure)
    }

    fn remove_listener(&self, name: &'static str, registration: &Self::Registration) {
        if let Err(err) = self.0.remove_event_listener_with_callback(name, registration.as_ref().unchecked_ref()) {
            log::warn!("failed to remove `{name}` listener: {}", describe(&err));
        }
    }
}

// =============================================================
// Host
// =============================================================

/// Browser host for one board element.
#[derive(Clone, Debug)]
pub struct DomHost {
    window: Window,
    document: Document,
    body: HtmlElement,
    board: Element,
}

impl DomHost {
    /// Host around `board`, resolving window, document and body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] outside a browser page.
    pub fn new(board: Element) -> Result<Self, Error> {
        let window = web_sys::window().ok_or(Error::MissingElement("window"))?;
        let document = window.document().ok_or(Error::MissingElement("document"))?;
        let body = document.body().ok_or(Error::MissingElement("body"))?;
        Ok(Self { window, document, body, board })
    }

    /// Bounds cache reading the board's client rectangle on demand.
    #[must_use]
    pub fn bounds_memo(&self) -> Memo<Bounds> {
        let board = self.board.clone();
        Memo::new(move || {
            let rect = board.get_bounding_client_rect();
            Bounds { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() }
        })
    }

    /// Transform capabilities, probed against the body style on first use.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        style::capabilities(|| {
            let style = self.body.style();
            Capabilities::negotiate(|key| js_sys::Reflect::has(&style, &JsValue::from_str(key)).unwrap_or(false))
        })
    }

    /// Write a CSS transform on `el` using the negotiated property name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Host`] if the style declaration rejects the write.
    pub fn set_transform(&self, el: &HtmlElement, value: &str) -> Result<(), Error> {
        let property = self.capabilities().transform.css_name();
        el.style()
            .set_property(property, value)
            .map_err(|err| Error::Host { op: "set transform", reason: describe(&err) })
    }

    /// Notify the board that its container was resized.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Host`] if the event cannot be created or dispatched.
    pub fn dispatch_resize(&self) -> Result<(), Error> {
        let event = web_sys::Event::new(RESIZE_EVENT)
            .map_err(|err| Error::Host { op: "create resize event", reason: describe(&err) })?;
        self.body
            .dispatch_event(&event)
            .map(|_| ())
            .map_err(|err| Error::Host { op: "dispatch resize event", reason: describe(&err) })
    }
}

impl Host for DomHost {
    type Target = DomTarget;

    fn board(&self) -> DomTarget {
        DomTarget::new(self.board.clone())
    }

    fn document(&self) -> DomTarget {
        DomTarget::new(self.document.clone())
    }

    fn window(&self) -> DomTarget {
        DomTarget::new(self.window.clone())
    }

    fn resize_signal(&self) -> DomTarget {
        DomTarget::new(self.body.clone())
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), Error> {
        let frame = Closure::once_into_js(callback);
        let function: &js_sys::Function = frame.unchecked_ref();
        if self.window.request_animation_frame(function).is_ok() {
            return Ok(());
        }
        self.window
            .set_timeout_with_callback(function)
            .map(|_| ())
            .map_err(|err| Error::Frame(describe(&err)))
    }
}

/// Attach board input to `board` and start listening.
///
/// # Errors
///
/// Propagates host resolution and bind failures.
pub fn attach(
    board: Element,
    config: &BoardConfig,
    gestures: Rc<dyn Gestures>,
    redraw_all: Redraw,
) -> Result<BoardInput<DomHost>, Error> {
    let host = DomHost::new(board)?;
    let mut state = BoardState::new(host.bounds_memo());
    state.configure(config);
    let mut input = BoardInput::new(host, state, gestures, redraw_all);
    input.bind()?;
    Ok(input)
}
