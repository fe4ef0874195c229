use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::{DomError, DomPlatform, EventInit, EventSupport};

/// The browser document, reached through `web-sys`.
#[derive(Debug, Clone)]
pub struct WebPlatform {
    window: Window,
    document: Document,
}

impl WebPlatform {
    /// Binds to the global `window` and its `document`.
    pub fn new() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        Ok(Self { window, document })
    }

    /// The bound document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn has_method(target: &JsValue, name: &str) -> bool {
        Reflect::get(target, &JsValue::from_str(name)).is_ok_and(|value| value.is_function())
    }
}

// offsetLeft/offsetWidth only exist on HTML elements; others measure as zero.
fn html_element(element: &Element) -> Option<&HtmlElement> {
    element.dyn_ref::<HtmlElement>()
}

impl DomPlatform for WebPlatform {
    type Element = Element;

    fn create_element(&self, tag: &str) -> Result<Element, DomError> {
        Ok(self.document.create_element(tag)?)
    }

    fn set_id(&self, element: &Element, id: &str) {
        element.set_id(id);
    }

    fn set_inner_html(&self, element: &Element, html: &str) {
        element.set_inner_html(html);
    }

    fn add_class(&self, element: &Element, class_name: &str) -> Result<(), DomError> {
        Ok(element.class_list().add_1(class_name)?)
    }

    fn offset_left(&self, element: &Element) -> f64 {
        html_element(element).map_or(0.0, |element| f64::from(element.offset_left()))
    }

    fn offset_width(&self, element: &Element) -> f64 {
        html_element(element).map_or(0.0, |element| f64::from(element.offset_width()))
    }

    fn computed_style(&self, element: &Element, property: &str) -> Result<String, DomError> {
        match self.window.get_computed_style(element)? {
            Some(style) => Ok(style.get_property_value(property)?),
            None => Ok(String::new()),
        }
    }

    fn event_support(&self) -> EventSupport {
        if Self::has_method(&self.document, "createEvent") {
            EventSupport::Standard
        } else if Self::has_method(&self.document, "createEventObject") {
            EventSupport::Legacy
        } else {
            EventSupport::Unsupported
        }
    }

    fn dispatch_mouse_event(
        &self,
        target: &Element,
        name: &str,
        init: EventInit,
    ) -> Result<bool, DomError> {
        let event = self.document.create_event("MouseEvents")?;
        event.init_event_with_bubbles_and_cancelable(name, init.bubbles, init.cancelable);
        Ok(target.dispatch_event(&event)?)
    }

    fn fire_legacy_event(&self, target: &Element, handler: &str) -> Result<(), DomError> {
        let fire = Reflect::get(target, &JsValue::from_str("fireEvent"))?
            .dyn_into::<Function>()
            .map_err(|_| DomError::Js("TypeError: fireEvent is not a function".to_owned()))?;
        fire.call1(target, &JsValue::from_str(handler))?;
        Ok(())
    }
}
