use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::{DomError, DomPlatform, EventInit, EventSupport};

/// An event delivered to a [`MemoryElement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedEvent {
    /// Dispatched through the standard `createEvent("MouseEvents")` path.
    Mouse {
        /// Event type, e.g. `"click"`.
        name: String,
        /// Whether the event was initialized to bubble.
        bubbles: bool,
        /// Whether the event was initialized as cancelable.
        cancelable: bool,
    },
    /// Fired through `fireEvent`, e.g. `handler: "onclick"`.
    Legacy {
        /// Handler name passed to `fireEvent`.
        handler: String,
    },
}

#[derive(Debug, Default)]
struct ElementState {
    tag_name: String,
    id: Option<String>,
    class_list: Vec<String>,
    inner_html: String,
    offset_left: f64,
    offset_width: f64,
    styles: HashMap<String, String>,
    events: Vec<RecordedEvent>,
}

/// Element handle of the in-memory document.
///
/// Clones share the same element; equality is identity.
#[derive(Clone)]
pub struct MemoryElement {
    state: Rc<RefCell<ElementState>>,
}

impl MemoryElement {
    fn new(tag: &str) -> Self {
        Self {
            state: Rc::new(RefCell::new(ElementState {
                tag_name: tag.to_ascii_uppercase(),
                ..ElementState::default()
            })),
        }
    }

    /// Upper-cased tag name, as `Element.tagName` reports it for HTML documents.
    pub fn tag_name(&self) -> String {
        self.state.borrow().tag_name.clone()
    }

    /// The element id, `None` until one is set.
    pub fn id(&self) -> Option<String> {
        self.state.borrow().id.clone()
    }

    /// Class tokens in insertion order.
    pub fn class_list(&self) -> Vec<String> {
        self.state.borrow().class_list.clone()
    }

    /// Markup last assigned through `set_inner_html`.
    pub fn inner_html(&self) -> String {
        self.state.borrow().inner_html.clone()
    }

    /// Sets `offsetLeft` and `offsetWidth`.
    pub fn set_geometry(&self, offset_left: f64, offset_width: f64) {
        let mut state = self.state.borrow_mut();
        state.offset_left = offset_left;
        state.offset_width = offset_width;
    }

    /// Sets the computed value of a CSS property. Unset properties compute to `""`.
    pub fn set_style(&self, property: &str, value: &str) {
        self.state
            .borrow_mut()
            .styles
            .insert(property.to_owned(), value.to_owned());
    }

    /// Events delivered to this element, oldest first.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.state.borrow().events.clone()
    }

    fn record(&self, event: RecordedEvent) {
        self.state.borrow_mut().events.push(event);
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Eq for MemoryElement {}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("MemoryElement")
            .field("tag_name", &state.tag_name)
            .field("id", &state.id)
            .field("offset_left", &state.offset_left)
            .field("offset_width", &state.offset_width)
            .finish()
    }
}

/// Deterministic document without a browser.
///
/// Elements keep whatever geometry and computed styles the test assigns and
/// record the events fired at them.
#[derive(Debug, Default)]
pub struct MemoryPlatform {
    event_support: EventSupport,
}

impl MemoryPlatform {
    /// A platform with standard event support.
    pub fn new() -> Self {
        Self::default()
    }

    /// A platform that delivers events the given way.
    pub fn with_event_support(event_support: EventSupport) -> Self {
        Self { event_support }
    }

    /// Creates an element with the given `offsetLeft` and `offsetWidth`.
    ///
    /// The tag name is taken as is, without the checks `create_element` applies.
    pub fn element_at(&self, tag: &str, offset_left: f64, offset_width: f64) -> MemoryElement {
        let element = MemoryElement::new(tag);
        element.set_geometry(offset_left, offset_width);
        element
    }
}

fn is_valid_tag_name(tag: &str) -> bool {
    !tag.is_empty()
        && !tag
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '/' | '"' | '\''))
}

impl DomPlatform for MemoryPlatform {
    type Element = MemoryElement;

    fn create_element(&self, tag: &str) -> Result<MemoryElement, DomError> {
        if !is_valid_tag_name(tag) {
            return Err(DomError::Js(format!(
                "InvalidCharacterError: {tag:?} is not a valid tag name"
            )));
        }
        Ok(MemoryElement::new(tag))
    }

    fn set_id(&self, element: &MemoryElement, id: &str) {
        element.state.borrow_mut().id = Some(id.to_owned());
    }

    fn set_inner_html(&self, element: &MemoryElement, html: &str) {
        element.state.borrow_mut().inner_html = html.to_owned();
    }

    fn add_class(&self, element: &MemoryElement, class_name: &str) -> Result<(), DomError> {
        if class_name.is_empty() {
            return Err(DomError::Js(
                "SyntaxError: the token must not be empty".to_owned(),
            ));
        }
        if class_name.chars().any(char::is_whitespace) {
            return Err(DomError::Js(format!(
                "InvalidCharacterError: {class_name:?} contains whitespace"
            )));
        }

        let mut state = element.state.borrow_mut();
        if !state.class_list.iter().any(|token| token == class_name) {
            state.class_list.push(class_name.to_owned());
        }
        Ok(())
    }

    fn offset_left(&self, element: &MemoryElement) -> f64 {
        element.state.borrow().offset_left
    }

    fn offset_width(&self, element: &MemoryElement) -> f64 {
        element.state.borrow().offset_width
    }

    fn computed_style(&self, element: &MemoryElement, property: &str) -> Result<String, DomError> {
        Ok(element
            .state
            .borrow()
            .styles
            .get(property)
            .cloned()
            .unwrap_or_default())
    }

    fn event_support(&self) -> EventSupport {
        self.event_support
    }

    fn dispatch_mouse_event(
        &self,
        target: &MemoryElement,
        name: &str,
        init: EventInit,
    ) -> Result<bool, DomError> {
        target.record(RecordedEvent::Mouse {
            name: name.to_owned(),
            bubbles: init.bubbles,
            cancelable: init.cancelable,
        });
        Ok(true)
    }

    fn fire_legacy_event(&self, target: &MemoryElement, handler: &str) -> Result<(), DomError> {
        target.record(RecordedEvent::Legacy {
            handler: handler.to_owned(),
        });
        Ok(())
    }
}
