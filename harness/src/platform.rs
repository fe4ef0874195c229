use crate::DomError;

/// How a platform can deliver synthetic events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventSupport {
    /// `document.createEvent` + `dispatchEvent`.
    #[default]
    Standard,
    /// `document.createEventObject` + `element.fireEvent("on" + name)`.
    Legacy,
    /// Neither API is present.
    Unsupported,
}

/// Flags passed to `initEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventInit {
    /// The event propagates to ancestors.
    pub bubbles: bool,
    /// The default action can be prevented.
    pub cancelable: bool,
}

/// The host document capabilities the harness helpers rely on.
///
/// Geometry is reported in CSS pixels. Computed style properties use their
/// CSS names (`margin-left`, not `marginLeft`).
pub trait DomPlatform {
    /// Handle to an element owned by this platform.
    type Element: Clone;

    /// Creates a detached element with the given tag name.
    fn create_element(&self, tag: &str) -> Result<Self::Element, DomError>;

    /// Sets the `id` attribute.
    fn set_id(&self, element: &Self::Element, id: &str);

    /// Replaces the element's children with parsed `html`.
    fn set_inner_html(&self, element: &Self::Element, html: &str);

    /// Adds a token to the element's class list.
    fn add_class(&self, element: &Self::Element, class_name: &str) -> Result<(), DomError>;

    /// `offsetLeft`, relative to the offset parent.
    fn offset_left(&self, element: &Self::Element) -> f64;

    /// `offsetWidth`, including borders and padding.
    fn offset_width(&self, element: &Self::Element) -> f64;

    /// Resolved value of a CSS property, e.g. `"12px"` or `"auto"`.
    fn computed_style(&self, element: &Self::Element, property: &str) -> Result<String, DomError>;

    /// Which event API the host provides.
    fn event_support(&self) -> EventSupport;

    /// Creates a `MouseEvents` event named `name`, initializes it with `init`
    /// and dispatches it on `target`. Returns `dispatchEvent`'s result.
    fn dispatch_mouse_event(
        &self,
        target: &Self::Element,
        name: &str,
        init: EventInit,
    ) -> Result<bool, DomError>;

    /// Calls `target.fireEvent(handler)`, where `handler` is e.g. `"onclick"`.
    fn fire_legacy_event(&self, target: &Self::Element, handler: &str) -> Result<(), DomError>;
}
