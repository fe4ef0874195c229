use crate::{DomError, DomPlatform, dom};

/// The harness DOM helpers bound to one platform.
///
/// ```
/// use harness::{MemoryPlatform, Util};
///
/// let util = Util::new(MemoryPlatform::new());
/// let button = util.create_element("button", Some("go"), None, Some("Go")).unwrap();
/// assert_eq!(button.inner_html(), "Go");
/// ```
#[derive(Debug, Default)]
pub struct Util<P> {
    platform: P,
}

impl<P: DomPlatform> Util<P> {
    /// Binds the helpers to `platform`.
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    /// The underlying platform.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// See [`crate::create_element`].
    pub fn create_element(
        &self,
        tag: &str,
        id: Option<&str>,
        class_name: Option<&str>,
        inner_html: Option<&str>,
    ) -> Result<P::Element, DomError> {
        dom::create_element(&self.platform, tag, id, class_name, inner_html)
    }

    /// See [`crate::get_closest_element`].
    pub fn get_closest_element<'a>(
        &self,
        reference: &P::Element,
        candidates: &'a [P::Element],
    ) -> Option<&'a P::Element> {
        dom::get_closest_element(&self.platform, reference, candidates)
    }

    /// See [`crate::fire_event`].
    pub fn fire_event(&self, target: &P::Element, event_name: &str) -> Result<(), DomError> {
        dom::fire_event(&self.platform, target, event_name)
    }

    /// See [`crate::get_element_width`].
    pub fn get_element_width(&self, element: &P::Element) -> Result<f64, DomError> {
        dom::get_element_width(&self.platform, element)
    }
}

#[cfg(feature = "web")]
impl Util<crate::WebPlatform> {
    /// Helpers bound to the current browser window.
    pub fn web() -> Result<Self, DomError> {
        Ok(Self::new(crate::WebPlatform::new()?))
    }
}
