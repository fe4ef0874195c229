use harness_format::parse_int;
use log::{debug, trace};

use crate::{DomError, DomPlatform, EventInit, EventSupport};

const MOUSE_EVENT_INIT: EventInit = EventInit {
    bubbles: true,
    cancelable: false,
};

const WIDTH_PROPERTIES: [&str; 3] = ["width", "margin-left", "margin-right"];

/// Creates a detached `tag` element, optionally with an id, inner markup and a class.
///
/// The id is set first, then the markup, then the class token is added.
pub fn create_element<P: DomPlatform>(
    platform: &P,
    tag: &str,
    id: Option<&str>,
    class_name: Option<&str>,
    inner_html: Option<&str>,
) -> Result<P::Element, DomError> {
    let element = platform.create_element(tag)?;

    if let Some(id) = id {
        platform.set_id(&element, id);
    }
    if let Some(inner_html) = inner_html {
        platform.set_inner_html(&element, inner_html);
    }
    if let Some(class_name) = class_name {
        platform.add_class(&element, class_name)?;
    }

    Ok(element)
}

fn horizontal_center<P: DomPlatform>(platform: &P, element: &P::Element) -> f64 {
    platform.offset_left(element) + platform.offset_width(element) / 2.0
}

/// Returns the candidate whose horizontal center is nearest to `reference`'s.
///
/// Ties keep the earliest candidate. `None` when `candidates` is empty.
pub fn get_closest_element<'a, P: DomPlatform>(
    platform: &P,
    reference: &P::Element,
    candidates: &'a [P::Element],
) -> Option<&'a P::Element> {
    let (first, rest) = candidates.split_first()?;
    let center = horizontal_center(platform, reference);

    let mut best = first;
    let mut best_distance = (horizontal_center(platform, first) - center).abs();

    for candidate in rest {
        let distance = (horizontal_center(platform, candidate) - center).abs();
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }

    trace!("closest element is {best_distance}px from the reference center");
    Some(best)
}

/// Dispatches a bubbling, non-cancelable mouse event named `event_name` on `target`.
///
/// Platforms without `createEvent` get `fireEvent("on" + event_name)`
/// instead; with neither API the event is dropped.
pub fn fire_event<P: DomPlatform>(
    platform: &P,
    target: &P::Element,
    event_name: &str,
) -> Result<(), DomError> {
    match platform.event_support() {
        EventSupport::Standard => {
            platform.dispatch_mouse_event(target, event_name, MOUSE_EVENT_INIT)?;
        }
        EventSupport::Legacy => {
            debug!("createEvent unavailable, firing on{event_name} through fireEvent");
            platform.fire_legacy_event(target, &format!("on{event_name}"))?;
        }
        EventSupport::Unsupported => {
            debug!("no event API available, dropping {event_name} event");
        }
    }
    Ok(())
}

/// Computed `width` plus `margin-left` plus `margin-right`, each truncated to whole pixels.
///
/// Values that do not start with a number (`"auto"`, `""`) count as zero.
/// The sum is a JavaScript Number and never overflows.
pub fn get_element_width<P: DomPlatform>(
    platform: &P,
    element: &P::Element,
) -> Result<f64, DomError> {
    let mut width = 0.0;

    for property in WIDTH_PROPERTIES {
        let value = platform.computed_style(element, property)?;
        match parse_int(&value) {
            Some(pixels) => width += pixels,
            None => trace!("ignoring {property}: {value:?}"),
        }
    }

    Ok(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryPlatform, RecordedEvent};

    #[test]
    fn test_create_element_sets_optional_parts() {
        let platform = MemoryPlatform::new();

        let element =
            create_element(&platform, "div", Some("main"), Some("box"), Some("<b>hi</b>")).unwrap();
        assert_eq!(element.tag_name(), "DIV");
        assert_eq!(element.id().as_deref(), Some("main"));
        assert_eq!(element.class_list(), vec!["box".to_owned()]);
        assert_eq!(element.inner_html(), "<b>hi</b>");

        let bare = create_element(&platform, "span", None, None, None).unwrap();
        assert_eq!(bare.id(), None);
        assert!(bare.class_list().is_empty());
        assert_eq!(bare.inner_html(), "");
    }

    #[test]
    fn test_create_element_rejects_bad_class_token() {
        let platform = MemoryPlatform::new();
        assert!(create_element(&platform, "div", None, Some("two words"), None).is_err());
        assert!(create_element(&platform, "div", None, Some(""), None).is_err());
    }

    #[test]
    fn test_get_closest_element() {
        let platform = MemoryPlatform::new();
        let reference = platform.element_at("div", 100.0, 20.0);
        let far = platform.element_at("div", 0.0, 10.0);
        let near = platform.element_at("div", 90.0, 30.0);

        let candidates = [far.clone(), near.clone()];
        assert_eq!(
            get_closest_element(&platform, &reference, &candidates),
            Some(&near)
        );
    }

    #[test]
    fn test_get_closest_element_prefers_first_on_tie() {
        let platform = MemoryPlatform::new();
        let reference = platform.element_at("div", 100.0, 0.0);
        let left = platform.element_at("div", 90.0, 0.0);
        let right = platform.element_at("div", 110.0, 0.0);

        let candidates = [left.clone(), right.clone()];
        assert_eq!(
            get_closest_element(&platform, &reference, &candidates),
            Some(&left)
        );

        let candidates = [right.clone(), left];
        assert_eq!(
            get_closest_element(&platform, &reference, &candidates),
            Some(&right)
        );
    }

    #[test]
    fn test_get_closest_element_without_candidates() {
        let platform = MemoryPlatform::new();
        let reference = platform.element_at("div", 0.0, 0.0);
        assert_eq!(get_closest_element(&platform, &reference, &[]), None);
    }

    #[test]
    fn test_fire_event_standard() {
        let platform = MemoryPlatform::new();
        let target = platform.element_at("button", 0.0, 0.0);

        fire_event(&platform, &target, "click").unwrap();
        assert_eq!(
            target.events(),
            vec![RecordedEvent::Mouse {
                name: "click".to_owned(),
                bubbles: true,
                cancelable: false,
            }]
        );
    }

    #[test]
    fn test_fire_event_legacy() {
        let platform = MemoryPlatform::with_event_support(EventSupport::Legacy);
        let target = platform.element_at("button", 0.0, 0.0);

        fire_event(&platform, &target, "mouseup").unwrap();
        assert_eq!(
            target.events(),
            vec![RecordedEvent::Legacy {
                handler: "onmouseup".to_owned(),
            }]
        );
    }

    #[test]
    fn test_fire_event_unsupported_is_a_no_op() {
        let platform = MemoryPlatform::with_event_support(EventSupport::Unsupported);
        let target = platform.element_at("button", 0.0, 0.0);

        fire_event(&platform, &target, "click").unwrap();
        assert!(target.events().is_empty());
    }

    #[test]
    fn test_get_element_width() {
        let platform = MemoryPlatform::new();
        let element = platform.element_at("div", 0.0, 0.0);
        element.set_style("width", "120px");
        element.set_style("margin-left", "8px");
        element.set_style("margin-right", "4.9px");

        assert_eq!(get_element_width(&platform, &element).unwrap(), 132.0);
    }

    #[test]
    fn test_get_element_width_ignores_unparseable_values() {
        let platform = MemoryPlatform::new();
        let element = platform.element_at("div", 0.0, 0.0);
        element.set_style("width", "auto");
        element.set_style("margin-left", "-10px");

        assert_eq!(get_element_width(&platform, &element).unwrap(), -10.0);
    }

    #[test]
    fn test_get_element_width_with_huge_values() {
        let platform = MemoryPlatform::new();
        let element = platform.element_at("div", 0.0, 0.0);
        element.set_style("width", "9223372036854775807px");
        element.set_style("margin-left", "1px");
        element.set_style("margin-right", "99999999999999999999px");

        assert_eq!(
            get_element_width(&platform, &element).unwrap(),
            9_223_372_036_854_775_808.0 + 1.0 + 1e20
        );
    }
}
