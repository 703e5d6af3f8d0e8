use serde::{Deserialize, Serialize};

use crate::drag_drop::DropOperation;
use crate::event::{Event, EventResponse};
use crate::platform::interface::SurfaceEffects;

/// Backgrounds applied to the drop zone. The highlight color holds exactly
/// between a dragover and the next dragleave or drop on the zone.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ZoneAttributes {
    pub idle_background: String,
    pub highlight_background: String,
}

impl Default for ZoneAttributes {
    fn default() -> Self {
        Self {
            idle_background: "white".into(),
            highlight_background: "#e1f5fe".into(),
        }
    }
}

/// Maps zone interactions to surface effects, independent of any real
/// rendering environment.
pub(crate) struct Affordance {
    attributes: ZoneAttributes,
}

impl Affordance {
    pub(crate) fn new(attributes: ZoneAttributes) -> Self {
        Self { attributes }
    }

    pub(crate) fn handle(
        &self,
        surface: &impl SurfaceEffects,
        event: &Event,
    ) -> EventResponse {
        match event {
            Event::Clicked => {
                surface.open_picker();
                EventResponse::Ignored
            }

            // Re-applying the highlight on every firing is idempotent.
            Event::DragOver { .. } => {
                surface.set_background(&self.attributes.highlight_background);
                EventResponse::DropAccepted(DropOperation::Copy)
            }

            Event::DragLeft => {
                surface.set_background(&self.attributes.idle_background);
                EventResponse::Ignored
            }

            Event::Dropped { data } => {
                log::trace!("transferring {} dropped file(s)", data.len());
                surface.transfer_files(data);
                surface.set_background(&self.attributes.idle_background);
                EventResponse::Handled
            }
        }
    }
}

/// The policy response and the caller's response both count towards
/// suppressing the platform default; an advertised drop operation survives
/// either way.
pub(crate) fn merge_responses(policy: EventResponse, observer: EventResponse) -> EventResponse {
    match (policy, observer) {
        (EventResponse::DropAccepted(operation), _) | (_, EventResponse::DropAccepted(operation)) => {
            EventResponse::DropAccepted(operation)
        }
        (EventResponse::Handled, _) | (_, EventResponse::Handled) => EventResponse::Handled,
        _ => EventResponse::Ignored,
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::UploadZone;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use web_sys::wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement, HtmlInputElement};

    use crate::error::Error;
    use crate::event::EventCallback;
    use crate::platform::OsSurface;
    use crate::platform::interface::{HtmlTargetsInterface, OsSurfaceInterface};
    use crate::platform::os_surface_handle::OsSurfaceHandle;

    use super::ZoneAttributes;

    /// Wires click-to-browse and drag-and-drop affordances between a drop
    /// zone element and a file input. Listeners stay bound until the zone is
    /// dropped.
    pub struct UploadZone {
        handle: OsSurfaceHandle,
    }

    impl UploadZone {
        pub fn attach(
            zone: HtmlElement,
            input: HtmlInputElement,
            attributes: ZoneAttributes,
            event_callback: Box<EventCallback>,
        ) -> Result<Self, Error> {
            let handle = OsSurface::bind(zone, input, attributes, event_callback)?;
            Ok(Self { handle })
        }

        /// Resolves both elements by selector before attaching. Missing
        /// elements are a startup misconfiguration and fail the attach.
        pub fn attach_in(
            document: &Document,
            zone_selector: &str,
            input_selector: &str,
            attributes: ZoneAttributes,
            event_callback: Box<EventCallback>,
        ) -> Result<Self, Error> {
            let zone = document
                .query_selector(zone_selector)
                .map_err(|_| Error::PlatformError("drop zone search failed".into()))?
                .ok_or_else(|| Error::ZoneNotFound(zone_selector.to_string().into()))?;
            let zone = zone.dyn_into::<HtmlElement>().map_err(|_| {
                Error::PlatformError("drop zone could not be casted to `HtmlElement`".into())
            })?;

            let input = document
                .query_selector(input_selector)
                .map_err(|_| Error::PlatformError("file input search failed".into()))?
                .ok_or_else(|| Error::InputNotFound(input_selector.to_string().into()))?;
            let input = input.dyn_into::<HtmlInputElement>().map_err(|_| {
                Error::PlatformError("file input could not be casted to `HtmlInputElement`".into())
            })?;

            Self::attach(zone, input, attributes, event_callback)
        }

        pub fn zone(&self) -> HtmlElement {
            self.handle.zone()
        }

        pub fn input(&self) -> HtmlInputElement {
            self.handle.input()
        }

        pub fn set_cursor(&self, cursor: Option<cursor_icon::CursorIcon>) {
            self.handle.set_cursor(cursor);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;

    use crate::drag_drop::{DropData, DropOperation};

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum Effect {
        Background(String),
        PickerOpened,
        Transferred(Vec<String>),
    }

    #[derive(Default)]
    struct RecordingSurface {
        effects: RefCell<Vec<Effect>>,
    }

    impl RecordingSurface {
        fn background(&self) -> Option<String> {
            self.effects
                .borrow()
                .iter()
                .rev()
                .find_map(|effect| match effect {
                    Effect::Background(color) => Some(color.clone()),
                    _ => None,
                })
        }

        fn picker_opens(&self) -> usize {
            self.effects
                .borrow()
                .iter()
                .filter(|effect| **effect == Effect::PickerOpened)
                .count()
        }

        fn transferred(&self) -> Option<Vec<String>> {
            self.effects
                .borrow()
                .iter()
                .rev()
                .find_map(|effect| match effect {
                    Effect::Transferred(names) => Some(names.clone()),
                    _ => None,
                })
        }
    }

    impl SurfaceEffects for RecordingSurface {
        fn set_background(&self, color: &str) {
            self.effects
                .borrow_mut()
                .push(Effect::Background(color.into()));
        }

        fn open_picker(&self) {
            self.effects.borrow_mut().push(Effect::PickerOpened);
        }

        fn transfer_files(&self, data: &DropData) {
            self.effects
                .borrow_mut()
                .push(Effect::Transferred(data.file_names()));
        }
    }

    fn affordance() -> Affordance {
        Affordance::new(ZoneAttributes::default())
    }

    fn files(names: &[&str]) -> DropData {
        DropData::Files(names.iter().map(PathBuf::from).collect())
    }

    #[test]
    fn click_opens_picker_once_per_click() {
        let surface = RecordingSurface::default();
        let affordance = affordance();

        let response = affordance.handle(&surface, &Event::Clicked);
        assert_eq!(response, EventResponse::Ignored);
        assert_eq!(surface.picker_opens(), 1);

        affordance.handle(&surface, &Event::Clicked);
        assert_eq!(surface.picker_opens(), 2);
    }

    #[test]
    fn dragover_highlights_idempotently() {
        let surface = RecordingSurface::default();
        let affordance = affordance();

        for _ in 0..3 {
            let response = affordance.handle(
                &surface,
                &Event::DragOver {
                    data: DropData::None,
                },
            );
            assert_eq!(response, EventResponse::DropAccepted(DropOperation::Copy));
            assert_eq!(surface.background().as_deref(), Some("#e1f5fe"));
        }
    }

    #[test]
    fn dragleave_restores_idle_regardless_of_prior_state() {
        let surface = RecordingSurface::default();
        let affordance = affordance();

        affordance.handle(&surface, &Event::DragLeft);
        assert_eq!(surface.background().as_deref(), Some("white"));

        affordance.handle(
            &surface,
            &Event::DragOver {
                data: DropData::None,
            },
        );
        affordance.handle(&surface, &Event::DragLeft);
        assert_eq!(surface.background().as_deref(), Some("white"));
    }

    #[test]
    fn drop_transfers_files_and_restores_idle() {
        let surface = RecordingSurface::default();
        let affordance = affordance();

        affordance.handle(
            &surface,
            &Event::DragOver {
                data: DropData::None,
            },
        );
        assert_eq!(surface.background().as_deref(), Some("#e1f5fe"));

        let response = affordance.handle(
            &surface,
            &Event::Dropped {
                data: files(&["a.txt"]),
            },
        );
        assert_eq!(response, EventResponse::Handled);
        assert_eq!(surface.transferred(), Some(vec!["a.txt".to_string()]));
        assert_eq!(surface.background().as_deref(), Some("white"));
    }

    #[test]
    fn empty_drop_still_replaces_selection() {
        let surface = RecordingSurface::default();
        let affordance = affordance();

        let response = affordance.handle(
            &surface,
            &Event::Dropped {
                data: DropData::None,
            },
        );
        assert_eq!(response, EventResponse::Handled);
        assert_eq!(surface.transferred(), Some(Vec::new()));
        assert_eq!(surface.background().as_deref(), Some("white"));
    }

    #[test]
    fn custom_colors_are_honored() {
        let surface = RecordingSurface::default();
        let affordance = Affordance::new(ZoneAttributes {
            idle_background: "#fff8e1".into(),
            highlight_background: "#ffe0b2".into(),
        });

        affordance.handle(
            &surface,
            &Event::DragOver {
                data: DropData::None,
            },
        );
        assert_eq!(surface.background().as_deref(), Some("#ffe0b2"));

        affordance.handle(&surface, &Event::DragLeft);
        assert_eq!(surface.background().as_deref(), Some("#fff8e1"));
    }

    #[test]
    fn merge_prefers_drop_accepted_then_handled() {
        let accepted = EventResponse::DropAccepted(DropOperation::Copy);

        assert_eq!(
            merge_responses(accepted, EventResponse::Ignored),
            accepted,
        );
        assert_eq!(
            merge_responses(EventResponse::Ignored, accepted),
            accepted,
        );
        assert_eq!(
            merge_responses(EventResponse::Handled, EventResponse::Ignored),
            EventResponse::Handled,
        );
        assert_eq!(
            merge_responses(EventResponse::Ignored, EventResponse::Handled),
            EventResponse::Handled,
        );
        assert_eq!(
            merge_responses(EventResponse::Ignored, EventResponse::Ignored),
            EventResponse::Ignored,
        );
    }
}
