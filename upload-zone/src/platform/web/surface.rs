use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use cursor_icon::CursorIcon;
use web_sys::wasm_bindgen::closure::Closure;
use web_sys::wasm_bindgen::convert::FromWasmAbi;
use web_sys::wasm_bindgen::JsCast;
use web_sys::{DataTransfer, HtmlElement, HtmlInputElement};

use crate::drag_drop::{DropData, DropOperation};
use crate::error::Error;
use crate::event::{Event, EventCallback, EventResponse};
use crate::platform::interface::{HtmlTargetsInterface, OsSurfaceInterface, SurfaceEffects};
use crate::platform::os_surface_handle::OsSurfaceHandle;
use crate::thread_bound::ThreadBound;
use crate::zone::{Affordance, ZoneAttributes, merge_responses};

macro_rules! send_event {
    ($inner:ident, $web_event:expr, $event:expr) => {
        if $inner.send_event($event) != EventResponse::Ignored {
            $web_event.prevent_default();
        }
    };
}

macro_rules! send_drag_event {
    ($inner:ident, $web_event:expr, $event:expr) => {
        match $inner.send_event($event) {
            EventResponse::Ignored => (),
            EventResponse::Handled => $web_event.prevent_default(),
            EventResponse::DropAccepted(operation) => {
                $web_event.prevent_default();
                if let Some(data) = $web_event.data_transfer() {
                    match operation {
                        DropOperation::None => data.set_drop_effect("none"),
                        DropOperation::Copy => data.set_drop_effect("copy"),
                        DropOperation::Move => data.set_drop_effect("move"),
                        DropOperation::Link => data.set_drop_effect("link"),
                    }
                }
            }
        }
    };
}

pub(crate) struct OsSurface {
    inner: Rc<OsSurfaceInner>,
}

impl OsSurface {
    fn drop_data(web_event: &web_sys::DragEvent) -> DropData {
        if let Some(file_list) = web_event.data_transfer().and_then(|d| d.files()) {
            if file_list.length() == 0 {
                DropData::None
            } else {
                DropData::Files(
                    (0..file_list.length())
                        .filter_map(|i| file_list.item(i))
                        .collect(),
                )
            }
        } else {
            DropData::None
        }
    }
}

impl OsSurfaceInterface for OsSurface {
    fn bind(
        zone: HtmlElement,
        input: HtmlInputElement,
        attributes: ZoneAttributes,
        event_callback: Box<EventCallback>,
    ) -> Result<OsSurfaceHandle, Error> {
        let inner = Rc::new(OsSurfaceInner {
            zone,
            input,
            affordance: Affordance::new(attributes),
            event_callback,
            closures: RefCell::new(None),
        });

        let closures = Closures {
            on_click: inner.add_event_listener_zone("click", {
                let inner = inner.clone();
                move |web_event: web_sys::MouseEvent| {
                    send_event!(inner, web_event, Event::Clicked);
                }
            }),

            on_dragover: inner.add_event_listener_zone("dragover", {
                let inner = inner.clone();
                move |web_event: web_sys::DragEvent| {
                    send_drag_event!(
                        inner,
                        web_event,
                        Event::DragOver {
                            data: Self::drop_data(&web_event),
                        }
                    );
                }
            }),

            on_dragleave: inner.add_event_listener_zone("dragleave", {
                let inner = inner.clone();
                move |web_event: web_sys::DragEvent| {
                    send_drag_event!(inner, web_event, Event::DragLeft);
                }
            }),

            on_drop: inner.add_event_listener_zone("drop", {
                let inner = inner.clone();
                move |web_event: web_sys::DragEvent| {
                    send_drag_event!(
                        inner,
                        web_event,
                        Event::Dropped {
                            data: Self::drop_data(&web_event),
                        }
                    );
                }
            }),
        };
        inner.closures.replace(Some(closures));

        let surface = Self { inner };
        surface.set_cursor(Some(CursorIcon::Pointer));
        log::debug!("upload zone attached");

        Ok(OsSurfaceHandle::new(Arc::new(ThreadBound::new(surface))))
    }

    fn set_cursor(&self, cursor: Option<CursorIcon>) {
        self.inner
            .zone
            .style()
            .set_property("cursor", cursor.map(|c| c.name()).unwrap_or("default"))
            .unwrap();
    }
}

impl HtmlTargetsInterface for OsSurface {
    fn zone(&self) -> HtmlElement {
        self.inner.zone.clone()
    }

    fn input(&self) -> HtmlInputElement {
        self.inner.input.clone()
    }
}

struct OsSurfaceInner {
    zone: HtmlElement,
    input: HtmlInputElement,
    affordance: Affordance,
    event_callback: Box<EventCallback>,
    closures: RefCell<Option<Closures>>,
}

impl OsSurfaceInner {
    fn add_event_listener_zone<F: Fn(A) + 'static, A: FromWasmAbi + 'static>(
        &self,
        name: &str,
        f: F,
    ) -> Closure<dyn Fn(A)> {
        let closure = Closure::<dyn Fn(A)>::new(f);
        self.zone
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            .unwrap();
        closure
    }

    fn remove_event_listener_zone<A: FromWasmAbi + 'static>(
        &self,
        name: &str,
        closure: &Closure<dyn Fn(A)>,
    ) {
        self.zone
            .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            .unwrap();
    }

    fn send_event(&self, event: Event) -> EventResponse {
        let policy = self.affordance.handle(self, &event);
        let observed = (self.event_callback)(event);
        merge_responses(policy, observed)
    }
}

impl SurfaceEffects for OsSurfaceInner {
    fn set_background(&self, color: &str) {
        self.zone.style().set_property("background", color).unwrap();
    }

    fn open_picker(&self) {
        self.input.click();
    }

    fn transfer_files(&self, data: &DropData) {
        // `set_files` wants a `FileList`, which has no constructor; a scratch
        // `DataTransfer` provides one. An empty transfer clears the selection.
        let transfer = DataTransfer::new().unwrap();
        if let DropData::Files(files) = data {
            for file in files {
                transfer.items().add_with_file(file).unwrap();
            }
        }
        self.input.set_files(transfer.files().as_ref());
    }
}

impl Drop for OsSurfaceInner {
    fn drop(&mut self) {
        let closures = self.closures.borrow_mut().take().unwrap();

        self.remove_event_listener_zone("click", &closures.on_click);
        self.remove_event_listener_zone("dragover", &closures.on_dragover);
        self.remove_event_listener_zone("dragleave", &closures.on_dragleave);
        self.remove_event_listener_zone("drop", &closures.on_drop);

        let _ = self.zone.style().set_property("cursor", "default");
        log::debug!("upload zone detached");
    }
}

struct Closures {
    on_click: Closure<dyn Fn(web_sys::MouseEvent)>,

    on_dragover: Closure<dyn Fn(web_sys::DragEvent)>,
    on_dragleave: Closure<dyn Fn(web_sys::DragEvent)>,
    on_drop: Closure<dyn Fn(web_sys::DragEvent)>,
}
