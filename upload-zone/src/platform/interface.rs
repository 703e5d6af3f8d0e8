use crate::drag_drop::DropData;

/// The effects the affordance policy can apply to its surface. Implemented by
/// the web backend against the real DOM and by an in-memory recorder in
/// tests.
pub(crate) trait SurfaceEffects {
    fn set_background(&self, color: &str);
    fn open_picker(&self);
    fn transfer_files(&self, data: &DropData);
}

#[cfg(target_arch = "wasm32")]
pub(crate) trait OsSurfaceInterface: Sized {
    fn bind(
        zone: web_sys::HtmlElement,
        input: web_sys::HtmlInputElement,
        attributes: crate::zone::ZoneAttributes,
        event_callback: Box<crate::event::EventCallback>,
    ) -> Result<super::os_surface_handle::OsSurfaceHandle, crate::error::Error>;

    fn set_cursor(&self, cursor: Option<cursor_icon::CursorIcon>);
}

#[cfg(target_arch = "wasm32")]
pub trait HtmlTargetsInterface {
    fn zone(&self) -> web_sys::HtmlElement;
    fn input(&self) -> web_sys::HtmlInputElement;
}
