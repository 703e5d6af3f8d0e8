pub mod drag_drop;
pub mod error;
pub mod event;
pub mod thread_bound;
pub mod zone;

pub use drag_drop::{DropData, DropOperation};
pub use error::Error;
pub use event::{Event, EventCallback, EventResponse};
pub use zone::ZoneAttributes;

#[cfg(target_arch = "wasm32")]
pub use platform::interface::HtmlTargetsInterface;
#[cfg(target_arch = "wasm32")]
pub use zone::UploadZone;

mod platform;
