use crate::drag_drop::{DropData, DropOperation};

/// One platform-delivered interaction on the drop zone.
#[derive(Clone, Debug)]
pub enum Event {
    Clicked,

    /// Fires repeatedly while a drag hovers the zone. The file set is
    /// whatever the platform exposes mid-gesture; most browsers only reveal
    /// it on drop.
    DragOver {
        data: DropData,
    },

    DragLeft,

    Dropped {
        data: DropData,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EventResponse {
    Handled,
    Ignored,
    DropAccepted(DropOperation),
}

pub type EventCallback = dyn Fn(Event) -> EventResponse;
