use std::ops::Deref;
use std::sync::Arc;

use crate::thread_bound::ThreadBound;

use super::OsSurface;

pub(crate) struct OsSurfaceHandle {
    os_surface: Arc<ThreadBound<OsSurface>>,
}

impl OsSurfaceHandle {
    pub(super) fn new(os_surface: Arc<ThreadBound<OsSurface>>) -> Self {
        Self { os_surface }
    }
}

impl Deref for OsSurfaceHandle {
    type Target = OsSurface;

    fn deref(&self) -> &Self::Target {
        self.os_surface.as_ref()
    }
}
