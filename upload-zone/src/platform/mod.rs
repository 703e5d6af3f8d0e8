pub(crate) mod interface;

#[cfg(target_arch = "wasm32")]
pub(crate) mod os_surface_handle;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub(crate) use web::surface::OsSurface;
