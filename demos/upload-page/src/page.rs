use upload_zone::{Event, EventResponse, UploadZone, ZoneAttributes};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
fn start() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let status = document.query_selector("#status").ok().flatten();

    let zone = UploadZone::attach_in(
        &document,
        ".drop-zone",
        "input[type=file]",
        ZoneAttributes::default(),
        Box::new(move |event| {
            if let Event::Dropped { data } = event {
                if let Some(status) = &status {
                    let names = data.file_names().join(", ");
                    status.set_text_content(Some(&format!(
                        "{} file(s) selected: {names}",
                        data.len(),
                    )));
                }
            }
            EventResponse::Ignored
        }),
    )
    .map_err(|error| JsValue::from_str(&error.to_string()))?;

    // The listeners live for the whole page session.
    std::mem::forget(zone);

    Ok(())
}
