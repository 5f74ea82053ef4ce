//! Client-side tabular export and blob downloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! Report pages build a CSV in memory and hand it to the browser as a blob
//! save; document and invoice downloads reuse the same save path with the
//! bytes fetched from the backend.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

/// Czech Excel expects semicolon-separated fields.
const SEPARATOR: char = ';';

/// Quote a field when it contains the separator, quotes, or line breaks.
pub fn csv_field(raw: &str) -> String {
    if raw.contains(SEPARATOR) || raw.contains('"') || raw.contains('\n') || raw.contains('\r') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_owned()
    }
}

/// Build a semicolon-separated CSV document with CRLF line endings.
/// The leading BOM is required for Excel to detect UTF-8.
pub fn build_csv(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::from('\u{feff}');
    let header_line = header
        .iter()
        .map(|field| csv_field(field))
        .collect::<Vec<_>>()
        .join(";");
    out.push_str(&header_line);
    out.push_str("\r\n");
    for row in rows {
        let line = row
            .iter()
            .map(|field| csv_field(field))
            .collect::<Vec<_>>()
            .join(";");
        out.push_str(&line);
        out.push_str("\r\n");
    }
    out
}

/// Hand `bytes` to the browser as a file save via an object URL.
pub fn save_bytes(filename: &str, mime: &str, bytes: &[u8]) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::of1(&array);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };
        if let Ok(element) = document.create_element("a") {
            let _ = element.set_attribute("href", &url);
            let _ = element.set_attribute("download", filename);
            if let Ok(anchor) = element.dyn_into::<web_sys::HtmlElement>() {
                anchor.click();
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, mime, bytes);
    }
}

/// Save a CSV document under `filename`.
pub fn download_csv(filename: &str, content: &str) {
    save_bytes(filename, "text/csv;charset=utf-8", content.as_bytes());
}
