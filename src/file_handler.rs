use base64::Engine as _;

use crate::error::ExportResult;
use crate::export::ExportedImage;

/// Inline the PNG as a `data:` URL. Nothing has to be released after the
/// browser has started the download.
pub fn png_data_url(bytes: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Where an export ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveLocation {
    /// Written to disk
    #[cfg(not(target_arch = "wasm32"))]
    File(std::path::PathBuf),
    /// Offered to the browser as a download
    #[cfg(target_arch = "wasm32")]
    Download(String),
}

impl std::fmt::Display for SaveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(not(target_arch = "wasm32"))]
            SaveLocation::File(path) => write!(f, "{}", path.display()),
            #[cfg(target_arch = "wasm32")]
            SaveLocation::Download(name) => write!(f, "download {name}"),
        }
    }
}

pub struct FileHandler {
    #[cfg(not(target_arch = "wasm32"))]
    export_dir: std::path::PathBuf,
}

impl FileHandler {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(export_dir: impl Into<std::path::PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new(_export_dir: impl Into<std::path::PathBuf>) -> Self {
        Self {}
    }

    /// Write the image into the export directory
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self, image: &ExportedImage) -> ExportResult<SaveLocation> {
        std::fs::create_dir_all(&self.export_dir)?;
        let path = self.export_dir.join(&image.file_name);
        std::fs::write(&path, &image.bytes)?;
        log::info!("Saved {} ({} bytes)", path.display(), image.bytes.len());
        Ok(SaveLocation::File(path))
    }

    /// Hand the image to the browser as a file download
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self, image: &ExportedImage) -> ExportResult<SaveLocation> {
        use crate::error::ExportError;
        use wasm_bindgen::JsCast;

        fn js_error(err: wasm_bindgen::JsValue) -> ExportError {
            ExportError::Browser(format!("{err:?}"))
        }

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ExportError::Browser("no document available".to_owned()))?;

        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| ExportError::Browser("could not create a link element".to_owned()))?;
        anchor.set_href(&png_data_url(&image.bytes));
        anchor.set_download(&image.file_name);
        anchor.click();

        log::info!("Offered {} for download", image.file_name);
        Ok(SaveLocation::Download(image.file_name.clone()))
    }
}
