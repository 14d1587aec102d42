//! Document shell: the outermost HTML frame every page is rendered into.

use super::html::{escape, js_string};
use super::metadata::PageMetadata;

/// Element id the client bundle mounts into.
pub const MOUNT_ID: &str = "quotos-root";

/// Who owns the document head when the client bundle runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadMode {
    /// Page came from quotos-server; title and description are already in the head.
    ServerRendered,
    /// Bare page such as `trunk serve`; the client declares the metadata.
    ClientOnly,
}

impl HeadMode {
    /// Server pages always carry the [`MOUNT_ID`] element.
    pub fn detect(mount_point_present: bool) -> Self {
        if mount_point_present {
            HeadMode::ServerRendered
        } else {
            HeadMode::ClientOnly
        }
    }

    pub fn client_declares_metadata(self) -> bool {
        matches!(self, HeadMode::ClientOnly)
    }
}

/// Extra head resources: stylesheets and the optional WASM bootstrap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellAssets {
    stylesheets: Vec<String>,
    wasm_bundle: Option<WasmBundle>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct WasmBundle {
    js: String,
    wasm: String,
}

impl ShellAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheets.push(href.into());
        self
    }

    /// Load a wasm-bindgen bundle as a module script from the head.
    pub fn with_wasm_bundle(mut self, js: impl Into<String>, wasm: impl Into<String>) -> Self {
        self.wasm_bundle = Some(WasmBundle {
            js: js.into(),
            wasm: wasm.into(),
        });
        self
    }

    pub fn has_wasm_bundle(&self) -> bool {
        self.wasm_bundle.is_some()
    }

    fn render(&self, out: &mut String) {
        for href in &self.stylesheets {
            out.push_str(&format!(
                r#"<link rel="stylesheet" href="{}">"#,
                escape(href)
            ));
        }
        if let Some(bundle) = &self.wasm_bundle {
            // Module scripts are deferred, so the body exists when init runs.
            out.push_str(&format!(
                r#"<script type="module">import init from '{}';init({{ module_or_path: '{}' }});</script>"#,
                js_string(&bundle.js),
                js_string(&bundle.wasm)
            ));
        }
    }
}

/// Renders complete documents around page content.
#[derive(Debug, Clone, Default)]
pub struct DocumentShell {
    metadata: PageMetadata,
    assets: ShellAssets,
}

impl DocumentShell {
    pub fn new(metadata: PageMetadata, assets: ShellAssets) -> Self {
        Self { metadata, assets }
    }

    pub fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }

    pub fn assets(&self) -> &ShellAssets {
        &self.assets
    }

    /// Wrap `body` in a full document.
    ///
    /// The body content is inserted verbatim; only metadata is escaped.
    pub fn render(&self, body: &str) -> String {
        let mut out = String::with_capacity(body.len() + 512);

        out.push_str("<!DOCTYPE html>");
        out.push_str(&format!(
            r#"<html lang="{}">"#,
            escape(self.metadata.lang())
        ));
        out.push_str("<head>");
        out.push_str(r#"<meta charset="utf-8">"#);
        out.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
        out.push_str(&format!(
            "<title>{}</title>",
            escape(self.metadata.title())
        ));
        out.push_str(&format!(
            r#"<meta name="description" content="{}">"#,
            escape(self.metadata.description())
        ));
        self.assets.render(&mut out);
        out.push_str("</head>");
        out.push_str("<body>");
        out.push_str(body);
        out.push_str("</body>");
        out.push_str("</html>");

        out
    }
}

/// Wrap page content in the element the client bundle mounts into.
pub fn mount_point(content: &str) -> String {
    format!(r#"<div id="{MOUNT_ID}">{content}</div>"#)
}
