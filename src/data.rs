use std::ffi::OsStr;
use std::path::Path;

use crate::document_name::DocumentName;

/// How a document is presented on its view page. Resolved once from the
/// filename, never re-derived by handlers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RenderMode {
    Markdown,
    PlainText,
}

impl RenderMode {
    pub fn for_name(name: &DocumentName) -> RenderMode {
        match Path::new(name as &str).extension().and_then(OsStr::to_str) {
            Some("md") | Some("markdown") => RenderMode::Markdown,
            _ => RenderMode::PlainText,
        }
    }
}

/// Listing entry for one stored document.
#[derive(Clone, Debug)]
pub struct DocumentInfo {
    pub name: DocumentName,
    pub render_mode: RenderMode,
}

impl DocumentInfo {
    pub fn new(name: DocumentName) -> DocumentInfo {
        let render_mode = RenderMode::for_name(&name);
        DocumentInfo { name, render_mode }
    }

    pub fn view_url(&self) -> String {
        format!("/{}/view", &*self.name)
    }

    pub fn edit_url(&self) -> String {
        format!("/{}/edit", &*self.name)
    }

    pub fn delete_url(&self) -> String {
        format!("/{}/delete", &*self.name)
    }
}
