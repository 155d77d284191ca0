//! Inject command implementation
//!
//! Loads an HTML file as a document, fires document-ready so the header is
//! inserted at the start of `<body>`, then writes the result out.

use std::fs;
use std::path::PathBuf;

use crate::commands::{CommandContext, Execute};
use crate::document::StaticDocument;
use crate::error::Result;
use crate::types::CommandResponse;
use serde_json::json;

pub struct InjectCommand {
    pub file: PathBuf,
    pub path: Option<String>,
    pub in_place: bool,
}

impl InjectCommand {
    pub fn new(file: PathBuf, path: Option<String>, in_place: bool) -> Self {
        Self {
            file,
            path,
            in_place,
        }
    }

    /// Location of the document, defaulting to the file's absolute path
    ///
    /// A relative `cart/index.html` would resolve to home, so the file is
    /// canonicalized to keep its parent directory as the page key.
    fn location(&self) -> Result<String> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => {
                let absolute = fs::canonicalize(&self.file)?;
                Ok(absolute.to_string_lossy().replace('\\', "/"))
            }
        }
    }
}

impl Execute for InjectCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResponse> {
        let html = fs::read_to_string(&self.file)?;
        let location = self.location()?;

        let mut document = StaticDocument::new(html, location.clone());
        ctx.header.install(&mut document);
        document.fire_ready()?;
        let html = document.into_html();

        let page = ctx.header.page_at(&location);
        tracing::info!(file = %self.file.display(), page = %page, "injected header");

        if self.in_place {
            fs::write(&self.file, &html)?;
            Ok(CommandResponse::ok(
                json!({ "file": self.file, "page": page }),
                format!("{}: injected header for '{}'", self.file.display(), page),
            ))
        } else {
            Ok(CommandResponse::ok(
                json!({ "file": self.file, "page": page, "html": html }),
                html,
            ))
        }
    }
}
