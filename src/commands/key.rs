//! Key command implementation
//!
//! Installs the header on an empty document at the given location and
//! dispatches a single key-down event to it.

use std::str::FromStr;

use crate::commands::utils::validate_key_name;
use crate::commands::{CommandContext, Execute};
use crate::document::StaticDocument;
use crate::error::Result;
use crate::output::format_outcome;
use crate::types::{CommandResponse, Key};
use serde_json::json;

pub struct KeyCommand {
    pub path: String,
    pub key: String,
}

impl KeyCommand {
    pub fn new(path: String, key: String) -> Self {
        Self { path, key }
    }
}

impl Execute for KeyCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResponse> {
        validate_key_name(&self.key)?;
        let Ok(key) = Key::from_str(&self.key);

        let mut document = StaticDocument::new(String::new(), self.path.clone());
        ctx.header.install(&mut document);
        let outcome = document.fire_key_down(&key);

        let text = format_outcome(&outcome);
        Ok(CommandResponse::ok(
            json!({
                "page": ctx.header.page_at(&self.path),
                "key": key.as_str(),
                "outcome": outcome,
            }),
            text,
        ))
    }
}
