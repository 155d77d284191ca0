//! Current command implementation
//!
//! Resolves which page a location path refers to.

use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::types::CommandResponse;
use serde_json::json;

pub struct CurrentCommand {
    pub path: String,
}

impl CurrentCommand {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl Execute for CurrentCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResponse> {
        let page = ctx.header.page_at(&self.path);
        let registered = ctx.header.registry().contains(&page);

        Ok(CommandResponse::ok(
            json!({
                "page": page,
                "registered": registered,
                "title": ctx.header.registry().title_or_key(&page),
            }),
            page.clone(),
        ))
    }
}
