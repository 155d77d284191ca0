use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::types::CommandResponse;
use serde_json::json;

pub struct RenderCommand {
    pub path: String,
}

impl RenderCommand {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl Execute for RenderCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResponse> {
        let current = ctx.header.page_at(&self.path);
        let html = ctx.header.render(&current);

        Ok(CommandResponse::ok(
            json!({ "page": current, "html": html }),
            html,
        ))
    }
}
