use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::output::format_neighbors;
use crate::types::{CommandResponse, NeighborsData};

pub struct NeighborsCommand {
    pub path: String,
}

impl NeighborsCommand {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl Execute for NeighborsCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResponse> {
        let current = ctx.header.page_at(&self.path);
        let neighbors = ctx.header.neighbors(&current);

        let data = NeighborsData {
            current,
            previous: neighbors.previous,
            next: neighbors.next,
        };

        let text = format_neighbors(&data);
        Ok(CommandResponse::ok(serde_json::to_value(data)?, text))
    }
}
