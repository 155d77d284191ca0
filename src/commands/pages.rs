use crate::commands::{CommandContext, Execute};
use crate::error::Result;
use crate::output::format_page_list;
use crate::types::{CommandResponse, PageListData};

#[derive(Default)]
pub struct PagesCommand {}

impl Execute for PagesCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResponse> {
        let registry = ctx.header.registry();
        let data = PageListData {
            site_title: registry.site_title().to_string(),
            home_path: registry.home_path().to_string(),
            pages: registry.to_entries(),
            order: registry.order().to_vec(),
        };

        let text = format_page_list(&data);
        Ok(CommandResponse::ok(serde_json::to_value(data)?, text))
    }
}
