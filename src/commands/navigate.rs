//! Navigate command implementation
//!
//! Reports where navigating to a page would take the browser. Unregistered
//! pages are a silent no-op, not an error.

use crate::commands::utils::validate_page;
use crate::commands::{CommandContext, Execute};
use crate::document::StaticDocument;
use crate::error::Result;
use crate::types::CommandResponse;
use serde_json::json;

pub struct NavigateCommand {
    pub page: String,
}

impl NavigateCommand {
    pub fn new(page: String) -> Self {
        Self { page }
    }
}

impl Execute for NavigateCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResponse> {
        validate_page(&self.page)?;

        let mut document = StaticDocument::new(String::new(), "/");
        let href = ctx.header.navigate_to(&mut document, &self.page);

        let text = href.clone().unwrap_or_default();
        Ok(CommandResponse::ok(
            json!({ "page": self.page, "href": href }),
            text,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::Header;

    #[test]
    fn registered_page_reports_target() {
        let ctx = CommandContext::new(Header::default());
        let response = NavigateCommand::new("register".to_string())
            .execute(&ctx)
            .unwrap();

        assert_eq!(response.text.as_deref(), Some("../register/index.html"));
        assert_eq!(response.data.unwrap()["href"], "../register/index.html");
    }

    #[test]
    fn unregistered_page_reports_nothing() {
        let ctx = CommandContext::new(Header::default());
        let response = NavigateCommand::new("about".to_string())
            .execute(&ctx)
            .unwrap();

        assert!(response.success);
        assert_eq!(response.text.as_deref(), Some(""));
        assert!(response.data.unwrap()["href"].is_null());
    }

    #[test]
    fn blank_page_is_rejected() {
        let ctx = CommandContext::new(Header::default());
        assert!(NavigateCommand::new(" ".to_string()).execute(&ctx).is_err());
    }
}
