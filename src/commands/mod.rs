//! Command implementations for the site header CLI
//!
//! Each command module handles:
//! - Validating its arguments
//! - Driving the header against a location or document
//! - Building the response

pub mod current;
pub mod inject;
pub mod key;
pub mod navigate;
pub mod neighbors;
pub mod pages;
pub mod render;
pub mod utils;

pub use current::CurrentCommand;
pub use inject::InjectCommand;
pub use key::KeyCommand;
pub use navigate::NavigateCommand;
pub use neighbors::NeighborsCommand;
pub use pages::PagesCommand;
pub use render::RenderCommand;

use crate::error::Result;
use crate::header::Header;
use crate::types::CommandResponse;

pub trait Execute {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResponse>;
}

pub struct CommandContext {
    pub header: Header,
}

impl CommandContext {
    pub fn new(header: Header) -> Self {
        Self { header }
    }
}
