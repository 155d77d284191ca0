//! Host environment seam
//!
//! The header never touches a browser directly. It reads the location,
//! assigns navigation targets and inserts markup through [`Host`], and
//! subscribes to lifecycle and keyboard events through [`EventHost`].

use crate::error::Result;
use crate::types::{EventOutcome, Key};

/// Listener run once when the document has finished loading
pub type ReadyListener = Box<dyn FnOnce(&mut dyn Host) -> Result<()>>;

/// Listener run for every key-down event
pub type KeyDownListener = Box<dyn FnMut(&mut dyn Host, &Key) -> EventOutcome>;

/// Page environment the header runs in
pub trait Host {
    /// Current location path, e.g. `/shop/cart/index.html`
    fn pathname(&self) -> String;

    /// Full-page navigation to `href`
    fn assign_location(&mut self, href: &str);

    /// Insert markup as the first child content of the document body
    fn insert_at_body_start(&mut self, html: &str) -> Result<()>;
}

/// Host that dispatches document events to subscribed listeners
pub trait EventHost: Host {
    fn on_ready(&mut self, listener: ReadyListener);

    fn on_key_down(&mut self, listener: KeyDownListener);
}
