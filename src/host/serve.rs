//! Async driver: feed host commands from a channel, settle after each burst.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::{ComponentId, Host, HostError};
use crate::dom::Selector;
use crate::event::KeyEvent;

/// A page-level action applied to a [`Host`] by [`serve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    Attach(ComponentId),
    Detach(ComponentId),
    SetAttribute {
        component: ComponentId,
        name: String,
        value: String,
    },
    RemoveAttribute {
        component: ComponentId,
        name: String,
    },
    Click {
        component: ComponentId,
        selector: Selector,
    },
    KeyDown(KeyEvent),
}

impl Host {
    /// Apply one command without settling the event loop.
    pub fn apply(&mut self, command: HostCommand) -> Result<(), HostError> {
        match command {
            HostCommand::Attach(id) => self.attach(id),
            HostCommand::Detach(id) => self.detach(id),
            HostCommand::SetAttribute {
                component,
                name,
                value,
            } => self.set_attribute(component, &name, value),
            HostCommand::RemoveAttribute { component, name } => {
                self.remove_attribute(component, &name)
            }
            HostCommand::Click {
                component,
                selector,
            } => self.click_selector(component, &selector).map(|_| ()),
            HostCommand::KeyDown(event) => {
                self.key_down(event);
                Ok(())
            }
        }
    }
}

/// Drive `host` from `rx` until every sender is dropped, then hand it back.
///
/// Each wake-up applies every command already queued, then runs event-loop
/// turns until idle, so a burst of attribute changes costs one render.
/// Commands that fail are logged and skipped.
pub async fn serve(mut host: Host, mut rx: mpsc::UnboundedReceiver<HostCommand>) -> Host {
    while let Some(first) = rx.recv().await {
        let mut burst = 1;
        apply_logged(&mut host, first);
        while let Ok(command) = rx.try_recv() {
            apply_logged(&mut host, command);
            burst += 1;
        }
        let turns = host.run_until_idle();
        debug!(burst, turns, "settled command burst");
    }
    debug!("command channel closed");
    host
}

fn apply_logged(host: &mut Host, command: HostCommand) {
    if let Err(err) = host.apply(command) {
        warn!(%err, "host command failed");
    }
}
