//! Command lifecycle
//!
//! Hosts integrate the completer by activating an [`Extension`] once and
//! routing the bound keystroke to [`Extension::execute`]. Activation and
//! deactivation are plumbing; the functional core lives in
//! [`crate::complete`].

use crate::action::EditAction;
use crate::config::CstConfig;
use crate::host::{run_completion, HostEditor};

/// Name the completion command is registered under
pub const COMMAND_NAME: &str = "complete-statement.complete";

/// An activated instance of the completer, holding its configuration
#[derive(Debug, Clone)]
pub struct Extension {
    config: CstConfig,
}

impl Extension {
    /// Register the command. The returned value is the handle the host routes
    /// invocations through.
    pub fn activate(config: CstConfig) -> Self {
        eprintln!("\"{COMMAND_NAME}\" is activated.");
        Self { config }
    }

    pub fn config(&self) -> &CstConfig {
        &self.config
    }

    /// Run one completion keystroke against a host editor
    pub fn execute<H: HostEditor + ?Sized>(&self, host: &mut H) -> EditAction {
        run_completion(host, &self.config.options())
    }

    /// Unregister the command. No state outlives activation.
    pub fn deactivate(self) {
        eprintln!("\"{COMMAND_NAME}\" is deactivated.");
    }
}
