//! Shared UI components exported for routes.

pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use layout::PortalShell;
pub(crate) use ui::{Alert, AlertKind, Button};
