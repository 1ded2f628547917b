//! Layout components shared across routes.

mod portal_shell;

pub(crate) use portal_shell::PortalShell;
