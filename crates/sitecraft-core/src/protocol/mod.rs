//! JSON wire protocol for the remote configuration store and domain API.
//!
//! Both services speak camelCase JSON over HTTP.  This module only defines
//! the message shapes and the route paths; the transport lives in the
//! builder's infrastructure layer.

pub mod messages;
pub mod routes;
