//! Route paths, relative to the API base URL.

/// `POST` save, `GET` load (`?template=`), `DELETE` delete (`?template=`).
pub const CONFIG: &str = "/api/builder/config";

/// `POST` add (`{domain, template}`), `DELETE` remove (`?domain=&template=`).
pub const DOMAINS: &str = "/api/domains";

/// `GET` status (`?domain=&t=<cache-buster>`).
pub const DOMAIN_STATUS: &str = "/api/domains/status";
