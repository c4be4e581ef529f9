//! Service registry
//!
//! Environment-scoped lookup of gnosis stack service URLs from a JSON
//! document. Deployed environments reference their URLs through `${VAR}`
//! environment indirection, resolved at lookup time.

mod service_registry;
mod types;

pub use service_registry::ServiceRegistry;
pub use types::{ServiceEntry, ServiceInfo, UrlSpec};
