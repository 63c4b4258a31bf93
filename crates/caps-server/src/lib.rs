//! HTTP server for caps
//!
//! Accepts JSON over HTTP, builds a `RequestContext` per request and hands it
//! to the capability dispatcher. The server owns no business logic.
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /health` | Liveness and bound capability count |
//! | `GET /capabilities` | Bound capability names and interfaces |
//! | `* /<path..>` | Routed to domain functions through the dispatcher |

pub mod init;
pub mod transport;

pub use init::{load_config, run_server};
pub use transport::http::{HttpTransport, HttpTransportConfig, TransportState};
