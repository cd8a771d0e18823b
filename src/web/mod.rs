//! HTTP API for breed resolution.
//!
//! A thin axum layer over [`Resolver`](crate::resolver::Resolver) that turns
//! its structured outcomes into HTTP status codes and user prompts.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! breed-resolver serve
//!
//! # Bind to all interfaces with a custom catalog
//! breed-resolver serve --address 0.0.0.0 --catalog breeds.json
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /api/resolve?species=dog&breed=lab` - Resolve a breed name
//! - `GET /api/breeds?species=cat` - List quotable breeds for a species
//!
//! | Outcome | Status |
//! |---------|--------|
//! | Resolved or multiple breeds found | 200 |
//! | Invalid species or breed name | 400 |
//! | No breed matched | 404 |
//! | Breed data unavailable | 500 |

pub mod server;
