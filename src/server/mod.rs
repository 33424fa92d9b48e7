//! HTTP API proxying the Figma endpoints and triggering documentation runs.
//!
//! # Endpoints
//!
//! | Method | Path                              | Description                         |
//! |--------|-----------------------------------|-------------------------------------|
//! | GET    | `/files/{fileKey}`                | Raw file document                   |
//! | GET    | `/files/{fileKey}/nodes?ids=a,b`  | Raw nodes, keyed by id              |
//! | GET    | `/files/{fileKey}/styles`         | Published styles                    |
//! | GET    | `/files/{fileKey}/components`     | Published components                |
//! | GET    | `/design-system/{fileKey}`        | Generate the Markdown documentation |
//! | GET    | `/design-tokens/{fileKey}`        | Acknowledges the request only       |
//! | GET    | `/health`                         | Health check                        |
//!
//! Failures answer 500 with `{ "error": ... }`; unknown routes answer 404.

mod api;

pub use api::{dispatch, ApiReply, ApiServer, AppState, Route};
