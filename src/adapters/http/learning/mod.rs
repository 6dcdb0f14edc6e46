//! HTTP adapter for learning endpoints.
//!
//! - `POST /api/clients/:client_id/progress` - Record content progress
//! - `GET /api/clients/:client_id/progress` - Read the progress view
//! - `POST /api/clients/:client_id/quizzes/:quiz_id/attempts` - Submit a quiz attempt

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::learning_routes;
