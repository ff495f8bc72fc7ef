//! Netlify function that looks up an interview in Supabase and returns the
//! candidate name, job title, job description and recruiter questions as JSON.
//!
//! ```text
//! POST { "interviewId": "abc-123" }
//!
//! 200 {
//!   "candidateName": "Jane Doe",
//!   "jobTitle": "Backend Engineer",
//!   "jobDescription": "No job description provided.",
//!   "questions": ["Tell me about yourself", "Why this role?"]
//! }
//! ```
//!
//! Every failure answers `{"error": "..."}` with a 400 or 500 status, and every
//! response carries permissive CORS headers. `OPTIONS` pre-flight probes are
//! acknowledged without touching the store.

pub mod config;
pub mod details;
pub mod error;
pub mod handler;
pub mod request;
pub mod response;
pub mod store;
pub mod supabase;

pub use crate::{
    config::Config,
    details::InterviewDetails,
    error::{ConfigError, LookupError, StoreError},
    handler::{InterviewDetailsHandler, InterviewDetailsService},
    store::InterviewStore,
    supabase::SupabaseStore,
};
