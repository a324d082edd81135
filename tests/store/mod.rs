//! Repository tests against a live PostgreSQL instance.
//!
//! Run with `DATABASE_URL=postgres://... cargo test -- --ignored`.
