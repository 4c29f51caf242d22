//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router assembly, middleware, fallback
//! └── api_routes.rs   - /api/* routes
//! ```

/// Main router creation
pub mod router;

/// API routes
pub mod api_routes;

pub use router::create_router;
