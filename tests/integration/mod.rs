//! Integration tests for tenant scoping.
//!
//! Every test that touches the store checks both sides of the boundary: what
//! the caller's tenant may see, and that the other tenant's rows stay out.

pub mod assignment_visibility;
pub mod scoped_requests;
