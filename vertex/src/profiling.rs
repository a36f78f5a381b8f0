//! Profiling support via Tracy.
//!
//! Enabled with the `profiling` Cargo feature. When the feature is off, the
//! macros expand to nothing.
//!
//! ```ignore
//! use redlilium_vertex::profile_scope;
//!
//! fn upload_indices() {
//!     profile_scope!("upload_indices");
//!     // ...
//! }
//! ```

#[cfg(feature = "profiling")]
pub use tracy_client::{self, span};

/// Create a profiling span for the current scope.
///
/// The span ends when the scope exits.
#[macro_export]
#[cfg(feature = "profiling")]
macro_rules! profile_scope {
    ($name:expr) => {
        let _profile_span = $crate::profiling::span!($name);
    };
}

/// Create a profiling span (no-op when profiling disabled).
#[macro_export]
#[cfg(not(feature = "profiling"))]
macro_rules! profile_scope {
    ($name:expr) => {};
}
