//! Logging targets for Horizon Tabstrip.
//!
//! The crate logs through `tracing`. To see output, install a subscriber in
//! the application and filter on the targets below:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_tabstrip::render=trace")
//!     .init();
//! ```

/// Target names for log filtering.
pub mod targets {
    /// Intrinsic size recomputation.
    pub const SIZE: &str = "horizon_tabstrip::size";
    /// Selection rendering and font transitions.
    pub const RENDER: &str = "horizon_tabstrip::render";
    /// Attachment and label constraints.
    pub const LAYOUT: &str = "horizon_tabstrip::layout";
    /// Style file loading.
    pub const STYLE: &str = "horizon_tabstrip::style";
}
