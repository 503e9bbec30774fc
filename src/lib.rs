//! Source-to-source macros.
//!
//! ```
//! let x = 2;
//! let (value, source) = c3p::stringify!(x * 21);
//! assert_eq!(value, 42);
//! assert_eq!(source, "x * 21");
//! ```
//!
//! ```
//! #[c3p::slope_subset]
//! #[derive(Debug, PartialEq)]
//! enum EasySlope {
//!     BeginnersParadise,
//!     PracticeRun,
//! }
//!
//! assert_eq!(
//!     EasySlope::new(EasySlope::PracticeRun),
//!     Some(EasySlope::PracticeRun)
//! );
//! ```

pub use c3p_macro::{slope_subset, stringify};
