//! # Pagination
//!
//! General purpose pagination metadata for HTTP APIs: turns a total item
//! count, a page size and a requested page number into the offset, page
//! count and adjacent pages needed to slice a collection, plus a
//! JSON-serializable summary for API responses.
//!
//! ## Architecture
//!
//! - **paginator**: Core arithmetic and normalization (`Paginator`) plus the
//!   lazy page sequence (`PagesStream`)
//! - **summary**: Wire-format snapshot for API responses (`PageSummary`)
//! - **extract**: Axum integration, `page` query-parameter extraction
//! - **error**: Crate error type
//!
//! ## Example
//!
//! ```
//! use pagination::Paginator;
//!
//! let paginator = Paginator::new(28, 25, 2);
//! assert_eq!(paginator.current_page(), 2);
//! assert_eq!(paginator.offset(), 25);
//! assert_eq!(paginator.number_of_pages(), 2);
//!
//! let summary = paginator.to_summary_with_data(vec!["item-26", "item-27", "item-28"]);
//! assert_eq!(summary.total_pages, 2);
//! ```

pub mod error;
pub mod extract;
pub mod paginator;
pub mod summary;

pub use error::PaginationError;
pub use extract::RequestedPage;
pub use paginator::{PagesStream, Paginator};
pub use summary::PageSummary;
