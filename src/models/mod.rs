mod criteria;
mod page;
mod property;
mod recommendation;

pub use criteria::FilterCriteria;
pub use page::{visible_pages, Page, PageLink, DEFAULT_PAGE_WINDOW};
pub use property::{Property, PropertyKind};
pub use recommendation::{Recommendation, SimilarityReason};
