//! Game catalog records: snapshot mapping, search and facet filters,
//! sorting, pagination, and details-view helpers.
//!
//! Records come from a document-store JSON export (see [`snapshot`]). The
//! query layer works on borrowed slices and never mutates the catalog.

pub mod details;
pub mod facets;
pub mod query;
pub mod snapshot;
pub mod types;

pub use details::{PriceRow, find_by_title, format_play_time, price_rows, store_search_url, subtitle};
pub use facets::{ChecklistOption, Facet, all_checklists, checklist, facet_checklist};
pub use query::{PAGE_SIZE, Page, Query, SortKey, compare_titles, count_label, paginate, total_pages};
pub use snapshot::{
    CatalogError, CatalogOrigin, load_or_sample, load_snapshot, records_from_value, sample_records,
};
pub use types::*;
