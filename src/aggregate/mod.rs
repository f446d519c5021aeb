//! Aggregation core: turns filtered survey records into the series each chart consumes.
//!
//! Every operation is a pure function of its inputs, recomputed from scratch on
//! each call. Degenerate input produces degenerate output (empty sequences,
//! NaN entries, infinite sentinels) rather than an error.

pub mod group;
pub mod scan;
pub mod series;
pub mod summary;
pub mod types;
pub mod utility;

pub use group::{group_average, group_by, top_n};
pub use scan::global_scan;
pub use series::grouped_time_series;
pub use summary::five_number_summary;
pub use types::{ColorDomain, FiveNumber, MapScan, Ranked, TimeKey, TimePoint, TimeRepr, TimeSeries};
