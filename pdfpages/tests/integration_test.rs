#[path = "integration/common/mod.rs"]
mod common;

#[path = "integration/split_merge.rs"]
mod split_merge;

#[path = "integration/analysis.rs"]
mod analysis;

#[path = "integration/error_cases.rs"]
mod error_cases;
