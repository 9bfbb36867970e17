//! Icon naming: case conversion, base-name extraction, size
//! classification, and grouping of size variants.

mod case;
mod group;
mod size;

pub use case::{
    NameCase, safe_component_name, safe_file_name, strip_size_markers, to_component_name,
};
pub use group::{GroupedIcon, group_by_base_name};
pub use size::{
    SizeClass, determine_size_class, extract_base_name, nearest_standard_size,
};
