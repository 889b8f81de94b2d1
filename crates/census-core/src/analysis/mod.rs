/// Analysis modules — aggregation algorithms over the loaded datasets.

pub mod extension;
pub mod join;
pub mod study;

pub use extension::name_extension;
pub use join::{downloads_by_format, intersect_formats, IntersectionEntry};
pub use study::{downloads_by_study, files_by_study};
