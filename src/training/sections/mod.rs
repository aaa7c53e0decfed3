//! Training module section writers.
//!
//! Each section module renders one part of the markdown document.

pub mod s1_crop_facts;
pub mod s2_focus_area;
pub mod s3_expected_results;
pub mod s4_implementation_tips;
pub mod s5_faq;
pub mod s6_system_info;
pub mod s7_getting_help;
