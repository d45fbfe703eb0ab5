//! Parsing core: field extraction, role prediction, JD matching and the
//! pipeline that composes them

pub mod fields;
pub mod jd_matcher;
pub mod pipeline;
pub mod resume;
pub mod role_predictor;
pub mod sections;
pub mod taxonomy;
