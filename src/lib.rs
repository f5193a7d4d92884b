//! Generates the anycard app icon: a procedurally drawn credit-card graphic
//! saved as a 1024×1024 PNG together with its asset catalog Contents.json.

pub mod contents_json;
pub mod renderer;
pub mod writer;
