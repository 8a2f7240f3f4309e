//! Answer recording and export
//!
//! Each time the learner moves forward past a node, the caller asks the
//! tree to snapshot that node as a [`UsbongNodeState`]. The collected
//! states are exported as delimited text for the reporting backend, or as
//! JSON.

mod export;
mod state;

pub use export::{
    ExportFormat, export_file_name, generate_csv, generate_export, generate_json, write_export,
};
pub use state::{StateFields, UsbongNodeState};
