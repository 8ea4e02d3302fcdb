pub mod report;

pub use report::{render_report, run_report, run_report_impl};
