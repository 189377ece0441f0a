mod report;
mod report_board;
mod report_list;

pub use report::Report;
pub use report_board::ReportBoard;
pub use report_list::ReportList;
