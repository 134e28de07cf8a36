pub mod controller;
pub mod input;
pub mod view;

pub use controller::{run_scan, ScanCompletion, ScanController, ScanState, ScanTicket};
pub use input::{Field, InputPanel};
pub use view::{resolve_timezone, Badge, BadgeStyle, ReportView, ResultView, SpamItem, SpamList};
