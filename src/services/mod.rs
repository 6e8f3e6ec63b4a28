// Resource services
pub mod categories;
pub mod repair_requests;
pub mod support_requests;

// Receipt numbers for repair requests
pub mod receipt_numbers;

pub use categories::{CategoryInput, CategoryService};
pub use receipt_numbers::{format_receipt_number, ReceiptNumberGenerator};
pub use repair_requests::{RepairRequestInput, RepairRequestService};
pub use support_requests::{SupportRequestInput, SupportRequestService};
