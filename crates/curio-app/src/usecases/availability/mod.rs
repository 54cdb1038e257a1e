mod get_sales_status;
mod ticker;

pub use get_sales_status::GetSalesStatus;
pub use ticker::AvailabilityTicker;
