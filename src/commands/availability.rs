use serde::Serialize;

use curio_core::SalesStatus;

use crate::bootstrap::AppRuntime;

/// Sales status together with the window it was evaluated against.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesStatusReport {
    #[serde(flatten)]
    pub status: SalesStatus,
    pub window: String,
}

pub fn get_sales_status(runtime: &AppRuntime) -> SalesStatusReport {
    let uc = runtime.usecases().get_sales_status();
    SalesStatusReport {
        status: uc.execute(),
        window: uc.describe_window(),
    }
}
