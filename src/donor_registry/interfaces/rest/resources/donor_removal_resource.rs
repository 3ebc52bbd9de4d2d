use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct DonorRemovalResource {
    pub id: i64,
    pub removed: bool,
    pub message: String,
}
