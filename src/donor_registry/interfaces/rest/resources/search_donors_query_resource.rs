use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchDonorsQueryResource {
    pub blood_group: Option<String>,
    pub city: Option<String>,
}
