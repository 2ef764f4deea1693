use serde::{Deserialize, Serialize};

use crate::trip::UserProfile;

/// Response for POST /users/:user_id/claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub awarded: Vec<String>,
    pub user: UserProfile,
}
