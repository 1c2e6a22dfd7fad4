/// User domain type
use serde::{Deserialize, Serialize};

/// Signed-in listener profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend user ID
    pub id: i64,

    /// Display name
    pub username: String,

    /// Email address
    pub email: String,

    /// Avatar, base64 encoded
    #[serde(rename = "avatarImgBase64", default)]
    pub avatar: Option<String>,

    /// Account creation date, formatted by the backend
    pub create_date: String,
}
