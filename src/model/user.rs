use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a profile within its organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ProfileRole {
    /// Manages cook accounts for the organization
    Admin,
    /// Kitchen staff authenticating with a 4-digit PIN
    Cook,
}

/// The authenticated user, as returned by the PIN login and `/api/auth/user`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
    pub id: Uuid,
    pub username: String,
    pub role: ProfileRole,
    pub organization_id: Uuid,
}

impl UserDto {
    pub fn is_admin(&self) -> bool {
        self.role == ProfileRole::Admin
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PinLoginDto {
    pub username: String,
    pub pin: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct OrganizationIdDto {
    pub organization_id: Uuid,
}

/// A cook account as listed to admins; the PIN is never returned
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CookDto {
    pub id: Uuid,
    pub username: String,
    pub role: ProfileRole,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateCookDto {
    pub username: String,
    pub pin: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct GeneratedPinDto {
    pub pin: String,
}
