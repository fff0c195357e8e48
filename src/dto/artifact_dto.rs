use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct AssignArtifactPayload {
    pub artifact_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCharacterArtifactPayload {
    pub is_active: bool,
}
