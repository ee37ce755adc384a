use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A housing society. Owns buildings, which in turn own wings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Society {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

/// A building. `society_id` must reference an existing society; the store
/// rejects writes that would dangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: Uuid,
    pub name: String,
    pub society_id: Uuid,
    pub wings: Vec<Wing>,
    pub total_floors: u32,
    pub total_flats: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wing {
    pub id: Uuid,
    pub name: String,
    pub building_id: Uuid,
    pub floors: u32,
    pub flats_per_floor: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewSociety {
    pub name: String,
    pub code: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBuilding {
    pub name: String,
    pub society_id: Uuid,
    pub wings: Vec<NewWing>,
    pub total_floors: u32,
    pub total_flats: u32,
}

/// Wing fields accepted at building creation; ids are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWing {
    pub name: String,
    pub floors: u32,
    pub flats_per_floor: u32,
}

/// Partial update for a building. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildingPatch {
    pub name: Option<String>,
    pub society_id: Option<Uuid>,
    pub total_floors: Option<u32>,
    pub total_flats: Option<u32>,
}

/// Outcome of looking a society up by its join code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocietyValidation {
    pub valid: bool,
    pub society: Option<Society>,
}
