use garde::Validate;
use kernel::model::{
    id::{LocationId, SchoolId},
    location::{CreateLocation, Location},
    school::{CreateSchool, School},
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSchoolRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(length(min = 1))]
    pub city: String,
    #[garde(length(min = 1))]
    pub state: String,
}

impl From<CreateSchoolRequest> for CreateSchool {
    fn from(value: CreateSchoolRequest) -> Self {
        let CreateSchoolRequest { name, city, state } = value;
        CreateSchool::new(name, city, state)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolsResponse {
    pub items: Vec<SchoolResponse>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolResponse {
    pub school_id: SchoolId,
    pub name: String,
    pub city: String,
    pub state: String,
}

impl From<School> for SchoolResponse {
    fn from(value: School) -> Self {
        let School {
            school_id,
            name,
            city,
            state,
        } = value;
        Self {
            school_id,
            name,
            city,
            state,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[garde(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
}

impl CreateLocationRequest {
    pub fn into_event(self, school_id: SchoolId) -> CreateLocation {
        let CreateLocationRequest {
            name,
            latitude,
            longitude,
        } = self;
        CreateLocation::new(school_id, name, latitude, longitude)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationsResponse {
    pub items: Vec<LocationResponse>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    pub location_id: LocationId,
    pub school_id: SchoolId,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<Location> for LocationResponse {
    fn from(value: Location) -> Self {
        let Location {
            location_id,
            school_id,
            name,
            latitude,
            longitude,
        } = value;
        Self {
            location_id,
            school_id,
            name,
            latitude,
            longitude,
        }
    }
}
