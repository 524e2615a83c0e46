use kernel::model::{
    id::{LocationId, SchoolId},
    location::Location,
    school::School,
};

#[derive(sqlx::FromRow)]
pub struct SchoolRow {
    pub school_id: SchoolId,
    pub name: String,
    pub city: String,
    pub state: String,
}

impl From<SchoolRow> for School {
    fn from(value: SchoolRow) -> Self {
        let SchoolRow {
            school_id,
            name,
            city,
            state,
        } = value;
        School {
            school_id,
            name,
            city,
            state,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct LocationRow {
    pub location_id: LocationId,
    pub school_id: SchoolId,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<LocationRow> for Location {
    fn from(value: LocationRow) -> Self {
        let LocationRow {
            location_id,
            school_id,
            name,
            latitude,
            longitude,
        } = value;
        Location {
            location_id,
            school_id,
            name,
            latitude,
            longitude,
        }
    }
}
