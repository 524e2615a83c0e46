use crate::model::id::{LocationId, SchoolId};
use derive_new::new;

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub location_id: LocationId,
    pub school_id: SchoolId,
    pub name: String,
    // Stored for display only; nothing computes on the coordinates.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(new)]
pub struct CreateLocation {
    pub school_id: SchoolId,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
