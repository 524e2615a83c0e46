use crate::model::id::SchoolId;
use derive_new::new;

// Reference entity. Immutable after creation, so there is no update event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct School {
    pub school_id: SchoolId,
    pub name: String,
    pub city: String,
    pub state: String,
}

#[derive(new)]
pub struct CreateSchool {
    pub name: String,
    pub city: String,
    pub state: String,
}
