use super::{PriceType, RoomType};
use crate::model::id::{HostelId, LocationId, SchoolId};

pub struct CreateHostel {
    pub location_id: LocationId,
    pub title: String,
    pub description: Option<String>,
    pub price: i32,
    pub price_type: PriceType,
    pub room_type: RoomType,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub availability: bool,
}

#[derive(Debug)]
pub struct UpdateHostel {
    pub hostel_id: HostelId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i32>,
    pub price_type: Option<PriceType>,
    pub room_type: Option<RoomType>,
    pub images: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    pub availability: Option<bool>,
}

#[derive(Debug)]
pub struct DeleteHostel {
    pub hostel_id: HostelId,
}

// Listing filter for the public hostel search. All bounds are optional and
// combined with AND; price bounds are inclusive.
#[derive(Debug, Default)]
pub struct HostelListFilter {
    pub school_id: Option<SchoolId>,
    pub location_id: Option<LocationId>,
    pub price_min: Option<i32>,
    pub price_max: Option<i32>,
    pub room_type: Option<RoomType>,
    pub amenities: Option<Vec<String>>,
}
