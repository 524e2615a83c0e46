use crate::model::{
    id::{HostelId, LocationId},
    user::HostelAgent,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    Semester,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum RoomType {
    Single,
    Shared,
    SelfContain,
}

#[derive(Debug)]
pub struct Hostel {
    pub hostel_id: HostelId,
    pub location_id: LocationId,
    pub agent: HostelAgent,
    pub title: String,
    pub description: Option<String>,
    // Minor-unit-free naira amount.
    pub price: i32,
    pub price_type: PriceType,
    pub room_type: RoomType,
    pub images: Vec<String>,
    // Set semantics; order carries no meaning.
    pub amenities: Vec<String>,
    pub availability: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn room_type_uses_kebab_case_wire_format() {
        assert_eq!(RoomType::SelfContain.to_string(), "self-contain");
        assert_eq!(
            RoomType::from_str("self-contain").unwrap(),
            RoomType::SelfContain
        );
        assert_eq!(
            serde_json::to_string(&RoomType::SelfContain).unwrap(),
            r#""self-contain""#
        );
    }

    #[test]
    fn price_type_round_trips_through_storage_format() {
        for pt in [PriceType::Semester, PriceType::Year] {
            assert_eq!(PriceType::from_str(&pt.to_string()).unwrap(), pt);
        }
    }
}
