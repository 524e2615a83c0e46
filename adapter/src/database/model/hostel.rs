use kernel::model::{
    hostel::{Hostel, PriceType, RoomType},
    id::{HostelId, LocationId, UserId},
    user::HostelAgent,
};
use shared::error::AppError;
use std::str::FromStr;

// One row of the hostel listing, joined with the owning agent's name.
#[derive(sqlx::FromRow)]
pub struct HostelRow {
    pub hostel_id: HostelId,
    pub location_id: LocationId,
    pub agent_id: UserId,
    pub agent_name: String,
    pub title: String,
    pub description: Option<String>,
    pub price: i32,
    pub price_type: String,
    pub room_type: String,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub availability: bool,
}

impl TryFrom<HostelRow> for Hostel {
    type Error = AppError;

    fn try_from(value: HostelRow) -> Result<Self, Self::Error> {
        let HostelRow {
            hostel_id,
            location_id,
            agent_id,
            agent_name,
            title,
            description,
            price,
            price_type,
            room_type,
            images,
            amenities,
            availability,
        } = value;
        Ok(Hostel {
            hostel_id,
            location_id,
            agent: HostelAgent {
                agent_id,
                agent_name,
            },
            title,
            description,
            price,
            price_type: PriceType::from_str(&price_type)
                .map_err(|e| AppError::ConversionEntityError(e.to_string()))?,
            room_type: RoomType::from_str(&room_type)
                .map_err(|e| AppError::ConversionEntityError(e.to_string()))?,
            images,
            amenities,
            availability,
        })
    }
}
