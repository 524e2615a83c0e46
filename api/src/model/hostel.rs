use derive_new::new;
use garde::Validate;
use kernel::model::{
    hostel::{
        event::{CreateHostel, HostelListFilter, UpdateHostel},
        Hostel, PriceType, RoomType,
    },
    id::{HostelId, LocationId, SchoolId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHostelRequest {
    #[garde(skip)]
    pub location_id: LocationId,
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(range(min = 0))]
    pub price: i32,
    #[garde(skip)]
    pub price_type: PriceType,
    #[garde(skip)]
    pub room_type: RoomType,
    #[garde(skip)]
    #[serde(default)]
    pub images: Vec<String>,
    #[garde(skip)]
    #[serde(default)]
    pub amenities: Vec<String>,
    #[garde(skip)]
    #[serde(default = "default_availability")]
    pub availability: bool,
}

fn default_availability() -> bool {
    true
}

impl From<CreateHostelRequest> for CreateHostel {
    fn from(value: CreateHostelRequest) -> Self {
        let CreateHostelRequest {
            location_id,
            title,
            description,
            price,
            price_type,
            room_type,
            images,
            amenities,
            availability,
        } = value;
        CreateHostel {
            location_id,
            title,
            description,
            price,
            price_type,
            room_type,
            images,
            amenities,
            availability,
        }
    }
}

// Patch semantics: absent fields keep their stored value.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHostelRequest {
    #[garde(inner(length(min = 1)))]
    pub title: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(inner(range(min = 0)))]
    pub price: Option<i32>,
    #[garde(skip)]
    pub price_type: Option<PriceType>,
    #[garde(skip)]
    pub room_type: Option<RoomType>,
    #[garde(skip)]
    pub images: Option<Vec<String>>,
    #[garde(skip)]
    pub amenities: Option<Vec<String>>,
    #[garde(skip)]
    pub availability: Option<bool>,
}

#[derive(new)]
pub struct UpdateHostelRequestWithId(HostelId, UpdateHostelRequest);

impl From<UpdateHostelRequestWithId> for UpdateHostel {
    fn from(value: UpdateHostelRequestWithId) -> Self {
        let UpdateHostelRequestWithId(
            hostel_id,
            UpdateHostelRequest {
                title,
                description,
                price,
                price_type,
                room_type,
                images,
                amenities,
                availability,
            },
        ) = value;
        UpdateHostel {
            hostel_id,
            title,
            description,
            price,
            price_type,
            room_type,
            images,
            amenities,
            availability,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HostelListQuery {
    #[garde(skip)]
    pub school_id: Option<SchoolId>,
    #[garde(skip)]
    pub location_id: Option<LocationId>,
    #[garde(range(min = 0))]
    pub price_min: Option<i32>,
    #[garde(range(min = 0))]
    pub price_max: Option<i32>,
    #[garde(skip)]
    pub room_type: Option<RoomType>,
    // Comma-separated in the query string: ?amenities=wifi,generator
    #[garde(skip)]
    pub amenities: Option<String>,
}

impl From<HostelListQuery> for HostelListFilter {
    fn from(value: HostelListQuery) -> Self {
        let HostelListQuery {
            school_id,
            location_id,
            price_min,
            price_max,
            room_type,
            amenities,
        } = value;
        let amenities = amenities.map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect::<Vec<_>>()
        });
        HostelListFilter {
            school_id,
            location_id,
            price_min,
            price_max,
            room_type,
            amenities,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostelsResponse {
    pub items: Vec<HostelResponse>,
}

impl From<Vec<Hostel>> for HostelsResponse {
    fn from(value: Vec<Hostel>) -> Self {
        Self {
            items: value.into_iter().map(HostelResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostelResponse {
    pub hostel_id: HostelId,
    pub location_id: LocationId,
    pub agent_id: UserId,
    pub agent_name: String,
    pub title: String,
    pub description: Option<String>,
    pub price: i32,
    pub price_type: PriceType,
    pub room_type: RoomType,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub availability: bool,
}

impl From<Hostel> for HostelResponse {
    fn from(value: Hostel) -> Self {
        let Hostel {
            hostel_id,
            location_id,
            agent,
            title,
            description,
            price,
            price_type,
            room_type,
            images,
            amenities,
            availability,
        } = value;
        Self {
            hostel_id,
            location_id,
            agent_id: agent.agent_id,
            agent_name: agent.agent_name,
            title,
            description,
            price,
            price_type,
            room_type,
            images,
            amenities,
            availability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amenities_query_splits_on_commas_and_drops_blanks() {
        let query: HostelListQuery = serde_json::from_value(serde_json::json!({
            "amenities": "wifi, generator,,water",
        }))
        .unwrap();
        let filter = HostelListFilter::from(query);
        assert_eq!(
            filter.amenities,
            Some(vec![
                "wifi".to_string(),
                "generator".to_string(),
                "water".to_string()
            ])
        );
    }

    #[test]
    fn created_hostel_response_carries_its_id() {
        use kernel::model::user::HostelAgent;

        let hostel = Hostel {
            hostel_id: HostelId::new(),
            location_id: LocationId::new(),
            agent: HostelAgent {
                agent_id: UserId::new(),
                agent_name: "Ade".into(),
            },
            title: "Sunrise Lodge".into(),
            description: None,
            price: 150_000,
            price_type: PriceType::Semester,
            room_type: RoomType::Single,
            images: vec![],
            amenities: vec![],
            availability: true,
        };
        let hostel_id = hostel.hostel_id;
        let json = serde_json::to_value(HostelResponse::from(hostel)).unwrap();
        assert_eq!(
            json["hostelId"],
            serde_json::to_value(hostel_id).unwrap()
        );
        assert_eq!(json["agentName"], "Ade");
    }

    #[test]
    fn price_bounds_reject_negative_values() {
        let query: HostelListQuery = serde_json::from_value(serde_json::json!({
            "priceMin": -1,
        }))
        .unwrap();
        assert!(garde::Validate::validate(&query, &()).is_err());
    }
}
