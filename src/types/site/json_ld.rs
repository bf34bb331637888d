use crate::constants::{
    SCHEMA_ORG_CONTEXT, SCHEMA_ORG_EVENT_SCHEDULED, SCHEMA_ORG_OFFLINE_ATTENDANCE, SITE_COUNTRY,
    SITE_LOCALITY, SITE_NAME,
};
use crate::types::events::Event;
use chrono::NaiveDate;
use serde::Serialize;
use url::Url;

/// schema.org `Event` structured data embedded in the event detail page.
#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EventJsonLd {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub event_status: Url,
    pub event_attendance_mode: Url,
    pub location: PlaceJsonLd,
    pub image: Vec<String>,
    pub description: String,
}

#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
pub struct PlaceJsonLd {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub address: PostalAddressJsonLd,
}

#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddressJsonLd {
    #[serde(rename = "@type")]
    pub kind: String,
    pub street_address: String,
    pub address_locality: String,
    pub address_country: String,
}

impl EventJsonLd {
    pub fn new(event: &Event, locale: &str) -> Self {
        EventJsonLd {
            context: SCHEMA_ORG_CONTEXT.to_owned(),
            kind: "Event".to_owned(),
            name: event.title.get(locale).to_owned(),
            start_date: event.date,
            end_date: event.date,
            event_status: SCHEMA_ORG_EVENT_SCHEDULED.to_owned(),
            event_attendance_mode: SCHEMA_ORG_OFFLINE_ATTENDANCE.to_owned(),
            location: PlaceJsonLd {
                kind: "Place".to_owned(),
                name: event.location.get(locale).to_owned(),
                address: PostalAddressJsonLd {
                    kind: "PostalAddress".to_owned(),
                    street_address: SITE_NAME.to_owned(),
                    address_locality: SITE_LOCALITY.to_owned(),
                    address_country: SITE_COUNTRY.to_owned(),
                },
            },
            image: vec![event.image.to_owned()],
            description: event.description.get(locale).to_owned(),
        }
    }
}
