use crate::constants::{
    EVENT_NOT_FOUND_TITLE, MONK_NOT_FOUND_TITLE, OPEN_GRAPH_ARTICLE_TYPE, SITE_NAME,
};
use crate::types::events::Event;
use crate::types::monks::Monk;
use serde::Serialize;

#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: Option<String>,
    pub open_graph: Option<OpenGraph>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl PageMetadata {
    pub fn not_found(title: &str) -> Self {
        PageMetadata {
            title: title.to_owned(),
            description: None,
            open_graph: None,
        }
    }
    pub fn for_event(event: Option<&Event>, locale: &str) -> Self {
        match event {
            Some(event) => {
                let title = event.title.get(locale);
                let description = event.description.get(locale);
                PageMetadata {
                    title: format!("{title} - {SITE_NAME}"),
                    description: Some(description.to_owned()),
                    open_graph: Some(OpenGraph {
                        title: title.to_owned(),
                        description: description.to_owned(),
                        images: vec![event.image.to_owned()],
                        kind: Some(OPEN_GRAPH_ARTICLE_TYPE.to_owned()),
                    }),
                }
            }
            None => PageMetadata::not_found(EVENT_NOT_FOUND_TITLE),
        }
    }
    pub fn for_monk(monk: Option<&Monk>, locale: &str) -> Self {
        match monk {
            Some(monk) => {
                let name = monk.name.get(locale);
                let description = format!("Biography of {}, {}", name, monk.title.get(locale));
                PageMetadata {
                    title: format!("{name} - {SITE_NAME}"),
                    description: Some(description.to_owned()),
                    open_graph: Some(OpenGraph {
                        title: name.to_owned(),
                        description,
                        images: vec![monk.image.to_owned()],
                        kind: None,
                    }),
                }
            }
            None => PageMetadata::not_found(MONK_NOT_FOUND_TITLE),
        }
    }
}
