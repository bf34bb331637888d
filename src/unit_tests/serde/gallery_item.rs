use crate::types::gallery::{GalleryCategory, GalleryItem};
use crate::unit_tests::text;
use serde_json::json;

#[test]
fn deserialize_gallery_item() {
    assert_eq!(
        serde_json::from_value::<GalleryItem>(json!({
            "id": 7,
            "src": "/images/gallery/7.jpg",
            "category": "education",
            "caption": { "th": "ห้องเรียน", "en": "Classroom" }
        }))
        .unwrap(),
        GalleryItem {
            id: 7,
            src: "/images/gallery/7.jpg".to_owned(),
            category: GalleryCategory::Education,
            caption: text("Classroom", "ห้องเรียน"),
        }
    );
    assert!(serde_json::from_value::<GalleryItem>(json!({
        "id": 8,
        "src": "/images/gallery/8.jpg",
        "category": "all",
        "caption": {}
    }))
    .is_err());
}
