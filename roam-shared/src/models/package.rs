use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::loose::{field, sequence, text};

/// Travel package as returned by the itinerary service.
///
/// The raw JSON is kept as received and read through normalizing accessors,
/// so a malformed document still deserializes. Nested records are exposed as
/// borrowed views ([`PlanSet`], [`DayPlan`], [`Activity`], [`Location`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageDocument(Value);

impl PackageDocument {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    /// Wrap a response body. A `null` body means the service found nothing.
    pub fn from_body(body: Value) -> Option<Self> {
        match body {
            Value::Null => None,
            raw => Some(Self(raw)),
        }
    }

    pub fn package_name(&self) -> Option<String> {
        text(field(&self.0, "packageName"))
    }

    pub fn price(&self) -> Option<String> {
        text(field(&self.0, "price"))
    }

    pub fn discount(&self) -> Option<String> {
        text(field(&self.0, "discount"))
    }

    /// Duration in days, raw as sent.
    pub fn duration(&self) -> Option<String> {
        text(field(&self.0, "duration"))
    }

    pub fn highlight(&self) -> Option<String> {
        text(field(&self.0, "highlight"))
    }

    /// First image URL, used as the hero image.
    pub fn hero_image(&self) -> Option<String> {
        text(sequence(field(&self.0, "image_url")).first())
    }

    pub fn itinerary(&self) -> impl ExactSizeIterator<Item = PlanSet<'_>> {
        sequence(field(&self.0, "itinerary")).iter().map(PlanSet)
    }
}

/// One itinerary variant.
#[derive(Debug, Clone, Copy)]
pub struct PlanSet<'a>(&'a Value);

impl<'a> PlanSet<'a> {
    pub fn plans(&self) -> impl ExactSizeIterator<Item = DayPlan<'a>> {
        sequence(field(self.0, "plans")).iter().map(DayPlan)
    }
}

/// A single day within a plan set.
#[derive(Debug, Clone, Copy)]
pub struct DayPlan<'a>(&'a Value);

impl<'a> DayPlan<'a> {
    /// Day number, unvalidated.
    pub fn day_number(&self) -> Option<String> {
        text(field(self.0, "dayNumber"))
    }

    pub fn highlights(&self) -> Option<String> {
        text(field(self.0, "highlights"))
    }

    pub fn activities(&self) -> impl ExactSizeIterator<Item = Activity<'a>> {
        sequence(field(self.0, "activities")).iter().map(Activity)
    }

    pub fn locations(&self) -> impl ExactSizeIterator<Item = Location<'a>> {
        sequence(field(self.0, "locations")).iter().map(Location)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Activity<'a>(&'a Value);

impl Activity<'_> {
    pub fn activity_name(&self) -> Option<String> {
        text(field(self.0, "activityName"))
    }

    pub fn description(&self) -> Option<String> {
        text(field(self.0, "description"))
    }

    pub fn time(&self) -> Option<String> {
        text(field(self.0, "time"))
    }

    pub fn location(&self) -> Option<String> {
        text(field(self.0, "location"))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Location<'a>(&'a Value);

impl Location<'_> {
    pub fn name(&self) -> Option<String> {
        text(field(self.0, "name"))
    }

    pub fn description(&self) -> Option<String> {
        text(field(self.0, "description"))
    }

    pub fn address(&self) -> Option<String> {
        text(field(self.0, "address"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_package_deserializes_any_shape() {
        let doc: PackageDocument = serde_json::from_str(r#"[1, "two", null]"#).expect("Failed to deserialize");
        assert!(doc.package_name().is_none());
        assert_eq!(doc.itinerary().len(), 0);

        let doc: PackageDocument = serde_json::from_str(r#"{"packageName": 42, "itinerary": "soon"}"#)
            .expect("Failed to deserialize");
        assert_eq!(doc.package_name(), Some("42".to_string()));
        assert_eq!(doc.itinerary().len(), 0);
    }

    #[test]
    fn test_null_body_is_no_document() {
        assert!(PackageDocument::from_body(Value::Null).is_none());
        assert!(PackageDocument::from_body(json!({})).is_some());
    }

    #[test]
    fn test_nested_views_preserve_order() {
        let doc = PackageDocument::new(json!({
            "image_url": ["https://img/a.jpg", "https://img/b.jpg"],
            "itinerary": [
                {"plans": [{"dayNumber": 1, "activities": [{"activityName": "Trek"}, {"activityName": "Swim"}]}]},
                {"plans": null},
                "garbage"
            ]
        }));

        assert_eq!(doc.hero_image().as_deref(), Some("https://img/a.jpg"));

        let sets: Vec<_> = doc.itinerary().collect();
        assert_eq!(sets.len(), 3);
        assert_eq!(sets[1].plans().len(), 0);
        assert_eq!(sets[2].plans().len(), 0);

        let day = sets[0].plans().next().expect("day");
        assert_eq!(day.day_number().as_deref(), Some("1"));
        let names: Vec<_> = day.activities().filter_map(|a| a.activity_name()).collect();
        assert_eq!(names, vec!["Trek", "Swim"]);
        assert_eq!(day.locations().len(), 0);
    }

    #[test]
    fn test_hero_image_ignores_non_text_first_entry() {
        let doc = PackageDocument::new(json!({"image_url": [null, "https://img/b.jpg"]}));
        assert!(doc.hero_image().is_none());
    }
}
