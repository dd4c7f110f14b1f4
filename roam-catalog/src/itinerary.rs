use roam_shared::{Activity, DayPlan, Location, PackageDocument, PlanSet};
use serde::Serialize;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/1200x600";
pub const DEFAULT_TITLE: &str = "Package Title";
pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_ITINERARY: &str = "No itinerary available for this package";
pub const NO_PLANS: &str = "No plans available";
pub const NO_ACTIVITIES: &str = "No activities available";
pub const NO_LOCATIONS: &str = "No locations available";

/// Presentation defaults that deployments may override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionOptions {
    /// Hero image used when the package has no images.
    pub placeholder_image: String,
    /// Prefix for price and discount values.
    pub currency_marker: String,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            currency_marker: "₹".to_string(),
        }
    }
}

/// Display-ready package detail: every field defaulted, nothing missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageView {
    pub hero_image: String,
    pub title: String,
    pub overview: Vec<OverviewLine>,
    pub itinerary: ItinerarySection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewLine {
    pub label: String,
    pub value: String,
}

impl OverviewLine {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }

    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "plans", rename_all = "snake_case")]
pub enum ItinerarySection {
    Unavailable,
    Plans(Vec<PlanBlock>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanBlock {
    /// "Plan 1", "Plan 2", ... in source order.
    pub label: String,
    pub days: DaySection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "days", rename_all = "snake_case")]
pub enum DaySection {
    Unavailable,
    Days(Vec<DayBlock>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBlock {
    pub title: String,
    pub highlights: String,
    /// Never empty: holds a placeholder item when the day has no activities.
    pub activities: Vec<String>,
    /// Never empty: holds a placeholder item when the day has no locations.
    pub locations: Vec<String>,
}

/// Project a package document into its render tree. Total over any input.
pub fn project(document: &PackageDocument, options: &ProjectionOptions) -> PackageView {
    let currency = |value: Option<String>| format!("{}{}", options.currency_marker, or_na(value));

    PackageView {
        hero_image: document
            .hero_image()
            .unwrap_or_else(|| options.placeholder_image.clone()),
        title: document
            .package_name()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        overview: vec![
            OverviewLine::new("Price", currency(document.price())),
            OverviewLine::new("Duration", format!("{} days", or_na(document.duration()))),
            OverviewLine::new("Highlights", or_na(document.highlight())),
            OverviewLine::new("Discount", currency(document.discount())),
        ],
        itinerary: project_itinerary(document),
    }
}

fn project_itinerary(document: &PackageDocument) -> ItinerarySection {
    let plan_sets = document.itinerary();
    if plan_sets.len() == 0 {
        return ItinerarySection::Unavailable;
    }

    ItinerarySection::Plans(
        plan_sets
            .enumerate()
            .map(|(index, plan_set)| project_plan_set(index, plan_set))
            .collect(),
    )
}

fn project_plan_set(index: usize, plan_set: PlanSet<'_>) -> PlanBlock {
    let plans = plan_set.plans();
    let days = if plans.len() == 0 {
        DaySection::Unavailable
    } else {
        DaySection::Days(plans.map(project_day).collect())
    };

    PlanBlock {
        label: format!("Plan {}", index + 1),
        days,
    }
}

fn project_day(day: DayPlan<'_>) -> DayBlock {
    DayBlock {
        title: format!("Day {}", or_na(day.day_number())),
        highlights: or_na(day.highlights()),
        activities: items_or(day.activities().map(activity_text).collect(), NO_ACTIVITIES),
        locations: items_or(day.locations().map(location_text).collect(), NO_LOCATIONS),
    }
}

fn activity_text(activity: Activity<'_>) -> String {
    format!(
        "{}: {} - {} at {}",
        or_na(activity.activity_name()),
        or_na(activity.description()),
        or_na(activity.time()),
        or_na(activity.location()),
    )
}

fn location_text(location: Location<'_>) -> String {
    format!(
        "{}: {} (Address: {})",
        or_na(location.name()),
        or_na(location.description()),
        or_na(location.address()),
    )
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn items_or(items: Vec<String>, placeholder: &str) -> Vec<String> {
    if items.is_empty() {
        vec![placeholder.to_string()]
    } else {
        items
    }
}

impl PackageView {
    /// Visible text of the tree, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.title.clone(), "Package Overview".to_string()];
        lines.extend(self.overview.iter().map(OverviewLine::text));
        lines.push("Itinerary".to_string());

        match &self.itinerary {
            ItinerarySection::Unavailable => lines.push(NO_ITINERARY.to_string()),
            ItinerarySection::Plans(plans) => {
                for plan in plans {
                    lines.push(plan.label.clone());
                    match &plan.days {
                        DaySection::Unavailable => lines.push(NO_PLANS.to_string()),
                        DaySection::Days(days) => {
                            for day in days {
                                lines.push(day.title.clone());
                                lines.push(format!("Highlights: {}", day.highlights));
                                lines.push("Activities:".to_string());
                                lines.extend(day.activities.iter().cloned());
                                lines.push("Locations:".to_string());
                                lines.extend(day.locations.iter().cloned());
                            }
                        }
                    }
                }
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn view_of(raw: Value) -> PackageView {
        project(&PackageDocument::new(raw), &ProjectionOptions::default())
    }

    #[test]
    fn test_goa_trip_scenario() {
        let view = view_of(json!({
            "packageName": "Goa Trip",
            "price": 5000,
            "itinerary": [{"plans": [{"dayNumber": 1, "activities": [], "locations": null}]}]
        }));

        assert_eq!(view.title, "Goa Trip");
        assert_eq!(view.overview[0].text(), "Price: ₹5000");
        let lines = view.lines();
        for expected in ["Plan 1", "Day 1", NO_ACTIVITIES, NO_LOCATIONS] {
            assert!(lines.iter().any(|l| l == expected), "missing {expected}");
        }
    }

    #[test]
    fn test_all_absent_renders_only_placeholders() {
        for raw in [json!({}), json!([]), json!("text"), json!(42)] {
            let view = view_of(raw);
            assert_eq!(view.hero_image, PLACEHOLDER_IMAGE);
            assert_eq!(view.title, DEFAULT_TITLE);
            assert_eq!(view.itinerary, ItinerarySection::Unavailable);

            let lines = view.lines();
            assert_eq!(
                lines,
                vec![
                    "Package Title",
                    "Package Overview",
                    "Price: ₹N/A",
                    "Duration: N/A days",
                    "Highlights: N/A",
                    "Discount: ₹N/A",
                    "Itinerary",
                    NO_ITINERARY,
                ]
            );
            assert!(lines.iter().all(|l| !l.contains("null") && !l.contains("undefined")));
        }
    }

    #[test]
    fn test_hero_image_branches() {
        let view = view_of(json!({"image_url": ["https://img/first.jpg", "https://img/second.jpg"]}));
        assert_eq!(view.hero_image, "https://img/first.jpg");

        for images in [json!([]), Value::Null, json!("https://img/not-a-list.jpg")] {
            let view = view_of(json!({ "image_url": images }));
            assert_eq!(view.hero_image, PLACEHOLDER_IMAGE);
        }
        assert_eq!(view_of(json!({})).hero_image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_placeholder_image_is_configurable() {
        let options = ProjectionOptions {
            placeholder_image: "/static/hero.png".to_string(),
            currency_marker: "$".to_string(),
        };
        let view = project(&PackageDocument::new(json!({"discount": "500"})), &options);
        assert_eq!(view.hero_image, "/static/hero.png");
        assert_eq!(view.overview[3].text(), "Discount: $500");
    }

    #[test]
    fn test_empty_itinerary_variants() {
        for itinerary in [json!([]), Value::Null, json!({"plans": []}), json!("day one")] {
            let view = view_of(json!({ "itinerary": itinerary }));
            assert_eq!(view.itinerary, ItinerarySection::Unavailable);
            assert!(view.lines().contains(&NO_ITINERARY.to_string()));
        }
        assert!(view_of(json!({})).lines().contains(&NO_ITINERARY.to_string()));
    }

    #[test]
    fn test_plan_set_without_plans() {
        let view = view_of(json!({"itinerary": [{}, {"plans": []}, {"plans": 7}, null]}));
        let ItinerarySection::Plans(plans) = &view.itinerary else {
            panic!("expected plans");
        };
        assert_eq!(plans.len(), 4);
        assert!(plans.iter().all(|p| p.days == DaySection::Unavailable));
        assert_eq!(view.lines().iter().filter(|l| *l == NO_PLANS).count(), 4);
    }

    #[test]
    fn test_plan_labels_follow_source_order() {
        let view = view_of(json!({"itinerary": [
            {"plans": [{"dayNumber": "A"}]},
            {"plans": [{"dayNumber": "B"}]},
            {"plans": [{"dayNumber": "C"}]}
        ]}));
        let ItinerarySection::Plans(plans) = &view.itinerary else {
            panic!("expected plans");
        };
        let pairs: Vec<(String, String)> = plans
            .iter()
            .map(|p| match &p.days {
                DaySection::Days(days) => (p.label.clone(), days[0].title.clone()),
                DaySection::Unavailable => (p.label.clone(), String::new()),
            })
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Plan 1".to_string(), "Day A".to_string()),
                ("Plan 2".to_string(), "Day B".to_string()),
                ("Plan 3".to_string(), "Day C".to_string()),
            ]
        );
    }

    #[test]
    fn test_day_entries_render_with_fallbacks() {
        let view = view_of(json!({"itinerary": [{"plans": [
            {
                "highlights": "Beach day",
                "activities": [
                    {"activityName": "Parasailing", "description": "Over the bay", "time": "10:00", "location": "Baga"},
                    {"activityName": "Dinner"},
                    "not an activity"
                ],
                "locations": [
                    {"name": "Fort Aguada", "description": "Old fort", "address": "Candolim"},
                    {"address": 12}
                ]
            },
            {"dayNumber": 2, "activities": null, "locations": {}}
        ]}]}));

        let ItinerarySection::Plans(plans) = &view.itinerary else {
            panic!("expected plans");
        };
        let DaySection::Days(days) = &plans[0].days else {
            panic!("expected days");
        };

        assert_eq!(days[0].title, "Day N/A");
        assert_eq!(days[0].highlights, "Beach day");
        assert_eq!(
            days[0].activities,
            vec![
                "Parasailing: Over the bay - 10:00 at Baga",
                "Dinner: N/A - N/A at N/A",
                "N/A: N/A - N/A at N/A",
            ]
        );
        assert_eq!(
            days[0].locations,
            vec!["Fort Aguada: Old fort (Address: Candolim)", "N/A: N/A (Address: 12)"]
        );

        assert_eq!(days[1].title, "Day 2");
        assert_eq!(days[1].highlights, NOT_AVAILABLE);
        assert_eq!(days[1].activities, vec![NO_ACTIVITIES]);
        assert_eq!(days[1].locations, vec![NO_LOCATIONS]);
    }

    #[test]
    fn test_numeric_fields_render_raw() {
        let view = view_of(json!({"price": "4,999", "duration": 0, "discount": 12.5}));
        let texts: Vec<String> = view.overview.iter().map(OverviewLine::text).collect();
        assert_eq!(texts[0], "Price: ₹4,999");
        assert_eq!(texts[1], "Duration: 0 days");
        assert_eq!(texts[3], "Discount: ₹12.5");
    }
}
