pub mod models;

pub use models::destination::Destination;
pub use models::package::{Activity, DayPlan, Location, PackageDocument, PlanSet};
