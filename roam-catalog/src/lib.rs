pub mod gallery;
pub mod itinerary;
pub mod markup;
pub mod screen;

pub use gallery::DestinationGallery;
pub use itinerary::{project, PackageView, ProjectionOptions};
pub use markup::Chrome;
pub use screen::Screen;
