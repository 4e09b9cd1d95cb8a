pub mod country;
pub mod geo;
pub mod photo;

pub use country::CountryInfo;
pub use geo::CountryFeature;
pub use photo::Photo;
