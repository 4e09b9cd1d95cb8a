pub mod country_dialog;
pub mod map_view;
pub mod photo_gallery;

pub use country_dialog::CountryDialog;
pub use map_view::WorldMap;
pub use photo_gallery::PhotoGallery;
