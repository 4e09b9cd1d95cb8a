use serde::Deserialize;

/// Maximum number of photos requested and rendered per country.
pub const PHOTOS_PER_COUNTRY: usize = 16;

/// One stock photo as shown in the gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: u64,
    pub thumbnail_url: String,
    /// Photographer name, used as the image alt text
    pub credit: String,
}

/// Wire format of the photo search endpoint: `{ "photos": [...] }`.
#[derive(Debug, Deserialize)]
pub struct PhotoSearchResponse {
    #[serde(default)]
    pub photos: Vec<PhotoRecord>,
}

#[derive(Debug, Deserialize)]
pub struct PhotoRecord {
    pub id: u64,
    pub src: PhotoSources,
    #[serde(default)]
    pub photographer: String,
}

#[derive(Debug, Deserialize)]
pub struct PhotoSources {
    pub small: String,
}

impl PhotoSearchResponse {
    /// Flattens the response into gallery photos, capped at
    /// [`PHOTOS_PER_COUNTRY`] even if the API over-delivers.
    pub fn into_photos(self) -> Vec<Photo> {
        self.photos
            .into_iter()
            .take(PHOTOS_PER_COUNTRY)
            .map(|record| Photo {
                id: record.id,
                thumbnail_url: record.src.small,
                credit: record.photographer,
            })
            .collect()
    }
}
