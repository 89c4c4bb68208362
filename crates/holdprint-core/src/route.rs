//! Routes and their labeled reference images.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::normalize;
use crate::point::Point;

/// One reference photo of a route and the holds tapped on it.
///
/// `normalized_points` is always `normalize(points)` as computed when the
/// image was created; search reads it instead of re-normalizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledImage {
    /// Unique image identifier.
    pub id: String,
    /// Reference to the stored photo (blob key, path, URL).
    pub photo_ref: String,
    /// Raw image-relative tap positions.
    pub points: Vec<Point>,
    /// Fingerprint-space form of `points`.
    pub normalized_points: Vec<Point>,
}

impl LabeledImage {
    /// Creates an image with a fresh id, normalizing `points`.
    #[must_use]
    pub fn new(photo_ref: impl Into<String>, points: Vec<Point>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), photo_ref, points)
    }

    /// Creates an image with a caller-chosen id, normalizing `points`.
    #[must_use]
    pub fn with_id(id: impl Into<String>, photo_ref: impl Into<String>, points: Vec<Point>) -> Self {
        let normalized_points = normalize(&points);
        Self {
            id: id.into(),
            photo_ref: photo_ref.into(),
            points,
            normalized_points,
        }
    }

    /// Number of tapped holds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no holds were tapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A named climbing route with one or more reference images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Unique route identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Reference images, in insertion order.
    #[serde(default)]
    pub images: Vec<LabeledImage>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Route {
    /// Creates an empty route with a fresh id, stamped now.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, Utc::now())
    }

    /// Creates an empty route with caller-chosen id and timestamp.
    #[must_use]
    pub fn with_id(id: impl Into<String>, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            images: Vec::new(),
            created_at,
        }
    }

    /// Appends a reference image.
    pub fn add_image(&mut self, image: LabeledImage) {
        self.images.push(image);
    }

    /// Builder form of [`Route::add_image`].
    #[must_use]
    pub fn with_image(mut self, image: LabeledImage) -> Self {
        self.add_image(image);
        self
    }

    /// Looks up an image by id.
    #[must_use]
    pub fn image(&self, image_id: &str) -> Option<&LabeledImage> {
        self.images.iter().find(|img| img.id == image_id)
    }

    /// Removes an image by id and returns it.
    pub fn remove_image(&mut self, image_id: &str) -> Option<LabeledImage> {
        let pos = self.images.iter().position(|img| img.id == image_id)?;
        Some(self.images.remove(pos))
    }

    /// Returns true if the route has at least one image to match against.
    #[must_use]
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }
}
