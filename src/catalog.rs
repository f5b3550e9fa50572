// SPDX-License-Identifier: MPL-2.0
//! In-memory photo catalog and selection store.
//!
//! The catalog holds every photo available in the current picking session,
//! in insertion order. Selection is a flag on each photo; the selected
//! subset is always derived by filtering, never cached, so it cannot drift
//! out of sync with the catalog.

/// Opaque identifier for a photo in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhotoId(String);

impl PhotoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PhotoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PhotoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PhotoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Screen placement of a photo inside the gallery overlay.
///
/// Positions are mutated in bulk (e.g. collapsed to [`PhotoRect::ZERO`]
/// once a download queue has been created) and are independent of the
/// selection flag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhotoRect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    /// Stacking order of overlapping photos (higher draws on top).
    pub stack_order: i32,
}

impl PhotoRect {
    /// The collapsed placement used to reset the gallery layout.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        width: 0.0,
        height: 0.0,
        stack_order: 0,
    };

    #[must_use]
    pub fn new(top: f32, left: f32, width: f32, height: f32, stack_order: i32) -> Self {
        Self {
            top,
            left,
            width,
            height,
            stack_order,
        }
    }
}

/// One selectable item in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: PhotoId,
    pub selected: bool,
    pub position: PhotoRect,
}

impl Photo {
    /// Creates an unselected photo at the given placement.
    pub fn new(id: impl Into<PhotoId>, position: PhotoRect) -> Self {
        Self {
            id: id.into(),
            selected: false,
            position,
        }
    }
}

/// Process-wide selection state over the photo catalog.
///
/// All mutations are synchronous and total: they apply to every photo and
/// have no partial-failure mode. External collaborators never touch photo
/// fields directly; they go through these commands.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    photos: Vec<Photo>,
}

impl SelectionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from an already loaded catalog.
    #[must_use]
    pub fn from_photos(photos: Vec<Photo>) -> Self {
        Self { photos }
    }

    /// Appends a photo to the catalog, preserving insertion order.
    pub fn add(&mut self, photo: Photo) {
        self.photos.push(photo);
    }

    /// The full catalog in insertion order.
    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Number of photos available for selection.
    #[must_use]
    pub fn selectable_count(&self) -> usize {
        self.photos.len()
    }

    /// The selected subset, derived on every call.
    pub fn selected(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter().filter(|photo| photo.selected)
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }

    /// Identifiers of the selected photos, in catalog order.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<PhotoId> {
        self.selected().map(|photo| photo.id.clone()).collect()
    }

    /// Marks every photo as selected.
    pub fn select_all(&mut self) {
        for photo in &mut self.photos {
            photo.selected = true;
        }
    }

    /// Clears the selection flag on every photo.
    pub fn deselect_all(&mut self) {
        for photo in &mut self.photos {
            photo.selected = false;
        }
    }

    /// Sets the selection flag of a single photo.
    ///
    /// Unknown identifiers are ignored; returns whether a photo changed.
    pub fn set_selected(&mut self, id: &PhotoId, selected: bool) -> bool {
        match self.photos.iter_mut().find(|photo| &photo.id == id) {
            Some(photo) if photo.selected != selected => {
                photo.selected = selected;
                true
            }
            _ => false,
        }
    }

    /// Moves every photo to the same placement.
    pub fn reset_positions(&mut self, rect: PhotoRect) {
        for photo in &mut self.photos {
            photo.position = rect;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store(count: usize) -> SelectionStore {
        let photos = (0..count)
            .map(|i| {
                Photo::new(
                    format!("photo-{i}"),
                    PhotoRect::new(10.0 * i as f32, 5.0, 120.0, 90.0, i as i32),
                )
            })
            .collect();
        SelectionStore::from_photos(photos)
    }

    #[test]
    fn catalog_preserves_insertion_order() {
        let store = sample_store(4);
        let ids: Vec<&str> = store.photos().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["photo-0", "photo-1", "photo-2", "photo-3"]);
    }

    #[test]
    fn selected_is_always_a_subset_of_the_catalog() {
        let mut store = sample_store(5);
        store.set_selected(&PhotoId::from("photo-1"), true);
        store.select_all();
        store.set_selected(&PhotoId::from("photo-3"), false);

        for photo in store.selected() {
            assert!(store.photos().iter().any(|p| p.id == photo.id));
        }
        assert!(store.selected_count() <= store.selectable_count());
    }

    #[test]
    fn select_then_deselect_round_trips_to_empty() {
        let mut store = sample_store(3);
        store.select_all();
        assert_eq!(store.selected_count(), 3);

        store.deselect_all();
        assert_eq!(store.selected_count(), 0);
    }

    #[test]
    fn set_selected_ignores_unknown_ids() {
        let mut store = sample_store(2);
        assert!(!store.set_selected(&PhotoId::from("missing"), true));
        assert_eq!(store.selected_count(), 0);
    }

    #[test]
    fn set_selected_reports_no_change_when_flag_already_matches() {
        let mut store = sample_store(2);
        let id = PhotoId::from("photo-0");
        assert!(store.set_selected(&id, true));
        assert!(!store.set_selected(&id, true));
    }

    #[test]
    fn selected_ids_follow_catalog_order() {
        let mut store = sample_store(3);
        store.set_selected(&PhotoId::from("photo-2"), true);
        store.set_selected(&PhotoId::from("photo-0"), true);

        let selected = store.selected_ids();
        let ids: Vec<&str> = selected.iter().map(PhotoId::as_str).collect();
        assert_eq!(ids, ["photo-0", "photo-2"]);
    }

    #[test]
    fn reset_positions_collapses_every_photo() {
        let mut store = sample_store(3);
        store.reset_positions(PhotoRect::ZERO);

        for photo in store.photos() {
            assert_eq!(photo.position, PhotoRect::ZERO);
        }
    }

    #[test]
    fn reset_positions_leaves_selection_untouched() {
        let mut store = sample_store(3);
        store.select_all();
        store.reset_positions(PhotoRect::ZERO);
        assert_eq!(store.selected_count(), 3);
    }
}
