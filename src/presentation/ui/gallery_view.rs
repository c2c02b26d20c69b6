//! Single-column gallery with viewport-deferred thumbnails.

use std::ops::RangeInclusive;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::application::services::DeferredImageLoader;
use crate::domain::entities::{AlbumImage, ElementId};
use crate::domain::ports::ImageElementPort;
use crate::infrastructure::config::PreviewConfig;
use crate::infrastructure::viewport::{Bounds, SelectedObserver, ViewportObserver};
use crate::presentation::widgets::{GalleryTile, TileSnapshot};

/// Gallery page: tiles, their layout, and the loader feeding them.
pub struct GalleryView {
    tiles: Vec<Arc<GalleryTile>>,
    loader: DeferredImageLoader,
    viewport: Option<Arc<ViewportObserver>>,
    ids: RangeInclusive<ElementId>,
    content_height: f64,
}

impl GalleryView {
    /// Lays out one tile per image and binds each to its thumbnail.
    #[must_use]
    pub fn new(
        images: Vec<AlbumImage>,
        observer: &SelectedObserver,
        config: &PreviewConfig,
    ) -> Self {
        let loader = DeferredImageLoader::new(observer.port());
        let viewport = observer.viewport().cloned();
        let width = config.viewport_width;

        let count = u64::try_from(images.len()).unwrap_or(u64::MAX);
        let first_id = observer.reserve_element_ids(count);
        let last_id = first_id.saturating_add(count) - 1;
        let ids = ElementId::new(first_id)..=ElementId::new(last_id);

        let mut tiles = Vec::with_capacity(images.len());
        let mut top = 0.0;
        for (index, image) in (first_id..).zip(images) {
            let tile = Arc::new(GalleryTile::new(ElementId::new(index), image));
            let height = tile.scaled_height(width);

            if let Some(viewport) = &viewport {
                viewport.set_element_bounds(tile.id(), Bounds::new(0.0, top, width, height));
            }
            top += height + config.gap;

            let thumb = tile.image().thumb.to_image_ref();
            loader.bind(Arc::clone(&tile) as Arc<dyn ImageElementPort>, thumb);
            tiles.push(tile);
        }

        let content_height = if tiles.is_empty() {
            0.0
        } else {
            top - config.gap
        };

        debug!(
            tiles = tiles.len(),
            content_height,
            deferred = loader.is_enabled(),
            "Gallery laid out"
        );

        Self {
            tiles,
            loader,
            viewport,
            ids,
            content_height,
        }
    }

    /// Delivers pending visibility changes to the loader.
    ///
    /// Returns the tiles that loaded as a result.
    pub fn refresh(&self) -> Vec<ElementId> {
        let Some(viewport) = &self.viewport else {
            return Vec::new();
        };
        let entries = viewport.poll_where(|id| self.ids.contains(&id));
        self.loader.on_intersection(&entries)
    }

    /// Scrolls vertically and delivers resulting visibility changes.
    pub fn scroll_to(&self, y: f64) -> Vec<ElementId> {
        if let Some(viewport) = &self.viewport {
            viewport.scroll_to(0.0, y.max(0.0));
        }
        self.refresh()
    }

    /// Resizes the viewport height and delivers resulting visibility changes.
    pub fn set_viewport_height(&self, height: f64) -> Vec<ElementId> {
        if let Some(viewport) = &self.viewport {
            let current = viewport.viewport();
            viewport.set_viewport(Bounds::new(current.x, current.y, current.width, height));
        }
        self.refresh()
    }

    /// Points every tile at its full-size image.
    ///
    /// Loaded tiles switch immediately; pending ones load the new source
    /// once they come into range.
    pub fn upgrade_to_raw(&self) {
        for tile in &self.tiles {
            self.loader.update(tile.id(), tile.image().raw.to_image_ref());
        }
        info!(tiles = self.tiles.len(), "Requested full-size images");
    }

    /// Returns the tiles in layout order.
    #[must_use]
    pub fn tiles(&self) -> &[Arc<GalleryTile>] {
        &self.tiles
    }

    /// Returns the loader driving the tiles.
    #[must_use]
    pub const fn loader(&self) -> &DeferredImageLoader {
        &self.loader
    }

    /// Returns the total laid-out height.
    #[must_use]
    pub const fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Serializable state of the gallery.
    #[must_use]
    pub fn snapshot(&self) -> GallerySnapshot {
        let tiles: Vec<TileSnapshot> = self.tiles.iter().map(|t| t.snapshot()).collect();
        GallerySnapshot {
            deferred: self.loader.is_enabled(),
            scroll_y: self.viewport.as_ref().map_or(0.0, |v| v.viewport().y),
            content_height: self.content_height,
            loaded: tiles.iter().filter(|t| t.src.is_some()).count(),
            tiles,
        }
    }
}

impl Drop for GalleryView {
    fn drop(&mut self) {
        for tile in &self.tiles {
            self.loader.unbind(tile.id());
            if let Some(viewport) = &self.viewport {
                viewport.remove_element(tile.id());
            }
        }
    }
}

/// Rendered state of a gallery.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GallerySnapshot {
    /// Whether thumbnails are deferred until visible.
    pub deferred: bool,
    /// Vertical scroll offset.
    pub scroll_y: f64,
    /// Total laid-out height.
    pub content_height: f64,
    /// Number of tiles with a source.
    pub loaded: usize,
    /// Tiles in layout order.
    pub tiles: Vec<TileSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ImageVariant, LoadState, ProximityMargin};
    use crate::domain::ports::VisibilityObserverPort;
    use crate::infrastructure::viewport::HostEnvironment;

    fn image(id: u64) -> AlbumImage {
        AlbumImage::new(
            id,
            ImageVariant::new(format!("https://cdn.test/thumb/{id}.jpg"), 720, 720),
            ImageVariant::new(format!("https://cdn.test/raw/{id}.jpg"), 2000, 2000),
        )
    }

    // 10 square tiles, 100px wide, no gap: tile n spans [100(n-1), 100n).
    fn config() -> PreviewConfig {
        PreviewConfig {
            viewport_width: 100.0,
            viewport_height: 200.0,
            gap: 0.0,
        }
    }

    fn view(environment: HostEnvironment) -> GalleryView {
        let config = config();
        let observer = SelectedObserver::for_environment(
            environment,
            ProximityMargin::default(),
            Bounds::new(0.0, 0.0, config.viewport_width, config.viewport_height),
        );
        GalleryView::new((1..=10).map(image).collect(), &observer, &config)
    }

    #[test]
    fn test_nothing_loads_before_refresh() {
        let view = view(HostEnvironment::Interactive);

        assert_eq!(view.loader().len(), 10);
        assert!(view.tiles().iter().all(|t| !t.is_loaded()));
        assert!((view.content_height() - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_refresh_loads_viewport_and_margin() {
        let view = view(HostEnvironment::Interactive);

        // Viewport [0, 200) grows by 50% of its height to [-100, 300].
        let loaded = view.refresh();

        assert_eq!(
            loaded,
            vec![ElementId::new(1), ElementId::new(2), ElementId::new(3), ElementId::new(4)]
        );
        assert_eq!(
            view.tiles()[0].src().map(|s| s.url().to_string()),
            Some("https://cdn.test/thumb/1.jpg".to_string())
        );
        assert!(!view.tiles()[4].is_loaded());
    }

    #[test]
    fn test_scroll_loads_more_and_keeps_loaded() {
        let view = view(HostEnvironment::Interactive);
        let _ = view.refresh();

        let loaded = view.scroll_to(500.0);

        assert!(loaded.contains(&ElementId::new(5)));
        assert!(loaded.contains(&ElementId::new(8)));
        assert!(!loaded.contains(&ElementId::new(4)));
        assert!(view.tiles()[0].is_loaded());
        assert!(view.scroll_to(500.0).is_empty());
    }

    #[test]
    fn test_upgrade_swaps_loaded_and_defers_pending() {
        let view = view(HostEnvironment::Interactive);
        let _ = view.refresh();

        view.upgrade_to_raw();

        assert_eq!(
            view.tiles()[0].src().map(|s| s.url().to_string()),
            Some("https://cdn.test/raw/1.jpg".to_string())
        );
        assert!(!view.tiles()[9].is_loaded());

        let _ = view.scroll_to(1000.0);
        assert_eq!(
            view.tiles()[9].src().map(|s| s.url().to_string()),
            Some("https://cdn.test/raw/10.jpg".to_string())
        );
    }

    #[test]
    fn test_headless_never_loads() {
        let view = view(HostEnvironment::Headless);

        assert!(view.refresh().is_empty());
        assert!(view.scroll_to(400.0).is_empty());
        assert!(view.loader().is_empty());

        let snapshot = view.snapshot();
        assert!(!snapshot.deferred);
        assert_eq!(snapshot.loaded, 0);
        assert_eq!(snapshot.tiles.len(), 10);
    }

    #[test]
    fn test_taller_viewport_loads_more() {
        let view = view(HostEnvironment::Interactive);
        let _ = view.refresh();

        let loaded = view.set_viewport_height(400.0);

        assert_eq!(loaded.first(), Some(&ElementId::new(5)));
        assert_eq!(view.loader().state(ElementId::new(6)), Some(LoadState::Loaded));
    }

    #[test]
    fn test_views_sharing_an_observer_keep_separate_tiles() {
        let config = config();
        let observer = SelectedObserver::for_environment(
            HostEnvironment::Interactive,
            ProximityMargin::ZERO,
            Bounds::new(0.0, 0.0, config.viewport_width, config.viewport_height),
        );
        let first = GalleryView::new(vec![image(1), image(2)], &observer, &config);
        let second = GalleryView::new(vec![image(3), image(4)], &observer, &config);

        let first_ids: Vec<ElementId> = first.tiles().iter().map(|t| t.id()).collect();
        let second_ids: Vec<ElementId> = second.tiles().iter().map(|t| t.id()).collect();
        assert_eq!(first_ids, vec![ElementId::new(1), ElementId::new(2)]);
        assert_eq!(second_ids, vec![ElementId::new(3), ElementId::new(4)]);

        // The viewport [0, 200] covers the first two tiles of each view.
        assert_eq!(first.refresh(), first_ids);
        assert_eq!(second.refresh(), second_ids);
        assert!(second.tiles().iter().all(|t| t.is_loaded()));
        assert_eq!(
            second.tiles()[0].src().map(|s| s.url().to_string()),
            Some("https://cdn.test/thumb/3.jpg".to_string())
        );
    }

    #[test]
    fn test_drop_releases_observations() {
        let config = config();
        let observer = SelectedObserver::for_environment(
            HostEnvironment::Interactive,
            ProximityMargin::ZERO,
            Bounds::new(0.0, 0.0, config.viewport_width, config.viewport_height),
        );
        let port = observer.port();
        let view = GalleryView::new(vec![image(1), image(2)], &observer, &config);
        assert!(port.is_observing(ElementId::new(2)));

        drop(view);

        assert!(!port.is_observing(ElementId::new(1)));
        assert!(!port.is_observing(ElementId::new(2)));
    }

    #[test]
    fn test_snapshot_reports_scroll_and_loaded_count() {
        let view = view(HostEnvironment::Interactive);
        let _ = view.scroll_to(300.0);

        let snapshot = view.snapshot();

        assert!(snapshot.deferred);
        assert!((snapshot.scroll_y - 300.0).abs() < f64::EPSILON);
        assert_eq!(snapshot.loaded, snapshot.tiles.iter().filter(|t| t.src.is_some()).count());
        assert!(snapshot.loaded > 0);
    }
}
