//! Loaded structure views and the registry that owns them.
//!
//! Each [`StructureView`] pairs a refined curve with the ribbon mesh derived
//! from it. [`Scene`] keeps views in insertion order under stable ids. It is
//! not internally synchronized; concurrent loaders share it behind a mutex.

mod view;

use glam::Vec3;
use rustc_hash::FxHashMap;
pub use view::StructureView;

use crate::error::RibbonError;
use crate::options::Options;

/// The view registry.
#[derive(Debug)]
pub struct Scene {
    views: FxHashMap<u32, StructureView>,
    /// View ids in insertion order.
    order: Vec<u32>,
    next_view_id: u32,
    capacity: usize,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Maximum number of views held by [`Scene::new`].
    pub const DEFAULT_CAPACITY: usize = 1024;

    /// Create an empty scene with [`Self::DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create an empty scene holding at most `capacity` views.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            views: FxHashMap::default(),
            order: Vec::new(),
            next_view_id: 0,
            capacity,
        }
    }

    // -- View management --

    /// Add a built view. Returns its id. Ids are never reused.
    ///
    /// # Errors
    ///
    /// [`RibbonError::SceneFull`] when the scene is at capacity.
    pub fn add(&mut self, view: StructureView) -> Result<u32, RibbonError> {
        if self.order.len() >= self.capacity {
            return Err(RibbonError::SceneFull {
                capacity: self.capacity,
            });
        }
        let id = self.next_view_id;
        self.next_view_id += 1;
        let _ = self.views.insert(id, view);
        self.order.push(id);
        Ok(id)
    }

    /// Build a view from backbone positions and add it.
    ///
    /// The scene is untouched if building fails.
    ///
    /// # Errors
    ///
    /// Any error from [`StructureView::build`], or
    /// [`RibbonError::SceneFull`].
    pub fn load(
        &mut self,
        name: impl Into<String>,
        positions: &[Vec3],
        thickness: Option<&[f32]>,
        options: &Options,
    ) -> Result<u32, RibbonError> {
        if self.order.len() >= self.capacity {
            return Err(RibbonError::SceneFull {
                capacity: self.capacity,
            });
        }
        let view = StructureView::build(name, positions, thickness, options)?;
        self.add(view)
    }

    /// Rebuild view `id` from new positions, keeping its name and id.
    ///
    /// The old view stays in place if building fails.
    ///
    /// # Errors
    ///
    /// [`RibbonError::InvalidInput`] for an unknown id, or any error from
    /// [`StructureView::build`].
    pub fn replace(
        &mut self,
        id: u32,
        positions: &[Vec3],
        thickness: Option<&[f32]>,
        options: &Options,
    ) -> Result<(), RibbonError> {
        let Some(old) = self.views.get(&id) else {
            return Err(RibbonError::InvalidInput(format!("no view with id {id}")));
        };
        let view =
            StructureView::build(old.name(), positions, thickness, options)?;
        let _ = self.views.insert(id, view);
        Ok(())
    }

    /// Remove a view by id. Returns the removed view, if any.
    pub fn remove(&mut self, id: u32) -> Option<StructureView> {
        let view = self.views.remove(&id)?;
        self.order.retain(|&v| v != id);
        log::info!("Removed view '{}'", view.name());
        Some(view)
    }

    /// Remove all views. Ids keep counting up.
    pub fn clear(&mut self) {
        self.views.clear();
        self.order.clear();
    }

    // -- Queries --

    /// Read access to a view.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&StructureView> {
        self.views.get(&id)
    }

    /// Views with their ids, in insertion order.
    pub fn views(&self) -> impl Iterator<Item = (u32, &StructureView)> {
        self.order
            .iter()
            .filter_map(|id| self.views.get(id).map(|v| (*id, v)))
    }

    /// Number of views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the scene holds no views.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Maximum number of views.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point3;
    use crate::options::ColorScheme;
    use crate::test_util::helix;

    fn helix_vec3(n: usize) -> Vec<Vec3> {
        helix(n).into_iter().map(Point3::vec).collect()
    }

    #[test]
    fn view_owns_consistent_curve_and_mesh() {
        let view =
            StructureView::build("1abc", &helix_vec3(12), None, &Options::default())
                .unwrap();
        assert_eq!(view.name(), "1abc");
        assert_eq!(view.residue_count(), 12);
        assert_eq!(view.curve().len(), 25);
        assert_eq!(view.mesh().residue_count(), 12);
        assert_eq!(view.mesh().vertex_count(), 72);
    }

    #[test]
    fn uniform_scheme_repeats_one_color() {
        let mut opts = Options::default();
        opts.colors.scheme = ColorScheme::Uniform;
        let view =
            StructureView::build("u", &helix_vec3(15), None, &opts).unwrap();
        let first = view.residue_colors()[0];
        assert!(view.residue_colors().iter().all(|c| *c == first));
        assert!(view.mesh().colors().iter().all(|c| *c == first));
    }

    #[test]
    fn per_residue_scheme_varies_colors() {
        let view = StructureView::build(
            "p",
            &helix_vec3(4),
            None,
            &Options::default(),
        )
        .unwrap();
        let c = view.residue_colors();
        assert_ne!(c[0], c[1]);
        assert_ne!(c[1], c[2]);
    }

    #[test]
    fn thickness_is_per_curve_point() {
        let positions = helix_vec3(5);
        let thickness = vec![0.1; 11];
        assert!(StructureView::build(
            "t",
            &positions,
            Some(&thickness),
            &Options::default()
        )
        .is_ok());
        assert!(matches!(
            StructureView::build(
                "t",
                &positions,
                Some(&thickness[..5]),
                &Options::default()
            ),
            Err(RibbonError::InvalidInput(_))
        ));
    }

    #[test]
    fn ids_are_unique_and_ordered() {
        let mut scene = Scene::new();
        let opts = Options::default();
        let a = scene.load("a", &helix_vec3(5), None, &opts).unwrap();
        let b = scene.load("b", &helix_vec3(6), None, &opts).unwrap();
        assert_ne!(a, b);
        assert!(scene.remove(a).is_some());
        let c = scene.load("c", &helix_vec3(7), None, &opts).unwrap();
        assert!(c > b);
        let names: Vec<&str> = scene.views().map(|(_, v)| v.name()).collect();
        assert_eq!(names, vec!["b", "c"]);
        assert!(scene.remove(a).is_none());
    }

    #[test]
    fn failed_load_leaves_scene_untouched() {
        let mut scene = Scene::new();
        let opts = Options::default();
        let id = scene.load("ok", &helix_vec3(8), None, &opts).unwrap();
        let before = scene.get(id).cloned();
        assert!(matches!(
            scene.load("short", &helix_vec3(2), None, &opts),
            Err(RibbonError::InvalidInput(_))
        ));
        assert!(scene.replace(id, &helix_vec3(1), None, &opts).is_err());
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.get(id).cloned(), before);
    }

    #[test]
    fn replace_swaps_curve_and_mesh_together() {
        let mut scene = Scene::new();
        let opts = Options::default();
        let id = scene.load("x", &helix_vec3(5), None, &opts).unwrap();
        scene.replace(id, &helix_vec3(9), None, &opts).unwrap();
        let view = scene.get(id).unwrap();
        assert_eq!(view.name(), "x");
        assert_eq!(view.curve().len(), 19);
        assert_eq!(view.mesh().residue_count(), 9);
        assert!(scene.replace(99, &helix_vec3(5), None, &opts).is_err());
    }

    #[test]
    fn capacity_is_enforced() {
        let mut scene = Scene::with_capacity(2);
        let opts = Options::default();
        let _ = scene.load("a", &helix_vec3(3), None, &opts).unwrap();
        let _ = scene.load("b", &helix_vec3(3), None, &opts).unwrap();
        assert!(matches!(
            scene.load("c", &helix_vec3(3), None, &opts),
            Err(RibbonError::SceneFull { capacity: 2 })
        ));
        scene.clear();
        assert!(scene.is_empty());
        assert!(scene.load("d", &helix_vec3(3), None, &opts).is_ok());
    }
}
