//! Test doubles and JSON scene fixtures for slidefx crates.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use slidefx_api_core::{AttributeKind, AttributeValue, Rect, ShapeId, Size};

mod layer;
mod manager;
mod shape;

pub use layer::TestAttributeLayer;
pub use manager::{ManagerEvent, RecordingShapeManager};
pub use shape::TestShape;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    scenes: HashMap<String, String>,
    #[serde(default, rename = "motion-paths")]
    motion_paths: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Page description as stored on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneSpec {
    pub page: PageSpec,
    #[serde(default)]
    pub shapes: Vec<ShapeSpec>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageSpec {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShapeSpec {
    pub id: u64,
    /// `[x0, y0, x1, y1]` in page units.
    pub bounds: [f64; 4],
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub defaults: HashMap<AttributeKind, AttributeValue>,
}

fn default_visible() -> bool {
    true
}

/// A scene turned into live test doubles. Every shape is registered with
/// the manager.
#[derive(Debug)]
pub struct LoadedScene {
    pub page: Size,
    pub shapes: Vec<Rc<TestShape>>,
    pub manager: Rc<RecordingShapeManager>,
}

impl LoadedScene {
    pub fn from_spec(spec: &SceneSpec) -> Self {
        let manager = Rc::new(RecordingShapeManager::new());
        let shapes: Vec<Rc<TestShape>> = spec
            .shapes
            .iter()
            .map(|s| {
                let [x0, y0, x1, y1] = s.bounds;
                let mut shape = TestShape::new(s.id, Rect::new(x0, y0, x1, y1));
                for (kind, value) in &s.defaults {
                    shape = shape.with_default(*kind, value.clone());
                }
                if !s.visible {
                    shape = shape.hidden();
                }
                shape.shared()
            })
            .collect();
        for shape in &shapes {
            manager.add_shape(shape.clone());
        }
        Self {
            page: Size::new(spec.page.width, spec.page.height),
            shapes,
            manager,
        }
    }

    pub fn shape(&self, id: u64) -> Option<Rc<TestShape>> {
        use slidefx_api_core::Shape;
        self.shapes.iter().find(|s| s.id() == ShapeId(id)).cloned()
    }
}

pub mod scenes {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.scenes.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.scenes, "scene", name)?;
        read_to_string(rel)
    }

    pub fn spec(name: &str) -> Result<SceneSpec> {
        let rel = lookup(&MANIFEST.scenes, "scene", name)?;
        super::load_json(rel)
    }

    pub fn load(name: &str) -> Result<LoadedScene> {
        spec(name).map(|s| LoadedScene::from_spec(&s))
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let rel = lookup(&MANIFEST.scenes, "scene", name)?;
        Ok(resolve_path(rel))
    }
}

pub mod motion_paths {
    use super::*;

    #[derive(Debug, Clone, Deserialize)]
    pub struct MotionPathCase {
        pub name: String,
        pub d: String,
        pub valid: bool,
        #[serde(default)]
        pub start: Option<[f64; 2]>,
        #[serde(default)]
        pub end: Option<[f64; 2]>,
    }

    pub fn keys() -> Vec<String> {
        MANIFEST.motion_paths.keys().cloned().collect()
    }

    pub fn load(name: &str) -> Result<Vec<MotionPathCase>> {
        let rel = lookup(&MANIFEST.motion_paths, "motion path", name)?;
        super::load_json(rel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidefx_api_core::{Shape, ShapeAttributeLayer, ShapeManager};

    #[test]
    fn every_manifest_scene_loads() {
        let mut keys = scenes::keys();
        keys.sort();
        assert_eq!(keys, vec!["title-slide", "two-boxes"]);
        for key in keys {
            let scene = scenes::load(&key).unwrap();
            assert!(!scene.shapes.is_empty(), "{key}");
            assert_eq!(scene.manager.shapes().len(), scene.shapes.len());
        }
    }

    #[test]
    fn unknown_fixture_names_error() {
        let err = scenes::load("nope").unwrap_err();
        assert!(err.to_string().contains("unknown scene fixture 'nope'"));
    }

    #[test]
    fn shape_bounds_follow_the_layer() {
        let scene = scenes::load("two-boxes").unwrap();
        let shape = scene.shape(1).unwrap();
        assert!(!shape.is_content_changed());
        shape.layer().borrow_mut().set_pos_x(10000.0);
        assert!(shape.is_content_changed());
        assert_eq!(shape.bounds(), Rect::new(8000.0, 2000.0, 12000.0, 6000.0));
        assert_eq!(shape.dom_bounds(), Rect::new(2000.0, 2000.0, 6000.0, 6000.0));
        shape.mark_painted();
        assert!(!shape.is_content_changed());
        assert!(!scene.shape(3).unwrap().is_visible());
    }

    #[test]
    fn scene_defaults_are_typed() {
        let scene = scenes::load("title-slide").unwrap();
        let title = scene.shape(10).unwrap();
        assert_eq!(
            title.property_default(AttributeKind::CharFontName),
            Some(AttributeValue::String("Liberation Sans".into()))
        );
        assert_eq!(title.property_default(AttributeKind::DimColor), None);
    }
}
