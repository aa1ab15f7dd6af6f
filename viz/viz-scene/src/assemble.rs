//! Assembly of the four-quadrant scene and the orbit driver.

use tracing::{debug, info};
use viz_distance::DistanceCache;
use viz_types::{IndexedMesh, ScalarVolume};

use crate::actor::{Actor, Appearance, Color, CullMode, Geometry};
use crate::backend::{GeometryBackend, Renderer};
use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::error::{SceneError, SceneResult};
use crate::implicit::Plane;
use crate::scene::{Scene, View, Viewport};
use crate::shapes::{outline_edges, sphere_mesh};

/// Contour a volume at `iso_value` and regenerate normals.
///
/// # Errors
///
/// Returns [`SceneError::EmptySurface`] when the iso-value produces no
/// geometry, or a backend error from either stage.
pub fn extract_surface<B: GeometryBackend>(
    backend: &B,
    volume: &ScalarVolume,
    iso_value: f64,
    feature_angle: f64,
) -> SceneResult<IndexedMesh> {
    let surface = backend.extract_isosurface(volume, iso_value)?;
    if surface.faces.is_empty() {
        return Err(SceneError::EmptySurface { iso_value });
    }

    let surface = backend.compute_normals(&surface, feature_angle)?;
    debug!(
        iso_value,
        vertices = surface.vertex_count(),
        faces = surface.face_count(),
        "Extracted isosurface"
    );
    Ok(surface)
}

/// Black wireframe box around the volume bounds.
#[must_use]
pub fn outline_actor(volume: &ScalarVolume) -> Actor {
    Actor::new(
        "outline",
        Geometry::Lines(outline_edges(&volume.bounds())),
        Appearance::flat(Color::BLACK),
    )
}

/// Planar contour rings over the skin surface.
///
/// # Errors
///
/// Propagates backend failures from the contour cut.
pub fn ring_actor<B: GeometryBackend>(
    backend: &B,
    skin: &IndexedMesh,
    config: &SceneConfig,
) -> SceneResult<Actor> {
    let plane = Plane::horizontal(0.0);
    let segments = backend.cut_contours(skin, &plane, &config.ring_contours)?;
    Ok(Actor::new(
        "rings",
        Geometry::Lines(segments),
        Appearance::flat(config.skin_color).with_line_width(config.ring_line_width),
    ))
}

/// Skin with the spherical inspection window carved out.
///
/// The back faces are painted skin-colored so the inside of the shell reads
/// as flesh rather than as the default surface color.
///
/// # Errors
///
/// Propagates backend failures from the clip.
pub fn clipped_skin_actor<B: GeometryBackend>(
    backend: &B,
    skin: &IndexedMesh,
    config: &SceneConfig,
    cull: CullMode,
    opacity: f64,
) -> SceneResult<Actor> {
    let clipped = backend.clip(skin, &config.window_sphere, config.clip_value)?;
    Ok(Actor::new(
        "clipped-skin",
        Geometry::Mesh(clipped),
        Appearance::flat(config.skin_color)
            .with_backface_color(config.skin_color)
            .with_cull(cull)
            .with_opacity(opacity),
    ))
}

/// Translucent sphere marking the inspection window.
#[must_use]
pub fn window_sphere_actor(config: &SceneConfig) -> Actor {
    let sphere = config.window_sphere;
    Actor::new(
        "window-sphere",
        Geometry::Mesh(sphere_mesh(
            sphere.center,
            sphere.radius,
            config.sphere_resolution,
        )),
        Appearance::flat(config.sphere_color).with_opacity(config.sphere_opacity),
    )
}

/// Bone surface colored by its cached distance to the skin.
///
/// # Errors
///
/// Propagates distance-field and cache errors.
pub fn distance_actor(
    cache: &DistanceCache,
    bone: &IndexedMesh,
    skin: &IndexedMesh,
) -> SceneResult<Actor> {
    let annotated = cache.distance_between(bone, skin)?;
    let range = annotated.scalar_range().unwrap_or((0.0, 1.0));
    Ok(Actor::new(
        "distance",
        Geometry::Mesh(annotated),
        Appearance::default().with_scalar_range(range),
    ))
}

/// Build the four-quadrant scene and its shared camera.
///
/// The quadrants are, in order: top-left (bones, outline, contour rings),
/// top-right (front-culled window skin behind a translucent back-culled
/// copy, bones, outline), bottom-left (windowed skin, bones, outline, the
/// window sphere itself), bottom-right (distance-colored bones, outline).
///
/// # Errors
///
/// Propagates backend, distance-cache, and empty-surface failures.
pub fn assemble<B: GeometryBackend>(
    backend: &B,
    config: &SceneConfig,
) -> SceneResult<(Scene, Camera)> {
    info!(volume = %config.volume_path.display(), "Assembling scene");

    let volume = backend.read_volume(&config.volume_path)?;
    let skin = extract_surface(backend, &volume, config.skin_iso, config.feature_angle)?;
    let bone = extract_surface(backend, &volume, config.bone_iso, config.feature_angle)?;

    let bones = Actor::new(
        "bones",
        Geometry::Mesh(bone.clone()),
        Appearance::default(),
    );
    let outline = outline_actor(&volume);
    let rings = ring_actor(backend, &skin, config)?;

    let back_skin = clipped_skin_actor(backend, &skin, config, CullMode::Front, 1.0)?;
    let front_skin =
        clipped_skin_actor(backend, &skin, config, CullMode::Back, config.front_skin_opacity)?;
    let open_skin = clipped_skin_actor(backend, &skin, config, CullMode::None, 1.0)?;

    let cache = DistanceCache::new(&config.cache_path);
    let distance = distance_actor(&cache, &bone, &skin)?;

    let [bg_tl, bg_tr, bg_bl, bg_br] = config.backgrounds;
    let views = vec![
        View::new(
            Viewport::top_left(),
            bg_tl,
            vec![bones.clone(), outline.clone(), rings],
        ),
        View::new(
            Viewport::top_right(),
            bg_tr,
            vec![back_skin, front_skin, bones.clone(), outline.clone()],
        ),
        View::new(
            Viewport::bottom_left(),
            bg_bl,
            vec![open_skin, bones, outline.clone(), window_sphere_actor(config)],
        ),
        View::new(Viewport::bottom_right(), bg_br, vec![distance, outline]),
    ];

    let mut camera = Camera::default();
    camera.fit(&volume.bounds());

    let scene = Scene::new(config.window_size, views);
    info!(
        views = scene.views.len(),
        actors = scene.actor_count(),
        "Scene assembled"
    );
    Ok((scene, camera))
}

/// Drive a full camera orbit, one degree of azimuth per rendered frame.
///
/// Blocks until all `frames` frames have been drawn; there is no
/// cancellation path.
///
/// # Errors
///
/// Propagates the first renderer failure.
pub fn orbit<R: Renderer>(
    renderer: &mut R,
    scene: &Scene,
    camera: &mut Camera,
    frames: usize,
) -> SceneResult<()> {
    info!(frames, "Starting camera orbit");
    for _ in 0..frames {
        camera.azimuth(1.0);
        renderer.render(scene, camera)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::path::Path;
    use viz_types::{unit_cube, Point3, Vector3};

    use crate::implicit::{ContourValues, Sphere};

    /// Deterministic stand-in for the graphics toolkit.
    struct StubBackend;

    impl GeometryBackend for StubBackend {
        fn read_volume(&self, _path: &Path) -> SceneResult<ScalarVolume> {
            Ok(ScalarVolume::from_fn(
                (4, 4, 4),
                Point3::origin(),
                Vector3::new(1.0, 1.0, 1.0),
                |p| p.x + p.y + p.z,
            ))
        }

        fn extract_isosurface(
            &self,
            _volume: &ScalarVolume,
            iso_value: f64,
        ) -> SceneResult<IndexedMesh> {
            // Distinct surfaces per iso-value so skin and bone differ.
            let mut cube = unit_cube();
            cube.translate(Vector3::new(iso_value, 0.0, 0.0));
            Ok(cube)
        }

        fn compute_normals(
            &self,
            mesh: &IndexedMesh,
            _feature_angle: f64,
        ) -> SceneResult<IndexedMesh> {
            Ok(mesh.clone())
        }

        fn clip(
            &self,
            mesh: &IndexedMesh,
            _sphere: &Sphere,
            _boundary_value: f64,
        ) -> SceneResult<IndexedMesh> {
            Ok(mesh.clone())
        }

        fn cut_contours(
            &self,
            _mesh: &IndexedMesh,
            plane: &Plane,
            values: &ContourValues,
        ) -> SceneResult<Vec<[Point3<f64>; 2]>> {
            Ok(values
                .values()
                .iter()
                .map(|&v| {
                    let z = plane.origin.z + v;
                    [Point3::new(0.0, 0.0, z), Point3::new(1.0, 0.0, z)]
                })
                .collect())
        }
    }

    /// A backend whose contouring always comes back empty.
    struct EmptyBackend;

    impl GeometryBackend for EmptyBackend {
        fn read_volume(&self, path: &Path) -> SceneResult<ScalarVolume> {
            StubBackend.read_volume(path)
        }

        fn extract_isosurface(
            &self,
            _volume: &ScalarVolume,
            _iso_value: f64,
        ) -> SceneResult<IndexedMesh> {
            Ok(IndexedMesh::new())
        }

        fn compute_normals(
            &self,
            mesh: &IndexedMesh,
            _feature_angle: f64,
        ) -> SceneResult<IndexedMesh> {
            Ok(mesh.clone())
        }

        fn clip(
            &self,
            mesh: &IndexedMesh,
            _sphere: &Sphere,
            _boundary_value: f64,
        ) -> SceneResult<IndexedMesh> {
            Ok(mesh.clone())
        }

        fn cut_contours(
            &self,
            _mesh: &IndexedMesh,
            _plane: &Plane,
            _values: &ContourValues,
        ) -> SceneResult<Vec<[Point3<f64>; 2]>> {
            Ok(Vec::new())
        }
    }

    struct CountingRenderer {
        frames: Cell<usize>,
    }

    impl Renderer for CountingRenderer {
        fn render(&mut self, _scene: &Scene, _camera: &Camera) -> SceneResult<()> {
            self.frames.set(self.frames.get() + 1);
            Ok(())
        }
    }

    fn test_config(dir: &tempfile::TempDir) -> SceneConfig {
        SceneConfig::default().with_cache_path(dir.path().join("field.vdf"))
    }

    #[test]
    fn assemble_builds_four_views() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);

        let (scene, _camera) = assemble(&StubBackend, &config).unwrap();

        assert_eq!(scene.views.len(), 4);
        assert_eq!(scene.window_size, (800, 800));

        let actor_counts: Vec<usize> = scene.views.iter().map(|v| v.actors.len()).collect();
        assert_eq!(actor_counts, vec![3, 4, 4, 2]);

        for (view, expected) in scene.views.iter().zip(&config.backgrounds) {
            assert_eq!(view.background, *expected);
        }
    }

    #[test]
    fn assemble_composes_the_documented_actors() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);

        let (scene, _camera) = assemble(&StubBackend, &config).unwrap();

        for name in ["bones", "outline", "rings", "clipped-skin", "window-sphere", "distance"] {
            assert!(scene.find_actor(name).is_some(), "missing actor {name}");
        }

        // Top-right: opaque front-culled shell behind a translucent
        // back-culled copy.
        let top_right = &scene.views[1].actors;
        assert_eq!(top_right[0].appearance.cull, CullMode::Front);
        assert_eq!(top_right[1].appearance.cull, CullMode::Back);
        assert!((top_right[1].appearance.opacity - 0.5).abs() < 1e-12);

        // Bottom-right: distance-colored bones with scalar mapping on.
        let distance = &scene.views[3].actors[0];
        assert!(distance.appearance.scalar_range.is_some());
    }

    #[test]
    fn assemble_populates_the_distance_cache() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);

        assert!(!config.cache_path.exists());
        assemble(&StubBackend, &config).unwrap();
        assert!(config.cache_path.exists());

        // A second assembly in the same directory reuses the file.
        assemble(&StubBackend, &config).unwrap();
    }

    #[test]
    fn empty_isosurface_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);

        let err = assemble(&EmptyBackend, &config);
        assert!(matches!(err, Err(SceneError::EmptySurface { .. })));
    }

    #[test]
    fn ring_actor_carries_one_segment_per_contour() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir);
        let skin = unit_cube();

        let actor = ring_actor(&StubBackend, &skin, &config).unwrap();
        match &actor.geometry {
            Geometry::Lines(segments) => assert_eq!(segments.len(), 19),
            Geometry::Mesh(_) => panic!("rings should be line geometry"),
        }
        assert!((actor.appearance.line_width - 2.0).abs() < 1e-12);
    }

    #[test]
    fn orbit_renders_every_frame_and_closes_the_loop() {
        let scene = Scene::new((800, 800), Vec::new());
        let mut camera = Camera::default();
        let start = camera.position;

        let mut renderer = CountingRenderer {
            frames: Cell::new(0),
        };
        orbit(&mut renderer, &scene, &mut camera, 360).unwrap();

        assert_eq!(renderer.frames.get(), 360);
        assert!((camera.position - start).norm() < 1e-8);
    }

    #[test]
    fn orbit_zero_frames_never_renders() {
        let scene = Scene::new((800, 800), Vec::new());
        let mut camera = Camera::default();
        let mut renderer = CountingRenderer {
            frames: Cell::new(0),
        };

        orbit(&mut renderer, &scene, &mut camera, 0).unwrap();
        assert_eq!(renderer.frames.get(), 0);
    }
}
