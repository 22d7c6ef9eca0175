use crate::{
    object::{Hit, Intersect, Object},
    ray::Ray,
};

/// Hits farther than this are ignored.
pub const DEFAULT_MAX_DISTANCE: f32 = 100_000.0;

/// Ordered, immutable set of primitives.
#[derive(Clone, Debug)]
pub struct Scene {
    pub objects     : Vec<Object>,
    pub max_distance: f32,
}

impl Scene {
    pub fn new(objects: Vec<Object>) -> Self {
        Self { objects, max_distance: DEFAULT_MAX_DISTANCE }
    }

    pub fn with_max_distance(mut self, max_distance: f32) -> Self {
        self.max_distance = max_distance;
        self
    }
}

impl Intersect for Scene {
    /// Closest hit in `[0, max_distance)`; on an exact tie the object
    /// registered first wins.
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        self.objects
            .iter()
            .filter_map(|o| o.intersect(ray))
            .fold(None, |closest: Option<Hit>, hit| {
                let bound = closest.map_or(self.max_distance, |c| c.distance);
                if hit.distance >= 0.0 && hit.distance < bound {
                    Some(hit)
                } else {
                    closest
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algebra::Vec3, plane::Plane, sphere::Sphere};

    fn sphere(z: f32, color: Vec3) -> Object {
        Sphere { center: Vec3(0.0, 0.0, z), radius: 0.5, color }.into()
    }

    fn forward() -> Ray {
        Ray::new(Vec3(0.0, 0.0, 0.0), Vec3(0.0, 0.0, 1.0))
    }

    const RED: Vec3 = Vec3(1.0, 0.0, 0.0);
    const GREEN: Vec3 = Vec3(0.0, 1.0, 0.0);

    #[test]
    fn picks_the_nearer_hit_regardless_of_order() {
        let near_first = Scene::new(vec![sphere(3.0, RED), sphere(8.0, GREEN)]);
        let far_first = Scene::new(vec![sphere(8.0, GREEN), sphere(3.0, RED)]);
        for scene in [near_first, far_first] {
            let hit = scene.intersect(&forward()).unwrap();
            assert_eq!(hit.color, RED);
            assert!((hit.distance - 2.5).abs() < 1e-5);
        }
    }

    #[test]
    fn tie_goes_to_first_registered() {
        let scene = Scene::new(vec![sphere(3.0, GREEN), sphere(3.0, RED)]);
        assert_eq!(scene.intersect(&forward()).unwrap().color, GREEN);
    }

    #[test]
    fn hits_beyond_max_distance_are_ignored() {
        let scene = Scene::new(vec![sphere(30.0, RED)]).with_max_distance(10.0);
        assert!(scene.intersect(&forward()).is_none());
    }

    #[test]
    fn plane_behind_origin_is_ignored() {
        // origin above the ground, ray climbing away from it
        let ground = Plane { normal: Vec3(0.0, 1.0, 0.0), distance: -0.5, color: GREEN };
        let scene = Scene::new(vec![ground.into()]);
        let ray = Ray::new(Vec3(0.0, 1.0, 0.0), Vec3(0.0, 1.0, 0.0));
        assert!(scene.intersect(&ray).is_none());
    }

    #[test]
    fn sphere_in_front_of_plane_wins() {
        let ground = Plane { normal: Vec3(0.0, 1.0, 0.0), distance: -0.5, color: GREEN };
        let scene = Scene::new(vec![ground.into(), sphere(2.0, RED)]);
        let ray = Ray::new(Vec3(0.0, 0.0, 0.0), Vec3(0.0, 0.2, 1.0).normalize());
        assert_eq!(scene.intersect(&ray).unwrap().color, RED);
    }

    #[test]
    fn empty_scene_misses() {
        assert!(Scene::new(Vec::new()).intersect(&forward()).is_none());
    }
}
