//! Scene entities: pose, motion model and collision/picking queries
//!
//! An [`Entity`] owns its pose and model-space bounding box. World-space
//! volumes are built on demand for each query and never cached, since the
//! pose changes every tick.

use crate::config::PhysicsConfig;
use crate::foundation::math::{self, utils, Mat4, Quat, Vec3};
use crate::physics::collision::{
    BoundingBox, OrientationState, OrientedBoundingBox, PathSampler, Ray, SlabTest,
};

/// Tag identifying what kind of object an entity is
///
/// The engine does not interpret it; scene owners assign meanings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EntityType(pub u32);

/// A movable, pickable object in the scene
#[derive(Debug, Clone)]
pub struct Entity {
    entity_type: EntityType,
    origin: Vec3,
    rotation: Quat,
    scale: Vec3,
    /// Direction the model faces when unrotated
    model_direction: Vec3,
    /// Unit facing direction
    direction: Vec3,
    speed: f32,
    radius: f32,
    model_bbox: Option<BoundingBox>,
    last_model: Mat4,
    dragging: bool,
}

impl Entity {
    /// Create an entity at the origin facing +X with no bounding box
    pub fn new(entity_type: EntityType) -> Self {
        Self::with_model_direction(entity_type, Vec3::new(1.0, 0.0, 0.0))
    }

    /// Create an entity whose model faces `model_direction` when unrotated
    pub fn with_model_direction(entity_type: EntityType, model_direction: Vec3) -> Self {
        let model_direction = model_direction
            .try_normalize(f32::EPSILON)
            .unwrap_or_else(|| Vec3::new(1.0, 0.0, 0.0));
        Self {
            entity_type,
            origin: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
            model_direction,
            direction: Vec3::new(1.0, 0.0, 0.0),
            speed: 0.0,
            radius: 0.0,
            model_bbox: None,
            last_model: Mat4::identity(),
            dragging: false,
        }
    }

    /// Builder: set the model-space bounding box
    #[must_use]
    pub fn with_bounding_box(mut self, bbox: BoundingBox) -> Self {
        self.model_bbox = Some(bbox);
        self
    }

    /// Builder: set the position and refresh the model matrix
    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.origin = position;
        self.refresh_model_matrix();
        self
    }

    /// Builder: set the bounding radius
    #[must_use]
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Builder: set the velocity (speed and facing direction)
    #[must_use]
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.set_velocity(velocity);
        self
    }

    /// Entity kind tag
    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    /// World-space position
    pub fn position(&self) -> Vec3 {
        self.origin
    }

    /// Teleport the entity
    pub fn set_position(&mut self, position: Vec3) {
        self.origin = position;
    }

    /// World-space rotation
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Set the world-space rotation
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    /// Render scale
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Set the render scale
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    /// Unit facing direction
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Face `direction`; a zero vector leaves the facing unchanged
    pub fn set_direction(&mut self, direction: Vec3) {
        match direction.try_normalize(f32::EPSILON) {
            Some(direction) => self.direction = direction,
            None => log::warn!("Ignoring zero facing direction for {:?}", self.entity_type),
        }
    }

    /// Scalar speed, never negative
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Set the speed; negative or NaN values clamp to zero
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = if speed > 0.0 { speed } else { 0.0 };
    }

    /// Velocity as `speed * direction`
    pub fn velocity(&self) -> Vec3 {
        self.direction * self.speed
    }

    /// Decompose `velocity` into speed and facing direction.
    ///
    /// A zero velocity stops the entity and keeps its facing.
    pub fn set_velocity(&mut self, velocity: Vec3) {
        let speed = velocity.norm();
        if speed > f32::EPSILON {
            self.direction = velocity / speed;
            self.speed = speed;
        } else {
            self.speed = 0.0;
        }
    }

    /// Bounding radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Set the bounding radius
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    /// Model-space bounding box, if mesh loading supplied one
    pub fn model_bounding_box(&self) -> Option<&BoundingBox> {
        self.model_bbox.as_ref()
    }

    /// Replace the model-space bounding box
    pub fn set_model_bounding_box(&mut self, bbox: BoundingBox) {
        self.model_bbox = Some(bbox);
    }

    /// Whether the entity is being dragged by the user
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    // ---- Motion model ----

    /// Advance one tick with the default ground plane (y = 0)
    pub fn update(&mut self, delta_time: f32) {
        self.update_with_ground(delta_time, PhysicsConfig::default().ground_height);
    }

    /// Advance one tick.
    ///
    /// While dragging nothing moves and speed stays zero. Otherwise an
    /// entity above the ground travels `delta_time * velocity`; an entity
    /// at or below the ground, including one that just crossed it, is
    /// snapped onto it and stopped. There is no gravity: motion is linear.
    pub fn update_with_ground(&mut self, delta_time: f32, ground_height: f32) {
        if self.dragging {
            self.speed = 0.0;
            return;
        }

        if self.origin.y > ground_height {
            self.origin += self.velocity() * delta_time;
        }

        if self.origin.y <= ground_height {
            if self.speed != 0.0 || self.origin.y < ground_height {
                log::debug!(
                    "{:?} grounded at ({:.2}, {:.2})",
                    self.entity_type,
                    self.origin.x,
                    self.origin.z
                );
            }
            self.origin.y = ground_height;
            self.speed = 0.0;
        }
    }

    /// Drag along a pick ray, keeping the current distance from `origin`.
    ///
    /// The entity slides on the sphere centered at `origin` through its
    /// current position. A zero `direction` leaves the position unchanged.
    pub fn drag(&mut self, origin: &Vec3, direction: &Vec3) {
        if !self.dragging {
            log::debug!("Started dragging {:?}", self.entity_type);
        }
        self.dragging = true;
        self.speed = 0.0;

        let Some(direction) = direction.try_normalize(f32::EPSILON) else {
            log::warn!("Drag with zero direction ignored for {:?}", self.entity_type);
            return;
        };
        let distance = (self.origin - origin).norm();
        self.set_position(origin + direction * distance);
    }

    /// Release a drag; motion resumes next tick
    pub fn stop_dragging(&mut self) {
        if self.dragging {
            log::debug!("Stopped dragging {:?}", self.entity_type);
        }
        self.dragging = false;
    }

    /// Current pose
    pub fn current_state(&self) -> OrientationState {
        OrientationState::new(self.origin, self.rotation)
    }

    /// Rotation taking the model's own facing onto the current direction
    pub fn facing_rotation(&self) -> Quat {
        utils::rotation_between(&self.model_direction, &self.direction)
    }

    /// The canonical one-step path: one unit ahead, then here.
    ///
    /// Both poses carry the facing rotation. Callers needing a real
    /// multi-frame path supply their own pair.
    pub fn current_path(&self) -> [OrientationState; 2] {
        let facing = self.facing_rotation();
        [
            OrientationState::new(self.origin + self.direction, facing),
            OrientationState::new(self.origin, facing),
        ]
    }

    // ---- Transforms ----

    /// Model matrix built from the current pose and scale
    pub fn model_matrix(&self) -> Mat4 {
        math::model_matrix(&self.origin, &self.rotation, &self.scale)
    }

    /// Recompute the cached model matrix from the current pose
    pub fn refresh_model_matrix(&mut self) {
        self.last_model = self.model_matrix();
    }

    /// Store the model matrix the renderer last drew with
    pub fn set_last_model(&mut self, model: Mat4) {
        self.last_model = model;
    }

    /// Last model matrix, used for picking
    pub fn last_model(&self) -> &Mat4 {
        &self.last_model
    }

    // ---- Collision and picking ----

    /// Bounding box for a query that requires one.
    ///
    /// Querying an entity without a box is a programming error: it asserts
    /// in debug builds and reports "no intersection" in release builds.
    fn require_bounding_box(&self, query: &str) -> Option<&BoundingBox> {
        let bbox = self.model_bbox.as_ref();
        if bbox.is_none() {
            log::error!("{query} on {:?} which has no bounding box", self.entity_type);
        }
        debug_assert!(bbox.is_some(), "{query} on entity without a bounding box");
        bbox
    }

    /// World-space oriented box at the current pose
    pub fn oriented_bounding_box(&self) -> Option<OrientedBoundingBox> {
        self.model_bbox
            .as_ref()
            .map(|bbox| OrientedBoundingBox::new(bbox, &self.current_state()))
    }

    /// Would `obb` overlap this entity at its current pose
    pub fn check_collision(&self, obb: &OrientedBoundingBox) -> bool {
        self.require_bounding_box("check_collision")
            .is_some_and(|bbox| OrientedBoundingBox::new(bbox, &self.current_state()).overlaps(obb))
    }

    /// Would `other` hit this entity travelling from `from` to `to`
    pub fn check_path_collision(
        &self,
        from: &OrientationState,
        to: &OrientationState,
        other: &Self,
    ) -> bool {
        self.check_path_collision_with(from, to, other, PhysicsConfig::DEFAULT_SAMPLES_PER_UNIT)
    }

    /// [`check_path_collision`](Self::check_path_collision) with an explicit
    /// sampling density.
    ///
    /// `other`'s model box is placed at each sampled pose and tested
    /// against this entity's current box; the first overlap wins.
    pub fn check_path_collision_with(
        &self,
        from: &OrientationState,
        to: &OrientationState,
        other: &Self,
        samples_per_unit: f32,
    ) -> bool {
        let (Some(own_bbox), Some(other_bbox)) = (
            self.require_bounding_box("check_path_collision"),
            other.require_bounding_box("check_path_collision"),
        ) else {
            return false;
        };

        let own = OrientedBoundingBox::new(own_bbox, &self.current_state());
        let samples = PathSampler::new(*from, *to, samples_per_unit);
        log::trace!(
            "Sweeping {:?} past {:?} in {} samples",
            other.entity_type,
            self.entity_type,
            samples.sample_count()
        );

        samples
            .map(|pose| OrientedBoundingBox::new(other_bbox, &pose))
            .any(|candidate| own.overlaps(&candidate))
    }

    /// Distance along the ray to this entity's transformed box
    pub fn test_ray(&self, ray_origin: &Vec3, ray_direction: &Vec3) -> Option<f32> {
        self.test_ray_with(&SlabTest::default(), &Ray::new(*ray_origin, *ray_direction))
    }

    /// [`test_ray`](Self::test_ray) with explicit slab tunables
    pub fn test_ray_with(&self, slab: &SlabTest, ray: &Ray) -> Option<f32> {
        let bbox = self.require_bounding_box("test_ray")?;
        slab.intersect_transformed(bbox, &self.last_model, ray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    fn boxed(position: Vec3) -> Entity {
        Entity::new(EntityType(1))
            .with_bounding_box(BoundingBox::cube(1.0))
            .with_position(position)
    }

    #[test]
    fn test_entity_creation() {
        let entity = Entity::new(EntityType::default());

        assert_eq!(entity.position(), Vec3::zeros());
        assert_eq!(entity.direction(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(entity.speed(), 0.0);
        assert!(entity.model_bounding_box().is_none());
        assert!(!entity.is_dragging());
        assert_eq!(entity.entity_type(), EntityType::default());
        assert_eq!(entity.scale(), Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(entity.radius(), 0.0);
    }

    #[test]
    fn test_shape_setters() {
        let mut entity = Entity::new(EntityType(7)).with_radius(1.5);
        assert_eq!(entity.entity_type(), EntityType(7));
        assert_eq!(entity.radius(), 1.5);

        entity.set_radius(2.0);
        entity.set_model_bounding_box(BoundingBox::cube(0.5));
        assert_eq!(entity.radius(), 2.0);
        assert_eq!(entity.model_bounding_box(), Some(&BoundingBox::cube(0.5)));
    }

    #[test]
    fn test_velocity_decomposition() {
        let mut entity = Entity::new(EntityType::default());
        entity.set_velocity(Vec3::new(0.0, -3.0, 4.0));

        assert_relative_eq!(entity.speed(), 5.0, epsilon = EPSILON);
        assert_relative_eq!(entity.direction(), Vec3::new(0.0, -0.6, 0.8), epsilon = EPSILON);
        assert_relative_eq!(entity.velocity(), Vec3::new(0.0, -3.0, 4.0), epsilon = EPSILON);

        entity.set_velocity(Vec3::zeros());
        assert_eq!(entity.speed(), 0.0);
        assert_relative_eq!(entity.direction(), Vec3::new(0.0, -0.6, 0.8), epsilon = EPSILON);
    }

    #[test]
    fn test_speed_never_negative() {
        let mut entity = Entity::new(EntityType::default());
        entity.set_speed(-2.0);
        assert_eq!(entity.speed(), 0.0);
        entity.set_speed(f32::NAN);
        assert_eq!(entity.speed(), 0.0);
    }

    #[test]
    fn test_update_moves_linearly_above_ground() {
        let mut entity = Entity::new(EntityType::default())
            .with_position(Vec3::new(0.0, 10.0, 0.0))
            .with_velocity(Vec3::new(2.0, 0.0, 0.0));

        entity.update(0.5);

        assert_relative_eq!(entity.position(), Vec3::new(1.0, 10.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(entity.speed(), 2.0, epsilon = EPSILON);
    }

    #[test]
    fn test_falling_entity_grounds() {
        let mut entity = Entity::new(EntityType::default())
            .with_position(Vec3::new(0.0, 5.0, 0.0))
            .with_velocity(Vec3::new(1.0, -3.0, 0.0));

        for _ in 0..100 {
            entity.update(0.1);
            assert!(entity.position().y >= 0.0, "sank below ground: {:?}", entity.position());
        }

        assert_eq!(entity.position().y, 0.0);
        assert_eq!(entity.speed(), 0.0);
    }

    #[test]
    fn test_grounded_entity_stays_put() {
        let mut entity = Entity::new(EntityType::default()).with_velocity(Vec3::new(1.0, 1.0, 0.0));

        entity.update(1.0);

        assert_eq!(entity.position(), Vec3::zeros());
        assert_eq!(entity.speed(), 0.0);
    }

    #[test]
    fn test_custom_ground_height() {
        let mut entity = Entity::new(EntityType::default())
            .with_position(Vec3::new(0.0, -1.0, 0.0))
            .with_velocity(Vec3::new(0.0, -1.0, 0.0));

        entity.update_with_ground(1.0, -3.0);
        assert_relative_eq!(entity.position().y, -2.0, epsilon = EPSILON);
        entity.update_with_ground(1.0, -3.0);
        entity.update_with_ground(1.0, -3.0);
        assert_eq!(entity.position().y, -3.0);
        assert_eq!(entity.speed(), 0.0);
    }

    #[test]
    fn test_dragging_suspends_motion() {
        let mut entity = Entity::new(EntityType::default())
            .with_position(Vec3::new(0.0, 10.0, 0.0))
            .with_velocity(Vec3::new(0.0, -1.0, 0.0));

        entity.drag(&Vec3::zeros(), &Vec3::new(0.0, 1.0, 0.0));
        let held = entity.position();

        for _ in 0..10 {
            entity.update(0.5);
            assert_eq!(entity.position(), held);
            assert_eq!(entity.speed(), 0.0);
        }

        entity.stop_dragging();
        entity.set_speed(1.0);
        entity.update(0.5);
        assert_ne!(entity.position(), held);
    }

    #[test]
    fn test_drag_keeps_distance_from_origin() {
        let mut entity = Entity::new(EntityType::default()).with_position(Vec3::new(3.0, 4.0, 0.0));
        let eye = Vec3::zeros();

        entity.drag(&eye, &Vec3::new(0.0, 0.0, -2.0));

        assert!(entity.is_dragging());
        assert_relative_eq!(entity.position(), Vec3::new(0.0, 0.0, -5.0), epsilon = EPSILON);
    }

    #[test]
    fn test_drag_with_zero_direction_holds_position() {
        let mut entity = Entity::new(EntityType::default()).with_position(Vec3::new(1.0, 2.0, 3.0));
        entity.drag(&Vec3::zeros(), &Vec3::zeros());

        assert!(entity.is_dragging());
        assert_eq!(entity.position(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_current_path() {
        let mut entity = Entity::new(EntityType::default()).with_position(Vec3::new(1.0, 1.0, 1.0));
        entity.set_direction(Vec3::new(0.0, 0.0, 2.0));

        let [ahead, here] = entity.current_path();

        assert_relative_eq!(ahead.position, Vec3::new(1.0, 1.0, 2.0), epsilon = EPSILON);
        assert_relative_eq!(here.position, Vec3::new(1.0, 1.0, 1.0), epsilon = EPSILON);
        assert_eq!(ahead.rotation, here.rotation);
        // Model faces +X; the facing rotation must turn it onto +Z
        assert_relative_eq!(here.rotation * Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_instantaneous_collision() {
        let entity = boxed(Vec3::zeros());
        let near = boxed(Vec3::new(1.5, 0.0, 0.0)).oriented_bounding_box().unwrap();
        let far = boxed(Vec3::new(3.0, 0.0, 0.0)).oriented_bounding_box().unwrap();

        assert!(entity.check_collision(&near));
        assert!(!entity.check_collision(&far));
    }

    #[test]
    fn test_swept_collision_passes_through_target() {
        let target = boxed(Vec3::zeros());
        let mover = boxed(Vec3::new(-10.0, 0.0, 0.0));
        let from = OrientationState::at(Vec3::new(-10.0, 0.0, 0.0));
        let to = OrientationState::at(Vec3::new(10.0, 0.0, 0.0));

        assert!(target.check_path_collision(&from, &to, &mover));
    }

    #[test]
    fn test_swept_collision_misses_above_target() {
        let target = boxed(Vec3::zeros());
        let mover = boxed(Vec3::new(-10.0, 5.0, 0.0));
        let from = OrientationState::at(Vec3::new(-10.0, 5.0, 0.0));
        let to = OrientationState::at(Vec3::new(10.0, 5.0, 0.0));

        assert!(!target.check_path_collision(&from, &to, &mover));
    }

    #[test]
    fn test_swept_zero_length_matches_instantaneous() {
        let target = boxed(Vec3::zeros());
        let mover = boxed(Vec3::zeros());

        for position in [Vec3::new(1.5, 0.0, 0.0), Vec3::new(4.0, 0.0, 0.0)] {
            let pose = OrientationState::at(position);
            let obb = OrientedBoundingBox::new(&BoundingBox::cube(1.0), &pose);
            assert_eq!(
                target.check_path_collision(&pose, &pose, &mover),
                target.check_collision(&obb),
            );
        }
    }

    #[test]
    fn test_swept_rotation_is_sampled() {
        // A thin rod beside the target, swinging from upright to lying
        // along X while sliding away. Only the swing brings its tip into
        // the target.
        let target = boxed(Vec3::zeros());
        let rod = Entity::new(EntityType(2))
            .with_bounding_box(BoundingBox::from_center_extents(Vec3::zeros(), Vec3::new(0.1, 3.0, 0.1)));
        let upright = Quat::identity();
        let lying = Quat::from_axis_angle(&Vec3::z_axis(), std::f32::consts::FRAC_PI_2);

        let slide_from = OrientationState::new(Vec3::new(2.5, 0.0, 0.0), upright);
        let slide_to = OrientationState::new(Vec3::new(3.5, 0.0, 0.0), upright);
        assert!(!target.check_path_collision(&slide_from, &slide_to, &rod));

        let swing_to = OrientationState::new(Vec3::new(3.5, 0.0, 0.0), lying);
        assert!(target.check_path_collision(&slide_from, &swing_to, &rod));
    }

    #[test]
    fn test_ray_hits_entity_box() {
        let entity = boxed(Vec3::zeros());
        let distance = entity.test_ray(&Vec3::new(-5.0, 0.0, 0.0), &Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(distance.unwrap(), 4.0, epsilon = EPSILON);

        assert!(entity.test_ray(&Vec3::new(-5.0, 5.0, 0.0), &Vec3::new(1.0, 0.0, 0.0)).is_none());
    }

    #[test]
    fn test_ray_uses_last_model_matrix() {
        let mut entity = boxed(Vec3::new(10.0, 0.0, 0.0));
        let origin = Vec3::zeros();
        let direction = Vec3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(entity.test_ray(&origin, &direction).unwrap(), 9.0, epsilon = EPSILON);

        // Moving without refreshing keeps picking against the drawn position
        entity.set_position(Vec3::new(20.0, 0.0, 0.0));
        assert_relative_eq!(entity.test_ray(&origin, &direction).unwrap(), 9.0, epsilon = EPSILON);

        entity.refresh_model_matrix();
        assert_relative_eq!(entity.test_ray(&origin, &direction).unwrap(), 19.0, epsilon = EPSILON);
    }

    #[test]
    fn test_ray_against_renderer_supplied_matrix() {
        let mut entity = boxed(Vec3::zeros());
        let origin = Vec3::new(-5.0, 0.0, 0.0);
        let direction = Vec3::new(1.0, 0.0, 0.0);

        entity.set_last_model(Mat4::new_translation(&Vec3::new(1.0, 0.0, 0.0)) * Mat4::new_scaling(2.0));
        assert_relative_eq!(entity.test_ray(&origin, &direction).unwrap(), 4.0, epsilon = EPSILON);

        // The scaled box now reaches y = 1.5
        assert!(entity.test_ray(&Vec3::new(-5.0, 1.5, 0.0), &direction).is_some());
        assert_eq!(entity.last_model(), &(Mat4::new_translation(&Vec3::new(1.0, 0.0, 0.0)) * Mat4::new_scaling(2.0)));
    }

    #[test]
    fn test_ray_follows_scale_after_refresh() {
        let mut entity = boxed(Vec3::zeros());
        entity.set_scale(Vec3::new(3.0, 1.0, 1.0));
        assert_eq!(entity.scale(), Vec3::new(3.0, 1.0, 1.0));

        entity.refresh_model_matrix();
        let distance = entity.test_ray(&Vec3::new(-5.0, 0.0, 0.0), &Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(distance.unwrap(), 2.0, epsilon = EPSILON);
    }

    #[test]
    fn test_ray_half_turn_box_still_slab_tested() {
        // A half turn about Y swaps the transformed min/max on X and Z only
        let mut entity = boxed(Vec3::zeros());
        let half_turn = Quat::from_axis_angle(&Vec3::y_axis(), std::f32::consts::PI);
        entity.set_last_model(half_turn.to_homogeneous());

        let world_box = entity.model_bounding_box().unwrap().transform_corners(entity.last_model());
        assert!(!world_box.is_valid());
        assert!(!world_box.is_fully_inverted());

        let origin = Vec3::new(-5.0, 0.0, -5.0);
        let direction = Vec3::new(1.0, 0.0, 1.0);
        let distance = entity.test_ray(&origin, &direction);
        assert_relative_eq!(distance.unwrap(), 4.0 * 2.0_f32.sqrt(), epsilon = 1e-4);
    }

    #[test]
    fn test_ray_mirrored_box_is_rejected() {
        let mut entity = boxed(Vec3::zeros());
        entity.set_last_model(Mat4::new_scaling(-1.0));

        assert!(entity.test_ray(&Vec3::new(-5.0, 0.0, 0.0), &Vec3::new(1.0, 0.0, 0.0)).is_none());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "without a bounding box")]
    fn test_ray_without_bounding_box_asserts() {
        let entity = Entity::new(EntityType::default());
        let _ = entity.test_ray(&Vec3::zeros(), &Vec3::new(1.0, 0.0, 0.0));
    }
}
