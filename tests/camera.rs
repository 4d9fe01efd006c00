use glam::{Vec3, Vec4};
use pool_scene::camera::{CameraState, OrbitCamera, View};

fn approx(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).abs().max_element() < eps
}

#[test]
fn starts_at_the_original_view() {
    let camera = OrbitCamera::default();
    assert_eq!(camera.view(), View::original());
    assert_eq!(camera.state(), CameraState::Idle);
}

#[test]
fn dragging_orbits_at_constant_distance() {
    let mut camera = OrbitCamera::default();
    camera.pointer_down(100.0, 100.0);
    camera.pointer_move(100.0 + 50.0, 100.0);
    let eye = camera.eye();
    assert!((eye.length() - camera.distance()).abs() < 1e-4);
    // Half a radian of yaw, no pitch.
    assert!(approx(eye, Vec3::new(8.0 * 0.5f32.sin(), 0.0, 8.0 * 0.5f32.cos()), 1e-4));
}

#[test]
fn moving_without_a_drag_does_nothing() {
    let mut camera = OrbitCamera::default();
    camera.pointer_move(400.0, 300.0);
    assert_eq!(camera.view(), View::original());

    camera.pointer_down(0.0, 0.0);
    camera.pointer_up();
    camera.pointer_move(400.0, 300.0);
    assert_eq!(camera.view(), View::original());
}

#[test]
fn pitch_stops_short_of_the_pole() {
    let mut camera = OrbitCamera::default();
    camera.pointer_down(0.0, 0.0);
    camera.pointer_move(0.0, 10_000.0);
    let eye = camera.eye();
    assert!(eye.y < camera.distance());
    assert!(eye.y > camera.distance() * 0.99);
    assert!(camera.view_matrix().is_finite());
}

#[test]
fn wheel_zoom_is_clamped() {
    let mut camera = OrbitCamera::default();
    camera.wheel(-10_000.0);
    assert_eq!(camera.distance(), 3.0);
    camera.wheel(10_000.0);
    assert_eq!(camera.distance(), 20.0);
    camera.wheel(-500.0);
    assert!((camera.distance() - 15.0).abs() < 1e-5);
    assert!((camera.eye().length() - 15.0).abs() < 1e-4);
}

#[test]
fn top_view_transition_takes_one_second() {
    let mut camera = OrbitCamera::default();
    camera.animate(View::top(), 1000.0);
    assert!(matches!(camera.state(), CameraState::Animating { .. }));

    camera.update(1500.0);
    let halfway = camera.eye();
    assert!(approx(halfway, Vec3::new(0.0, 6.5, 4.0), 1e-5));
    assert!(matches!(camera.state(), CameraState::Animating { .. }));

    camera.update(2000.0);
    assert_eq!(camera.view(), View::top());
    assert_eq!(camera.state(), CameraState::Idle);

    // Idle camera ignores further updates.
    camera.update(9000.0);
    assert_eq!(camera.view(), View::top());
}

#[test]
fn zooming_after_top_view_keeps_a_valid_basis() {
    let mut camera = OrbitCamera::default();
    camera.animate(View::top(), 0.0);
    camera.update(2000.0);
    assert_eq!(camera.view(), View::top());

    camera.wheel(100.0);
    assert_eq!(camera.view().up, Vec3::Y);
    assert_eq!(camera.view().center, Vec3::ZERO);
    assert!(camera.view_matrix().is_finite());

    camera.animate(View::top(), 3000.0);
    camera.update(4000.0);
    camera.pointer_down(0.0, 0.0);
    camera.pointer_move(30.0, 0.0);
    assert!(camera.view_matrix().is_finite());
}

#[test]
fn retargeting_mid_flight_starts_from_the_current_view() {
    let mut camera = OrbitCamera::default();
    camera.animate(View::top(), 0.0);
    camera.update(500.0);
    let midway = camera.view();

    camera.animate(View::original(), 500.0);
    camera.update(500.0);
    assert!(approx(camera.eye(), midway.eye, 1e-6));
    camera.update(1500.0);
    assert_eq!(camera.view(), View::original());
}

#[test]
fn projection_follows_aspect() {
    let mut camera = OrbitCamera::default();
    camera.set_aspect(2.0);
    let wide = camera.projection_matrix();
    camera.set_aspect(0.0);
    assert_eq!(camera.projection_matrix(), wide);

    // A point on the view axis stays centred whatever the aspect.
    let clip = wide * Vec4::new(0.0, 0.0, -5.0, 1.0);
    assert!((clip.x / clip.w).abs() < 1e-6);
    assert!((clip.y / clip.w).abs() < 1e-6);
    assert!((wide.x_axis.x * 2.0 - wide.y_axis.y).abs() < 1e-5);
}
