use std::rc::Rc;

use slidefx_animation_core::{
    Animation, AnimationContext, AnimationError, AnimationFactory, AnimationFlags, BoolAnimation,
    ColorAnimation, Config, EnumAnimation, NumberAnimation, StringAnimation,
};
use slidefx_api_core::{Color, Shape, ShapeAttributeLayer, ShapeId, ShapeRef};
use slidefx_test_fixtures::{scenes, LoadedScene, ManagerEvent, TestShape};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn load(name: &str) -> LoadedScene {
    scenes::load(name).expect("scene fixture should load")
}

fn context(scene: &LoadedScene) -> AnimationContext {
    AnimationContext::new(scene.page).with_shape_manager(scene.manager.clone())
}

fn shape(scene: &LoadedScene, id: u64) -> (Rc<TestShape>, ShapeRef) {
    let shape = scene.shape(id).expect("shape in scene");
    let as_ref: ShapeRef = shape.clone();
    (shape, as_ref)
}

#[test]
fn start_then_end_without_values_does_not_repaint() {
    let scene = load("two-boxes");
    let (shape, shape_ref) = shape(&scene, 1);
    let factory = AnimationFactory::default();
    let mut anim = factory
        .create_number_property_animation("opacity", &shape_ref, &context(&scene))
        .unwrap();

    anim.start(shape_ref.clone(), shape.layer_ref()).unwrap();
    anim.end();

    assert_eq!(
        scene.manager.events(),
        vec![
            ManagerEvent::EnterAnimationMode(ShapeId(1)),
            ManagerEvent::LeaveAnimationMode(ShapeId(1)),
        ]
    );
    assert_eq!(shape.layer().borrow().write_count(), 0);
    assert!(!shape.is_content_changed());
}

#[test]
fn identity_underlying_value_prefers_the_layer() {
    let scene = load("two-boxes");
    let (shape, shape_ref) = shape(&scene, 1);
    let factory = AnimationFactory::default();
    let mut anim = factory
        .create_number_property_animation("Opacity", &shape_ref, &context(&scene))
        .unwrap();

    assert!(matches!(
        anim.underlying_value(),
        Err(AnimationError::NotStarted { .. })
    ));

    anim.start(shape_ref, shape.layer_ref()).unwrap();
    assert_eq!(anim.underlying_value(), Ok(1.0));

    shape.layer().borrow_mut().set_alpha(0.3);
    assert_eq!(anim.underlying_value(), Ok(0.3));
}

#[test]
fn page_relative_numbers_scale_both_ways() {
    let scene = load("two-boxes");
    let (shape, shape_ref) = shape(&scene, 1);
    let factory = AnimationFactory::default();
    let ctx = context(&scene);

    let mut x = factory
        .create_number_property_animation("x", &shape_ref, &ctx)
        .unwrap();
    x.start(shape_ref.clone(), shape.layer_ref()).unwrap();
    // baseline is the document center, normalized to the page width
    assert!(approx(x.underlying_value().unwrap(), 4000.0 / 28000.0));

    assert!(x.apply(0.5));
    assert_eq!(shape.layer().borrow().pos_x(), 14000.0);
    assert_eq!(x.underlying_value(), Ok(0.5));

    let mut height = factory
        .create_number_property_animation("HEIGHT", &shape_ref, &ctx)
        .unwrap();
    height
        .start(shape_ref.clone(), shape.layer_ref())
        .unwrap();
    assert!(approx(height.underlying_value().unwrap(), 4000.0 / 21000.0));
    assert!(height.apply(0.25));
    assert_eq!(shape.layer().borrow().height(), 5250.0);
    assert_eq!(height.underlying_value(), Ok(0.25));
}

#[test]
fn repaint_follows_content_changes() {
    let scene = load("two-boxes");
    let (shape, shape_ref) = shape(&scene, 1);
    let factory = AnimationFactory::default();
    let mut anim = factory
        .create_number_property_animation("rotate", &shape_ref, &context(&scene))
        .unwrap();

    anim.start(shape_ref, shape.layer_ref()).unwrap();
    assert!(anim.apply(45.0));
    assert!(anim.apply(90.0));
    assert_eq!(scene.manager.update_count(ShapeId(1)), 2);
    assert_eq!(shape.layer().borrow().rotation_angle(), 90.0);

    // already painted, nothing left to flush
    anim.end();
    assert_eq!(scene.manager.update_count(ShapeId(1)), 2);
    assert!(scene.manager.animated_shapes().is_empty());
}

#[test]
fn end_flushes_a_pending_change() {
    let scene = load("two-boxes");
    let (shape, shape_ref) = shape(&scene, 2);
    let factory = AnimationFactory::default();
    let mut anim = factory
        .create_number_property_animation("skewx", &shape_ref, &context(&scene))
        .unwrap();

    anim.start(shape_ref, shape.layer_ref()).unwrap();
    assert!(anim.apply(10.0));
    // another effect touches the layer after the last frame
    shape.layer().borrow_mut().set_alpha(0.5);
    anim.end();
    assert_eq!(scene.manager.update_count(ShapeId(2)), 2);
    assert!(!shape.is_content_changed());
}

#[test]
fn lifecycle_misuse_is_reported_not_fatal() {
    let scene = load("two-boxes");
    let (shape, shape_ref) = shape(&scene, 1);
    let factory = AnimationFactory::default();
    let mut anim = factory
        .create_number_property_animation("width", &shape_ref, &context(&scene))
        .unwrap();

    assert!(!anim.apply(0.5));
    assert_eq!(shape.layer().borrow().write_count(), 0);

    anim.start(shape_ref.clone(), shape.layer_ref()).unwrap();
    assert!(anim.is_started());
    assert!(matches!(
        anim.start(shape_ref.clone(), shape.layer_ref()),
        Err(AnimationError::AlreadyStarted { .. })
    ));

    anim.end();
    anim.end();
    assert!(!anim.is_started());
    assert_eq!(
        scene
            .manager
            .count(ManagerEvent::LeaveAnimationMode(ShapeId(1))),
        1
    );

    // a fresh start after end is fine
    anim.start(shape_ref, shape.layer_ref()).unwrap();
    assert!(anim.apply(0.5));
    assert_eq!(shape.layer().borrow().width(), 14000.0);
}

#[test]
fn defaults_come_from_shape_properties() {
    let scene = load("title-slide");
    let (shape, shape_ref) = shape(&scene, 10);
    let factory = AnimationFactory::new(Config::default());
    let ctx = context(&scene);

    let mut weight = factory
        .create_number_property_animation("CharWeight", &shape_ref, &ctx)
        .unwrap();
    weight.start(shape_ref.clone(), shape.layer_ref()).unwrap();
    assert_eq!(weight.underlying_value(), Ok(150.0));

    let mut color = factory
        .create_color_property_animation("CharColor", &shape_ref, &ctx)
        .unwrap();
    color.start(shape_ref.clone(), shape.layer_ref()).unwrap();
    assert_eq!(color.underlying_value(), Ok(Color::new(0.2, 0.2, 0.2)));

    let mut font = factory
        .create_string_property_animation("CharFontName", &shape_ref, &ctx)
        .unwrap();
    font.start(shape_ref.clone(), shape.layer_ref()).unwrap();
    assert_eq!(font.underlying_value().as_deref(), Ok("Liberation Sans"));
    assert!(font.apply("DejaVu Serif"));
    assert_eq!(shape.layer().borrow().font_family(), "DejaVu Serif");
    assert_eq!(font.underlying_value().as_deref(), Ok("DejaVu Serif"));

    let mut fill_style = factory
        .create_enum_property_animation("FillStyle", &shape_ref, &ctx)
        .unwrap();
    fill_style
        .start(shape_ref.clone(), shape.layer_ref())
        .unwrap();
    assert_eq!(fill_style.underlying_value(), Ok(1));
    assert!(fill_style.apply(3));
    assert_eq!(shape.layer().borrow().fill_style(), 3);

    // composite color drives the fill slot
    let mut composite = factory
        .create_color_property_animation("color", &shape_ref, &ctx)
        .unwrap();
    composite.start(shape_ref, shape.layer_ref()).unwrap();
    assert_eq!(composite.underlying_value(), Ok(Color::WHITE));
    assert!(composite.apply(&Color::from_u32(0xff0000)));
    assert_eq!(shape.layer().borrow().fill_color(), Color::new(1.0, 0.0, 0.0));
}

#[test]
fn missing_or_mistyped_defaults_fall_back() {
    let scene = load("title-slide");
    let (shape, shape_ref) = shape(&scene, 11);
    let factory = AnimationFactory::default();
    let ctx = context(&scene);

    // stored as a string on this shape
    let mut weight = factory
        .create_number_property_animation("charweight", &shape_ref, &ctx)
        .unwrap();
    weight.start(shape_ref.clone(), shape.layer_ref()).unwrap();
    assert_eq!(weight.underlying_value(), Ok(0.0));

    let mut line = factory
        .create_color_property_animation("linecolor", &shape_ref, &ctx)
        .unwrap();
    line.start(shape_ref.clone(), shape.layer_ref()).unwrap();
    assert_eq!(line.underlying_value(), Ok(Color::BLACK));

    let mut font = factory
        .create_string_property_animation("charfontname", &shape_ref, &ctx)
        .unwrap();
    font.start(shape_ref.clone(), shape.layer_ref()).unwrap();
    assert_eq!(font.underlying_value(), Ok(String::new()));

    let mut posture = factory
        .create_enum_property_animation("charposture", &shape_ref, &ctx)
        .unwrap();
    posture.start(shape_ref, shape.layer_ref()).unwrap();
    assert_eq!(posture.underlying_value(), Ok(0));
}

#[test]
fn visibility_defaults_to_visible() {
    let scene = load("two-boxes");
    let (shape, shape_ref) = shape(&scene, 1);
    let factory = AnimationFactory::default();
    let mut anim = factory
        .create_bool_property_animation("visibility", &shape_ref, &context(&scene))
        .unwrap();

    anim.start(shape_ref, shape.layer_ref()).unwrap();
    assert_eq!(anim.underlying_value(), Ok(true));
    assert!(anim.apply(false));
    assert!(!shape.layer().borrow().visibility());
    assert_eq!(anim.underlying_value(), Ok(false));
}

#[test]
fn no_sprite_flag_skips_animation_mode() {
    let scene = load("two-boxes");
    let (shape, shape_ref) = shape(&scene, 1);
    let factory = AnimationFactory::default();
    let ctx = context(&scene).with_flags(AnimationFlags::NO_SPRITE);
    let mut anim = factory
        .create_number_property_animation("charheight", &shape_ref, &ctx)
        .unwrap();

    anim.start(shape_ref, shape.layer_ref()).unwrap();
    assert_eq!(anim.underlying_value(), Ok(1.0));
    assert!(anim.apply(1.5));
    anim.end();
    assert_eq!(
        scene.manager.events(),
        vec![ManagerEvent::ShapeUpdate(ShapeId(1))]
    );
}

#[test]
fn writes_are_mirrored_into_a_running_world() {
    let scene = load("two-boxes");
    let (shape, shape_ref) = shape(&scene, 1);
    let factory = AnimationFactory::default();
    let world = factory.config().new_world();
    let manager: slidefx_api_core::ShapeManagerRef = scene.manager.clone();
    let ctx = context(&scene).with_world(world.clone());

    let mut x = factory
        .create_number_property_animation("x", &shape_ref, &ctx)
        .unwrap();
    x.start(shape_ref.clone(), shape.layer_ref()).unwrap();

    // no simulation yet: nothing is queued
    assert!(x.apply(0.2));
    assert_eq!(world.borrow().pending_updates(), 0);

    world
        .borrow_mut()
        .alert_physics_animation_start(scene.page, &manager);
    assert!(x.apply(0.3));
    assert_eq!(world.borrow().pending_updates(), 1);

    let mut opacity = factory
        .create_number_property_animation("opacity", &shape_ref, &ctx)
        .unwrap();
    opacity
        .start(shape_ref.clone(), shape.layer_ref())
        .unwrap();
    assert!(opacity.apply(0.5));
    assert_eq!(world.borrow().pending_updates(), 1);

    x.end();
    assert_eq!(world.borrow().pending_updates(), 2);

    // one step: the teleport lands, the stop waits one more pass
    world.borrow_mut().step_amount(0.01);
    let body = world.borrow().body(ShapeId(1)).expect("shape has a body");
    assert!(approx(body.borrow().position().x, 0.3 * 28000.0));
    assert_eq!(world.borrow().pending_updates(), 1);
}
