use std::rc::Rc;

use kurbo::{Rect, Size};
use slidefx_animation_core::{
    classify_attribute_name, AnimationContext, AnimationError, AnimationFactory, ValueCategory,
};
use slidefx_api_core::{AttributeKind, ShapeRef};
use slidefx_test_fixtures::{RecordingShapeManager, TestShape};

fn setup() -> (ShapeRef, AnimationContext) {
    let shape: ShapeRef = TestShape::new(1, Rect::new(0.0, 0.0, 200.0, 100.0)).shared();
    let ctx = AnimationContext::new(Size::new(1000.0, 750.0))
        .with_shape_manager(Rc::new(RecordingShapeManager::new()));
    (shape, ctx)
}

#[test]
fn rotate_is_a_number_and_not_a_color() {
    assert_eq!(classify_attribute_name("Rotate"), ValueCategory::Number);

    let (shape, ctx) = setup();
    let factory = AnimationFactory::default();
    let err = factory
        .create_color_property_animation("Rotate", &shape, &ctx)
        .err();
    assert_eq!(
        err,
        Some(AnimationError::CategoryMismatch {
            attribute: "Rotate".into(),
            expected: ValueCategory::Color,
            actual: ValueCategory::Number,
        })
    );
}

#[test]
fn names_are_case_insensitive() {
    for name in ["rotate", "ROTATE", "RoTaTe", " rotate "] {
        assert_eq!(classify_attribute_name(name), ValueCategory::Number, "{name}");
    }
    assert_eq!(classify_attribute_name("CharFontName"), ValueCategory::String);
    assert_eq!(classify_attribute_name("fillcolor"), ValueCategory::Color);
    assert_eq!(classify_attribute_name("Visibility"), ValueCategory::Bool);
    assert_eq!(classify_attribute_name("CharUnderline"), ValueCategory::Enum);
    assert_eq!(classify_attribute_name("bogus"), ValueCategory::Unknown);
    assert_eq!(classify_attribute_name(""), ValueCategory::Unknown);
}

#[test]
fn category_table() {
    let expected = [
        ("x", ValueCategory::Number),
        ("y", ValueCategory::Number),
        ("width", ValueCategory::Number),
        ("height", ValueCategory::Number),
        ("rotate", ValueCategory::Number),
        ("skewx", ValueCategory::Number),
        ("skewy", ValueCategory::Number),
        ("opacity", ValueCategory::Number),
        ("charheight", ValueCategory::Number),
        ("charweight", ValueCategory::Number),
        ("charcolor", ValueCategory::Color),
        ("fillcolor", ValueCategory::Color),
        ("linecolor", ValueCategory::Color),
        ("dimcolor", ValueCategory::Color),
        ("color", ValueCategory::Color),
        ("charfontname", ValueCategory::String),
        ("visibility", ValueCategory::Bool),
        ("fillstyle", ValueCategory::Enum),
        ("linestyle", ValueCategory::Enum),
        ("charposture", ValueCategory::Enum),
        ("charunderline", ValueCategory::Enum),
    ];
    assert_eq!(expected.len(), AttributeKind::ALL.len());
    for (name, category) in expected {
        assert_eq!(classify_attribute_name(name), category, "{name}");
    }
}

/// Whatever the classifier says, exactly that factory accepts the name.
#[test]
fn factories_agree_with_the_classifier() {
    let (shape, ctx) = setup();
    let factory = AnimationFactory::default();

    for kind in AttributeKind::ALL {
        let name = kind.name();
        let category = factory.classify_attribute_name(name);
        let accepted = [
            (
                ValueCategory::Number,
                factory
                    .create_number_property_animation(name, &shape, &ctx)
                    .is_ok(),
            ),
            (
                ValueCategory::Color,
                factory
                    .create_color_property_animation(name, &shape, &ctx)
                    .is_ok(),
            ),
            (
                ValueCategory::String,
                factory
                    .create_string_property_animation(name, &shape, &ctx)
                    .is_ok(),
            ),
            (
                ValueCategory::Bool,
                factory
                    .create_bool_property_animation(name, &shape, &ctx)
                    .is_ok(),
            ),
            (
                ValueCategory::Enum,
                factory
                    .create_enum_property_animation(name, &shape, &ctx)
                    .is_ok(),
            ),
        ];
        for (candidate, ok) in accepted {
            assert_eq!(ok, candidate == category, "{name} via {candidate:?}");
        }
    }
}

#[test]
fn unknown_names_are_rejected_by_every_factory() {
    let (shape, ctx) = setup();
    let factory = AnimationFactory::default();
    let unknown = |e: Option<AnimationError>| matches!(e, Some(AnimationError::UnknownAttribute { .. }));

    assert!(unknown(
        factory
            .create_number_property_animation("zoom", &shape, &ctx)
            .err()
    ));
    assert!(unknown(
        factory
            .create_color_property_animation("zoom", &shape, &ctx)
            .err()
    ));
    assert!(unknown(
        factory
            .create_string_property_animation("zoom", &shape, &ctx)
            .err()
    ));
    assert!(unknown(
        factory
            .create_bool_property_animation("zoom", &shape, &ctx)
            .err()
    ));
    assert!(unknown(
        factory
            .create_enum_property_animation("zoom", &shape, &ctx)
            .err()
    ));
}

#[test]
fn errors_render_readably() {
    let err = AnimationError::CategoryMismatch {
        attribute: "Rotate".into(),
        expected: ValueCategory::Color,
        actual: ValueCategory::Number,
    };
    assert_eq!(
        err.to_string(),
        "attribute \"Rotate\" is a Number attribute, requested as Color"
    );
}
