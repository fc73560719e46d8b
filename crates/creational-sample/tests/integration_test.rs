use creational_framework::{clone_instance, CloneMode, FrameworkError, ProductVariant, SlotStatus};
use creational_sample::config::{eager_config_slot, AppConfig};
use creational_sample::lifecycle::DrawToolSystem;
use creational_sample::model::{ControlSurface, Document, NativeHandle, Screen, Shape};
use creational_sample::DrawToolError;
use std::sync::Arc;
use std::thread;

/// End-to-end scenario: register `"circle"` and `"triangle"`, create each,
/// and verify `"square"` fails with an explicit unsupported-variant error.
#[test]
fn draw_tool_creates_registered_shapes_only() {
    let system = DrawToolSystem::new().expect("wiring the system");

    let circle = system.create_shape("circle").expect("circle is registered");
    assert_eq!(circle.kind(), "circle");
    assert!(circle.area() > 0.0);

    let triangle = system
        .create_shape("triangle")
        .expect("triangle is registered");
    assert_eq!(triangle.kind(), "triangle");

    match system.create_shape("square") {
        Err(FrameworkError::UnsupportedVariant { key }) => assert_eq!(key, "square"),
        Err(other) => panic!("expected UnsupportedVariant, got {other:?}"),
        Ok(_) => panic!("expected UnsupportedVariant, got a shape"),
    }

    assert_eq!(system.supported_shapes(), vec!["circle", "triangle"]);
}

#[test]
fn theme_families_never_mix_positions() {
    let system = DrawToolSystem::new().expect("wiring the system");

    for key in system.supported_themes() {
        let family = system.create_theme(&key).expect("registered theme");
        assert_eq!(family.family_key, key);
        assert_eq!(family.primary.theme(), key);
        assert_eq!(family.secondary.theme(), key);
    }

    match system.create_theme("solarized") {
        Err(FrameworkError::UnsupportedVariant { key }) => assert_eq!(key, "solarized"),
        Err(other) => panic!("expected UnsupportedVariant, got {other:?}"),
        Ok(_) => panic!("expected UnsupportedVariant, got a family"),
    }
}

#[test]
fn config_slot_yields_one_shared_instance_across_threads() {
    let system = Arc::new(DrawToolSystem::new().expect("wiring the system"));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let system = Arc::clone(&system);
            thread::spawn(move || system.config().expect("config constructs"))
        })
        .collect();

    let configs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let first = &configs[0];
    for config in &configs {
        assert!(Arc::ptr_eq(first, config));
    }
    assert_eq!(system.config_slot().status(), SlotStatus::Ready);
}

#[test]
fn default_shape_comes_from_the_shared_config() {
    let system = DrawToolSystem::new().expect("wiring the system");

    let shape = system.create_default_shape().expect("default is registered");
    assert_eq!(shape.kind(), system.config().unwrap().default_shape);
}

#[test]
fn configured_theme_comes_from_the_supplied_config() {
    let system = DrawToolSystem::with_config(AppConfig {
        theme: "dark".to_string(),
        ..AppConfig::default()
    })
    .expect("wiring the system");

    let family = system.create_configured_theme().expect("dark is registered");
    assert_eq!(family.family_key, "dark");
    assert_eq!(family.primary.theme(), "dark");
}

#[test]
fn misconfigured_theme_is_reported_as_a_config_error() {
    let system = DrawToolSystem::with_config(AppConfig {
        theme: "solarized".to_string(),
        ..AppConfig::default()
    })
    .expect("wiring the system");

    match system.create_configured_theme() {
        Err(DrawToolError::UnknownConfiguredTheme(key)) => assert_eq!(key, "solarized"),
        Err(other) => panic!("expected UnknownConfiguredTheme, got {other:?}"),
        Ok(_) => panic!("expected UnknownConfiguredTheme, got a family"),
    }
}

#[test]
fn eager_config_slot_needs_no_construction() {
    let slot = eager_config_slot(AppConfig {
        theme: "dark".to_string(),
        ..AppConfig::default()
    });

    assert_eq!(slot.status(), SlotStatus::Ready);
    assert_eq!(slot.get_instance().unwrap().theme, "dark");
}

// --- Prototype scenarios ---

#[test]
fn shallow_document_clone_shares_attachments() {
    let original = Document::new("poster", "body");
    original.attach("sketch.png");

    let clone = clone_instance(&original, CloneMode::Shallow).unwrap();
    assert!(Arc::ptr_eq(&original.attachments, &clone.attachments));

    // Documented aliasing: the clone's mutation is visible through the source.
    clone.attach("notes.txt");
    assert_eq!(original.attachment_count(), 2);
}

#[test]
fn deep_document_clone_is_independent() {
    let original = Document::new("poster", "body");
    original.attach("sketch.png");

    let clone = clone_instance(&original, CloneMode::Deep).unwrap();
    assert!(!Arc::ptr_eq(&original.attachments, &clone.attachments));

    clone.attach("only-on-the-clone.txt");
    assert_eq!(original.attachment_count(), 1);
    assert_eq!(clone.attachment_count(), 2);
    assert_eq!(clone.header.title, original.header.title);
}

#[test]
fn deep_clone_reports_the_full_nested_field_path() {
    let pinned = Document::new("pinned", "body").with_logo(NativeHandle { descriptor: 7 });

    match clone_instance(&pinned, CloneMode::Deep) {
        Err(FrameworkError::NonCloneableField { field_path }) => {
            assert_eq!(field_path, "header.logo");
        }
        other => panic!("expected NonCloneableField, got {other:?}"),
    }

    // Shallow cloning the same document still works, sharing the handle.
    let shallow = clone_instance(&pinned, CloneMode::Shallow).unwrap();
    let (a, b) = (&pinned.header.logo, &shallow.header.logo);
    match (a, b) {
        (Some(a), Some(b)) => assert!(Arc::ptr_eq(a, b)),
        _ => panic!("logo should be present on both"),
    }
}
