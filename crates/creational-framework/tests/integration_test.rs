use creational_framework::{
    clone_instance, CloneMode, DuplicatePolicy, FamilyFactory, FamilyRegistry, FrameworkError,
    ProductVariant, Prototype, VariantFactory, VariantRegistry,
};
use std::sync::{Arc, Mutex};

// --- Test Products ---

trait Shape: ProductVariant {
    fn area(&self) -> f64;
}

struct Circle;

impl ProductVariant for Circle {
    fn kind(&self) -> &str {
        "circle"
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        std::f64::consts::PI
    }
}

struct Triangle;

impl ProductVariant for Triangle {
    fn kind(&self) -> &str {
        "triangle"
    }
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        0.5
    }
}

type BoxedShape = Box<dyn Shape>;

fn shape_factory() -> VariantFactory<BoxedShape> {
    let registry = Arc::new(VariantRegistry::new());
    registry
        .register("circle", || Box::new(Circle) as BoxedShape)
        .unwrap();
    registry
        .register("triangle", || Box::new(Triangle) as BoxedShape)
        .unwrap();
    VariantFactory::new(registry)
}

// --- Simple Factory ---

#[test]
fn create_returns_variant_with_matching_kind() {
    let factory = shape_factory();

    let circle = factory.create("circle").unwrap();
    assert_eq!(circle.kind(), "circle");
    assert!(circle.area() > 3.0);

    let triangle = factory.create("triangle").unwrap();
    assert_eq!(triangle.kind(), "triangle");
}

#[test]
fn unsupported_kind_is_a_recoverable_error() {
    let factory = shape_factory();

    match factory.create("square") {
        Err(FrameworkError::UnsupportedVariant { key }) => assert_eq!(key, "square"),
        Err(other) => panic!("expected UnsupportedVariant, got {other:?}"),
        Ok(_) => panic!("expected UnsupportedVariant, got a product"),
    }

    // The factory is still fully usable afterwards.
    assert!(factory.create("circle").is_ok());
    assert_eq!(factory.supported_kinds(), vec!["circle", "triangle"]);
}

#[test]
fn registry_miss_lists_supported_kinds() {
    let factory = shape_factory();

    match factory.registry().resolve("square") {
        Err(FrameworkError::UnknownVariant { key, supported }) => {
            assert_eq!(key, "square");
            assert_eq!(supported, vec!["circle".to_string(), "triangle".to_string()]);
        }
        Err(other) => panic!("expected UnknownVariant, got {other:?}"),
        Ok(_) => panic!("expected UnknownVariant, got a producer"),
    }
}

// --- Duplicate Policies ---

#[test]
fn overwrite_policy_last_registration_wins() {
    let registry: VariantRegistry<u32> = VariantRegistry::new();
    registry.register("n", || 1).unwrap();
    registry.register("n", || 2).unwrap();

    let producer = registry.resolve("n").unwrap();
    assert_eq!(producer(), 2);
    assert_eq!(registry.len(), 1);
}

#[test]
fn reject_policy_keeps_first_registration() {
    let registry: VariantRegistry<u32> = VariantRegistry::with_policy(DuplicatePolicy::Reject);
    registry.register("n", || 1).unwrap();

    match registry.register("n", || 2) {
        Err(FrameworkError::DuplicateKey { key }) => assert_eq!(key, "n"),
        other => panic!("expected DuplicateKey, got {other:?}"),
    }

    let producer = registry.resolve("n").unwrap();
    assert_eq!(producer(), 1);
}

// --- Abstract Factory ---

#[derive(Debug)]
struct Button {
    theme: &'static str,
}

impl ProductVariant for Button {
    fn kind(&self) -> &str {
        "button"
    }
}

#[derive(Debug)]
struct Scrollbar {
    theme: &'static str,
}

impl ProductVariant for Scrollbar {
    fn kind(&self) -> &str {
        "scrollbar"
    }
}

fn theme_factory() -> FamilyFactory<Button, Scrollbar> {
    let registry = Arc::new(FamilyRegistry::new());
    registry
        .register_family("light", || Button { theme: "light" }, || Scrollbar { theme: "light" })
        .unwrap();
    registry
        .register_family("dark", || Button { theme: "dark" }, || Scrollbar { theme: "dark" })
        .unwrap();
    FamilyFactory::new(registry)
}

#[test]
fn every_family_member_comes_from_the_same_family() {
    let factory = theme_factory();

    for key in factory.supported_families() {
        let family = factory.create_family(&key).unwrap();
        assert_eq!(family.family_key, key);
        assert_eq!(family.primary.theme, key);
        assert_eq!(family.secondary.theme, key);
    }
}

#[test]
fn families_from_different_keys_are_distinguishable() {
    let factory = theme_factory();

    let light = factory.create_family("light").unwrap();
    let dark = factory.create_family("dark").unwrap();

    // The caller's own bookkeeping can detect cross-family mixing.
    assert_ne!(light.primary.theme, dark.primary.theme);
    assert_ne!(light.secondary.theme, dark.secondary.theme);
}

#[test]
fn unknown_family_is_a_recoverable_error() {
    let factory = theme_factory();

    match factory.create_family("solarized") {
        Err(FrameworkError::UnsupportedVariant { key }) => assert_eq!(key, "solarized"),
        other => panic!("expected UnsupportedVariant, got {other:?}"),
    }
}

// --- Prototype ---

struct Sheet {
    name: String,
    // Shared with shallow clones.
    cells: Arc<Mutex<Vec<i32>>>,
}

impl Sheet {
    fn new(name: &str, cells: Vec<i32>) -> Self {
        Self {
            name: name.to_string(),
            cells: Arc::new(Mutex::new(cells)),
        }
    }
}

impl Prototype for Sheet {
    /// Shallow: `cells` remains shared with the source.
    fn clone_shallow(&self) -> Self {
        Self {
            name: self.name.clone(),
            cells: Arc::clone(&self.cells),
        }
    }

    fn clone_deep(&self) -> Result<Self, FrameworkError> {
        let cells = self.cells.lock().unwrap().clone();
        Ok(Self {
            name: self.name.clone(),
            cells: Arc::new(Mutex::new(cells)),
        })
    }
}

#[test]
fn deep_clone_is_independent_of_its_source() {
    let source = Sheet::new("budget", vec![1, 2, 3]);
    let clone = clone_instance(&source, CloneMode::Deep).unwrap();

    assert!(!Arc::ptr_eq(&source.cells, &clone.cells));

    clone.cells.lock().unwrap().push(4);
    assert_eq!(source.cells.lock().unwrap().len(), 3);
    assert_eq!(clone.cells.lock().unwrap().len(), 4);
}

#[test]
fn shallow_clone_aliases_shared_structure() {
    let source = Sheet::new("budget", vec![1, 2, 3]);
    let clone = clone_instance(&source, CloneMode::Shallow).unwrap();

    assert!(Arc::ptr_eq(&source.cells, &clone.cells));

    // Mutation through the clone is observable through the source.
    clone.cells.lock().unwrap().push(4);
    assert_eq!(source.cells.lock().unwrap().len(), 4);
}

struct Linked {
    label: String,
    // Opaque resource that cannot be duplicated.
    handle: Option<Arc<()>>,
}

impl Prototype for Linked {
    /// Shallow: `handle` remains shared with the source.
    fn clone_shallow(&self) -> Self {
        Self {
            label: self.label.clone(),
            handle: self.handle.clone(),
        }
    }

    fn clone_deep(&self) -> Result<Self, FrameworkError> {
        if self.handle.is_some() {
            return Err(FrameworkError::non_cloneable("handle"));
        }
        Ok(Self {
            label: self.label.clone(),
            handle: None,
        })
    }
}

#[test]
fn deep_clone_surfaces_non_cloneable_fields() {
    let source = Linked {
        label: "attached".to_string(),
        handle: Some(Arc::new(())),
    };

    match clone_instance(&source, CloneMode::Deep) {
        Err(FrameworkError::NonCloneableField { field_path }) => {
            assert_eq!(field_path, "handle");
        }
        Err(other) => panic!("expected NonCloneableField, got {other:?}"),
        Ok(_) => panic!("expected NonCloneableField, got a clone"),
    }

    // The same instance still clones shallowly.
    let shallow = clone_instance(&source, CloneMode::Shallow).unwrap();
    assert!(shallow.handle.is_some());
}
