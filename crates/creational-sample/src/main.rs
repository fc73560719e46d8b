//! # Draw Tool Demo
//!
//! Walks every creation path the framework offers:
//! 1. Simple factory: shapes by kind key, including the unsupported-key path.
//! 2. Abstract factory: a complete theme family from one family key.
//! 3. Singleton slot: the shared config read from concurrent tasks.
//! 4. Prototype: shallow and deep document clones, including the
//!    non-cloneable-field failure.

use creational_framework::{clone_instance, setup_tracing, CloneMode, ProductVariant};
use creational_sample::lifecycle::DrawToolSystem;
use creational_sample::model::{ControlSurface, Document, NativeHandle, Screen, Shape};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting draw tool demo");
    let system = Arc::new(DrawToolSystem::new()?);

    // --- Simple factory ---
    let circle = system.create_shape("circle")?;
    info!(kind = circle.kind(), area = circle.area(), "Created shape");

    let triangle = system.create_shape("triangle")?;
    info!(kind = triangle.kind(), area = triangle.area(), "Created shape");

    // An unsupported kind is a reportable condition, not a crash.
    if let Err(e) = system.create_shape("square") {
        warn!(
            error = %e,
            supported = ?system.supported_shapes(),
            "Rejected unsupported shape"
        );
    }

    // --- Abstract factory ---
    let theme = system.create_theme("dark")?;
    info!(
        family = %theme.family_key,
        control = theme.primary.kind(),
        screen = theme.secondary.kind(),
        "Theme family ready"
    );
    info!("{}", theme.primary.press());
    info!("{}", theme.secondary.render());

    // --- Singleton slot, hit from concurrent tasks ---
    let mut handles = Vec::new();
    for _ in 0..4 {
        let system = Arc::clone(&system);
        // get_instance may block, so it runs on the blocking pool.
        handles.push(tokio::task::spawn_blocking(move || system.config()));
    }
    for handle in handles {
        let config = handle.await??;
        info!(
            canvas_width = config.canvas_width,
            canvas_height = config.canvas_height,
            default_shape = %config.default_shape,
            "Task observed shared config"
        );
    }
    let default_shape = system.create_default_shape()?;
    info!(kind = default_shape.kind(), "Created default shape from config");

    // --- Prototype ---
    let original = Document::new("launch poster", "draft body");
    original.attach("sketch.png");

    let shallow = clone_instance(&original, CloneMode::Shallow)?;
    shallow.attach("notes.txt");
    info!(
        source_attachments = original.attachment_count(),
        clone_attachments = shallow.attachment_count(),
        "Shallow clone shares attachments with its source"
    );

    let deep = clone_instance(&original, CloneMode::Deep)?;
    deep.attach("only-on-the-clone.txt");
    info!(
        source_attachments = original.attachment_count(),
        clone_attachments = deep.attachment_count(),
        "Deep clone is fully independent"
    );

    let pinned = Document::new("pinned", "holds an OS resource")
        .with_logo(NativeHandle { descriptor: 7 });
    if let Err(e) = clone_instance(&pinned, CloneMode::Deep) {
        warn!(error = %e, "Deep clone refused, as it must be");
    }

    info!("Demo complete");
    Ok(())
}
