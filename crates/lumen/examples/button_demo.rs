//! Headless walkthrough of the glow button.
//!
//! Builds a power-toggle button against the in-memory backend, wires its
//! signals, and drives a hover-press-release sequence the way a host event
//! loop would. Run with `RUST_LOG=lumen::interaction=trace` to watch the
//! state machine.

use std::sync::Arc;

use lumen::widget::{
    GlowButton, GlowStyle, ImagePlacement, MouseButton, PointerEnterEvent, PointerPressEvent,
    PointerReleaseEvent, StatePair, TrackingRegistry,
};
use lumen_render::{Color, Image, ImageScaling, MemoryBackend, Point, Rect};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let backend = Arc::new(MemoryBackend::new());

    let style = GlowStyle {
        border: StatePair::new(Color::DARK_GRAY, Color::WHITE),
        fill: StatePair::new(Color::from_hex("#1c1c22").unwrap(), Color::TRANSPARENT),
        icon: StatePair::new(Color::WHITE, Color::from_rgb8(140, 205, 247)),
        glow_radius: 6.0,
        glow_opacity: 0.9,
        momentary: false,
        ..GlowStyle::default()
    };

    let mut power = GlowButton::new(backend)
        .with_frame(Rect::new(20.0, 20.0, 120.0, 40.0))
        .with_title("Power")
        .with_style(style)
        .with_image(Image::from_size((16.0, 16.0)))
        .with_image_scaling(ImageScaling::ProportionallyDown)
        .with_image_placement(ImagePlacement::Left);

    power.toggled.connect(|on| {
        println!("power is now {}", if *on { "ON" } else { "OFF" });
    });
    power.activated.connect(|()| {
        println!("button activated");
    });

    let mut registry = TrackingRegistry::new();
    power.attach_tracking(&mut registry);

    // A host would derive these events from its native input stream; here we
    // walk the pointer in, click, and report what the layers ended up with.
    let cursor = Point::new(60.0, 40.0);
    if !registry.areas_at(cursor).is_empty() {
        power.handle_pointer_enter(&mut PointerEnterEvent::new(cursor));
    }
    power.handle_pointer_press(&mut PointerPressEvent::new(MouseButton::Left, cursor));
    power.handle_pointer_release(&mut PointerReleaseEvent::new(MouseButton::Left, cursor));

    let shadow = power.glow_layer().shadow();
    println!(
        "on={} glow color=({:.2}, {:.2}, {:.2}) radius={}",
        power.is_on(),
        shadow.color.r,
        shadow.color.g,
        shadow.color.b,
        shadow.radius
    );

    power.detach_tracking(&mut registry);
}
