//! Terminal walk-through of the compute contract: evaluates a handful of
//! solids with exact and decimal constants and prints the two-row result
//! display plus preview mesh statistics.
//!
//! Run with `cargo run --example calculator`; set `RUST_LOG=solidum=trace`
//! to watch the recomputation path.

use solidum::compute;
use solidum::geometry::{BaseKind, SolidKind};
use solidum::input::Inputs;
use tracing_subscriber::EnvFilter;

fn main() -> solidum::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cases = [
        ("Cylinder r=5 h=10, exact", Inputs {
            solid: SolidKind::Cylinder,
            ..Inputs::default()
        }),
        ("Sphere r=3, exact", Inputs {
            solid: SolidKind::Sphere,
            r1: "3".to_owned(),
            ..Inputs::default()
        }),
        ("Hexagonal prism r=3 h=5, exact", Inputs {
            solid: SolidKind::Prism,
            base: BaseKind::Hexagon,
            r1: "3".to_owned(),
            h: "5".to_owned(),
            ..Inputs::default()
        }),
        ("Circular frustum r1=5 r2=2 h=6, pi = 3.14", Inputs {
            solid: SolidKind::Frustum,
            base: BaseKind::Circle,
            r2: "2".to_owned(),
            h: "6".to_owned(),
            pi_as_number: true,
            ..Inputs::default()
        }),
        ("Rectangular pyramid 6 x 8, h=4", Inputs {
            solid: SolidKind::Pyramid,
            base: BaseKind::Rectangle,
            r1: "6".to_owned(),
            w: "8".to_owned(),
            h: "4".to_owned(),
            ..Inputs::default()
        }),
    ];

    for (label, inputs) in cases {
        let c = compute(&inputs)?;
        println!("{label}");
        println!("  base area     {}", c.display.base_area);
        println!("  lateral area  {}", c.display.lateral_area);
        println!("  total area    {}", c.display.total_area);
        println!("  volume        {}", c.display.volume);
        println!(
            "  preview       {} vertices, {} triangles",
            c.mesh.vertices.len(),
            c.mesh.indices.len()
        );
        println!();
    }

    // invalid input rejects the whole update and changes nothing
    let bad = Inputs {
        r1: "five".to_owned(),
        ..Inputs::default()
    };
    if let Err(err) = compute(&bad) {
        println!("rejected: {err}");
    }

    Ok(())
}
