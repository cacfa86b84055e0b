//! Hull sizes of a few random clouds, for quick visual sanity on counts.
//!
//! Usage:
//!   cargo run -p hullring --example cloud_hull -- uniform
//!   cargo run -p hullring --example cloud_hull -- circle

use hullring::api::{
    convex_hull, draw_cloud, draw_cloud_on_circle, CloudCfg, PointCount, ReplayToken,
};

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "uniform".to_string());
    match mode.as_str() {
        "uniform" => show_uniform(),
        "circle" => show_circle(),
        _ => {
            eprintln!("usage: cloud_hull [uniform|circle]");
        }
    }
}

fn show_uniform() {
    let cfg = CloudCfg {
        point_count: PointCount::Fixed(256),
        half_extent: 1.0,
        snap_step: None,
    };
    for index in 0..5 {
        let pts = draw_cloud(cfg, ReplayToken { seed: 2025, index });
        let hull = convex_hull(&pts).expect("nonempty cloud");
        println!("uniform sample {index}: n={}, hull={}", pts.len(), hull.len());
    }
}

fn show_circle() {
    for index in 0..5 {
        let pts = draw_cloud_on_circle(64, 1.0, ReplayToken { seed: 777, index });
        let hull = convex_hull(&pts).expect("nonempty cloud");
        println!("circle sample {index}: n={}, hull={}", pts.len(), hull.len());
    }
}
