// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuring a control from JSON.
//!
//! Loads a partial description (missing fields take their defaults), builds a
//! ten-star control with filled glyphs, and shows how invalid descriptions are
//! reported.
//!
//! Run:
//! - `cargo run -p understory_demos --example rating_config`

use understory_rating::{ConfigError, Glyphs, HitTest, NoAnimation, RatingConfig, StarRating};

const DESCRIPTION: &str = r#"{
    "cell_count": 10,
    "cell_size": 24.0,
    "spacing": 4.0,
    "glyphs": { "active": "★", "inactive": "☆" },
    "hit_test": "Scan"
}"#;

fn main() {
    let config: RatingConfig = serde_json::from_str(DESCRIPTION).unwrap();
    println!("== Loaded ==\n  {:?}", config);
    assert_eq!(config.glyphs, Glyphs::filled());
    assert_eq!(config.hit_test, HitTest::Scan);
    assert_eq!(config.font, RatingConfig::default().font);

    let rating = StarRating::new(config, NoAnimation).unwrap();
    let size = rating.preferred_size();
    println!("== Preferred size ==\n  {:?}", size);
    assert_eq!(size.width, 10.0 * 24.0 + 11.0 * 4.0);
    assert_eq!(rating.glyph(1), Some('★'));
    assert_eq!(rating.glyph(2), Some('☆'));

    println!("== Rejected ==");
    for (json, expected) in [
        (r#"{ "cell_count": 0 }"#, ConfigError::NoCells),
        (r#"{ "cell_size": -3.0 }"#, ConfigError::CellSize(-3.0)),
        (r#"{ "spacing": -1.0 }"#, ConfigError::Spacing(-1.0)),
    ] {
        let config: RatingConfig = serde_json::from_str(json).unwrap();
        let err = StarRating::new(config, NoAnimation).unwrap_err();
        println!("  {json}: {err}");
        assert_eq!(err, expected);
    }

    println!("== Round trip ==");
    let json = serde_json::to_string_pretty(&RatingConfig::default()).unwrap();
    println!("{json}");
    let back: RatingConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, RatingConfig::default());
}
