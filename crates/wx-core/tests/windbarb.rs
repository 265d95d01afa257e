// File: crates/wx-core/tests/windbarb.rs
// Purpose: Greedy knot decomposition and glyph geometry of wind barbs.

use wx_core::canvas::PathCommand;
use wx_core::geometry::Point;
use wx_core::windbarb::{mps_to_knots, reference_sheet, wind_barb, BarbSegment, WindSymbol};
use wx_core::Color;

fn kts(knots: f64) -> f64 {
    knots * 1852.0 / 3600.0
}

fn black() -> Color {
    Color::parse("black").unwrap()
}

fn counts(knots: f64) -> (usize, usize, usize) {
    let g = wind_barb(kts(knots), 0.0, Point::new(0.0, 0.0), 1.0, black());
    (g.pennants(), g.barbs(), g.half_barbs())
}

#[test]
fn knots_conversion_rounds() {
    assert_eq!(mps_to_knots(0.0), 0);
    assert_eq!(mps_to_knots(1.0), 2); // 1.94 kt
    assert_eq!(mps_to_knots(10.0), 19); // 19.44 kt
    assert_eq!(mps_to_knots(kts(47.0)), 47);
}

#[test]
fn calm_is_a_circle() {
    for knots in [0.0, 1.0, 2.0] {
        let g = wind_barb(kts(knots), 123.0, Point::new(50.0, 60.0), 0.4, black());
        assert!(g.is_calm());
        assert!((g.calm_radius().unwrap() - 12.8).abs() < 1e-9);
        assert!(g.stroke_path().is_empty());
    }
}

#[test]
fn greedy_decomposition_thresholds() {
    assert_eq!(counts(3.0), (0, 0, 1));
    assert_eq!(counts(7.0), (0, 0, 1));
    assert_eq!(counts(8.0), (0, 1, 0));
    assert_eq!(counts(13.0), (0, 1, 1));
    assert_eq!(counts(47.0), (0, 4, 1));
    assert_eq!(counts(48.0), (1, 0, 0));
    assert_eq!(counts(65.0), (1, 1, 1));
    assert_eq!(counts(100.0), (2, 0, 0));
}

#[test]
fn segments_walk_down_the_staff() {
    let g = wind_barb(kts(65.0), 0.0, Point::new(0.0, 0.0), 1.0, black());
    assert_eq!(
        g.symbol,
        WindSymbol::Staff(vec![
            BarbSegment::Pennant { base_y: -32.0 },
            BarbSegment::Barb { base_y: -20.0 },
            BarbSegment::HalfBarb { base_y: -11.0 },
        ])
    );
    assert_eq!(g.drawn_knots(), 65);
}

#[test]
fn only_pennants_are_filled() {
    let g = wind_barb(kts(60.0), 0.0, Point::new(0.0, 0.0), 1.0, black());
    let fill = g.fill_path();
    assert_eq!(fill.iter().filter(|c| matches!(c, PathCommand::Close)).count(), 1);

    let barbs_only = wind_barb(kts(20.0), 0.0, Point::new(0.0, 0.0), 1.0, black());
    assert!(barbs_only.fill_path().is_empty());
    // foot (3 commands) + staff (2) + two barbs (2 each)
    assert_eq!(barbs_only.stroke_path().len(), 9);
}

#[test]
fn glyph_is_rotated_and_scaled_about_anchor() {
    let anchor = Point::new(100.0, 200.0);
    let north = wind_barb(kts(20.0), 0.0, anchor, 0.5, black());
    let tip = north.to_canvas(Point::new(0.0, -32.0));
    assert!((tip.x - 100.0).abs() < 1e-9 && (tip.y - 184.0).abs() < 1e-9);

    // from the east: the staff points right
    let east = wind_barb(kts(20.0), 90.0, anchor, 0.5, black());
    let tip = east.to_canvas(Point::new(0.0, -32.0));
    assert!((tip.x - 116.0).abs() < 1e-9 && (tip.y - 200.0).abs() < 1e-9);
}

#[test]
fn reference_sheet_covers_each_knot() {
    let sheet = reference_sheet(110, 0.7, &black());
    assert_eq!(sheet.len(), 110);
    let (k, label, glyph) = &sheet[21];
    assert_eq!(*k, 21);
    assert_eq!(*label, Point::new(40.0, 90.0));
    assert_eq!(glyph.anchor, Point::new(40.0, 120.0));
    assert_eq!(glyph.drawn_knots(), 20);
}
