use approx::assert_abs_diff_eq;
use picker_core::numeric::{calc_nice_number, clamp, clamp_f64, snap_to_ticks};
use picker_core::text::{extract_hex_color, extract_number};
use picker_core::{
    color_at, create_color_palette, hsl_to_rgb, rgb_to_hsl, Color, GradientStop,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn grid() -> impl Iterator<Item = (f64, f64, f64)> {
    let steps = [0.0, 0.1, 0.25, 0.5, 0.6, 0.75, 0.9, 1.0];
    steps.into_iter().flat_map(move |r| {
        steps
            .into_iter()
            .flat_map(move |g| steps.into_iter().map(move |b| (r, g, b)))
    })
}

#[test]
fn hsl_round_trip_over_grid() {
    for (r, g, b) in grid() {
        let hsl = rgb_to_hsl(r, g, b);
        let c = hsl_to_rgb(hsl.hue, hsl.saturation, hsl.lightness, 1.0);
        assert_abs_diff_eq!(c.r(), r, epsilon = 1e-9);
        assert_abs_diff_eq!(c.g(), g, epsilon = 1e-9);
        assert_abs_diff_eq!(c.b(), b, epsilon = 1e-9);
    }
}

#[test]
fn full_turn_of_hue_changes_nothing() {
    for hue in [0.0, 30.0, 90.0, 180.0, 270.0, 345.0] {
        let a = hsl_to_rgb(hue, 0.7, 0.4, 1.0);
        let b = hsl_to_rgb(hue + 360.0, 0.7, 0.4, 1.0);
        assert_abs_diff_eq!(a.r(), b.r(), epsilon = 1e-12);
        assert_abs_diff_eq!(a.g(), b.g(), epsilon = 1e-12);
        assert_abs_diff_eq!(a.b(), b.b(), epsilon = 1e-12);
    }
}

#[test]
fn clamp_is_idempotent() {
    for v in [-10.0, -0.5, 0.0, 0.3, 1.0, 7.5] {
        let once = clamp_f64(0.0, 1.0, v);
        assert_eq!(clamp_f64(0.0, 1.0, once), once);
        let once = clamp(-1.0, 2.0, v);
        assert_eq!(clamp(-1.0, 2.0, once), once);
    }
}

#[test]
fn palette_between_equal_colors_repeats_it() {
    let c = Color::from_rgba(0.3, 0.6, 0.9, 0.8);
    for n in 1..=12 {
        let palette = create_color_palette(&c, &c, n);
        assert_eq!(palette.len(), n as usize);
        assert!(palette.iter().all(|p| *p == c));
    }
}

#[test]
fn palette_of_one_is_the_start_color() {
    let from = Color::from_rgb8(10, 20, 30);
    assert_eq!(create_color_palette(&from, &Color::WHITE, 1), vec![from]);
}

#[test]
fn gradient_edge_cases() {
    init_logging();
    assert_eq!(color_at(&[], 0.7), Color::BLACK);

    let red = Color::from_rgba(1.0, 0.0, 0.0, 1.0);
    for position in [-1.0, 0.0, 0.3, 0.5, 1.0, 2.0] {
        assert_eq!(color_at(&[GradientStop::new(0.3, red)], position), red);
    }
}

#[test]
fn black_to_white_midpoint_is_gray() {
    let stops = [
        GradientStop::new(0.0, Color::BLACK),
        GradientStop::new(1.0, Color::WHITE),
    ];
    let c = color_at(&stops, 0.5);
    assert_eq!((c.r(), c.g(), c.b(), c.a()), (0.5, 0.5, 0.5, 1.0));
}

#[test]
fn nice_number_uses_ceiling_table() {
    // fraction 3.7 is <= 5, so the ceiling is 5 * 10
    assert_abs_diff_eq!(calc_nice_number(37.0, false), 50.0);
}

#[test]
fn snapping_picks_closer_tick() {
    assert_abs_diff_eq!(snap_to_ticks(0.0, 10.0, 3.7, 0, 1.0), 4.0);
}

#[test]
fn text_extraction() {
    init_logging();
    assert_eq!(extract_number("abc -12.5 kg"), -12.5);
    assert_eq!(extract_number("no numbers"), 0.0);
    assert_eq!(extract_hex_color("color: #AABBCC;"), "#AABBCC");
    assert_eq!(extract_hex_color("nothing here"), "");
}

#[test]
fn extracted_hex_parses_as_color() {
    let hex = extract_hex_color("fill=#ff000080");
    let color: Color = hex.parse().unwrap();
    assert_eq!(color.to_rgb8(), (255, 0, 0));
    assert_abs_diff_eq!(color.a(), 128.0 / 255.0);
}
