use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Once;

use brandkit::backends::Format;
use brandkit::brand::{BrandAction, BrandKit, DEFAULT_COLORS};
use brandkit::pipeline::extract::{extract_colors, extract_palette, ExtractOptions};
use brandkit::pipeline::load::{decode_bytes, load_and_prepare, DEFAULT_SAMPLE_SIZE};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fixture_dir() -> PathBuf {
    let dir = std::env::temp_dir().join("brandkit-integration-fixtures");
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// A logo on a transparent background: a red disc with a smaller blue square.
fn create_logo(path: &Path) {
    let img = image::RgbaImage::from_fn(200, 200, |x, y| {
        let (dx, dy) = (x as i32 - 100, y as i32 - 100);
        if (70..130).contains(&x) && (70..130).contains(&y) {
            image::Rgba([30, 60, 200, 255])
        } else if dx * dx + dy * dy < 90 * 90 {
            image::Rgba([220, 40, 40, 255])
        } else {
            image::Rgba([255, 255, 255, 0])
        }
    });
    img.save(path).unwrap();
}

fn create_transparent(path: &Path) {
    let img = image::RgbaImage::from_fn(32, 32, |_, _| image::Rgba([0, 0, 0, 0]));
    img.save(path).unwrap();
}

fn create_stripes(path: &Path) {
    let img = image::RgbImage::from_fn(64, 64, |x, _| match x / 8 {
        0 | 1 | 2 => image::Rgb([16, 185, 129]),
        3 | 4 => image::Rgb([250, 250, 250]),
        _ => image::Rgb([10, 10, 10]),
    });
    img.save(path).unwrap();
}

fn fixture(name: &str) -> PathBuf {
    static CREATE: Once = Once::new();
    let dir = fixture_dir();
    CREATE.call_once(|| {
        create_logo(&dir.join("logo.png"));
        create_transparent(&dir.join("transparent.png"));
        create_stripes(&dir.join("stripes.png"));
        std::fs::write(dir.join("not_an_image.txt"), "this is not an image").unwrap();
    });
    dir.join(name)
}

fn assert_hex_list(lines: &[&str]) {
    let hex_re = regex::Regex::new(r"^#[0-9a-f]{6}$").unwrap();
    for line in lines {
        assert!(hex_re.is_match(line), "not a lowercase hex color: {line:?}");
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

#[test]
fn logo_palette_ignores_transparent_background() {
    let pixels = load_and_prepare(&fixture("logo.png"), None).unwrap();
    let palette = extract_palette(&pixels, &ExtractOptions::default());

    assert_eq!(palette[0], "#e02020");
    assert_eq!(palette[1], "#2040c0");
    assert!(!palette.contains(&"#ffffff".to_string()));
}

#[test]
fn downsampled_logo_keeps_dominance_order() {
    let pixels = load_and_prepare(&fixture("logo.png"), Some(DEFAULT_SAMPLE_SIZE)).unwrap();
    assert_eq!(pixels.len(), 100 * 100);

    let colors = extract_colors(&pixels, &ExtractOptions::default());
    assert!(colors.len() <= 5);
    assert_eq!(colors[0].color.to_hex(), "#e02020");
    for pair in colors.windows(2) {
        assert!(pair[0].population >= pair[1].population);
    }
}

#[test]
fn stripes_are_ranked_by_area() {
    let pixels = load_and_prepare(&fixture("stripes.png"), None).unwrap();
    let palette = extract_palette(&pixels, &ExtractOptions::default());
    assert_eq!(palette, vec!["#20c080", "#000000", "#ffffff"]);
}

#[test]
fn transparent_image_keeps_default_brand_palette() {
    let pixels = load_and_prepare(&fixture("transparent.png"), Some(DEFAULT_SAMPLE_SIZE)).unwrap();
    let extracted = extract_colors(&pixels, &ExtractOptions::default());
    assert!(extracted.is_empty());

    let mut kit = BrandKit::default();
    kit.apply(BrandAction::from_extracted(&extracted)).unwrap();
    assert_eq!(kit.colors(), DEFAULT_COLORS.as_slice());
}

#[test]
fn decode_failure_never_reaches_extractor() {
    let err = load_and_prepare(&fixture("not_an_image.txt"), None).unwrap_err();
    assert!(err.is_decode());

    let err = decode_bytes(&[0u8; 64], Some(DEFAULT_SAMPLE_SIZE)).unwrap_err();
    assert!(err.is_decode());
}

#[test]
fn extracted_palette_exports_in_every_format() {
    let pixels = load_and_prepare(&fixture("logo.png"), None).unwrap();
    let extracted = extract_colors(&pixels, &ExtractOptions::default());
    let mut kit = BrandKit::new("Red Disc");
    kit.apply(BrandAction::from_extracted(&extracted)).unwrap();

    let plain = Format::Plain.backend().serialize(&kit);
    assert!(plain.starts_with("#e02020\n"));

    let css = Format::Css.backend().serialize(&kit);
    assert!(css.contains("--red-disc-1: #e02020;"));

    let gpl = Format::Gimp.backend().serialize(&kit);
    assert!(gpl.contains("224  32  32\t#e02020"));
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_pixels() -> impl Strategy<Value = Vec<[u8; 4]>> {
        proptest::collection::vec(proptest::array::uniform4(0u8..=255u8), 0..256)
    }

    fn arb_options() -> impl Strategy<Value = ExtractOptions> {
        (0usize..12, 1u8..=255, 0u8..=255).prop_map(|(max_colors, step, alpha_threshold)| {
            ExtractOptions {
                max_colors,
                step: std::num::NonZeroU8::new(step).unwrap(),
                alpha_threshold,
                ..Default::default()
            }
        })
    }

    proptest! {
        #[test]
        fn extraction_is_deterministic(pixels in arb_pixels(), options in arb_options()) {
            prop_assert_eq!(
                extract_palette(&pixels, &options),
                extract_palette(&pixels, &options)
            );
        }

        #[test]
        fn palette_is_bounded_and_unique(pixels in arb_pixels(), options in arb_options()) {
            let palette = extract_palette(&pixels, &options);
            prop_assert!(palette.len() <= options.max_colors);

            let mut seen = std::collections::HashSet::new();
            for hex in &palette {
                prop_assert!(seen.insert(hex.clone()), "duplicate {}", hex);
            }
            let lines: Vec<&str> = palette.iter().map(String::as_str).collect();
            assert_hex_list(&lines);
        }

        #[test]
        fn populations_are_descending(pixels in arb_pixels(), options in arb_options()) {
            let colors = extract_colors(&pixels, &options);
            for pair in colors.windows(2) {
                prop_assert!(pair[0].population >= pair[1].population);
            }
            let opaque = pixels.iter().filter(|p| p[3] >= options.alpha_threshold).count() as u32;
            prop_assert!(colors.iter().map(|c| c.population).sum::<u32>() <= opaque);
        }

        #[test]
        fn below_threshold_is_always_empty(
            rgb in proptest::collection::vec(proptest::array::uniform3(0u8..=255u8), 1..64),
            threshold in 1u8..=255,
        ) {
            let pixels: Vec<[u8; 4]> = rgb
                .iter()
                .map(|&[r, g, b]| [r, g, b, threshold - 1])
                .collect();
            let options = ExtractOptions { alpha_threshold: threshold, ..Default::default() };
            prop_assert!(extract_palette(&pixels, &options).is_empty());
        }

        #[test]
        fn merge_never_grows_the_palette(pixels in arb_pixels(), distance in 0.0f32..50.0) {
            let plain = ExtractOptions { max_colors: 255, ..Default::default() };
            let merged = ExtractOptions { merge_distance: Some(distance), ..plain };
            prop_assert!(
                extract_colors(&pixels, &merged).len() <= extract_colors(&pixels, &plain).len()
            );
        }
    }
}

// ---------------------------------------------------------------------------
// CLI integration tests (run the actual binary)
// ---------------------------------------------------------------------------

fn brandkit() -> Command {
    Command::new(env!("CARGO_BIN_EXE_brandkit"))
}

#[test]
fn cli_stdout_lists_hex_colors() {
    let output = brandkit().arg(fixture("logo.png")).output().unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(!lines.is_empty() && lines.len() <= 5);
    assert_hex_list(&lines);
    assert_eq!(lines[0], "#e02020");
}

#[test]
fn cli_colors_flag_limits_output() {
    let output = brandkit()
        .arg(fixture("stripes.png"))
        .args(["-n", "2", "--full-resolution"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "#20c080\n#000000\n");
}

#[test]
fn cli_output_flag_writes_css_file() {
    let dir = std::env::temp_dir().join("brandkit-test-cli-output");
    std::fs::create_dir_all(&dir).unwrap();
    let out_path = dir.join("brand.css");

    let output = brandkit()
        .arg(fixture("stripes.png"))
        .args(["--format", "css", "--name", "Mint Co", "--full-resolution", "-o"])
        .arg(&out_path)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let content = std::fs::read_to_string(&out_path).unwrap();
    assert!(content.contains("--mint-co-1: #20c080;"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn cli_output_extension_mismatch_warns() {
    let dir = std::env::temp_dir().join("brandkit-test-cli-mismatch");
    std::fs::create_dir_all(&dir).unwrap();
    let out_path = dir.join("brand.txt");

    let output = brandkit()
        .arg(fixture("stripes.png"))
        .args(["--format", "gimp", "-o"])
        .arg(&out_path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not end in .gpl"), "got: {stderr}");
    assert!(std::fs::read_to_string(&out_path).unwrap().starts_with("GIMP Palette"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn cli_transparent_image_warns_and_keeps_defaults() {
    let output = brandkit().arg(fixture("transparent.png")).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "#4f46e5\n#06b6d4\n#10b981\n#f43f5e\n"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("no opaque pixels"));
}

#[test]
fn cli_preview_goes_to_stderr() {
    let output = brandkit()
        .arg(fixture("logo.png"))
        .arg("--preview")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("#e02020"));
    assert_hex_list(&String::from_utf8_lossy(&output.stdout).lines().collect::<Vec<_>>());
}

#[test]
fn cli_help_output() {
    let output = brandkit().arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--colors", "--step", "--alpha-threshold", "--sample-size", "--method", "--format"] {
        assert!(stdout.contains(flag), "help is missing {flag}");
    }
}

#[test]
fn cli_file_not_found_error() {
    let output = brandkit().arg("/nonexistent/logo.png").output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("file not found"), "got: {stderr}");
}

#[test]
fn cli_unsupported_format_error() {
    let output = brandkit().arg(fixture("not_an_image.txt")).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported"), "got: {stderr}");
}
