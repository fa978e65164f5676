use crate::{FALLBACK_ICON_SIZE, IconImage, load_icon_image};

/// WHAT: Missing icon file yields the generated placeholder
/// WHY: The tray must always have a valid icon
#[test]
fn given_missing_icon_file_when_loading_then_fallback_returned() {
    // Given: A path that does not exist
    let path = std::path::Path::new("/nonexistent/eve-online.png");

    // When: Loading the icon
    let icon = load_icon_image(path);

    // Then: The placeholder is returned
    assert_eq!(icon, IconImage::fallback());
}

/// WHAT: A file that is not an image yields the placeholder
/// WHY: Decode failures are recovered locally, never surfaced
#[test]
#[allow(clippy::unwrap_used)]
fn given_corrupt_icon_file_when_loading_then_fallback_returned() {
    // Given: A file with garbage contents
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("eve-online.png");
    std::fs::write(&path, b"not a png").unwrap();

    // When: Loading the icon
    let icon = load_icon_image(&path);

    // Then: The placeholder is returned
    assert_eq!(icon, IconImage::fallback());
}

/// WHAT: The placeholder is a complete opaque RGBA square
/// WHY: The tray backend rejects buffers that do not match the dimensions
#[test]
fn given_fallback_icon_when_inspecting_then_dimensions_match_buffer() {
    // Given/When: The generated placeholder
    let icon = IconImage::fallback();

    // Then: Buffer length matches width * height * 4 and every pixel is opaque
    assert_eq!(icon.width, FALLBACK_ICON_SIZE);
    assert_eq!(icon.height, FALLBACK_ICON_SIZE);
    assert_eq!(icon.rgba.len(), (icon.width * icon.height * 4) as usize);
    assert!(icon.rgba.chunks_exact(4).all(|px| px == [30, 30, 30, 255]));
}
