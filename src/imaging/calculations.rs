//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate the dimensions of an image fitted inside a box ("contain").
///
/// The scale factor is `min(box_w / w, box_h / h)`. Images already inside the
/// box are returned at their original size: the fit only ever shrinks.
/// The free edge rounds half to even and never drops below one pixel.
///
/// # Arguments
/// * `source` - Original image dimensions (width, height)
/// * `target` - Bounding box (width, height)
///
/// # Examples
/// ```
/// # use boxfit::imaging::calculate_contain_dimensions;
/// // 1000x500 into 800x800 → 800x400
/// assert_eq!(calculate_contain_dimensions((1000, 500), (800, 800)), (800, 400));
///
/// // Already inside the box → unchanged
/// assert_eq!(calculate_contain_dimensions((300, 200), (800, 800)), (300, 200));
/// ```
pub fn calculate_contain_dimensions(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    if src_w == 0 || src_h == 0 {
        return source;
    }

    let scale_w = tgt_w as f64 / src_w as f64;
    let scale_h = tgt_h as f64 / src_h as f64;

    if scale_w >= 1.0 && scale_h >= 1.0 {
        return source;
    }

    if scale_w <= scale_h {
        // Width is the binding edge: it lands exactly on the box
        let h = (src_h as f64 * scale_w).round_ties_even().max(1.0) as u32;
        (tgt_w, h.min(tgt_h))
    } else {
        let w = (src_w as f64 * scale_h).round_ties_even().max(1.0) as u32;
        (w.min(tgt_w), tgt_h)
    }
}

/// Top-left offset that centers `inner` on `canvas`, flooring odd remainders.
///
/// ```
/// # use boxfit::imaging::calculate_center_offset;
/// assert_eq!(calculate_center_offset((800, 800), (800, 400)), (0, 200));
/// assert_eq!(calculate_center_offset((10, 10), (7, 7)), (1, 1));
/// ```
pub fn calculate_center_offset(canvas: (u32, u32), inner: (u32, u32)) -> (u32, u32) {
    (
        canvas.0.saturating_sub(inner.0) / 2,
        canvas.1.saturating_sub(inner.1) / 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // calculate_contain_dimensions tests
    // =========================================================================

    #[test]
    fn contain_landscape_into_square() {
        assert_eq!(calculate_contain_dimensions((1000, 500), (800, 800)), (800, 400));
    }

    #[test]
    fn contain_portrait_into_square() {
        assert_eq!(calculate_contain_dimensions((500, 1000), (800, 800)), (400, 800));
    }

    #[test]
    fn contain_exact_size_is_unchanged() {
        assert_eq!(calculate_contain_dimensions((800, 800), (800, 800)), (800, 800));
    }

    #[test]
    fn contain_never_upscales() {
        assert_eq!(calculate_contain_dimensions((120, 90), (800, 800)), (120, 90));
        // Fits on one axis exactly, smaller on the other
        assert_eq!(calculate_contain_dimensions((800, 300), (800, 800)), (800, 300));
    }

    #[test]
    fn contain_shrinks_when_only_one_axis_overflows() {
        // 400x1200 into 800x600: height binds, scale 0.5
        assert_eq!(calculate_contain_dimensions((400, 1200), (800, 600)), (200, 600));
    }

    #[test]
    fn contain_rounds_to_nearest() {
        // 1001x333 into 500x500: scale = 500/1001, h = 166.33 → 166
        assert_eq!(calculate_contain_dimensions((1001, 333), (500, 500)), (500, 166));
        // 3x2 into 2x2: scale = 2/3, h = 1.33 → 1
        assert_eq!(calculate_contain_dimensions((3, 2), (2, 2)), (2, 1));
    }

    #[test]
    fn contain_rounds_halves_to_even() {
        // 8x5 into 4x4: h = 2.5 → 2
        assert_eq!(calculate_contain_dimensions((8, 5), (4, 4)), (4, 2));
        // 8x7 into 4x4: h = 3.5 → 4
        assert_eq!(calculate_contain_dimensions((8, 7), (4, 4)), (4, 4));
        // 5x8 into 4x4: w = 2.5 → 2
        assert_eq!(calculate_contain_dimensions((5, 8), (4, 4)), (2, 4));
    }

    #[test]
    fn contain_extreme_aspect_keeps_one_pixel() {
        assert_eq!(calculate_contain_dimensions((10000, 1), (100, 100)), (100, 1));
    }

    #[test]
    fn contain_preserves_aspect_within_a_pixel() {
        for &(w, h) in &[(1920, 1080), (1080, 1920), (4032, 3024), (333, 777), (1234, 567)] {
            let (fw, fh) = calculate_contain_dimensions((w, h), (640, 480));
            assert!(fw <= 640 && fh <= 480, "{w}x{h} → {fw}x{fh} exceeds box");
            let expected_h = fw as f64 * h as f64 / w as f64;
            let expected_w = fh as f64 * w as f64 / h as f64;
            assert!(
                (fh as f64 - expected_h).abs() <= 1.0 || (fw as f64 - expected_w).abs() <= 1.0,
                "{w}x{h} → {fw}x{fh} distorts aspect"
            );
        }
    }

    // =========================================================================
    // calculate_center_offset tests
    // =========================================================================

    #[test]
    fn center_offset_letterbox() {
        assert_eq!(calculate_center_offset((800, 800), (800, 400)), (0, 200));
    }

    #[test]
    fn center_offset_pillarbox() {
        assert_eq!(calculate_center_offset((800, 600), (450, 600)), (175, 0));
    }

    #[test]
    fn center_offset_floors_odd_remainder() {
        assert_eq!(calculate_center_offset((801, 800), (800, 797)), (0, 1));
    }

    #[test]
    fn center_offset_same_size_is_origin() {
        assert_eq!(calculate_center_offset((640, 480), (640, 480)), (0, 0));
    }
}
