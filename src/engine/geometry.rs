//! Projection of OCR word boxes from source-image space into display space.

use crate::config::EngineConfig;

use super::types::{Dimensions, DisplayBox, OcrWord};

/// Rescale every localized word's box into the caller's display space.
///
/// Words without a box are skipped, not errored. When natural dimensions are
/// absent or degenerate, the display space is treated as the natural space
/// (identity scale) rather than dividing by zero.
pub fn project_boxes(
    words: &[OcrWord],
    natural: Option<Dimensions>,
    display: Dimensions,
    config: &EngineConfig,
) -> Vec<DisplayBox> {
    let natural = match natural {
        Some(n) if n.is_valid() => n,
        _ => {
            let display_width = display.width;
            let display_height = display.height;
            tracing::warn!(
                display_width,
                display_height,
                "natural dimensions unknown or degenerate, assuming identity scale"
            );
            display
        }
    };

    let scale_x = display.width / natural.width;
    let scale_y = display.height / natural.height;

    words
        .iter()
        .filter_map(|word| {
            let b = word.bbox?;
            Some(DisplayBox {
                text: word.text.clone(),
                x: b.x0 * scale_x,
                y: b.y0 * scale_y,
                width: ((b.x1 - b.x0) * scale_x).max(config.min_box_extent),
                height: ((b.y1 - b.y0) * scale_y).max(config.min_box_extent),
            })
        })
        .collect()
}
