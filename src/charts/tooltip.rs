//! Tooltip content for a hovered marker.

use crate::data::{ChosenAxis, RegionRecord};

/// Tooltip lines: state name, chosen-axis value, obesity.
pub fn tooltip_lines(record: &RegionRecord, axis: ChosenAxis) -> [String; 3] {
    [
        record.state.clone(),
        format!("{} {}", axis.tooltip_label(), axis.value(record)),
        format!("Obesity (%): {}", record.obesity),
    ]
}

pub fn tooltip_text(record: &RegionRecord, axis: ChosenAxis) -> String {
    tooltip_lines(record, axis).join("\n")
}

/// Bottom-center of the tooltip box: horizontally on the pointer, `offset`
/// pixels above it.
pub fn tooltip_anchor(pointer: (f32, f32), offset: f32) -> (f32, f32) {
    (pointer.0, pointer.1 - offset)
}
