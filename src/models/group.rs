use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Known transaction code groups and their display labels.
pub const GROUP_LABELS: [(i64, &str); 6] = [
    (10, "Room"),
    (20, "F&B"),
    (40, "Recreation"),
    (50, "Transport/Other"),
    (60, "Service"),
    (70, "VAT")
];

/// Labels left out of the revenue mix.
pub const MIX_EXCLUDED_LABELS: [&str; 2] = ["VAT", "Service"];

pub const MISSING_GROUP_LABEL: &str = "N/A";

/// Maps a group code to its label, falling back to the code's own numeric form.
pub fn group_label(code: Option<Decimal>) -> String {
    let Some(code) = code else {
        return MISSING_GROUP_LABEL.to_string();
    };

    let code = code.normalize();

    code.fract().is_zero()
        .then(|| code.to_i64())
        .flatten()
        .and_then(|key| GROUP_LABELS.iter().find(|(known, _)| *known == key))
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| code.to_string())
}

pub fn is_mix_excluded(label: &str) -> bool {
    MIX_EXCLUDED_LABELS.contains(&label)
}
