//! Crop label table
//!
//! Static mapping from the classifier's integer class labels to crop names.
//! Labels are 1-based, matching the encoding used when the model was fitted;
//! there is no entry for labels outside 1..=22, and a label without an entry
//! is a configuration defect, not something to paper over with a default.

/// Total number of crop classes
pub const NUM_CROPS: usize = 22;

/// Crop names indexed by `label - 1` (labels are 1-based)
pub const CROP_NAMES: [&str; NUM_CROPS] = [
    "Rice",
    "Maize",
    "Chickpea",
    "Kidney Beans",
    "Pigeon Peas",
    "Moth Beans",
    "Mung Bean",
    "Black Gram",
    "Lentil",
    "Pomegranate",
    "Banana",
    "Mango",
    "Grapes",
    "Watermelon",
    "Muskmelon",
    "Apple",
    "Orange",
    "Papaya",
    "Coconut",
    "Cotton",
    "Jute",
    "Coffee",
];

/// Get the crop name for a given class label (1-based)
pub fn crop_name(label: i64) -> Option<&'static str> {
    if label < 1 {
        return None;
    }
    CROP_NAMES.get(label as usize - 1).copied()
}
