/// Separator joining category and sub-category into a composite label.
pub const LABEL_SEPARATOR: char = ':';

/// Sub-category used when a label carries only a top-level category.
pub const GENERAL_SUB_CATEGORY: &str = "General";

/// Category returned when the classifier declines to guess.
pub const UNCATEGORIZED_CATEGORY: &str = "Uncategorized";
