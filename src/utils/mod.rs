// Utility functions
pub mod validation;

/// Join user-supplied values for display in messages ("a, b, c")
pub fn join_display(items: &[String]) -> String {
    items.join(", ")
}
