//! Tailwind classes and texts applied to the host page's elements.

/// Draw-mode button while draw mode is on.
pub const DRAW_MODE_ACTIVE: &str = "bg-green-600";
/// Draw-mode button while draw mode is off.
pub const DRAW_MODE_INACTIVE: &str = "bg-blue-500";
/// Id of the label span inside the draw-mode button.
pub const DRAW_MODE_TEXT_ID: &str = "draw-mode-text";

/// Hides the "clear all" button when there is nothing to clear.
pub const HIDDEN: &str = "hidden";

pub const PLACEHOLDER: &str = "bg-white text-gray-700 px-4 py-3 rounded shadow text-center";
pub const ENTRY: &str = "flex items-center justify-between bg-white px-4 py-2 rounded shadow cursor-pointer transition-colors duration-200";
/// Added to a sidebar entry while the pointer is over it.
pub const ENTRY_HOVER: &str = "bg-blue-600";
pub const ENTRY_LABEL: &str = "text-sm text-black";
/// Marker class used to find delete buttons from a delegated click.
pub const DELETE_BUTTON_MARKER: &str = "delete-path-btn";
pub const DELETE_BUTTON: &str = "delete-path-btn text-gray-400 hover:text-red-600 transition-colors duration-200 relative group";
pub const DELETE_ICON: &str = "fas fa-trash";
pub const TOOLTIP: &str = "absolute left-1/2 -translate-x-1/2 -top-8 bg-black text-white text-xs rounded px-2 py-1 opacity-0 group-hover:opacity-100 pointer-events-none transition-opacity duration-200 z-10";

/// Attribute carrying an entry's storage index.
pub const INDEX_ATTR: &str = "data-idx";
/// Attribute carrying an entry's trace id.
pub const TRACE_ID_ATTR: &str = "data-trace-id";

/// Label of the draw-mode button.
pub fn draw_mode_label(active: bool) -> &'static str {
    if active {
        "Modo trazo activo"
    } else {
        "Dibujar trazo"
    }
}

/// `(class to add, class to remove)` on the draw-mode button.
pub fn draw_mode_classes(active: bool) -> (&'static str, &'static str) {
    if active {
        (DRAW_MODE_ACTIVE, DRAW_MODE_INACTIVE)
    } else {
        (DRAW_MODE_INACTIVE, DRAW_MODE_ACTIVE)
    }
}
