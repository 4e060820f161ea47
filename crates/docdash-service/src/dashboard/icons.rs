//! File-type icon lookup.

/// Icon used for unrecognized extensions.
pub const DEFAULT_FILE_ICON: &str = "fas fa-file";

/// Icon class for a lowercase file extension.
pub fn icon_for_extension(extension: &str) -> &'static str {
    match extension {
        "pdf" => "fas fa-file-pdf",
        "doc" | "docx" => "fas fa-file-word",
        "xls" | "xlsx" | "csv" => "fas fa-file-excel",
        "png" | "jpg" | "jpeg" | "gif" | "tif" | "tiff" => "fas fa-file-image",
        "txt" => "fas fa-file-alt",
        _ => DEFAULT_FILE_ICON,
    }
}
