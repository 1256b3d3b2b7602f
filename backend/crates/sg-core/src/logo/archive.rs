/// Version given to the first archived copy of a logo.
pub const FIRST_ARCHIVE_VERSION: u32 = 2;

/// Name an outgoing logo is archived under:
/// `("BWA30New2.png", 2)` -> `BWA30New2_v2.png`.
pub fn archive_file_name(filename: &str, version: u32) -> String {
    match filename.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => {
            format!("{}_v{}.{}", stem, version, extension)
        }
        _ => format!("{}_v{}", filename, version),
    }
}
