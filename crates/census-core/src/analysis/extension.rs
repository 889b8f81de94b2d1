/// Filename extension derivation.

/// Extract the extension of `name`, including the leading dot.
///
/// The last `.` must be neither the first nor the last character: a
/// dotfile name (`".profile"`) and a name with a trailing dot (`"data."`)
/// both have no extension. Only the final suffix counts, so
/// `"a.tar.gz"` yields `".gz"`. Names with no dot — including the
/// missing-value marker — yield `""`. Never fails.
pub fn name_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) if i > 0 && i + 1 < name.len() => &name[i..],
        _ => "",
    }
}
