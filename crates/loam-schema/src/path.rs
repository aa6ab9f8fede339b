//! Paths used in error messages (`$`, `$.home.city`, `$.tags[2]`).

pub(crate) const ROOT: &str = "$";

pub(crate) fn field_path(parent: &str, field: &str) -> String {
    format!("{parent}.{field}")
}

pub(crate) fn index_path(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}
