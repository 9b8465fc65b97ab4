//! Embedded corpus assets.
//!
//! Every response table ships inside the binary as a TOML document, so the
//! companion works from any directory with no data files on disk.

/// Macro to embed corpus documents at compile time as text.
///
/// Generates:
/// - Public constants for each embedded document
/// - `get_embedded_corpus(name)` function for lookup
/// - `list_corpora()` function for discovery
macro_rules! embedded_corpus {
    ($($name:literal => $const_name:ident),* $(,)?) => {
        $(
            pub const $const_name: &str =
                include_str!(concat!("../../corpus/", $name, ".toml"));
        )*

        pub fn get_embedded_corpus(name: &str) -> Option<&'static str> {
            // Support both bare names and the file name
            let key = name.strip_suffix(".toml").unwrap_or(name);
            match key {
                $( $name => Some($const_name), )*
                _ => None,
            }
        }

        pub fn list_corpora() -> Vec<&'static str> {
            vec![ $( $name, )* ]
        }
    };
}

embedded_corpus! {
    "coder" => EMBEDDED_CODER,
    "oracle" => EMBEDDED_ORACLE,
    "philosopher" => EMBEDDED_PHILOSOPHER,
    "zen" => EMBEDDED_ZEN,
    "contemplation" => EMBEDDED_CONTEMPLATION,
}
