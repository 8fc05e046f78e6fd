//! Stateless minting of resource IRIs for catalog entities.
//!
//! Identifiers are plain values derived from the entity's identity, so the
//! same topic or type always maps to the same node no matter which process
//! wrote the fragment.

/// Base under which catalog resources (not vocabulary terms) are minted.
pub const RESOURCE_BASE: &str = "http://www.w3.org/ns/bagcat/resource/";

/// Percent-encodes each `/`-separated segment. Empty segments are kept, so
/// `gps`, `/gps` and `/gps/` stay three different paths.
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Node for a topic, scoped to its bag when one is known.
pub fn topic_node(bag: Option<&str>, topic_name: &str) -> String {
    match bag {
        Some(bag) => format!(
            "{}bag/{}/topic/{}",
            RESOURCE_BASE,
            urlencoding::encode(bag),
            encode_path(topic_name)
        ),
        None => format!("{}topic/{}", RESOURCE_BASE, encode_path(topic_name)),
    }
}

/// Node for a message type; identity is the (name, checksum) pair.
pub fn message_type_node(type_name: &str, md5sum: &str) -> String {
    format!(
        "{}type/{}/{}",
        RESOURCE_BASE,
        encode_path(type_name),
        urlencoding::encode(md5sum)
    )
}

pub fn bag_node(filename: &str) -> String {
    format!("{}bag/{}", RESOURCE_BASE, urlencoding::encode(filename))
}

pub fn catalog_node(name: &str) -> String {
    format!("{}catalog/{}", RESOURCE_BASE, urlencoding::encode(name))
}
