//! Fixture data shared by the integration suites.

#![allow(dead_code)]

use serde_json::{Value, json};

const AUTHORS: [&str; 5] = [
    "Cat Perez",
    "Sebastian Bastidas",
    "Ning Liang",
    "Jeff Kriege",
    "Janelle Fontana",
];

const TITLES: [&str; 5] = [
    "Coding While Founding",
    "Dev Turned Mentor",
    "Ex-Twitter Employee Founds Successful Health Tech Startup",
    "Designer Turns To Product",
    "Millenial Rises in ACA Mission-Oriented Company",
];

const CONTENTS: [&str; 3] = [
    "Lorem ipsum dolor amet actually sustainable hell of, hoodie iPhone vape viral flannel.",
    "Single-origin coffee flannel cred, plaid prism bushwick locavore vinyl man braid.",
    "Normcore tumeric typewriter four dollar toast hashtag heirloom meggings occupy cardigan.",
];

/// Keys every blog post body carries.
pub const POST_KEYS: [&str; 5] = ["author", "content", "id", "publishDate", "title"];

/// Create-request body for the `n`th fixture post.
pub fn generate_blog_data(n: usize) -> Value {
    json!({
        "author": AUTHORS[n % AUTHORS.len()],
        "title": TITLES[n % TITLES.len()],
        "content": CONTENTS[n % CONTENTS.len()],
    })
}

/// Sorted keys of a JSON object.
pub fn keys_of(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value
        .as_object()
        .map(|o| o.keys().cloned().collect())
        .unwrap_or_default();
    keys.sort();
    keys
}
