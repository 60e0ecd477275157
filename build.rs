use std::fs;

/// Keys of `Config`; every one is a string (paths included).
const STRING_KEYS: &[&str] = &[
    "content_dir",
    "static_dir",
    "template",
    "output_dir",
    "base_path",
];

fn main() {
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    for (key, value) in &table {
        if !STRING_KEYS.contains(&key.as_str()) {
            panic!("default_config.toml: unknown key `{}`", key);
        }
        if !value.is_str() {
            panic!("default_config.toml: `{}` must be a string", key);
        }
    }
    for key in STRING_KEYS {
        if !table.contains_key(*key) {
            panic!("default_config.toml: missing `{}`", key);
        }
    }
}
