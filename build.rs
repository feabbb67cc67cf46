use std::fs;

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

fn main() {
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");
    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    if let Err(problem) = check_schema(&table) {
        panic!("Invalid default_config.toml: {}", problem);
    }
}

/// The bundled config must deserialize into `Config` without falling back.
fn check_schema(table: &toml::Table) -> Result<(), String> {
    for (section, value) in table {
        let fields = value
            .as_table()
            .ok_or_else(|| format!("[{section}] must be a table"))?;
        match section.as_str() {
            "output" => check_output(fields)?,
            "log" => check_log(fields)?,
            other => return Err(format!("unknown section [{other}]")),
        }
    }
    Ok(())
}

fn check_output(fields: &toml::Table) -> Result<(), String> {
    for (key, value) in fields {
        match key.as_str() {
            "extension" | "directory" if value.is_str() => {}
            "extension" | "directory" => return Err(format!("output.{key} must be a string")),
            other => return Err(format!("unknown key output.{other}")),
        }
    }
    Ok(())
}

fn check_log(fields: &toml::Table) -> Result<(), String> {
    for (key, value) in fields {
        match (key.as_str(), value.as_str()) {
            ("level", Some(level)) if LOG_LEVELS.contains(&level.to_lowercase().as_str()) => {}
            ("level", _) => {
                return Err(format!("log.level must be one of {}", LOG_LEVELS.join(", ")));
            }
            (other, _) => return Err(format!("unknown key log.{other}")),
        }
    }
    Ok(())
}
