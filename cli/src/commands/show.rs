//! Show command - print the effective settings.

use settings::constants::{
    ENV_ALLOWED_HOSTS, ENV_DB_HOST, ENV_DB_NAME, ENV_DB_PASSWORD, ENV_DB_PORT, ENV_DB_USER,
    ENV_DEBUG, ENV_FRONTEND_ORIGIN, ENV_SECRET_KEY, REDACTED,
};
use settings::Settings;

use crate::args::ShowArgs;

/// Execute the show command
pub fn execute(args: ShowArgs, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let output = if args.json {
        serde_json::to_string_pretty(settings)?
    } else {
        render(settings).join("\n")
    };

    println!("{}", output);
    Ok(())
}

/// One `KEY=value` line per env key, secrets redacted.
pub fn render(settings: &Settings) -> Vec<String> {
    let db = &settings.database;

    vec![
        format!("{}={}", ENV_SECRET_KEY, REDACTED),
        format!("{}={}", ENV_DEBUG, settings.debug),
        format!("{}={}", ENV_DB_NAME, db.name),
        format!("{}={}", ENV_DB_USER, db.user),
        format!("{}={}", ENV_DB_PASSWORD, REDACTED),
        format!("{}={}", ENV_DB_HOST, db.host),
        format!("{}={}", ENV_DB_PORT, db.port),
        format!("{}={}", ENV_ALLOWED_HOSTS, settings.allowed_hosts.as_slice().join(",")),
        format!("{}={}", ENV_FRONTEND_ORIGIN, settings.cors.allowed_origins.join(",")),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_render_redacts_secrets() {
        let env: HashMap<String, String> = [
            ("SECRET_KEY", "top-secret"),
            ("DEBUG", "true"),
            ("DB_NAME", "studyhub"),
            ("DB_USER", "app"),
            ("DB_PASSWORD", "hunter2"),
            ("ALLOWED_HOSTS", "a.com,b.com"),
            ("FRONTEND_ORIGIN", "https://x.com"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let settings = Settings::from_source(&env).unwrap();

        let lines = render(&settings);
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "SECRET_KEY=[REDACTED]");
        assert_eq!(lines[1], "DEBUG=true");
        assert_eq!(lines[4], "DB_PASSWORD=[REDACTED]");
        assert_eq!(lines[6], "DB_PORT=5432");
        assert_eq!(lines[7], "ALLOWED_HOSTS=a.com,b.com");
        assert!(lines.iter().all(|l| !l.contains("hunter2") && !l.contains("top-secret")));
    }
}
