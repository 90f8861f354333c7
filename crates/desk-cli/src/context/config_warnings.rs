use desk_config::DeskConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &DeskConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &DeskConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    if !config.libraries.is_configured() && has_single_underscore_key(&env_keys, "LIBRARIES") {
        warnings.push(
            "Library roster is empty while CIRCDESK_LIBRARIES* env vars exist. Use double underscores (example: CIRCDESK_LIBRARIES__ROSTER)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "SEARCH") {
        warnings.push(
            "CIRCDESK_SEARCH_* env vars are ignored. Use double underscores (example: CIRCDESK_SEARCH__IDENTIFIER_FIELD)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    let prefix = format!("CIRCDESK_{section}");
    keys.iter().any(|key| {
        key.strip_prefix(&prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
