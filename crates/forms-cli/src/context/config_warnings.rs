/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured() {
    for warning in collect_unconfigured_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

/// Config sections figment maps from `FORMS_<SECTION>__<FIELD>`.
const SECTIONS: [&str; 3] = ["DATABASE", "GENERAL", "SESSION"];

fn collect_unconfigured_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut warnings = Vec::new();
    for (key, _) in env {
        let Some(rest) = key.strip_prefix("FORMS_") else {
            continue;
        };
        for section in SECTIONS {
            if let Some(field) = rest
                .strip_prefix(section)
                .and_then(|tail| tail.strip_prefix('_'))
                && !field.starts_with('_')
            {
                warnings.push(format!(
                    "{key} is ignored. Use double underscores (example: FORMS_{section}__{field})."
                ));
            }
        }
    }
    warnings.sort();
    warnings
}

#[cfg(test)]
mod tests {
    use super::collect_unconfigured_warnings;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), String::from("x")))
            .collect()
    }

    #[test]
    fn single_underscore_keys_are_flagged() {
        let warnings = collect_unconfigured_warnings(env(&["FORMS_DATABASE_PATH"]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("FORMS_DATABASE__PATH"));
    }

    #[test]
    fn well_formed_and_unrelated_keys_pass() {
        let warnings = collect_unconfigured_warnings(env(&[
            "FORMS_DATABASE__PATH",
            "FORMS_SESSION__MAX_SESSIONS",
            "FORMS_LOG",
            "HOME",
        ]));
        assert!(warnings.is_empty());
    }
}
