/// Environment variable consulted for the access token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Pick the effective token.
///
/// A non-empty environment token overrides both flags. Otherwise the short
/// `-t` alias wins over `--token` when it is non-empty.
pub fn resolve_token(
    explicit: Option<&str>,
    alias: Option<&str>,
    env: Option<&str>,
) -> Option<String> {
    [env, alias, explicit]
        .into_iter()
        .flatten()
        .find(|token| !token.is_empty())
        .map(str::to_string)
}

/// Read the token from the process environment, treating an empty value as unset.
pub fn env_token() -> Option<String> {
    std::env::var(TOKEN_ENV).ok().filter(|token| !token.is_empty())
}
