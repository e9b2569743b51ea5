use std::ffi::OsString;

/// Long flags that are also accepted with a single dash (`-port 8080`).
const LEGACY_FLAGS: &[&str] = &["port", "dns"];

/// Rewrite `-port`/`-dns` (and their `=value` forms) to the double-dash
/// spelling clap expects. Everything else passes through untouched.
pub fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 {
                return arg;
            }
            match arg.to_str() {
                Some(s) if is_legacy_flag(s) => OsString::from(format!("-{}", s)),
                _ => arg,
            }
        })
        .collect()
}

fn is_legacy_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LEGACY_FLAGS.contains(&name)
}
