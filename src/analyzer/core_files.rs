/// Expand a rename entry of the form `prefix{old => new}suffix` into the
/// old and new paths. Any other entry is returned unchanged.
pub fn rename_candidates(entry: &str) -> Vec<String> {
    let Some(open) = entry.find('{') else {
        return vec![entry.to_string()];
    };
    let Some(close) = entry[open..].find('}').map(|i| i + open) else {
        return vec![entry.to_string()];
    };
    let Some((old, new)) = entry[open + 1..close].split_once(" => ") else {
        return vec![entry.to_string()];
    };

    let prefix = &entry[..open];
    let suffix = &entry[close + 1..];

    [old, new]
        .iter()
        // an empty side such as "dir/{ => sub}/f.py" leaves a doubled slash
        .map(|side| {
            format!("{prefix}{}{suffix}", side.trim()).replace("//", "/")
        })
        .collect()
}

/// True when the path falls under none of the non-core prefixes.
pub fn is_core_path(path: &str, non_core_prefixes: &[String]) -> bool {
    !non_core_prefixes.iter().any(|p| path.starts_with(p.as_str()))
}

/// A commit is core-affecting when at least one touched file, or either side
/// of a renamed file, is a core path. No files means not core.
pub fn is_core_commit(files: &[String], non_core_prefixes: &[String]) -> bool {
    files.iter().any(|file| {
        rename_candidates(file)
            .iter()
            .any(|candidate| is_core_path(candidate, non_core_prefixes))
    })
}
