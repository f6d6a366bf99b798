use research_common::RunMeta;

/// Markdown overview block appended right after the report header:
/// run date, branch/commit, PR and run links, and the requested model.
/// Lines whose metadata is absent are omitted entirely.
pub fn build_overview(meta: &RunMeta, time: &str, model: &str) -> String {
    let mut lines = vec!["## Overview".to_string()];
    lines.push(format!("- 🗓️ Date: {time}"));

    let branch = meta.ref_name.as_deref().map(|r| format!("🌿 Branch: {r}"));
    let commit = match (meta.short_sha(), meta.commit_url()) {
        (Some(short), Some(url)) => Some(format!("🧱 Commit: [{short}]({url})")),
        (Some(short), None) => Some(format!("🧱 Commit: {short}")),
        _ => None,
    };
    let parts: Vec<String> = [branch, commit].into_iter().flatten().collect();
    if !parts.is_empty() {
        lines.push(format!("- {}", parts.join(" • ")));
    }

    if let (Some(n), Some(url)) = (meta.pr_number, meta.pr_url()) {
        let title = meta
            .pr_title
            .as_deref()
            .map(|t| format!(" — {t}"))
            .unwrap_or_default();
        lines.push(format!("- 🔗 PR: [#{n}]({url}){title}"));
    }
    if let Some(url) = meta.run_url() {
        lines.push(format!("- ▶️ Run: {url}"));
    }
    lines.push(format!("- 🤖 Requested model: {model}"));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_environment_renders_date_and_model_only() {
        let meta = RunMeta {
            server_url: "https://github.com".to_string(),
            ..Default::default()
        };
        let block = build_overview(&meta, "2026-08-27T06:00:00Z", "gemini-1.5-flash");
        assert_eq!(
            block,
            "## Overview\n- 🗓️ Date: 2026-08-27T06:00:00Z\n- 🤖 Requested model: gemini-1.5-flash"
        );
    }

    #[test]
    fn full_metadata_renders_links() {
        let meta = RunMeta {
            server_url: "https://github.com".to_string(),
            repo: Some("owner/name".to_string()),
            run_id: Some("99".to_string()),
            ref_name: Some("main".to_string()),
            sha: Some("abcdef0123456789".to_string()),
            pr_number: Some(7),
            pr_title: Some("Add widget".to_string()),
        };
        let block = build_overview(&meta, "t", "m");
        assert!(block.contains(
            "- 🌿 Branch: main • 🧱 Commit: [abcdef0](https://github.com/owner/name/commit/abcdef0123456789)"
        ));
        assert!(block.contains("- 🔗 PR: [#7](https://github.com/owner/name/pull/7) — Add widget"));
        assert!(block.contains("- ▶️ Run: https://github.com/owner/name/actions/runs/99"));
    }
}
