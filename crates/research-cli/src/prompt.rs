use serde_json::Value;

use research_common::RepoContext;

/// Build the fixed-structure research prompt from gathered context.
///
/// Pure and deterministic: the same context always yields the same
/// string. Missing metadata renders as "unknown" / "n/a" placeholders.
pub fn build_prompt(ctx: &RepoContext) -> String {
    let descr = ctx
        .repo_info
        .get("description")
        .and_then(|d| d.as_str())
        .unwrap_or("");
    let langs = language_list(&ctx.languages);
    let open_issues = count_or_na(&ctx.open_issues);
    let open_prs = count_or_na(&ctx.open_prs);
    let recent_commits = count_or_na(&ctx.recent_commits);

    format!(
        "\
You are a research assistant. Produce a concise, high-signal daily industry research report for the repository {repo}.

Repository context:
- Description: {descr}
- Languages: {langs}
- Open issues: {open_issues}
- Open PRs: {open_prs}
- Recent commits: {recent_commits}

Constraints:
- Do not produce code changes.
- Provide links to sources when possible.
- Output must be markdown only. No YAML frontmatter.

Report structure:
1. Executive Summary (3–6 bullets)
2. Notable News and Releases (5–10 items: each line has [name](url) — one-line context)
3. Tech Trends Relevant to this repo (1–3 short paragraphs)
4. Opportunities and Risks (bullets)
5. Sources (bullet list of links)

Include a final note:
> AI-generated content by this workflow may contain mistakes.
",
        repo = ctx.repo,
    )
}

/// Comma-joined language names, or "unknown" when none were gathered.
fn language_list(languages: &Value) -> String {
    let names: Vec<&str> = languages
        .as_object()
        .map(|m| m.keys().map(String::as_str).collect())
        .unwrap_or_default();
    if names.is_empty() {
        "unknown".to_string()
    } else {
        names.join(", ")
    }
}

/// Item count when the field is a JSON array, else "n/a".
fn count_or_na(value: &Value) -> String {
    match value.as_array() {
        Some(items) => items.len().to_string(),
        None => "n/a".to_string(),
    }
}
