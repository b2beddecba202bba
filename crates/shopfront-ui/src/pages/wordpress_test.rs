//! WordPress REST API connectivity check.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shopfront_data::{ConnectivityReport, EndpointCheck, WordPressClient};
use shopfront_observability::StructuredLogger;

use crate::config::{is_http_url, StorefrontConfig};
use crate::lifetime::InstanceGuard;

/// Clean up a typed base URL. Errors carry a message for the form.
pub fn normalize_base_url(input: &str) -> Result<String, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Enter the site's base URL");
    }
    if !is_http_url(trimmed) {
        return Err("The URL must start with http:// or https://");
    }
    let base = trimmed.trim_end_matches('/');
    let base = base.strip_suffix("/wp-json").unwrap_or(base);
    Ok(base.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TestRun {
    Idle,
    Running,
    Done(ConnectivityReport),
    Invalid(&'static str),
}

/// Routed at `/wordpress-test`.
#[component]
pub fn WordPressTestPage() -> impl IntoView {
    let config = expect_context::<StorefrontConfig>();
    let logger = StructuredLogger::new("WordPressTest").with_route("/wordpress-test");
    let guard = InstanceGuard::new();

    let base_url = RwSignal::new(config.wordpress_base_url.clone());
    let username = RwSignal::new(String::new());
    let app_password = RwSignal::new(String::new());
    let (run, set_run) = signal(TestRun::Idle);

    on_cleanup({
        let guard = guard.clone();
        move || guard.dispose()
    });

    let start = move |_| {
        if run.with_untracked(|r| matches!(r, TestRun::Running)) {
            return;
        }
        let base = match normalize_base_url(&base_url.get_untracked()) {
            Ok(base) => base,
            Err(message) => {
                set_run.set(TestRun::Invalid(message));
                return;
            }
        };

        let mut client = WordPressClient::new(base.clone()).with_logger(logger.clone());
        let (user, password) = (username.get_untracked(), app_password.get_untracked());
        if !user.trim().is_empty() && !password.is_empty() {
            client = client.with_credentials(user.trim(), password);
        }

        logger
            .info_builder("Running WordPress connectivity test")
            .field("base_url", base)
            .emit();
        set_run.set(TestRun::Running);

        let guard = guard.clone();
        let logger = logger.clone();
        spawn_local(async move {
            let report = client.check_connectivity().await;
            logger
                .info_builder("WordPress connectivity test finished")
                .field("summary", report.summary())
                .field_bool("all_ok", report.all_ok())
                .emit();
            guard.run(|| set_run.try_set(TestRun::Done(report)));
        });
    };

    view! {
        <section class="wordpress-test" style="max-width: 720px;">
            <h2>"WordPress Connection Test"</h2>
            <p style="color: #666;">
                "Checks that the blog's REST API answers from this browser."
            </p>
            <label>
                "Base URL"
                <input
                    type="url"
                    placeholder="https://blog.example.com"
                    prop:value=move || base_url.get()
                    on:input=move |ev| base_url.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Username (optional)"
                <input
                    type="text"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Application password (optional)"
                <input
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || app_password.get()
                    on:input=move |ev| app_password.set(event_target_value(&ev))
                />
            </label>
            <button
                type="button"
                class="btn"
                disabled=move || run.with(|r| matches!(r, TestRun::Running))
                on:click=start
            >
                {move || {
                    if run.with(|r| matches!(r, TestRun::Running)) {
                        "Testing\u{2026}"
                    } else {
                        "Run test"
                    }
                }}
            </button>
            {move || match run.get() {
                TestRun::Idle | TestRun::Running => None,
                TestRun::Invalid(message) => Some(
                    view! { <p class="error" style="color: red;">{message}</p> }.into_any(),
                ),
                TestRun::Done(report) => Some(view! { <ReportView report=report/> }.into_any()),
            }}
        </section>
    }
}

#[component]
fn ReportView(report: ConnectivityReport) -> impl IntoView {
    let all_ok = report.all_ok();
    let summary = report.summary();

    view! {
        <div class="connectivity-report">
            <p class:ok=all_ok class:failed={!all_ok}>
                <strong>{summary}</strong> " for " {report.base_url}
            </p>
            <ul>
                {report
                    .checks
                    .into_iter()
                    .map(|check| view! { <CheckRow check=check/> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[component]
fn CheckRow(check: EndpointCheck) -> impl IntoView {
    let ok = check.status.is_ok();
    let hint = check.status.hint();

    view! {
        <li class="endpoint-check" class:ok=ok>
            <span class="endpoint-status">{if ok { "\u{2714}" } else { "\u{2718}" }}</span>
            " " <strong>{check.name}</strong> ": " {check.status.to_string()}
            <div><code>{check.url}</code></div>
            {hint.map(|hint| view! { <p class="endpoint-hint" style="color: #666;">{hint}</p> })}
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("  https://blog.example.com/ ").unwrap(),
            "https://blog.example.com"
        );
        assert_eq!(
            normalize_base_url("https://blog.example.com/wp-json/").unwrap(),
            "https://blog.example.com"
        );
        assert_eq!(
            normalize_base_url("http://localhost:8080/blog").unwrap(),
            "http://localhost:8080/blog"
        );
    }

    #[test]
    fn test_normalize_rejects_bad_input() {
        assert!(normalize_base_url("").is_err());
        assert!(normalize_base_url("   ").is_err());
        assert!(normalize_base_url("blog.example.com").is_err());
        assert!(normalize_base_url("ftp://blog.example.com").is_err());
    }
}
